//! Conversions between redshift and recession velocity (special relativistic
//! Doppler shift).

use astrokit_error::{ErrorChain, push_error};

use crate::codes::VELOCITY_OUT_OF_BOUNDS;
use crate::units::SPEED_OF_LIGHT_KMS;

/// Recession velocity at redshift `z`, in km/s.
pub fn velocity_from_z(z: f64) -> f64 {
    let zp1_sq = (1.0 + z) * (1.0 + z);
    SPEED_OF_LIGHT_KMS * (zp1_sq - 1.0) / (zp1_sq + 1.0)
}

/// Redshift of an object receding at `v` km/s.
///
/// Pushes [`VELOCITY_OUT_OF_BOUNDS`] and returns NaN when `|v|` is not below
/// the speed of light.
pub fn z_from_velocity(v: f64, chain: &mut ErrorChain) -> f64 {
    if v.is_nan() || v.abs() >= SPEED_OF_LIGHT_KMS {
        push_error!(
            chain,
            VELOCITY_OUT_OF_BOUNDS,
            "z_from_velocity: velocity must be smaller than the speed of light \
             ({SPEED_OF_LIGHT_KMS} km/s) in magnitude, but the given value is '{v}'"
        );
        return f64::NAN;
    }
    ((SPEED_OF_LIGHT_KMS + v) / (SPEED_OF_LIGHT_KMS - v)).sqrt() - 1.0
}
