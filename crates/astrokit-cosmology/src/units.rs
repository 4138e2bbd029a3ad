//! Physical constants in SI (MKSA) units.

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 2.997_924_58e8;

/// One parsec (m).
pub const PARSEC: f64 = 3.085_677_581_491_367_3e16;

/// One day (s).
pub const DAY: f64 = 8.64e4;

/// Newtonian constant of gravitation (m^3 / kg s^2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

/// Speed of light in km/s, the unit velocities are given in.
pub const SPEED_OF_LIGHT_KMS: f64 = SPEED_OF_LIGHT / 1000.0;

/// Hubble constant from km/s/Mpc to 1/s.
pub fn hubble_per_second(h0: f64) -> f64 {
    h0 / 1000.0 / PARSEC
}
