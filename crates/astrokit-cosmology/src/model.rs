use std::f64::consts::PI;

use astrokit_error::{ErrorChain, push_error};
use tracing::debug;

use crate::codes::{
    H0_NOT_POSITIVE, LAMBDA_OUT_OF_BOUNDS, MATTER_OUT_OF_BOUNDS, RADIATION_OUT_OF_BOUNDS,
    SUM_LIMIT,
};
use crate::integrate;
use crate::units::{DAY, GRAVITATIONAL_CONSTANT, PARSEC, SPEED_OF_LIGHT, hubble_per_second};

/// How far the density sum may stray from one.
const SUM_TOLERANCE: f64 = 1e-8;

/// A homogeneous universe described by its expansion rate and the present-day
/// fractional densities. Curvature takes whatever the three densities leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cosmology {
    h0: f64,
    o_lambda: f64,
    o_matter: f64,
    o_radiation: f64,
    o_curvature: f64,
}

impl Cosmology {
    /// Build a cosmology, pushing one record per violated constraint.
    ///
    /// `h0` is in km/s/Mpc. The returned value is usable either way; with
    /// invalid parameters its results are not physically meaningful.
    pub fn new(
        h0: f64,
        o_lambda: f64,
        o_matter: f64,
        o_radiation: f64,
        chain: &mut ErrorChain,
    ) -> Self {
        let cosmo = Self {
            h0,
            o_lambda,
            o_matter,
            o_radiation,
            o_curvature: 1.0 - (o_lambda + o_matter + o_radiation),
        };
        cosmo.check(chain);
        cosmo
    }

    fn check(&self, chain: &mut ErrorChain) {
        let before = chain.len();

        if self.h0.is_nan() || self.h0 <= 0.0 {
            push_error!(
                chain,
                H0_NOT_POSITIVE,
                "Cosmology::new: 'H0' must be positive, but the given value is '{:.8}'",
                self.h0
            );
        }
        if !(0.0..=1.0).contains(&self.o_lambda) {
            push_error!(
                chain,
                LAMBDA_OUT_OF_BOUNDS,
                "Cosmology::new: 'olambda' (current cosmological constant density \
                 per critical density) must be between zero and one (inclusive), \
                 but the given value is '{:.8}'",
                self.o_lambda
            );
        }
        if !(0.0..=1.0).contains(&self.o_matter) {
            push_error!(
                chain,
                MATTER_OUT_OF_BOUNDS,
                "Cosmology::new: 'omatter' (current matter density per critical \
                 density) must be between zero and one (inclusive), but the given \
                 value is '{:.8}'",
                self.o_matter
            );
        }
        if !(0.0..=1.0).contains(&self.o_radiation) {
            push_error!(
                chain,
                RADIATION_OUT_OF_BOUNDS,
                "Cosmology::new: 'oradiation' (current radiation density per \
                 critical density) must be between zero and one (inclusive), but \
                 the given value is '{:.8}'",
                self.o_radiation
            );
        }

        let sum = self.o_lambda + self.o_matter + self.o_radiation;
        if !((1.0 - SUM_TOLERANCE)..=(1.0 + SUM_TOLERANCE)).contains(&sum) {
            push_error!(
                chain,
                SUM_LIMIT,
                "Cosmology::new: sum of fractional densities is not 1, but {sum:.8}. \
                 The cosmological constant ('olambda'), matter ('omatter') and \
                 radiation ('oradiation') densities are given as {:.8}, {:.8}, {:.8}",
                self.o_lambda,
                self.o_matter,
                self.o_radiation
            );
        }

        let pushed = chain.len() - before;
        if pushed > 0 {
            debug!(pushed, "cosmological parameters rejected");
        }
    }

    pub fn h0(&self) -> f64 {
        self.h0
    }

    pub fn o_lambda(&self) -> f64 {
        self.o_lambda
    }

    pub fn o_matter(&self) -> f64 {
        self.o_matter
    }

    pub fn o_radiation(&self) -> f64 {
        self.o_radiation
    }

    /// Curvature fractional density, `1 - (olambda + omatter + oradiation)`.
    pub fn o_curvature(&self) -> f64 {
        self.o_curvature
    }

    /// Dimensionless Hubble parameter E(z) = H(z) / H0.
    pub fn e_of_z(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        (self.o_lambda
            + self.o_curvature * zp1.powi(2)
            + self.o_matter * zp1.powi(3)
            + self.o_radiation * zp1.powi(4))
        .sqrt()
    }

    /// c / H0 in Mpc.
    fn hubble_distance(&self) -> f64 {
        SPEED_OF_LIGHT / hubble_per_second(self.h0) / (1e6 * PARSEC)
    }

    /// Dimensionless comoving distance, the integral of 1/E from 0 to z.
    fn comoving_integral(&self, z: f64) -> f64 {
        integrate(|zz| 1.0 / self.e_of_z(zz), 0.0, z)
    }

    /// Age of the universe at redshift `z`, in Ga (billions of 365-day years).
    pub fn age(&self, z: f64) -> f64 {
        // Integral over [z, inf) of 1/((1+z)E) dz, written over the scale
        // factor a = 1/(1+z), which runs over (0, 1/(1+z)].
        let (ol, ok, om, or) = (
            self.o_lambda,
            self.o_curvature,
            self.o_matter,
            self.o_radiation,
        );
        let integrand = |a: f64| {
            if a == 0.0 {
                return 0.0;
            }
            a / (ol * a.powi(4) + ok * a.powi(2) + om * a + or).sqrt()
        };
        let result = integrate(integrand, 0.0, 1.0 / (1.0 + z));
        result / hubble_per_second(self.h0) / (365.0 * DAY) / 1e9
    }

    /// Time between redshift `z` and today, in Ga.
    pub fn look_back_time(&self, z: f64) -> f64 {
        self.age(0.0) - self.age(z)
    }

    /// Proper (line-of-sight comoving) distance to `z`, in Mpc.
    pub fn proper_distance(&self, z: f64) -> f64 {
        self.comoving_integral(z) * self.hubble_distance()
    }

    /// Comoving volume over 4π steradian out to `z`, in Mpc³.
    pub fn comoving_volume(&self, z: f64) -> f64 {
        let result = integrate(
            |zz| {
                let dc = self.comoving_integral(zz);
                dc * dc / self.e_of_z(zz)
            },
            0.0,
            z,
        );
        result * 4.0 * PI * self.hubble_distance().powi(3)
    }

    /// Critical density at `z`, in g/cm³.
    pub fn critical_density(&self, z: f64) -> f64 {
        let h = hubble_per_second(self.h0) * self.e_of_z(z);
        3.0 * h * h / (8.0 * PI * GRAVITATIONAL_CONSTANT) / 1000.0
    }

    /// Angular diameter distance to `z`, in Mpc.
    pub fn angular_distance(&self, z: f64) -> f64 {
        self.proper_distance(z) / (1.0 + z)
    }

    /// Physical size subtended by one arcsecond at `z`, in kpc.
    pub fn arcsec_tangential_distance(&self, z: f64) -> f64 {
        self.angular_distance(z) * 1000.0 * PI / 3600.0 / 180.0
    }

    /// Luminosity distance to `z`, in Mpc.
    pub fn luminosity_distance(&self, z: f64) -> f64 {
        self.proper_distance(z) * (1.0 + z)
    }

    /// Distance modulus at `z`.
    pub fn distance_modulus(&self, z: f64) -> f64 {
        5.0 * ((self.luminosity_distance(z) * 1e6).log10() - 1.0)
    }

    /// Value to subtract from an apparent magnitude to get the absolute one.
    pub fn to_absolute_mag(&self, z: f64) -> f64 {
        self.distance_modulus(z) - 2.5 * (1.0 + z).log10()
    }
}
