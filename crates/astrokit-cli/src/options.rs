//! Command-line options for cosmiccal.
//!
//! Cosmology values are optional here so that a config file can fill in
//! whatever the command line leaves out.

use clap::{Args, ValueEnum};

/// Cosmological parameters.
#[derive(Args, Debug, Clone, Default)]
pub struct CosmologyOptions {
    /// Current expansion rate (Hubble constant) in km/s/Mpc.
    #[arg(short = 'H', long = "H0", value_name = "KM/S/MPC")]
    pub h0: Option<f64>,

    /// Current cosmological constant density per critical density.
    #[arg(short = 'l', long, value_name = "FRACTION", allow_negative_numbers = true)]
    pub olambda: Option<f64>,

    /// Current matter density per critical density.
    #[arg(short = 'm', long, value_name = "FRACTION", allow_negative_numbers = true)]
    pub omatter: Option<f64>,

    /// Current radiation density per critical density.
    #[arg(short = 'r', long, value_name = "FRACTION", allow_negative_numbers = true)]
    pub oradiation: Option<f64>,
}

/// What to print and how.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Print only these values, space separated, in the order given.
    /// Accepts a comma-separated list and may be repeated.
    #[arg(
        short = 'Q',
        long = "quantity",
        value_name = "NAME",
        value_enum,
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub quantities: Vec<Quantity>,

    /// Print the observed wavelength of a rest-frame line at the redshift
    /// (repeatable, printed after the quantities).
    #[arg(long = "line-at-z", value_name = "WAVELENGTH", action = clap::ArgAction::Append)]
    pub lines: Vec<f64>,

    /// Do not warn about the peculiar velocity at very low redshifts.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Also trace every reported error with its decoded identifier.
    #[arg(long = "verbose-errors")]
    pub verbose_errors: bool,
}

/// A single value cosmiccal can print on its own.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Redshift used in the calculations
    UsedRedshift,
    /// Recession velocity at the redshift (km/s)
    UsedVelocity,
    /// Age of the universe now (Ga)
    AgeNow,
    /// Critical density now (g/cm^3)
    CriticalDensityNow,
    /// Proper distance to z (Mpc)
    ProperDistance,
    /// Angular diameter distance to z (Mpc)
    AngularDimDist,
    /// Tangential distance covered by 1 arcsec at z (kpc)
    ArcsecTanDist,
    /// Luminosity distance to z (Mpc)
    LuminosityDist,
    /// Distance modulus at z
    DistanceModulus,
    /// Conversion to absolute magnitude
    AbsMagConv,
    /// Age of the universe at z (Ga)
    Age,
    /// Look-back time to z (Ga)
    LookBackTime,
    /// Critical density at z (g/cm^3)
    CriticalDensity,
    /// Comoving volume over 4pi steradian to z (Mpc^3)
    Volume,
}

/// Value parser for `--redshift`.
pub fn parse_redshift(text: &str) -> Result<f64, String> {
    let z: f64 = text
        .parse()
        .map_err(|err| format!("'{text}' is not a number: {err}"))?;
    if z.is_nan() || z < 0.0 {
        return Err(format!("redshift must be zero or positive, got '{text}'"));
    }
    Ok(z)
}
