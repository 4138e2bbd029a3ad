//! TOML configuration for cosmiccal.
//!
//! ```toml
//! H0 = 70.0
//! olambda = 0.7
//! omatter = 0.3
//! oradiation = 0.0
//! quiet = true
//! ```
//!
//! Every key is optional; unknown keys are an error. Values given on the
//! command line win over the file, and the file wins over the built-in
//! defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Planck 2018 expansion rate (km/s/Mpc).
pub const DEFAULT_H0: f64 = 67.66;
/// Planck 2018 cosmological constant density.
pub const DEFAULT_OLAMBDA: f64 = 0.6889;
/// Planck 2018 matter density.
pub const DEFAULT_OMATTER: f64 = 0.3111;
pub const DEFAULT_ORADIATION: f64 = 0.0;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(alias = "H0")]
    pub h0: Option<f64>,
    pub olambda: Option<f64>,
    pub omatter: Option<f64>,
    pub oradiation: Option<f64>,
    pub quiet: Option<bool>,
    pub verbose_errors: Option<bool>,
}

impl ConfigFile {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file '{}'", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
