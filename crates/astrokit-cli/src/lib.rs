//! cosmiccal command-line interface.
//!
pub mod config;
pub mod options;
pub mod output;
pub mod pipeline;

use std::io::Write;

use anyhow::{Context, Result};
use astrokit_error::ErrorChain;
use astrokit_error::program::exit_on_critical;

pub use config::ConfigFile;
pub use options::{CosmologyOptions, OutputOptions, Quantity};
pub use pipeline::{Prepared, prepare};

/// Below this redshift the peculiar velocity of a galaxy may dominate its
/// Hubble flow.
pub const REDSHIFT_SIG_HUBBLE_FLOW: f64 = 0.01;

/// Where the redshift comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Redshift(f64),
    /// Recession velocity in km/s.
    Velocity(f64),
}

/// Options for running cosmiccal, after merging the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct CosmiccalOptions {
    pub input: Input,
    pub h0: f64,
    pub olambda: f64,
    pub omatter: f64,
    pub oradiation: f64,
    pub quantities: Vec<Quantity>,
    pub lines: Vec<f64>,
    pub quiet: bool,
    pub verbose_errors: bool,
}

impl CosmiccalOptions {
    /// Merge command-line values over the config file over the defaults.
    pub fn resolve(
        input: Input,
        cosmology: &CosmologyOptions,
        output: &OutputOptions,
        file: &ConfigFile,
    ) -> Self {
        Self {
            input,
            h0: cosmology.h0.or(file.h0).unwrap_or(config::DEFAULT_H0),
            olambda: cosmology
                .olambda
                .or(file.olambda)
                .unwrap_or(config::DEFAULT_OLAMBDA),
            omatter: cosmology
                .omatter
                .or(file.omatter)
                .unwrap_or(config::DEFAULT_OMATTER),
            oradiation: cosmology
                .oradiation
                .or(file.oradiation)
                .unwrap_or(config::DEFAULT_ORADIATION),
            quantities: output.quantities.clone(),
            lines: output.lines.clone(),
            quiet: output.quiet || file.quiet.unwrap_or(false),
            verbose_errors: output.verbose_errors || file.verbose_errors.unwrap_or(false),
        }
    }

    fn wants_full_report(&self) -> bool {
        self.quantities.is_empty() && self.lines.is_empty()
    }
}

/// Main entry point.
///
/// Breaking errors from the libraries end the process here, before anything
/// is printed to stdout.
pub fn run_main(opts: &CosmiccalOptions) -> Result<()> {
    let mut chain = ErrorChain::new();
    let prepared = prepare(opts, &mut chain);

    chain.reverse();
    exit_on_critical(&chain, opts.verbose_errors);

    let text = if opts.wants_full_report() {
        output::render_report(opts, &prepared)
    } else {
        output::render_specific(opts, &prepared)
    };

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write!(lock, "{text}").context("failed to write results")?;
    lock.flush().context("failed to write results")?;

    if prepared.redshift < REDSHIFT_SIG_HUBBLE_FLOW && !opts.quiet {
        eprintln!(
            "cosmiccal: [WARNING] at very low redshifts (approximately below {REDSHIFT_SIG_HUBBLE_FLOW}), \
             the peculiar velocity of the particular galaxy may be more significant than \
             Hubble's law (which is the basis of the measurements here). This gets worse \
             as the redshift decreases, so the results above may not be accurate on a \
             per-object basis. You can suppress this warning with '--quiet'"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_precedence() {
        let cosmology = CosmologyOptions {
            h0: Some(70.0),
            ..Default::default()
        };
        let file = ConfigFile {
            h0: Some(50.0),
            omatter: Some(0.25),
            quiet: Some(true),
            ..Default::default()
        };
        let opts = CosmiccalOptions::resolve(
            Input::Redshift(1.0),
            &cosmology,
            &OutputOptions::default(),
            &file,
        );

        assert_eq!(opts.h0, 70.0);
        assert_eq!(opts.omatter, 0.25);
        assert_eq!(opts.olambda, config::DEFAULT_OLAMBDA);
        assert_eq!(opts.oradiation, config::DEFAULT_ORADIATION);
        assert!(opts.quiet);
        assert!(!opts.verbose_errors);
        assert!(opts.wants_full_report());
    }

    #[test]
    fn test_selection_disables_full_report() {
        let output = OutputOptions {
            lines: vec![6563.0],
            ..Default::default()
        };
        let opts = CosmiccalOptions::resolve(
            Input::Velocity(3000.0),
            &CosmologyOptions::default(),
            &output,
            &ConfigFile::default(),
        );
        assert!(!opts.wants_full_report());
        assert_eq!(opts.input, Input::Velocity(3000.0));
    }
}
