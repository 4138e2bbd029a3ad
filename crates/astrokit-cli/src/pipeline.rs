//! Input processing: redshift → cosmology.
//!
//! Every library failure lands in the caller's chain with a front message
//! naming the step that triggered it.

use astrokit_cosmology::{Cosmology, z_from_velocity};
use astrokit_error::ErrorChain;
use tracing::info;

use crate::{CosmiccalOptions, Input};

/// Everything the output stage needs.
#[derive(Debug, Clone, Copy)]
pub struct Prepared {
    pub redshift: f64,
    pub cosmology: Cosmology,
}

/// Derive the redshift and validate the cosmology.
///
/// Always returns; whether the result may be printed is for the boundary
/// guard to decide from the chain.
pub fn prepare(opts: &CosmiccalOptions, chain: &mut ErrorChain) -> Prepared {
    let redshift = match opts.input {
        Input::Redshift(z) => z,
        Input::Velocity(v) => {
            let before = chain.len();
            let z = z_from_velocity(v, chain);
            if chain.len() > before {
                chain.add_front_msg("converting '--velocity' to redshift", false);
            }
            z
        }
    };

    let before = chain.len();
    let cosmology = Cosmology::new(
        opts.h0,
        opts.olambda,
        opts.omatter,
        opts.oradiation,
        chain,
    );
    if chain.len() > before {
        chain.add_front_msg("checking cosmological parameters", false);
    }

    info!(
        redshift,
        h0 = opts.h0,
        olambda = opts.olambda,
        omatter = opts.omatter,
        oradiation = opts.oradiation,
        errors = chain.len(),
        "inputs prepared"
    );

    Prepared {
        redshift,
        cosmology,
    }
}
