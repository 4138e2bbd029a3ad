//! Cosmological calculations for a Friedmann–Lemaître universe.
//!
//! Parameters are validated once, when a [`Cosmology`] is built. Problems are
//! pushed into the caller's [`ErrorChain`](astrokit_error::ErrorChain) and the
//! value is still returned, so every later calculation produces a best-effort
//! number (possibly NaN). Nothing here stops the program.
//!
//! ```rust
//! use astrokit_cosmology::Cosmology;
//! use astrokit_error::ErrorChain;
//!
//! let mut chain = ErrorChain::new();
//! let cosmo = Cosmology::new(70.0, 0.7, 0.3, 0.0, &mut chain);
//! assert!(chain.is_empty());
//! assert!((cosmo.age(0.0) - 13.47).abs() < 0.05);
//! ```

pub mod codes;
mod integrate;
mod model;
pub mod units;
mod velocity;

pub use integrate::integrate;
pub use model::Cosmology;
pub use velocity::{velocity_from_z, z_from_velocity};
