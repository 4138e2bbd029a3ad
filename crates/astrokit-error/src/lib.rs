//! # astrokit-error
//!
//! Chained error records for the astrokit libraries.
//!
//! ## Design Philosophy
//!
//! - **ErrorId**: a 32-bit identifier packing library, code and severity, built at compile time
//! - **ErrorRecord**: one diagnostic, with the library's back message and an optional caller front message
//! - **ErrorChain**: the stack a call tree pushes into; nothing in a library ever stops the process
//! - **Boundary guard**: the executable prints the chain and decides whether to exit
//!
//! ## Usage
//!
//! ```rust
//! use astrokit_error::{ErrorChain, ErrorId, LibCode, Severity};
//!
//! const DIVISION_BY_ZERO: ErrorId = ErrorId::new(LibCode::Arithmetic, 5, Severity::Critical);
//!
//! fn ratio(a: f64, b: f64, chain: &mut ErrorChain) -> f64 {
//!     if b == 0.0 {
//!         chain.push_back_msg("division by zero", DIVISION_BY_ZERO);
//!         return f64::NAN;
//!     }
//!     a / b
//! }
//!
//! let mut chain = ErrorChain::new();
//! let value = ratio(1.0, 0.0, &mut chain);
//! chain.add_front_msg("compute_ratio", false);
//!
//! assert!(value.is_nan());
//! assert!(chain.occurred());
//! assert_eq!(
//!     chain.head().unwrap().to_string(),
//!     "compute_ratio: arithmetic.h: 5: division by zero [BREAKING]"
//! );
//! ```
//!
//! ## Principles
//!
//! - Libraries take `&mut ErrorChain`, push, and return a best-effort value
//! - Callers may add one front message per record for context
//! - Only `program::exit_on_critical` (feature `program`) terminates the process
//! - Call-site bugs are `ContractViolation`s and never enter a chain

mod chain;
mod codec;
mod library;
mod present;
mod record;
mod severity;
mod violation;

#[cfg(feature = "program")]
pub mod program;

pub use chain::{ChainOrder, ErrorChain};
pub use codec::{Decoded, ErrorId, bitset, decode};
pub use library::{BUG_REPORT, LibCode, UNKNOWN_LIBRARY, lib_name};
pub use present::render;
pub use record::ErrorRecord;
pub use severity::Severity;
pub use violation::ContractViolation;

/// Format a back message and push it onto a chain.
///
/// ```rust
/// use astrokit_error::{ErrorChain, ErrorId, LibCode, Severity, push_error};
///
/// const BAD_INDEX: ErrorId = ErrorId::new(LibCode::Array, 2, Severity::Warning);
///
/// let mut chain = ErrorChain::new();
/// push_error!(chain, BAD_INDEX, "index {} is past the end ({})", 7, 5);
/// assert_eq!(chain.head().unwrap().back_msg(), "index 7 is past the end (5)");
/// ```
#[macro_export]
macro_rules! push_error {
    ($chain:expr, $id:expr, $($arg:tt)+) => {
        $chain.report($id, ::std::format_args!($($arg)+))
    };
}
