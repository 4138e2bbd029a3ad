//! Error identifiers pushed by this library.

use astrokit_error::{ErrorId, LibCode, Severity};

/// `olambda` outside [0, 1].
pub const LAMBDA_OUT_OF_BOUNDS: ErrorId = ErrorId::new(LibCode::Cosmology, 1, Severity::Critical);

/// `omatter` outside [0, 1].
pub const MATTER_OUT_OF_BOUNDS: ErrorId = ErrorId::new(LibCode::Cosmology, 2, Severity::Critical);

/// `oradiation` outside [0, 1].
pub const RADIATION_OUT_OF_BOUNDS: ErrorId =
    ErrorId::new(LibCode::Cosmology, 3, Severity::Critical);

/// Fractional densities do not add up to one.
pub const SUM_LIMIT: ErrorId = ErrorId::new(LibCode::Cosmology, 4, Severity::Critical);

/// Velocity at or beyond the speed of light.
pub const VELOCITY_OUT_OF_BOUNDS: ErrorId =
    ErrorId::new(LibCode::Cosmology, 5, Severity::Critical);

/// Hubble constant is zero, negative or not a number.
pub const H0_NOT_POSITIVE: ErrorId = ErrorId::new(LibCode::Cosmology, 6, Severity::Critical);
