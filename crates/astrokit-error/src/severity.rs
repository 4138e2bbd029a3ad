//! Severity of a chained error record

use std::fmt;

/// How bad a recorded error is.
///
/// The executable decides what to do with it:
/// - `Critical`: the boundary guard terminates the process once it has been printed
/// - `Warning`: printed and counted, but the program keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Breaking error, must end the program at the boundary.
    #[default]
    Critical,

    /// Advisory condition, never forces termination.
    Warning,
}

impl Severity {
    /// Build from the `is_warning` flag carried by records and identifiers.
    pub const fn from_warning(is_warning: bool) -> Self {
        if is_warning {
            Severity::Warning
        } else {
            Severity::Critical
        }
    }

    /// Value stored in the low byte of an encoded identifier.
    pub const fn flag(self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Status tag printed at the end of each diagnostic line
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "[BREAKING]",
            Severity::Warning => "[WARNING]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
