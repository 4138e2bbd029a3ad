//! Packing of error identifiers into 32-bit values.
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! ┌──────────┬──────────┬──────────┬──────────┐
//! │  unused  │ lib_code │   code   │is_warning│
//! └──────────┴──────────┴──────────┴──────────┘
//! ```

use crate::{LibCode, Severity};

/// Pack the three fields of an identifier.
///
/// Each field is a byte, so nothing can spill into a neighbour.
pub const fn bitset(lib_code: u8, code: u8, is_warning: u8) -> u32 {
    ((lib_code as u32) << 16) | ((code as u32) << 8) | is_warning as u32
}

/// Fields recovered from an encoded identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    pub lib_code: u8,
    pub code: u8,
    pub is_warning: bool,
}

/// Unpack an identifier.
///
/// The warning flag comes from the parity of the whole value, not from the
/// low byte: a low byte of 2 decodes as critical. Identifiers built with
/// [`ErrorId::new`] only ever carry 0 or 1 there, so both readings agree.
pub const fn decode(bits: u32) -> Decoded {
    Decoded {
        lib_code: ((bits >> 16) & 0xff) as u8,
        code: ((bits >> 8) & 0xff) as u8,
        is_warning: bits % 2 != 0,
    }
}

/// An encoded error identifier, meant to be declared as a `const` next to the
/// code that reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorId(u32);

impl ErrorId {
    pub const fn new(lib: LibCode, code: u8, severity: Severity) -> Self {
        Self(bitset(lib.code(), code, severity.flag()))
    }

    /// Build from raw fields, for libraries without a [`LibCode`] yet.
    pub const fn encode(lib_code: u8, code: u8, is_warning: u8) -> Self {
        Self(bitset(lib_code, code, is_warning))
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn decode(self) -> Decoded {
        decode(self.0)
    }

    pub const fn lib_code(self) -> u8 {
        self.decode().lib_code
    }

    pub const fn code(self) -> u8 {
        self.decode().code
    }

    pub const fn severity(self) -> Severity {
        Severity::from_warning(self.decode().is_warning)
    }
}

impl From<ErrorId> for u32 {
    fn from(id: ErrorId) -> Self {
        id.bits()
    }
}

impl From<u32> for ErrorId {
    fn from(bits: u32) -> Self {
        ErrorId::from_bits(bits)
    }
}
