//! A single entry of an error chain.

use crate::{ContractViolation, ErrorId, LibCode, Severity, bitset};

/// One diagnostic pushed by a library.
///
/// The back message is written by the library that failed and is always
/// present. The front message is optional context from a caller and can be
/// set once, unless the caller explicitly asks to replace it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorRecord {
    lib_code: u8,
    code: u8,
    severity: Severity,
    back_msg: String,
    front_msg: Option<String>,
}

impl ErrorRecord {
    /// Allocate a record, copying the back message into storage it owns.
    ///
    /// This is the only way records come into existence. Running out of
    /// memory here aborts the process through the global allocator, since
    /// there would be nowhere left to report it.
    pub fn allocate(lib_code: u8, code: u8, back_msg: &str, is_warning: bool) -> Self {
        Self {
            lib_code,
            code,
            severity: Severity::from_warning(is_warning),
            back_msg: back_msg.to_owned(),
            front_msg: None,
        }
    }

    /// Allocate a record from an encoded identifier.
    pub fn from_id(id: ErrorId, back_msg: &str) -> Self {
        let decoded = id.decode();
        Self::allocate(decoded.lib_code, decoded.code, back_msg, decoded.is_warning)
    }

    /// Code of the problem within its library
    pub fn code(&self) -> u8 {
        self.code
    }

    /// Library that pushed the record
    pub fn lib_code(&self) -> u8 {
        self.lib_code
    }

    /// The library as a known enumeration value, if it is one.
    pub fn lib(&self) -> Option<LibCode> {
        LibCode::from_repr(self.lib_code)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_warning(&self) -> bool {
        self.severity.is_warning()
    }

    /// Message written by the failing library
    pub fn back_msg(&self) -> &str {
        &self.back_msg
    }

    /// Context added by a caller, if any
    pub fn front_msg(&self) -> Option<&str> {
        self.front_msg.as_deref()
    }

    /// Re-derive the identifier this record was built from.
    pub fn id(&self) -> ErrorId {
        ErrorId::from_bits(bitset(self.lib_code, self.code, self.severity.flag()))
    }

    /// Set the front message.
    ///
    /// Fails when a front message already exists and `replace` is false. The
    /// record is left untouched in that case.
    pub fn set_front_msg(&mut self, message: &str, replace: bool) -> Result<(), ContractViolation> {
        if let Some(existing) = self.front_msg.as_ref().filter(|_| !replace) {
            return Err(ContractViolation::FrontMessageExists {
                lib_code: self.lib_code,
                code: self.code,
                existing: existing.clone(),
            });
        }
        self.front_msg = Some(message.to_owned());
        Ok(())
    }
}
