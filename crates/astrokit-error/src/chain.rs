//! The error chain: a stack of records shared down a call tree.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;

use tracing::{debug, trace};

use crate::violation::fatal;
use crate::{ContractViolation, ErrorId, ErrorRecord, Severity, decode};

/// Which way the chain currently reads from the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainOrder {
    /// Head is the most recently pushed record.
    #[default]
    Stack,
    /// Head is the oldest record, right after [`ErrorChain::reverse`].
    Chronological,
}

/// Records accumulated by library calls, head first.
///
/// Libraries receive `&mut ErrorChain`, push what went wrong and carry on with
/// a best-effort result. Deciding whether the accumulated records are fatal is
/// left to the executable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorChain {
    // Index 0 is the head.
    records: VecDeque<ErrorRecord>,
    order: ChainOrder,
}

impl ErrorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn order(&self) -> ChainOrder {
        self.order
    }

    /// The record at the head of the chain.
    pub fn head(&self) -> Option<&ErrorRecord> {
        self.records.front()
    }

    /// Records from head to tail, in the current order.
    pub fn iter(&self) -> vec_deque::Iter<'_, ErrorRecord> {
        self.records.iter()
    }

    /// Make an already allocated record the new head.
    pub fn push(&mut self, record: ErrorRecord) {
        trace!(
            lib_code = record.lib_code(),
            code = record.code(),
            warning = record.is_warning(),
            "push error record"
        );
        self.records.push_front(record);
        self.order = ChainOrder::Stack;
    }

    /// Push a library message under the given identifier.
    ///
    /// An empty message pushes nothing.
    pub fn push_back_msg(&mut self, message: &str, id: impl Into<ErrorId>) {
        if message.is_empty() {
            return;
        }
        let decoded = decode(id.into().bits());
        self.push(ErrorRecord::allocate(
            decoded.lib_code,
            decoded.code,
            message,
            decoded.is_warning,
        ));
    }

    /// Push a formatted library message. See [`push_error!`](crate::push_error).
    pub fn report(&mut self, id: impl Into<ErrorId>, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.push_back_msg(message, id),
            None => self.push_back_msg(&args.to_string(), id),
        }
    }

    /// Add caller context to the head record.
    ///
    /// Does nothing on an empty chain or an empty message.
    ///
    /// # Aborts
    /// When the head already has a front message and `replace` is false. That
    /// is a bug at the call site, so the process is aborted here.
    #[track_caller]
    pub fn add_front_msg(&mut self, message: &str, replace: bool) {
        if let Err(violation) = self.try_add_front_msg(message, replace) {
            fatal(violation);
        }
    }

    /// Like [`add_front_msg`](Self::add_front_msg), but hands the violation
    /// back instead of stopping.
    pub fn try_add_front_msg(&mut self, message: &str, replace: bool) -> Result<(), ContractViolation> {
        if message.is_empty() {
            return Ok(());
        }
        match self.records.front_mut() {
            Some(head) => head.set_front_msg(message, replace),
            None => Ok(()),
        }
    }

    /// Invert the chain so the head becomes the first record ever pushed.
    ///
    /// Applied to a freshly built stack this yields chronological order;
    /// applying it again restores the stack. Chains of zero or one record are
    /// left alone.
    pub fn reverse(&mut self) {
        if self.records.len() < 2 {
            return;
        }
        self.records.make_contiguous().reverse();
        self.order = match self.order {
            ChainOrder::Stack => ChainOrder::Chronological,
            ChainOrder::Chronological => ChainOrder::Stack,
        };
        debug!(records = self.records.len(), order = ?self.order, "reversed error chain");
    }

    /// Whether any record carries the same `code` as `id`.
    ///
    /// Only the code byte is compared: the library and severity of `id` are
    /// ignored. Use [`check_exact`](Self::check_exact) to also match the library.
    pub fn check(&self, id: impl Into<ErrorId>) -> bool {
        let code = decode(id.into().bits()).code;
        self.records.iter().any(|record| record.code() == code)
    }

    /// Whether any record was pushed with the same library and code as `id`.
    pub fn check_exact(&self, id: impl Into<ErrorId>) -> bool {
        let decoded = decode(id.into().bits());
        self.records
            .iter()
            .any(|record| record.code() == decoded.code && record.lib_code() == decoded.lib_code)
    }

    /// Whether the head record is a breaking error.
    ///
    /// Only the head is consulted. That suits a caller checking the one call it
    /// just made; a critical record buried under a warning is not seen. Use
    /// [`critical_count`](Self::critical_count) for the full picture.
    pub fn occurred(&self) -> bool {
        self.head().is_some_and(|head| !head.is_warning())
    }

    /// Number of records that are not warnings.
    pub fn critical_count(&self) -> usize {
        self.count(Severity::Critical)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .filter(|record| record.severity() == severity)
            .count()
    }

    /// Refuse to run on top of pending errors.
    ///
    /// Meant for the start of a library function: when the chain already holds
    /// records, push a note that `func` did not run and return true.
    pub fn guard_entry(&mut self, id: impl Into<ErrorId>, func: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        crate::push_error!(self, id, "{func}: error point is not empty, will not continue");
        true
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.order = ChainOrder::Stack;
    }
}

impl<'a> IntoIterator for &'a ErrorChain {
    type Item = &'a ErrorRecord;
    type IntoIter = vec_deque::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for ErrorChain {
    type Item = ErrorRecord;
    type IntoIter = vec_deque::IntoIter<ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LibCode;
    use crate::violation::run_isolated;

    const FIRST: ErrorId = ErrorId::new(LibCode::Fits, 1, Severity::Critical);
    const SECOND: ErrorId = ErrorId::new(LibCode::Table, 2, Severity::Warning);
    const THIRD: ErrorId = ErrorId::new(LibCode::Wcs, 3, Severity::Critical);

    fn three() -> ErrorChain {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("first", FIRST);
        chain.push_back_msg("second", SECOND);
        chain.push_back_msg("third", THIRD);
        chain
    }

    fn back_msgs(chain: &ErrorChain) -> Vec<&str> {
        chain.iter().map(ErrorRecord::back_msg).collect()
    }

    #[test]
    fn test_push_is_lifo() {
        let chain = three();
        assert_eq!(chain.len(), 3);
        assert_eq!(back_msgs(&chain), ["third", "second", "first"]);
        assert_eq!(chain.order(), ChainOrder::Stack);
    }

    #[test]
    fn test_empty_message_is_ignored() {
        let mut chain = three();
        chain.push_back_msg("", FIRST);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_raw_bits_are_accepted() {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("raw", 0x0008_0201u32);
        let head = chain.head().unwrap();
        assert_eq!((head.lib_code(), head.code(), head.is_warning()), (8, 2, true));
    }

    #[test]
    fn test_front_msg_targets_head() {
        let mut chain = three();
        chain.add_front_msg("while loading", false);
        assert_eq!(chain.head().unwrap().front_msg(), Some("while loading"));
        assert!(chain.iter().skip(1).all(|record| record.front_msg().is_none()));
    }

    #[test]
    fn test_front_msg_noops() {
        let mut chain = ErrorChain::new();
        chain.add_front_msg("nothing to attach to", false);
        assert!(chain.is_empty());

        let mut chain = three();
        chain.add_front_msg("", false);
        assert_eq!(chain.head().unwrap().front_msg(), None);
    }

    #[test]
    fn test_try_front_msg_reports_violation() {
        let mut chain = three();
        chain.try_add_front_msg("one", false).unwrap();
        assert!(chain.try_add_front_msg("two", false).is_err());
        chain.try_add_front_msg("two", true).unwrap();
        assert_eq!(chain.head().unwrap().front_msg(), Some("two"));
    }

    #[test]
    fn test_double_front_msg_is_fatal() {
        let output = run_isolated("chain::tests::test_double_front_msg_is_fatal", || {
            let mut chain = three();
            chain.add_front_msg("one", false);
            chain.add_front_msg("two", false);
        });
        let Some(output) = output else { return };

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("front message already set"), "{stderr}");
    }

    #[test]
    fn test_reverse_toggles_order() {
        let mut chain = three();
        chain.reverse();
        assert_eq!(back_msgs(&chain), ["first", "second", "third"]);
        assert_eq!(chain.order(), ChainOrder::Chronological);

        chain.reverse();
        assert_eq!(back_msgs(&chain), ["third", "second", "first"]);
        assert_eq!(chain.order(), ChainOrder::Stack);
    }

    #[test]
    fn test_reverse_short_chains() {
        let mut chain = ErrorChain::new();
        chain.reverse();
        assert!(chain.is_empty());

        chain.push_back_msg("only", FIRST);
        chain.reverse();
        assert_eq!(chain.order(), ChainOrder::Stack);
        assert_eq!(back_msgs(&chain), ["only"]);
    }

    #[test]
    fn test_push_after_reverse_becomes_head() {
        let mut chain = three();
        chain.reverse();
        chain.push_back_msg("fourth", FIRST);
        assert_eq!(back_msgs(&chain), ["fourth", "first", "second", "third"]);
        assert_eq!(chain.order(), ChainOrder::Stack);
    }

    #[test]
    fn test_check_compares_code_only() {
        let chain = three();
        assert!(chain.check(ErrorId::encode(200, 2, 0)));
        assert!(!chain.check(ErrorId::encode(LibCode::Table.code(), 7, 1)));
        assert!(chain.check_exact(SECOND));
        assert!(!chain.check_exact(ErrorId::encode(200, 2, 0)));
    }

    #[test]
    fn test_occurred_reads_head() {
        let mut chain = ErrorChain::new();
        assert!(!chain.occurred());

        chain.push_back_msg("critical", FIRST);
        assert!(chain.occurred());

        chain.push_back_msg("warning on top", SECOND);
        assert!(!chain.occurred());
        assert_eq!(chain.critical_count(), 1);
        assert_eq!(chain.warning_count(), 1);
    }

    #[test]
    fn test_guard_entry() {
        let mut chain = ErrorChain::new();
        assert!(!chain.guard_entry(FIRST, "fits::read"));
        assert!(chain.is_empty());

        chain.push_back_msg("earlier failure", THIRD);
        assert!(chain.guard_entry(FIRST, "fits::read"));
        assert_eq!(chain.len(), 2);
        assert_eq!(
            chain.head().unwrap().back_msg(),
            "fits::read: error point is not empty, will not continue"
        );
    }

    #[test]
    fn test_clear_and_consume() {
        let chain = three();
        let codes: Vec<u8> = chain.clone().into_iter().map(|r| r.code()).collect();
        assert_eq!(codes, [3, 2, 1]);

        let mut chain = chain;
        chain.reverse();
        chain.clear();
        assert!(chain.is_empty());
        assert_eq!(chain.order(), ChainOrder::Stack);
    }
}
