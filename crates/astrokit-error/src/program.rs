//! Boundary guard for executables.
//!
//! Library code never stops the process; it only pushes into a chain. The
//! executable owning the chain hands it to [`exit_on_critical`] once it is
//! ready to report, and that is the single place where accumulated errors end
//! the program. Only enable the `program` feature from binary crates.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::ErrorChain;

/// Exit status used when at least one breaking error was reported.
pub const EXIT_FAILURE: i32 = 1;

/// What the guard decided after printing a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing breaking; the program carries on (warnings may have printed).
    Continue,
    /// At least one breaking error; the program must stop.
    Terminate { critical: usize },
}

/// Print the chain to `out` and decide, without exiting.
pub fn verdict<W: Write>(chain: &ErrorChain, verbose: bool, out: &mut W) -> Verdict {
    let critical = match chain.write_to(out, verbose) {
        Ok(critical) => critical,
        Err(err) => {
            warn!(error = %err, "failed to print error chain");
            chain.critical_count()
        }
    };
    if critical > 0 {
        Verdict::Terminate { critical }
    } else {
        Verdict::Continue
    }
}

/// Print every record to stderr and exit with [`EXIT_FAILURE`] if any of them
/// is breaking. Returns normally otherwise; the remaining warnings stay in the
/// caller's chain.
pub fn exit_on_critical(chain: &ErrorChain, verbose: bool) {
    let stderr = io::stderr();
    let mut lock = stderr.lock();
    if let Verdict::Terminate { critical } = verdict(chain, verbose, &mut lock) {
        info!(critical, "breaking errors reported, exiting");
        drop(lock);
        std::process::exit(EXIT_FAILURE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorId, LibCode, Severity};

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_unwritable_output_still_terminates() {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("warned", ErrorId::new(LibCode::Table, 1, Severity::Warning));
        chain.push_back_msg("broke", ErrorId::new(LibCode::Table, 2, Severity::Critical));
        assert_eq!(
            verdict(&chain, false, &mut Broken),
            Verdict::Terminate { critical: 1 }
        );
    }

    #[test]
    fn test_empty_chain_continues_silently() {
        let mut out = Vec::new();
        assert_eq!(verdict(&ErrorChain::new(), false, &mut out), Verdict::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_warnings_alone_continue() {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("low redshift", ErrorId::new(LibCode::Cosmology, 9, Severity::Warning));

        let mut out = Vec::new();
        assert_eq!(verdict(&chain, false, &mut out), Verdict::Continue);
        assert_eq!(String::from_utf8(out).unwrap(), "cosmology.h: 9: low redshift [WARNING]\n");
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_critical_under_warning_terminates() {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("bad olambda", ErrorId::new(LibCode::Cosmology, 1, Severity::Critical));
        chain.push_back_msg("low redshift", ErrorId::new(LibCode::Cosmology, 9, Severity::Warning));
        assert!(!chain.occurred());

        let mut out = Vec::new();
        assert_eq!(verdict(&chain, false, &mut out), Verdict::Terminate { critical: 1 });
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_exit_on_warnings_returns() {
        let mut chain = ErrorChain::new();
        chain.push_back_msg("advisory", ErrorId::new(LibCode::Units, 1, Severity::Warning));
        exit_on_critical(&chain, false);
        assert_eq!(chain.warning_count(), 1);
    }
}
