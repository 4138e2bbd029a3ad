//! Call-site bugs detected by the chain.

use std::fmt;
use std::panic::Location;

/// A broken calling contract.
///
/// These are bugs in the caller, not runtime conditions: they are never pushed
/// into an [`ErrorChain`](crate::ErrorChain) and the process does not continue
/// past them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContractViolation {
    /// A second front message was given for a record without asking to replace it.
    FrontMessageExists {
        lib_code: u8,
        code: u8,
        existing: String,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::FrontMessageExists {
                lib_code,
                code,
                existing,
            } => write!(
                f,
                "front message already set for error {code} of library {lib_code} \
                 ('{existing}'); pass replace=true to overwrite it"
            ),
        }
    }
}

impl std::error::Error for ContractViolation {}

/// Stop the program on a contract violation.
///
/// Aborts regardless of the panic strategy: nothing unwinds past this point
/// and no caller can catch it.
#[track_caller]
pub(crate) fn fatal(violation: ContractViolation) -> ! {
    let location = Location::caller();
    tracing::error!(%violation, %location, "contract violation");
    eprintln!("contract violation at {location}: {violation}");
    std::process::abort();
}

/// Run `body` in a fresh copy of the current test binary.
///
/// The parent spawns the child with `ASTROKIT_ISOLATED_TEST` naming `test`
/// (its full path, e.g. `chain::tests::some_test`) and gets the child's output
/// back. Inside the child the same call runs `body` and returns `None`.
#[cfg(test)]
pub(crate) fn run_isolated(test: &str, body: impl FnOnce()) -> Option<std::process::Output> {
    const VAR: &str = "ASTROKIT_ISOLATED_TEST";
    if std::env::var(VAR).as_deref() == Ok(test) {
        body();
        return None;
    }
    let exe = std::env::current_exe().unwrap();
    let output = std::process::Command::new(exe)
        .args(["--exact", test, "--nocapture", "--test-threads=1"])
        .env(VAR, test)
        .output()
        .unwrap();
    Some(output)
}
