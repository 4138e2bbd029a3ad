//! Text rendering of error records.

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::{ErrorChain, ErrorRecord, lib_name};

impl fmt::Display for ErrorRecord {
    /// `[front: ]lib: code: back STATUS`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(front) = self.front_msg() {
            write!(f, "{front}: ")?;
        }
        write!(
            f,
            "{}: {}: {} {}",
            lib_name(self.lib_code()),
            self.code(),
            self.back_msg(),
            self.severity()
        )
    }
}

/// Render one record as a diagnostic line (without the trailing newline).
///
/// `verbose` does not change the text. It additionally emits the decoded
/// fields as a `debug` event for anyone tracing the program.
pub fn render(record: &ErrorRecord, verbose: bool) -> String {
    if verbose {
        debug!(
            id = format_args!("{:#08x}", record.id().bits()),
            lib_code = record.lib_code(),
            code = record.code(),
            warning = record.is_warning(),
            "render error record"
        );
    }
    record.to_string()
}

impl ErrorChain {
    /// Write one line per record, head to tail, and return how many were
    /// breaking.
    ///
    /// Each record's own severity is counted. An empty chain writes nothing.
    pub fn write_to<W: Write>(&self, out: &mut W, verbose: bool) -> io::Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }
        let mut critical = 0;
        for record in self {
            if !record.is_warning() {
                critical += 1;
            }
            writeln!(out, "{}", render(record, verbose))?;
        }
        out.flush()?;
        Ok(critical)
    }

    /// Print every record to stderr and return the number of breaking ones.
    pub fn print_all(&self, verbose: bool) -> usize {
        if self.is_empty() {
            return 0;
        }
        let stderr = io::stderr();
        let mut lock = stderr.lock();
        match self.write_to(&mut lock, verbose) {
            Ok(critical) => critical,
            Err(err) => {
                // The verdict must not depend on whether stderr is writable.
                warn!(error = %err, "failed to print error chain");
                self.critical_count()
            }
        }
    }
}
