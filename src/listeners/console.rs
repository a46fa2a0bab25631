//! Console output for listeners.

use crate::core::{Listener, ListenerError};
use log::warn;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// A line-oriented console sink.
///
/// Defaults to standard output. Tests swap in an in-memory writer to capture
/// what a listener printed.
pub struct Console {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Writes `line` followed by a newline and flushes. Console failures are
    /// logged and otherwise ignored.
    pub fn line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            warn!("Failed to write to console: {}", e);
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}

/// Prints every warning to the console.
#[derive(Default)]
pub struct ConsolePrinter {
    console: Console,
}

impl ConsolePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_console(console: Console) -> Self {
        Self { console }
    }
}

impl Listener for ConsolePrinter {
    fn name(&self) -> &str {
        "console_printer"
    }

    fn on_warning(&self, message: &str) -> Result<(), ListenerError> {
        self.console.line(&format!("Warning to console: {}", message));
        Ok(())
    }
}
