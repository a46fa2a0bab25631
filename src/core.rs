//! Core domain types and the listener contract for FaultWatch
//!
//! This module defines the three severity channels and the trait every
//! listener implements to receive broadcasts on them.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One of the three independent notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All channels, in the order a job raises them.
    pub const ALL: [Severity; 3] = [Severity::Warning, Severity::Error, Severity::Fatal];

    /// A static label, suitable for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures a listener hook can report back to the broadcasting subject.
#[derive(Error, Debug)]
pub enum ListenerError {
    #[error("log file {} could not be opened: {source}", path.display())]
    Unopenable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to log file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// =============================================================================
// Listener Trait
// =============================================================================

/// Receives severity-classified messages from a [`Subject`](crate::subject::Subject).
///
/// Every hook defaults to a no-op, so an implementation only overrides the
/// channels it cares about.
pub trait Listener: Send + Sync {
    /// A short, descriptive name used for logging and error reports.
    fn name(&self) -> &str;

    /// Called for every warning broadcast.
    fn on_warning(&self, _message: &str) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called for every error broadcast.
    fn on_error(&self, _message: &str) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Called for every fatal broadcast.
    fn on_fatal(&self, _message: &str) -> Result<(), ListenerError> {
        Ok(())
    }

    /// Dispatches `message` to the hook matching `severity`.
    fn notify(&self, severity: Severity, message: &str) -> Result<(), ListenerError> {
        match severity {
            Severity::Warning => self.on_warning(message),
            Severity::Error => self.on_error(message),
            Severity::Fatal => self.on_fatal(message),
        }
    }
}
