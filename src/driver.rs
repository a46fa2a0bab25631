//! The job entity that raises one message on each severity channel.

use crate::core::Listener;
use crate::subject::{BroadcastError, BroadcastPolicy, Subject};
use log::info;
use std::sync::Arc;

pub const WARNING_MESSAGE: &str = "warning message";
pub const ERROR_MESSAGE: &str = "error message";
pub const FATAL_MESSAGE: &str = "fatal error message";

/// Owns a [`Subject`] and drives a fixed warning, error, fatal sequence
/// through it.
#[derive(Default)]
pub struct Driver {
    subject: Subject,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BroadcastPolicy) -> Self {
        Self {
            subject: Subject::with_policy(policy),
        }
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn register(&mut self, listener: &Arc<dyn Listener>) {
        self.subject.register(listener);
    }

    pub fn unregister(&mut self, listener: &Arc<dyn Listener>) {
        self.subject.unregister(listener);
    }

    pub fn warning(&self, message: &str) -> Result<(), BroadcastError> {
        self.subject.broadcast_warning(message)
    }

    pub fn error(&self, message: &str) -> Result<(), BroadcastError> {
        self.subject.broadcast_error(message)
    }

    pub fn fatal_error(&self, message: &str) -> Result<(), BroadcastError> {
        self.subject.broadcast_fatal(message)
    }

    /// Raises a warning, an error and a fatal error, in that order. The first
    /// failed broadcast stops the job.
    pub fn job(&self) -> Result<(), BroadcastError> {
        info!("Running job with {} listener(s)", self.subject.len());
        self.warning(WARNING_MESSAGE)?;
        self.error(ERROR_MESSAGE)?;
        self.fatal_error(FATAL_MESSAGE)?;
        Ok(())
    }
}
