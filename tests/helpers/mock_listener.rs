#![allow(dead_code)]
use faultwatch::{Listener, ListenerError, Severity};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// A shared, ordered log of `(listener, severity, message)` calls.
pub type CallLog = Arc<Mutex<Vec<(String, Severity, String)>>>;

/// A listener that records every hook invocation into a shared log.
pub struct RecordingListener {
    id: String,
    log: CallLog,
}

impl RecordingListener {
    pub fn new(id: &str, log: &CallLog) -> Arc<dyn Listener> {
        Arc::new(Self {
            id: id.to_string(),
            log: log.clone(),
        })
    }
}

impl Listener for RecordingListener {
    fn name(&self) -> &str {
        &self.id
    }

    fn notify(&self, severity: Severity, message: &str) -> Result<(), ListenerError> {
        self.log
            .lock()
            .unwrap()
            .push((self.id.clone(), severity, message.to_string()));
        Ok(())
    }
}

/// A listener whose hooks always fail as if its log file were unopenable.
pub struct FailingListener;

impl FailingListener {
    pub fn new() -> Arc<dyn Listener> {
        Arc::new(Self)
    }
}

impl Listener for FailingListener {
    fn name(&self) -> &str {
        "failing_mock"
    }

    fn notify(&self, _severity: Severity, _message: &str) -> Result<(), ListenerError> {
        Err(ListenerError::Unopenable {
            path: PathBuf::from("/unreachable/failing.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        })
    }
}

/// Returns the ids of the listeners that saw `severity`, in call order.
pub fn seen(log: &CallLog, severity: Severity) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|(_, s, _)| *s == severity)
        .map(|(id, _, _)| id.clone())
        .collect()
}
