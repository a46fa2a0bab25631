//! The listener registry and the broadcast loop.
//!
//! A [`Subject`] keeps weak handles to the listeners registered with it. The
//! caller owns each listener through an `Arc`, so a subject can never keep a
//! listener alive nor observe one that has already been freed.

use crate::core::{Listener, ListenerError, Severity};
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use thiserror::Error;

/// What a broadcast does when a listener hook fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum BroadcastPolicy {
    /// Stop at the first failure. Later listeners are not notified.
    #[default]
    Abort,
    /// Notify every listener and report all failures at the end.
    Continue,
}

/// A single failed hook invocation.
#[derive(Debug)]
pub struct ListenerFailure {
    pub listener: String,
    pub error: ListenerError,
}

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("{severity} broadcast aborted by listener '{listener}': {source}")]
    Aborted {
        severity: Severity,
        listener: String,
        #[source]
        source: ListenerError,
    },

    #[error("{severity} broadcast finished with {} failed listener(s)", .failures.len())]
    Partial {
        severity: Severity,
        failures: Vec<ListenerFailure>,
    },
}

impl BroadcastError {
    pub fn severity(&self) -> Severity {
        match self {
            BroadcastError::Aborted { severity, .. } | BroadcastError::Partial { severity, .. } => {
                *severity
            }
        }
    }
}

/// Holds registered listeners in registration order and broadcasts to them.
#[derive(Default)]
pub struct Subject {
    listeners: Vec<Weak<dyn Listener>>,
    policy: BroadcastPolicy,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: BroadcastPolicy) -> Self {
        Self {
            listeners: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> BroadcastPolicy {
        self.policy
    }

    /// Appends `listener`. Registering the same listener twice makes it fire
    /// twice per broadcast.
    pub fn register(&mut self, listener: &Arc<dyn Listener>) {
        self.prune();
        debug!("Registering listener '{}'", listener.name());
        self.listeners.push(Arc::downgrade(listener));
    }

    /// Removes every registration of `listener`. No-op if it is not registered.
    pub fn unregister(&mut self, listener: &Arc<dyn Listener>) {
        self.prune();
        let target = Arc::as_ptr(listener) as *const ();
        let before = self.listeners.len();
        self.listeners.retain(|weak| weak.as_ptr() as *const () != target);
        let removed = before - self.listeners.len();
        if removed > 0 {
            debug!(
                "Unregistered listener '{}' ({} registration(s))",
                listener.name(),
                removed
            );
        }
    }

    /// Number of live registrations, duplicates included.
    pub fn len(&self) -> usize {
        self.listeners
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn broadcast_warning(&self, message: &str) -> Result<(), BroadcastError> {
        self.broadcast(Severity::Warning, message)
    }

    pub fn broadcast_error(&self, message: &str) -> Result<(), BroadcastError> {
        self.broadcast(Severity::Error, message)
    }

    pub fn broadcast_fatal(&self, message: &str) -> Result<(), BroadcastError> {
        self.broadcast(Severity::Fatal, message)
    }

    /// Invokes the hook for `severity` on every live listener, in registration
    /// order. Failure handling follows the subject's [`BroadcastPolicy`].
    pub fn broadcast(&self, severity: Severity, message: &str) -> Result<(), BroadcastError> {
        debug!("Broadcasting {} to {} listener(s)", severity, self.len());
        metrics::counter!("broadcasts_total", "severity" => severity.as_str()).increment(1);

        let mut failures = Vec::new();
        for listener in self.listeners.iter().filter_map(Weak::upgrade) {
            let Err(err) = listener.notify(severity, message) else {
                continue;
            };
            metrics::counter!("listener_failures_total", "severity" => severity.as_str())
                .increment(1);

            match self.policy {
                BroadcastPolicy::Abort => {
                    error!(
                        "Listener '{}' failed during {} broadcast, aborting: {}",
                        listener.name(),
                        severity,
                        err
                    );
                    return Err(BroadcastError::Aborted {
                        severity,
                        listener: listener.name().to_string(),
                        source: err,
                    });
                }
                BroadcastPolicy::Continue => {
                    warn!(
                        "Listener '{}' failed during {} broadcast: {}",
                        listener.name(),
                        severity,
                        err
                    );
                    failures.push(ListenerFailure {
                        listener: listener.name().to_string(),
                        error: err,
                    });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(BroadcastError::Partial { severity, failures })
        }
    }

    // Drops handles whose listener has already been freed by its owner.
    fn prune(&mut self) {
        self.listeners.retain(|weak| weak.strong_count() > 0);
    }
}
