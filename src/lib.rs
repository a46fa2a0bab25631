/// FaultWatch - severity-classified notifications for registered listeners
///
/// A subject keeps an ordered registry of listeners and broadcasts warning,
/// error and fatal messages to them. Stock listeners print to the console and
/// append to flat log files.
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod listeners;
pub mod subject;

// Re-export core types for convenience
pub use crate::core::*;
pub use driver::Driver;
pub use subject::{BroadcastError, BroadcastPolicy, ListenerFailure, Subject};
