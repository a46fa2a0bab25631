//! Concrete listeners that turn broadcasts into console lines and log file
//! entries.
//!
//! Each listener handles exactly one severity channel and ignores the others.

pub mod console;
pub mod file;

pub use console::{Console, ConsolePrinter};
pub use file::{CombinedAppender, FileAppender};
