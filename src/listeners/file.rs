//! Listeners that append to flat log files.
//!
//! A file is opened in append mode (created if absent), written and closed
//! within a single hook call. No handle is held between calls.

use crate::core::{Listener, ListenerError};
use crate::listeners::console::Console;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

fn open_append(path: &Path) -> Result<File, ListenerError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ListenerError::Unopenable {
            path: path.to_path_buf(),
            source,
        })
}

fn append_line(mut file: File, path: &Path, line: &str) -> Result<(), ListenerError> {
    writeln!(file, "{}", line).map_err(|source| ListenerError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends every error to a log file.
pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    /// The path is stored as given and only checked when an error arrives.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Listener for FileAppender {
    fn name(&self) -> &str {
        "file_appender"
    }

    fn on_error(&self, message: &str) -> Result<(), ListenerError> {
        let file = open_append(&self.path)?;
        append_line(file, &self.path, &format!("Error to log file: {}", message))
    }
}

/// Reports every fatal error on the console and appends it to a log file.
pub struct CombinedAppender {
    path: PathBuf,
    console: Console,
}

impl CombinedAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_console(path, Console::stdout())
    }

    pub fn with_console(path: impl Into<PathBuf>, console: Console) -> Self {
        Self {
            path: path.into(),
            console,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Listener for CombinedAppender {
    fn name(&self) -> &str {
        "combined_appender"
    }

    fn on_fatal(&self, message: &str) -> Result<(), ListenerError> {
        // Open before printing: an unopenable file means no output at all.
        let file = open_append(&self.path)?;
        self.console.line(&format!("Fatal error to console: {}", message));
        append_line(
            file,
            &self.path,
            &format!("Fatal error to log file: {}", message),
        )
    }
}
