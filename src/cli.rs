//! Command-Line Interface (CLI) argument parsing.
//!
//! Flags are parsed with `clap` and then merged on top of the configuration
//! file and environment variables. Only flags that were actually given
//! override the lower layers.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Broadcasts a warning, an error and a fatal error to console and log file listeners.
#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file for error broadcasts.
    #[arg(long, value_name = "FILE")]
    pub error_log: Option<PathBuf>,

    /// Log file for fatal broadcasts.
    #[arg(long, value_name = "FILE")]
    pub fatal_log: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Keep notifying the remaining listeners when one of them fails.
    #[arg(long)]
    pub continue_on_error: bool,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(path) = &self.error_log {
            dict.insert(
                "error_log".into(),
                Value::from(path.to_string_lossy().into_owned()),
            );
        }

        if let Some(path) = &self.fatal_log {
            dict.insert(
                "fatal_log".into(),
                Value::from(path.to_string_lossy().into_owned()),
            );
        }

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        // Absent means "no opinion", so a config file can still pick Continue.
        if self.continue_on_error {
            dict.insert("policy".into(), Value::from("Continue"));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
