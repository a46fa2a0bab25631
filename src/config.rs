//! Configuration management for FaultWatch
//!
//! Settings are layered with `figment`: built-in defaults, an optional TOML
//! file, `FAULTWATCH_` environment variables and finally command-line flags.
//! The defaults reproduce the stock wiring, so running without any of them
//! writes to `errors.log` and `fatal_errors.log` in the working directory.

use crate::cli::Cli;
use crate::subject::BroadcastPolicy;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// Log file the error listener appends to.
    pub error_log: PathBuf,
    /// Log file the fatal listener appends to.
    pub fatal_log: PathBuf,
    /// How a broadcast reacts to a failing listener.
    pub policy: BroadcastPolicy,
}

impl Config {
    /// Loads the configuration, letting each layer override the previous one.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = &cli.config {
            figment = figment.merge(Toml::file(path));
        }
        let config = figment
            // e.g. FAULTWATCH_ERROR_LOG=/var/log/faultwatch/errors.log
            .merge(Env::prefixed("FAULTWATCH_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            error_log: PathBuf::from("errors.log"),
            fatal_log: PathBuf::from("fatal_errors.log"),
            policy: BroadcastPolicy::Abort,
        }
    }
}
