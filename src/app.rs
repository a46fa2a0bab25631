//! The application wiring, decoupled from the entry point.

use crate::{
    config::Config,
    core::Listener,
    driver::Driver,
    listeners::{CombinedAppender, ConsolePrinter, FileAppender},
    subject::BroadcastError,
};
use log::{debug, info};
use std::sync::Arc;

/// The three stock listeners, in registration order.
pub struct Listeners {
    pub console: Arc<dyn Listener>,
    pub errors: Arc<dyn Listener>,
    pub fatal: Arc<dyn Listener>,
}

impl Listeners {
    pub fn from_config(config: &Config) -> Self {
        Self {
            console: Arc::new(ConsolePrinter::new()),
            errors: Arc::new(FileAppender::new(&config.error_log)),
            fatal: Arc::new(CombinedAppender::new(&config.fatal_log)),
        }
    }

    fn all(&self) -> [&Arc<dyn Listener>; 3] {
        [&self.console, &self.errors, &self.fatal]
    }
}

/// Registers `listeners` with a fresh driver, runs the job once and
/// unregisters them again, whether or not the job succeeded.
pub fn run_with(config: &Config, listeners: &Listeners) -> Result<(), BroadcastError> {
    let mut driver = Driver::with_policy(config.policy);
    for listener in listeners.all() {
        driver.register(listener);
    }
    debug!("Registered {} listener(s)", driver.subject().len());

    let result = driver.job();

    for listener in listeners.all() {
        driver.unregister(listener);
    }
    if result.is_ok() {
        info!("Job completed.");
    }
    result
}

/// Runs the job with the stock listeners built from `config`.
pub fn run(config: &Config) -> Result<(), BroadcastError> {
    run_with(config, &Listeners::from_config(config))
}
