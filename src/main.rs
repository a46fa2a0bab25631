//! FaultWatch - runs one warning, error and fatal broadcast through the
//! stock console and log file listeners.

use anyhow::Result;
use clap::Parser;
use faultwatch::{app, cli::Cli, config::Config};
use log::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli).unwrap_or_else(|err| {
        // Manually initialize logger for this specific error
        env_logger::init();
        error!("Failed to load configuration: {}", err);
        std::process::exit(1);
    });

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("FaultWatch starting up...");
    info!("Error Log: {}", config.error_log.display());
    info!("Fatal Log: {}", config.fatal_log.display());
    info!("Broadcast Policy: {:?}", config.policy);

    app::run(&config)?;
    Ok(())
}
