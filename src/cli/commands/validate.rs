//! Validate configuration command.

use anyhow::Result;
use smc_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Log format: {}", config.logging.format);
    println!("Swing length: {}", config.analysis.swing_length);
    println!(
        "Scoring: trend {} / bos {} / floor {} / cap {}%",
        config.scoring.trend_weight,
        config.scoring.bos_weight,
        config.scoring.min_score,
        config.scoring.max_confidence
    );

    Ok(())
}
