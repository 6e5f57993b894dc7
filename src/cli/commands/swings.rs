//! Swings command implementation.

use anyhow::{Context, Result};
use smc_analysis::SwingPointDetector;
use smc_config::AppConfig;
use smc_core::{BarSeries, SwingPoint};

use super::load_series;
use crate::cli::{OutputFormat, SwingsArgs};

pub async fn run(args: SwingsArgs, config: &AppConfig) -> Result<()> {
    let swing_length = args.swing_length.unwrap_or(config.analysis.swing_length);
    let detector = SwingPointDetector::new(swing_length).context("Invalid swing length")?;

    let series = load_series(&args.data, None).await?;
    let highs = detector.find_swing_highs(&series)?;
    let lows = detector.find_swing_lows(&series)?;

    match args.output {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "symbol": &series.symbol,
                "swing_length": swing_length,
                "swing_highs": highs,
                "swing_lows": lows,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if series.len() < detector.min_bars() {
                println!(
                    "{} bars is fewer than the {} needed for a swing length of {}",
                    series.len(),
                    detector.min_bars(),
                    swing_length
                );
            }
            print_swings("Swing highs", &series, &highs);
            print_swings("Swing lows", &series, &lows);
        }
    }

    Ok(())
}

fn print_swings(title: &str, series: &BarSeries, swings: &[SwingPoint]) {
    println!("{} ({})", title, swings.len());
    println!("───────────────────────────────────────────────────────");
    for swing in swings {
        let time = series
            .get(swing.position)
            .map(|b| b.datetime().to_rfc3339())
            .unwrap_or_default();
        println!("  #{:<6} {:<28} {:.4}", swing.position, time, swing.price);
    }
    println!();
}
