//! Analyze command implementation.

use anyhow::{Context, Result};
use smc_analysis::{Analysis, SmcAnalyzer};
use smc_config::AppConfig;
use smc_core::BarSeries;
use tracing::info;

use super::load_series;
use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config: &AppConfig) -> Result<()> {
    let analyzer = SmcAnalyzer::new(config.analyzer_config(args.swing_length))
        .context("Invalid analyzer configuration")?;

    let series = load_series(&args.data, args.symbol.as_deref()).await?;
    info!(
        "Analyzing {} bars of {} (swing length {})",
        series.len(),
        series.symbol,
        analyzer.detector().swing_length()
    );

    let analysis = analyzer.analyze(&series);

    match args.output {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "symbol": &series.symbol,
                "bars": series.len(),
                "swing_length": analyzer.detector().swing_length(),
                "analysis": analysis,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                summary(&series, analyzer.detector().swing_length(), &analysis)
            );
        }
    }

    Ok(())
}

fn summary(series: &BarSeries, swing_length: usize, analysis: &Analysis) -> String {
    let signal = match analysis.signal {
        Some(s) => format!("{} ({:.1}% confidence)", s.signal_type, s.confidence),
        None => "none".to_string(),
    };
    let yes_no = |b: bool| if b { "yes" } else { "no" };

    format!(
        "Market Structure: {symbol}\n\
         ═══════════════════════════════════════\n\
         Bars:           {bars}\n\
         Swing length:   {swing_length}\n\
         Swing highs:    {highs}\n\
         Swing lows:     {lows}\n\
         Trend:          {trend}\n\
         BOS detected:   {bos}\n\
         CHoCH detected: {choch} (not computed)\n\
         Scores:         buy {buy} / sell {sell}\n\
         Signal:         {signal}",
        symbol = series.symbol,
        bars = series.len(),
        highs = analysis.swing_highs.len(),
        lows = analysis.swing_lows.len(),
        trend = analysis.structure.trend,
        bos = yes_no(analysis.structure.bos_detected),
        choch = yes_no(analysis.structure.choch_detected),
        buy = analysis.scores.buy,
        sell = analysis.scores.sell,
    )
}
