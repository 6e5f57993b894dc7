//! CLI command implementations.

pub mod analyze;
pub mod swings;
pub mod validate;

use anyhow::{Context, Result};
use smc_core::BarSeries;
use std::path::Path;

/// Load a price series, labelling it with `symbol` or the file stem.
pub(crate) async fn load_series(path: &Path, symbol: Option<&str>) -> Result<BarSeries> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Data path {:?} is not valid UTF-8", path))?;
    let symbol = symbol
        .map(str::to_string)
        .or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "DATA".to_string());

    smc_data::load_csv(path_str, &symbol)
        .await
        .with_context(|| format!("Failed to load price data from {:?}", path))
}
