//! Price series loading.

mod csv_source;

pub use csv_source::CsvDataSource;

use smc_core::error::DataError;
use smc_core::types::BarSeries;

/// Load a validated bar series from a CSV file.
pub async fn load_csv(path: &str, symbol: &str) -> Result<BarSeries, DataError> {
    let source = CsvDataSource::new(path)?;
    source.load_series(symbol).await
}
