//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// One time step of price data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp).unwrap_or_default()
    }
}

/// Ordered, position-indexed price history with a monotonic time key.
///
/// Position 0 is the oldest bar. Lookups by timestamp use a binary search,
/// so they are only meaningful on a series that passes [`BarSeries::validate`].
#[derive(Debug, Clone, Default)]
pub struct BarSeries {
    /// Symbol identifier
    pub symbol: String,
    bars: Vec<Bar>,
}

impl BarSeries {
    /// Create a new empty bar series.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Build a series from bars that are already in time order.
    pub fn from_bars(symbol: impl Into<String>, bars: impl IntoIterator<Item = Bar>) -> Self {
        let mut series = Self::new(symbol);
        series.extend(bars);
        series
    }

    /// Append a bar after the current last one.
    pub fn push(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    /// Append multiple bars.
    pub fn extend(&mut self, bars: impl IntoIterator<Item = Bar>) {
        self.bars.extend(bars);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get a bar by position (0 = oldest).
    pub fn get(&self, position: usize) -> Option<&Bar> {
        self.bars.get(position)
    }

    /// Find the position of the bar stamped with `timestamp`.
    pub fn position_of(&self, timestamp: i64) -> Option<usize> {
        self.bars
            .binary_search_by_key(&timestamp, |b| b.timestamp)
            .ok()
    }

    /// Get the bar stamped with `timestamp`.
    pub fn get_at(&self, timestamp: i64) -> Option<&Bar> {
        self.position_of(timestamp).and_then(|i| self.bars.get(i))
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Extract timestamps as a vector.
    pub fn timestamps(&self) -> Vec<i64> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    /// Check the series against the analysis input contract.
    ///
    /// Every high and low must be finite with `high >= low`, and timestamps
    /// must be strictly increasing.
    pub fn validate(&self) -> Result<(), InputError> {
        let mut previous: Option<i64> = None;

        for (position, bar) in self.bars.iter().enumerate() {
            if !bar.high.is_finite() {
                return Err(InputError::NonFinitePrice {
                    position,
                    field: "high",
                });
            }
            if !bar.low.is_finite() {
                return Err(InputError::NonFinitePrice {
                    position,
                    field: "low",
                });
            }
            if bar.high < bar.low {
                return Err(InputError::InvertedRange {
                    position,
                    high: bar.high,
                    low: bar.low,
                });
            }
            if let Some(prev) = previous {
                if bar.timestamp <= prev {
                    return Err(InputError::OutOfOrder {
                        position,
                        previous: prev,
                        current: bar.timestamp,
                    });
                }
            }
            previous = Some(bar.timestamp);
        }

        Ok(())
    }
}

impl FromIterator<Bar> for BarSeries {
    fn from_iter<T: IntoIterator<Item = Bar>>(iter: T) -> Self {
        Self {
            symbol: String::new(),
            bars: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64, high: f64, low: f64) -> Bar {
        Bar::new(ts, low, high, low, high, 1000.0)
    }

    #[test]
    fn test_bar_datetime() {
        let bar = Bar::new(86_400_000, 100.0, 110.0, 95.0, 105.0, 1000000.0);

        assert_eq!(bar.datetime().to_rfc3339(), "1970-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_time_key_lookup() {
        let series = BarSeries::from_bars(
            "EURUSD",
            vec![bar(100, 1.0, 0.5), bar(200, 2.0, 1.5), bar(300, 3.0, 2.5)],
        );

        assert_eq!(series.position_of(200), Some(1));
        assert_eq!(series.position_of(250), None);
        assert_eq!(series.get_at(300).unwrap().high, 3.0);
        assert!(series.get_at(50).is_none());
    }

    #[test]
    fn test_extractions() {
        let series: BarSeries = vec![bar(1, 101.0, 99.0), bar(2, 102.0, 100.0)]
            .into_iter()
            .collect();

        assert_eq!(series.highs(), vec![101.0, 102.0]);
        assert_eq!(series.lows(), vec![99.0, 100.0]);
        assert_eq!(series.timestamps(), vec![1, 2]);
    }

    #[test]
    fn test_validate_accepts_well_formed_series() {
        let series = BarSeries::from_bars("X", vec![bar(1, 2.0, 1.0), bar(2, 2.0, 2.0)]);
        assert!(series.validate().is_ok());
        assert!(BarSeries::new("EMPTY").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let series = BarSeries::from_bars("X", vec![bar(1, 2.0, 1.0), bar(2, f64::NAN, 1.0)]);
        assert_eq!(
            series.validate(),
            Err(InputError::NonFinitePrice {
                position: 1,
                field: "high"
            })
        );

        let series = BarSeries::from_bars("X", vec![bar(1, 2.0, f64::INFINITY)]);
        assert!(matches!(
            series.validate(),
            Err(InputError::NonFinitePrice { field: "low", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let series = BarSeries::from_bars("X", vec![bar(1, 1.0, 2.0)]);
        assert!(matches!(
            series.validate(),
            Err(InputError::InvertedRange { position: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_or_decreasing_timestamps() {
        let series = BarSeries::from_bars("X", vec![bar(5, 2.0, 1.0), bar(5, 2.0, 1.0)]);
        assert_eq!(
            series.validate(),
            Err(InputError::OutOfOrder {
                position: 1,
                previous: 5,
                current: 5
            })
        );

        let series = BarSeries::from_bars("X", vec![bar(5, 2.0, 1.0), bar(4, 2.0, 1.0)]);
        assert!(series.validate().is_err());
    }
}
