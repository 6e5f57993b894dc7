//! Swing point detection.
//!
//! A bar at position `i` is a swing high when its high is strictly greater
//! than every other high in `[i - swing_length, i + swing_length]`, and a
//! swing low when its low is strictly lower than every other low in that
//! window. Ties disqualify every tied bar.

use smc_core::{AnalysisError, BarSeries, SwingKind, SwingPoint};
use tracing::debug;

/// Half-width of the comparison window used when none is configured.
pub const DEFAULT_SWING_LENGTH: usize = 5;

/// Locates local extrema using a fixed symmetric lookback/lookahead window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwingPointDetector {
    swing_length: usize,
}

impl SwingPointDetector {
    /// Create a detector with the given half-window.
    pub fn new(swing_length: usize) -> Result<Self, AnalysisError> {
        if swing_length == 0 {
            return Err(AnalysisError::InvalidParameter(
                "swing_length must be greater than 0".into(),
            ));
        }
        if swing_length > (usize::MAX - 1) / 2 {
            return Err(AnalysisError::InvalidParameter(format!(
                "swing_length {} is too large for a window of 2 * swing_length + 1 bars",
                swing_length
            )));
        }
        Ok(Self { swing_length })
    }

    pub fn swing_length(&self) -> usize {
        self.swing_length
    }

    /// Minimum series length that can contain a swing point.
    pub fn min_bars(&self) -> usize {
        self.swing_length.saturating_mul(2).saturating_add(1)
    }

    /// Find swing highs in ascending position order.
    pub fn find_swing_highs(&self, series: &BarSeries) -> Result<Vec<SwingPoint>, AnalysisError> {
        series.validate()?;
        Ok(self.scan(series, &series.highs(), &series.timestamps(), SwingKind::High))
    }

    /// Find swing lows in ascending position order.
    pub fn find_swing_lows(&self, series: &BarSeries) -> Result<Vec<SwingPoint>, AnalysisError> {
        series.validate()?;
        Ok(self.scan(series, &series.lows(), &series.timestamps(), SwingKind::Low))
    }

    /// Find swing highs and swing lows, validating the series once.
    pub fn find_swings(
        &self,
        series: &BarSeries,
    ) -> Result<(Vec<SwingPoint>, Vec<SwingPoint>), AnalysisError> {
        series.validate()?;
        let timestamps = series.timestamps();
        let highs = self.scan(series, &series.highs(), &timestamps, SwingKind::High);
        let lows = self.scan(series, &series.lows(), &timestamps, SwingKind::Low);
        Ok((highs, lows))
    }

    fn scan(
        &self,
        series: &BarSeries,
        values: &[f64],
        timestamps: &[i64],
        kind: SwingKind,
    ) -> Vec<SwingPoint> {
        let w = self.swing_length;
        if values.len() / 2 < w {
            return Vec::new();
        }

        let swings = (w..values.len() - w)
            .filter(|&i| is_strict_extremum(&values[i - w..=i + w], w, kind))
            .map(|i| SwingPoint {
                position: i,
                price: values[i],
                timestamp: timestamps[i],
                kind,
            })
            .collect::<Vec<_>>();

        debug!(symbol = %series.symbol, %kind, count = swings.len(), "swings detected");
        swings
    }
}

impl Default for SwingPointDetector {
    fn default() -> Self {
        Self {
            swing_length: DEFAULT_SWING_LENGTH,
        }
    }
}

/// Whether `window[center]` beats every other value in the window.
#[inline]
fn is_strict_extremum(window: &[f64], center: usize, kind: SwingKind) -> bool {
    let candidate = window[center];
    window.iter().enumerate().all(|(j, &other)| {
        j == center
            || match kind {
                SwingKind::High => other < candidate,
                SwingKind::Low => other > candidate,
            }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{random_walk, series_from_path, BULLISH_PATH};
    use smc_core::{Bar, InputError};

    #[test]
    fn test_rejects_zero_window() {
        assert!(SwingPointDetector::new(0).is_err());
        assert_eq!(SwingPointDetector::default().swing_length(), 5);
        assert_eq!(SwingPointDetector::default().min_bars(), 11);
    }

    #[test]
    fn test_rejects_window_that_overflows() {
        assert!(SwingPointDetector::new(usize::MAX / 2 + 1).is_err());
        assert!(SwingPointDetector::new(usize::MAX).is_err());
    }

    #[test]
    fn test_huge_window_yields_nothing() {
        let detector = SwingPointDetector::new(usize::MAX / 2).unwrap();
        let series = series_from_path(&[1.0; 11]);

        assert_eq!(detector.min_bars(), usize::MAX);
        assert!(detector.find_swing_highs(&series).unwrap().is_empty());
        assert!(detector.find_swing_lows(&series).unwrap().is_empty());
    }

    #[test]
    fn test_find_swings_matches_single_kind_scans() {
        let detector = SwingPointDetector::new(3).unwrap();
        for seed in 0..10 {
            let series = series_from_path(&random_walk(seed, 80));
            let (highs, lows) = detector.find_swings(&series).unwrap();

            assert_eq!(highs, detector.find_swing_highs(&series).unwrap());
            assert_eq!(lows, detector.find_swing_lows(&series).unwrap());
        }
    }

    #[test]
    fn test_short_series_yields_nothing() {
        let detector = SwingPointDetector::default();
        for len in 0..11 {
            let series = series_from_path(&random_walk(len as u64, len));
            assert!(detector.find_swing_highs(&series).unwrap().is_empty());
            assert!(detector.find_swing_lows(&series).unwrap().is_empty());
        }
    }

    #[test]
    fn test_single_peak_in_minimal_window() {
        let detector = SwingPointDetector::default();
        let path = [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let series = series_from_path(&path);

        let highs = detector.find_swing_highs(&series).unwrap();
        assert_eq!(highs.len(), 1);
        assert_eq!(highs[0].position, 5);
        assert_eq!(highs[0].price, 11.0);
        assert_eq!(highs[0].timestamp, 5 * 60_000);
        assert_eq!(highs[0].kind, SwingKind::High);

        assert!(detector.find_swing_lows(&series).unwrap().is_empty());
    }

    #[test]
    fn test_ties_disqualify_both_bars() {
        let detector = SwingPointDetector::new(1).unwrap();
        let series = series_from_path(&[1.0, 5.0, 5.0, 1.0, 0.0, 0.0, 3.0]);

        assert!(detector.find_swing_highs(&series).unwrap().is_empty());
        assert!(detector.find_swing_lows(&series).unwrap().is_empty());
    }

    #[test]
    fn test_flat_series_has_no_swings() {
        let detector = SwingPointDetector::new(2).unwrap();
        let series = series_from_path(&[7.0; 20]);

        assert!(detector.find_swing_highs(&series).unwrap().is_empty());
        assert!(detector.find_swing_lows(&series).unwrap().is_empty());
    }

    #[test]
    fn test_edges_are_never_candidates() {
        let detector = SwingPointDetector::new(2).unwrap();
        // Global max at the first bar and global min at the last
        let series = series_from_path(&[50.0, 10.0, 11.0, 12.0, 11.0, 10.0, 1.0]);

        let highs = detector.find_swing_highs(&series).unwrap();
        assert_eq!(highs.iter().map(|s| s.position).collect::<Vec<_>>(), vec![3]);
        assert!(detector.find_swing_lows(&series).unwrap().is_empty());
    }

    #[test]
    fn test_zigzag_positions() {
        let detector = SwingPointDetector::new(2).unwrap();
        let series = series_from_path(&BULLISH_PATH);

        let highs = detector.find_swing_highs(&series).unwrap();
        let lows = detector.find_swing_lows(&series).unwrap();

        assert_eq!(highs.iter().map(|s| s.position).collect::<Vec<_>>(), vec![5, 11]);
        assert_eq!(lows.iter().map(|s| s.position).collect::<Vec<_>>(), vec![2, 8]);
        assert!(lows.iter().all(|s| s.kind == SwingKind::Low));
    }

    #[test]
    fn test_every_swing_is_strict_within_its_window() {
        for swing_length in 1..=6 {
            let detector = SwingPointDetector::new(swing_length).unwrap();
            for seed in 0..20 {
                let series = series_from_path(&random_walk(seed, 120));
                let highs = series.highs();
                let lows = series.lows();

                let found_highs = detector.find_swing_highs(&series).unwrap();
                let found_lows = detector.find_swing_lows(&series).unwrap();

                for s in &found_highs {
                    let i = s.position;
                    assert!(i >= swing_length && i + swing_length < highs.len());
                    for j in i - swing_length..=i + swing_length {
                        assert!(j == i || highs[j] < highs[i]);
                    }
                }
                for s in &found_lows {
                    let i = s.position;
                    for j in i - swing_length..=i + swing_length {
                        assert!(j == i || lows[j] > lows[i]);
                    }
                }

                assert!(found_highs.windows(2).all(|w| w[0].position < w[1].position));
                assert!(found_lows.windows(2).all(|w| w[0].position < w[1].position));
            }
        }
    }

    #[test]
    fn test_malformed_series_is_an_input_error() {
        let detector = SwingPointDetector::new(1).unwrap();
        let mut series = series_from_path(&[1.0, 2.0, 1.0]);
        series.push(Bar::new(0, 1.0, 2.0, 1.0, 1.0, 0.0));

        let err = detector.find_swing_highs(&series).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Input(InputError::OutOfOrder {
                position: 3,
                previous: 120_000,
                current: 0
            })
        );
        assert!(detector.find_swing_lows(&series).is_err());
        assert!(detector.find_swings(&series).unwrap_err().is_input());
    }
}
