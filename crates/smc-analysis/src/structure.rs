//! Market structure classification.
//!
//! Only the latest pair of swing highs and the latest pair of swing lows are
//! compared. Higher high plus higher low is a bullish break of structure;
//! lower high plus lower low is a bearish one; anything else is neutral.

use smc_core::{AnalysisError, BarSeries, MarketStructure, SwingPoint, Trend};
use tracing::{debug, error};

use crate::swing::SwingPointDetector;

/// Infers trend direction and break of structure from recent swing points.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketStructureClassifier {
    detector: SwingPointDetector,
}

impl MarketStructureClassifier {
    pub fn new(detector: SwingPointDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &SwingPointDetector {
        &self.detector
    }

    /// Classify the series, resolving any failure to the neutral verdict.
    pub fn identify_market_structure(&self, series: &BarSeries) -> MarketStructure {
        match self.try_identify(series) {
            Ok(structure) => structure,
            Err(e) => {
                error!(symbol = %series.symbol, error = %e, "market structure analysis failed");
                MarketStructure::neutral()
            }
        }
    }

    /// Classify the series, surfacing input and computation errors.
    pub fn try_identify(&self, series: &BarSeries) -> Result<MarketStructure, AnalysisError> {
        let (highs, lows) = self.detector.find_swings(series)?;
        Ok(Self::classify(&highs, &lows))
    }

    /// Compare the two most recent swing highs and swing lows.
    ///
    /// Both slices must be in ascending position order.
    pub fn classify(highs: &[SwingPoint], lows: &[SwingPoint]) -> MarketStructure {
        let (Some((h0, h1)), Some((l0, l1))) = (last_pair(highs), last_pair(lows)) else {
            debug!(
                highs = highs.len(),
                lows = lows.len(),
                "not enough swing points for structure"
            );
            return MarketStructure::neutral();
        };

        let structure = if h1.price > h0.price && l1.price > l0.price {
            MarketStructure::with_break(Trend::Bullish)
        } else if h1.price < h0.price && l1.price < l0.price {
            MarketStructure::with_break(Trend::Bearish)
        } else {
            MarketStructure::neutral()
        };

        debug!(trend = %structure.trend, bos = structure.bos_detected, "structure classified");
        structure
    }
}

fn last_pair(points: &[SwingPoint]) -> Option<(&SwingPoint, &SwingPoint)> {
    match points {
        [.., earlier, later] => Some((earlier, later)),
        _ => None,
    }
}
