//! Signal scoring.
//!
//! A structure verdict is converted into two additive tallies:
//!
//! | Condition                | Effect                     |
//! |--------------------------|----------------------------|
//! | trend is bullish         | buy += `trend_weight`      |
//! | trend is bearish         | sell += `trend_weight`     |
//! | bos and trend bullish    | buy += `bos_weight`        |
//! | bos and trend bearish    | sell += `bos_weight`       |
//!
//! The strictly larger side wins if it reaches `min_score`. Confidence is
//! that side's share of the total, capped at `max_confidence` and rounded to
//! one decimal place (ties to even, on the exact binary value).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smc_core::{AnalysisError, MarketStructure, ScoreTally, Signal, SignalType, Trend};
use tracing::error;

/// Hard ceiling on any emitted confidence.
pub const CONFIDENCE_CEILING: f64 = 95.0;

/// Weights and thresholds for the scoring table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points for the trend direction
    pub trend_weight: u32,
    /// Points for a break of structure in the trend direction
    pub bos_weight: u32,
    /// Minimum score the winning side needs
    pub min_score: u32,
    /// Confidence cap (percent)
    pub max_confidence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            trend_weight: 3,
            bos_weight: 4,
            min_score: 3,
            max_confidence: CONFIDENCE_CEILING,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.min_score == 0 {
            return Err(AnalysisError::InvalidParameter(
                "min_score must be greater than 0".into(),
            ));
        }
        if !(0.0..=CONFIDENCE_CEILING).contains(&self.max_confidence) {
            return Err(AnalysisError::InvalidParameter(format!(
                "max_confidence must be within [0, {}], got {}",
                CONFIDENCE_CEILING, self.max_confidence
            )));
        }
        Ok(())
    }
}

/// Converts a market structure verdict into an optional signal.
#[derive(Debug, Clone, Default)]
pub struct SignalScorer {
    weights: ScoringWeights,
}

impl SignalScorer {
    pub fn new(weights: ScoringWeights) -> Result<Self, AnalysisError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Score the structure, resolving any failure to no signal.
    pub fn get_smc_signal(&self, structure: &MarketStructure) -> Option<Signal> {
        match self.decide(self.tally(structure)) {
            Ok(signal) => signal,
            Err(e) => {
                error!(error = %e, "signal scoring failed");
                None
            }
        }
    }

    /// Apply the scoring table.
    pub fn tally(&self, structure: &MarketStructure) -> ScoreTally {
        let mut tally = ScoreTally::default();

        match structure.trend {
            Trend::Bullish => tally.buy = tally.buy.saturating_add(self.weights.trend_weight),
            Trend::Bearish => tally.sell = tally.sell.saturating_add(self.weights.trend_weight),
            Trend::Neutral => {}
        }

        if structure.bos_detected {
            match structure.trend {
                Trend::Bullish => tally.buy = tally.buy.saturating_add(self.weights.bos_weight),
                Trend::Bearish => tally.sell = tally.sell.saturating_add(self.weights.bos_weight),
                Trend::Neutral => {}
            }
        }

        tally
    }

    /// Turn a tally into a signal. Ties and sub-floor winners yield `None`.
    pub fn decide(&self, tally: ScoreTally) -> Result<Option<Signal>, AnalysisError> {
        let total = tally.total();
        if total == 0 {
            return Ok(None);
        }

        let (signal_type, score) = if tally.buy > tally.sell && tally.buy >= self.weights.min_score
        {
            (SignalType::Buy, tally.buy)
        } else if tally.sell > tally.buy && tally.sell >= self.weights.min_score {
            (SignalType::Sell, tally.sell)
        } else {
            return Ok(None);
        };

        let share = f64::from(score) / f64::from(total) * 100.0;
        let confidence = round_to_tenth(share.min(self.weights.max_confidence)).ok_or_else(|| {
            AnalysisError::Computation(format!("unrepresentable confidence from {:?}", tally))
        })?;

        Ok(Some(Signal {
            signal_type,
            confidence,
        }))
    }
}

fn round_to_tenth(value: f64) -> Option<f64> {
    Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
        .to_f64()
}
