//! End-to-end analyzer: series to swing points to structure to signal.

use serde::{Deserialize, Serialize};
use smc_core::{AnalysisError, BarSeries, MarketStructure, ScoreTally, Signal, SwingPoint};
use tracing::{error, info};

use crate::scoring::{ScoringWeights, SignalScorer};
use crate::structure::MarketStructureClassifier;
use crate::swing::{SwingPointDetector, DEFAULT_SWING_LENGTH};

/// Analyzer parameters, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Half-width of the swing detection window
    pub swing_length: usize,
    pub scoring: ScoringWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            swing_length: DEFAULT_SWING_LENGTH,
            scoring: ScoringWeights::default(),
        }
    }
}

/// Full result of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Analysis {
    pub swing_highs: Vec<SwingPoint>,
    pub swing_lows: Vec<SwingPoint>,
    pub structure: MarketStructure,
    pub scores: ScoreTally,
    pub signal: Option<Signal>,
}

/// Swing detection, structure classification and scoring behind one
/// configuration.
///
/// Holds no mutable state, so one analyzer can be shared across threads and
/// instruments.
#[derive(Debug, Clone, Default)]
pub struct SmcAnalyzer {
    classifier: MarketStructureClassifier,
    scorer: SignalScorer,
}

impl SmcAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let detector = SwingPointDetector::new(config.swing_length)?;
        Ok(Self {
            classifier: MarketStructureClassifier::new(detector),
            scorer: SignalScorer::new(config.scoring)?,
        })
    }

    pub fn detector(&self) -> &SwingPointDetector {
        self.classifier.detector()
    }

    pub fn identify_market_structure(&self, series: &BarSeries) -> MarketStructure {
        self.classifier.identify_market_structure(series)
    }

    /// Classify the series and score the verdict.
    pub fn signal_for(&self, series: &BarSeries) -> Option<Signal> {
        let structure = self.classifier.identify_market_structure(series);
        self.scorer.get_smc_signal(&structure)
    }

    /// Run every stage, resolving any failure to an empty neutral report.
    pub fn analyze(&self, series: &BarSeries) -> Analysis {
        match self.try_analyze(series) {
            Ok(analysis) => analysis,
            Err(e) => {
                error!(symbol = %series.symbol, error = %e, "analysis failed");
                Analysis::default()
            }
        }
    }

    /// Run every stage, surfacing the first failure.
    pub fn try_analyze(&self, series: &BarSeries) -> Result<Analysis, AnalysisError> {
        let (swing_highs, swing_lows) = self.classifier.detector().find_swings(series)?;

        let structure = MarketStructureClassifier::classify(&swing_highs, &swing_lows);
        let scores = self.scorer.tally(&structure);
        let signal = self.scorer.decide(scores)?;

        info!(
            symbol = %series.symbol,
            bars = series.len(),
            trend = %structure.trend,
            bos = structure.bos_detected,
            signal = ?signal.map(|s| s.signal_type),
            "analysis complete"
        );

        Ok(Analysis {
            swing_highs,
            swing_lows,
            structure,
            scores,
            signal,
        })
    }
}
