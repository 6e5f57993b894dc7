//! Swing-point market structure analysis.
//!
//! Three stages, each consuming only the previous one's output:
//! - [`SwingPointDetector`] locates strict local extrema with a symmetric window
//! - [`MarketStructureClassifier`] compares the two most recent swing highs and lows
//! - [`SignalScorer`] turns the structure verdict into an optional weighted signal
//!
//! [`SmcAnalyzer`] bundles the three behind one configuration.

pub mod analyzer;
pub mod scoring;
pub mod structure;
pub mod swing;

pub use analyzer::{Analysis, AnalyzerConfig, SmcAnalyzer};
pub use scoring::{ScoringWeights, SignalScorer};
pub use structure::MarketStructureClassifier;
pub use swing::{SwingPointDetector, DEFAULT_SWING_LENGTH};
