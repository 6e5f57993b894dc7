//! Swing point types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which extremum a swing point marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwingKind {
    High,
    Low,
}

impl fmt::Display for SwingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwingKind::High => write!(f, "HIGH"),
            SwingKind::Low => write!(f, "LOW"),
        }
    }
}

/// A local price extremum, strictly more extreme than every other bar in
/// its window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingPoint {
    /// Position of the bar in its series
    pub position: usize,
    /// The bar's high (for swing highs) or low (for swing lows)
    pub price: f64,
    /// Unix timestamp in milliseconds of the bar
    pub timestamp: i64,
    pub kind: SwingKind,
}

impl SwingPoint {
    pub fn high(position: usize, price: f64, timestamp: i64) -> Self {
        Self {
            position,
            price,
            timestamp,
            kind: SwingKind::High,
        }
    }

    pub fn low(position: usize, price: f64, timestamp: i64) -> Self {
        Self {
            position,
            price,
            timestamp,
            kind: SwingKind::Low,
        }
    }
}
