//! Trading signal types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalType {
    Buy,
    Sell,
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalType::Buy => write!(f, "BUY"),
            SignalType::Sell => write!(f, "SELL"),
        }
    }
}

/// A directional signal with a bounded confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_type: SignalType,
    /// Percentage in `[0, 95]`, rounded to one decimal place
    pub confidence: f64,
}

/// Additive buy/sell evidence accumulated from a structure verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScoreTally {
    pub buy: u32,
    pub sell: u32,
}

impl ScoreTally {
    pub fn new(buy: u32, sell: u32) -> Self {
        Self { buy, sell }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.buy.saturating_add(self.sell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_json_shape() {
        let signal = Signal {
            signal_type: SignalType::Buy,
            confidence: 95.0,
        };
        let json = serde_json::to_value(signal).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "signal_type": "BUY", "confidence": 95.0 })
        );
    }

    #[test]
    fn test_tally_total() {
        assert_eq!(ScoreTally::new(7, 0).total(), 7);
        assert_eq!(ScoreTally::default().total(), 0);
    }
}
