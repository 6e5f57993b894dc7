//! Market structure verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prevailing short-term trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    /// Higher high and higher low
    Bullish,
    /// Lower high and lower low
    Bearish,
    #[default]
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Bullish => "BULLISH",
            Trend::Bearish => "BEARISH",
            Trend::Neutral => "NEUTRAL",
        };
        write!(f, "{}", s)
    }
}

/// Structure verdict derived from the most recent swing points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarketStructure {
    pub trend: Trend,
    /// Break of structure: the latest swing pair continued the prior move
    pub bos_detected: bool,
    /// Change of character. Never computed; always false.
    pub choch_detected: bool,
}

impl MarketStructure {
    /// The conservative verdict returned for insufficient or malformed data.
    pub const fn neutral() -> Self {
        Self {
            trend: Trend::Neutral,
            bos_detected: false,
            choch_detected: false,
        }
    }

    /// A directional verdict with a confirmed break of structure.
    pub const fn with_break(trend: Trend) -> Self {
        Self {
            trend,
            bos_detected: true,
            choch_detected: false,
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.trend == Trend::Neutral
    }
}
