//! Core data types.

mod ohlcv;
mod signal;
mod structure;
mod swing;

pub use ohlcv::{Bar, BarSeries};
pub use signal::{ScoreTally, Signal, SignalType};
pub use structure::{MarketStructure, Trend};
pub use swing::{SwingKind, SwingPoint};
