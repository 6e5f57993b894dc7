//! Core types for swing-point market structure analysis.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries)
//! - Swing points, market structure verdicts and trading signals
//! - The error taxonomy shared by the analysis, data and config crates

pub mod error;
pub mod types;

pub use error::{AnalysisError, DataError, InputError, SmcError};
pub use types::*;
