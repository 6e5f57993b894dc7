//! Configuration structures.

use serde::{Deserialize, Serialize};
use smc_analysis::{AnalyzerConfig, ScoringWeights, SmcAnalyzer, DEFAULT_SWING_LENGTH};
use smc_core::SmcError;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub scoring: ScoringWeights,
}

impl AppConfig {
    /// Analyzer parameters, optionally overriding the swing window.
    pub fn analyzer_config(&self, swing_length: Option<usize>) -> AnalyzerConfig {
        AnalyzerConfig {
            swing_length: swing_length.unwrap_or(self.analysis.swing_length),
            scoring: self.scoring.clone(),
        }
    }

    /// Check that the analyzer can be built from this configuration.
    pub fn validate(&self) -> Result<(), SmcError> {
        SmcAnalyzer::new(self.analyzer_config(None))?;
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(SmcError::Config(format!(
                "Unknown logging format '{}', expected 'pretty' or 'json'",
                other
            ))),
        }
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "smc-analyzer".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Optional log file; written in addition to stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Swing detection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub swing_length: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            swing_length: DEFAULT_SWING_LENGTH,
        }
    }
}
