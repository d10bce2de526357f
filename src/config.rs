//! TOML configuration for the evaluation tool.
//!
//! ```toml
//! [alignment]
//! search_radius = 10
//!
//! [statistics]
//! z_score_threshold = 3.0
//!
//! [output]
//! directory = "."
//! write_csv = true
//! print_entries = true
//! ```
//!
//! Every section and key is optional; missing values take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EvalError, Result};
use crate::evaluation::{AlignmentConfig, EvaluationConfig, StatisticsConfig};

/// Config file names probed when no path is given.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["odom-eval.toml"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub alignment: AlignmentConfig,
    pub statistics: StatisticsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the CSV reports
    pub directory: PathBuf,
    /// Write `<stem>_error.csv` and `<stem>_error_graph_data.csv`
    pub write_csv: bool,
    /// Print the per-sample listing in the text report
    pub print_entries: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            write_csv: true,
            print_entries: true,
        }
    }
}

impl EvalConfig {
    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        basic_toml::from_str(contents).map_err(|e| EvalError::Config(e.to_string()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `odom-eval.toml`
    /// in the working directory is tried and the built-in defaults are used
    /// if it is missing or invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let contents = fs::read_to_string(path)
                .map_err(|e| EvalError::Config(format!("{}: {}", path.display(), e)))?;
            let config = Self::from_toml(&contents)?;
            config.validate()?;
            log::info!("Loaded config from {}", path.display());
            return Ok(config);
        }

        for candidate in DEFAULT_CONFIG_PATHS {
            let Ok(contents) = fs::read_to_string(candidate) else {
                continue;
            };
            match Self::from_toml(&contents).and_then(|c| c.validate().map(|()| c)) {
                Ok(config) => {
                    log::info!("Loaded config from {}", candidate);
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring {}: {}", candidate, e),
            }
        }

        Ok(Self::default())
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.statistics.z_score_threshold;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(EvalError::Config(format!(
                "z_score_threshold must be a positive number, got {}",
                threshold
            )));
        }
        Ok(())
    }

    /// Evaluation tunables for the pipeline.
    pub fn evaluation(&self) -> EvaluationConfig {
        EvaluationConfig {
            alignment: self.alignment,
            statistics: self.statistics,
        }
    }
}
