//! Trajectory evaluation pipeline.
//!
//! # Components
//!
//! - [`TemporalAligner`]: match a reference sample to its logged counterpart
//! - [`compute_errors`]: per-sample position and orientation error
//! - [`ErrorStatistics`]: mean, deviation and z-score outlier classification
//! - [`EvaluationReport`]: datasets for the report writers
//!
//! Data flows strictly in that order:
//!
//! ```text
//! reference ─┐
//!            ├─► compute_errors ─► ErrorStatistics ─► EvaluationReport
//! logged ────┘   (TemporalAligner)
//! ```
//!
//! # Example
//!
//! ```
//! use odom_eval::core::types::{PoseSample, Trajectory};
//! use odom_eval::evaluation::{evaluate, EvaluationConfig};
//!
//! let reference = Trajectory::new(vec![
//!     PoseSample::new(0.0, 0.0, 0.0, 0.0),
//!     PoseSample::new(1.0, 1.0, 0.0, 0.0),
//! ])?;
//! let logged = Trajectory::new(vec![
//!     PoseSample::new(0.0, 0.0, 0.1, 0.0),
//!     PoseSample::new(1.0, 1.0, 0.1, 0.0),
//! ])?;
//!
//! let report = evaluate(&reference, &logged, &EvaluationConfig::default())?;
//! assert_eq!(report.summary.total_entries, 2);
//! # Ok::<(), odom_eval::EvalError>(())
//! ```

mod alignment;
mod error_series;
mod report;
mod statistics;

pub use alignment::{AlignmentConfig, TemporalAligner};
pub use error_series::{ErrorSample, ErrorSeries, UnmatchedSample, compute_errors};
pub use report::{
    EvaluationReport, GraphPoint, OutlierEntry, ReportEntry, ReportSummary, graph_series,
};
pub use statistics::{ErrorStatistics, OutlierKind, OutlierRecord, Stats, StatisticsConfig};

use serde::{Deserialize, Serialize};

use crate::core::types::Trajectory;
use crate::error::Result;

/// Tunables for a full evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub alignment: AlignmentConfig,
    pub statistics: StatisticsConfig,
}

/// Run alignment, error computation, statistics and report assembly.
pub fn evaluate(
    reference: &Trajectory,
    logged: &Trajectory,
    config: &EvaluationConfig,
) -> Result<EvaluationReport> {
    let aligner = TemporalAligner::new(config.alignment);
    let series = compute_errors(reference, logged, &aligner);
    let stats = ErrorStatistics::compute(&series.samples, &config.statistics)?;

    log::info!(
        "Found {} outliers ({} position, {} orientation, {} both)",
        stats.outliers.len(),
        stats.count_of(OutlierKind::PositionOnly),
        stats.count_of(OutlierKind::OrientationOnly),
        stats.count_of(OutlierKind::Both)
    );

    Ok(EvaluationReport::assemble(&series, &stats))
}
