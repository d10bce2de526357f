//! Report datasets assembled from the error series and its statistics.
//!
//! No new computation happens here beyond the time shift of the graph
//! series; the datasets are shaped for the writers in [`crate::io::report_writer`].

use serde::Serialize;

use super::error_series::{ErrorSample, ErrorSeries};
use super::statistics::{ErrorStatistics, OutlierKind};

/// One row of the full per-sample listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportEntry {
    pub time: f64,
    pub position_error: f64,
    pub orientation_error: f64,
}

/// One row of the outlier listing.
///
/// Only the dimension(s) that exceeded the threshold carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlierEntry {
    pub time: f64,
    pub position_error: Option<f64>,
    pub orientation_error: Option<f64>,
    pub kind: OutlierKind,
}

/// One point of the plotting series, time relative to the first error sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphPoint {
    pub elapsed: f64,
    pub position_error: f64,
    pub orientation_error: f64,
}

/// Headline numbers of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Matched reference samples
    pub total_entries: usize,
    /// Reference samples with no counterpart in the log
    pub entries_not_found: usize,
    /// Number of outlier records
    pub outlier_count: usize,
    pub position_mean: f64,
    pub orientation_mean: f64,
    pub position_std_dev: f64,
    pub orientation_std_dev: f64,
    pub position_mean_inliers: f64,
    pub orientation_mean_inliers: f64,
}

/// All report datasets for one evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub summary: ReportSummary,
    pub entries: Vec<ReportEntry>,
    pub outliers: Vec<OutlierEntry>,
    pub graph: Vec<GraphPoint>,
}

impl EvaluationReport {
    /// Shape the error series and statistics into report datasets.
    pub fn assemble(series: &ErrorSeries, stats: &ErrorStatistics) -> Self {
        let samples = &series.samples;

        let entries = samples
            .iter()
            .map(|e| ReportEntry {
                time: e.time,
                position_error: e.position_error,
                orientation_error: e.orientation_error,
            })
            .collect();

        let outliers = stats
            .outliers
            .iter()
            .filter_map(|record| {
                samples
                    .get(record.index)
                    .map(|sample| outlier_entry(sample, record.kind))
            })
            .collect();

        let summary = ReportSummary {
            total_entries: samples.len(),
            entries_not_found: series.unmatched_count(),
            outlier_count: stats.outliers.len(),
            position_mean: stats.position.mean,
            orientation_mean: stats.orientation.mean,
            position_std_dev: stats.position.std_dev,
            orientation_std_dev: stats.orientation.std_dev,
            position_mean_inliers: stats.position_mean_inliers,
            orientation_mean_inliers: stats.orientation_mean_inliers,
        };

        Self {
            summary,
            entries,
            outliers,
            graph: graph_series(samples),
        }
    }
}

fn outlier_entry(sample: &ErrorSample, kind: OutlierKind) -> OutlierEntry {
    OutlierEntry {
        time: sample.time,
        position_error: kind.position_is_outlier().then_some(sample.position_error),
        orientation_error: kind.orientation_is_outlier().then_some(sample.orientation_error),
        kind,
    }
}

/// Time-shift the error series so it starts at zero.
pub fn graph_series(samples: &[ErrorSample]) -> Vec<GraphPoint> {
    let Some(start) = samples.first().map(|e| e.time) else {
        return Vec::new();
    };

    samples
        .iter()
        .map(|e| GraphPoint {
            elapsed: e.time - start,
            position_error: e.position_error,
            orientation_error: e.orientation_error,
        })
        .collect()
}
