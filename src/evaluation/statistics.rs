//! Aggregate error statistics and z-score outlier classification.
//!
//! # Degenerate cases
//!
//! - A standard deviation of zero (all errors identical, e.g. a single
//!   sample) defines every z-score of that dimension as 0, so no sample is
//!   flagged in that dimension.
//! - When every sample is an outlier in a dimension, the inlier-only mean
//!   of that dimension has no contributors and is reported as NaN.
//! - A non-finite orientation error (logged heading unavailable) is left out
//!   of the orientation statistics and its inlier mean, and never flagged as
//!   an orientation outlier. Its position error is analyzed as usual.

use serde::{Deserialize, Serialize};

use super::error_series::ErrorSample;
use crate::error::{EvalError, Result};

/// Configuration for outlier classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Significance level in standard deviations (strict `>` on |z|)
    pub z_score_threshold: f64,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            z_score_threshold: 3.0,
        }
    }
}

/// Summary statistics for one error dimension.
///
/// Standard deviation is the population form (divides by n).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of samples
    pub count: usize,
    /// Mean value
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl Stats {
    /// Compute statistics from a slice of values.
    pub fn from_slice(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Statistics of a dimension with no usable values.
    pub fn undefined() -> Self {
        Self {
            count: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }

    /// Signed deviation of `value` from the mean in standard deviations.
    ///
    /// Returns 0 when the standard deviation is zero or not finite.
    #[inline]
    pub fn z_score(&self, value: f64) -> f64 {
        if self.std_dev > 0.0 && self.std_dev.is_finite() {
            (value - self.mean) / self.std_dev
        } else {
            0.0
        }
    }
}

/// Which error dimension(s) exceeded the significance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlierKind {
    /// Neither dimension exceeded the threshold
    Inlier,
    PositionOnly,
    OrientationOnly,
    Both,
}

impl OutlierKind {
    /// Classify a pair of z-scores against `threshold`.
    pub fn from_z_scores(z_position: f64, z_orientation: f64, threshold: f64) -> Self {
        match (z_position.abs() > threshold, z_orientation.abs() > threshold) {
            (true, true) => OutlierKind::Both,
            (true, false) => OutlierKind::PositionOnly,
            (false, true) => OutlierKind::OrientationOnly,
            (false, false) => OutlierKind::Inlier,
        }
    }

    /// Whether this sample's position error is an outlier.
    pub fn position_is_outlier(&self) -> bool {
        matches!(self, OutlierKind::PositionOnly | OutlierKind::Both)
    }

    /// Whether this sample's orientation error is an outlier.
    pub fn orientation_is_outlier(&self) -> bool {
        matches!(self, OutlierKind::OrientationOnly | OutlierKind::Both)
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            OutlierKind::Inlier => "inlier",
            OutlierKind::PositionOnly => "position",
            OutlierKind::OrientationOnly => "orientation",
            OutlierKind::Both => "both",
        }
    }
}

/// Reference to an outlier in the error sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlierRecord {
    /// Index into the analyzed `ErrorSample` slice
    pub index: usize,
    /// Outlier classification (never `Inlier`)
    pub kind: OutlierKind,
}

/// Result of analyzing an error series.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorStatistics {
    /// Position error statistics over all samples
    pub position: Stats,
    /// Orientation error statistics over all samples
    pub orientation: Stats,
    /// Mean position error excluding position outliers (NaN if none remain)
    pub position_mean_inliers: f64,
    /// Mean orientation error excluding orientation outliers (NaN if none remain)
    pub orientation_mean_inliers: f64,
    /// Outlier samples in sequence order
    pub outliers: Vec<OutlierRecord>,
}

/// Running sum for a mean that may end up with no contributors.
#[derive(Debug, Default)]
struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

impl ErrorStatistics {
    /// Compute statistics and classify outliers.
    ///
    /// Returns [`EvalError::EmptyErrorSeries`] when `samples` is empty.
    pub fn compute(samples: &[ErrorSample], config: &StatisticsConfig) -> Result<Self> {
        if samples.is_empty() {
            return Err(EvalError::EmptyErrorSeries);
        }

        let position_values: Vec<f64> = samples.iter().map(|e| e.position_error).collect();
        let orientation_values: Vec<f64> = samples
            .iter()
            .map(|e| e.orientation_error)
            .filter(|o| o.is_finite())
            .collect();

        let invalid_orientation = samples.len() - orientation_values.len();
        if invalid_orientation > 0 {
            log::warn!(
                "{} of {} samples have no valid orientation error, excluded from orientation statistics",
                invalid_orientation,
                samples.len()
            );
        }

        let position = Stats::from_slice(&position_values);
        let orientation = if orientation_values.is_empty() {
            Stats::undefined()
        } else {
            Stats::from_slice(&orientation_values)
        };

        if position.std_dev == 0.0 {
            log::debug!("Position error has zero deviation, no position outliers possible");
        }
        if orientation.std_dev == 0.0 {
            log::debug!("Orientation error has zero deviation, no orientation outliers possible");
        }

        let mut outliers = Vec::new();
        let mut position_inliers = MeanAccumulator::default();
        let mut orientation_inliers = MeanAccumulator::default();

        for (index, sample) in samples.iter().enumerate() {
            let orientation_valid = sample.orientation_error.is_finite();
            let z_orientation = if orientation_valid {
                orientation.z_score(sample.orientation_error)
            } else {
                0.0
            };
            let kind = OutlierKind::from_z_scores(
                position.z_score(sample.position_error),
                z_orientation,
                config.z_score_threshold,
            );

            if !kind.position_is_outlier() {
                position_inliers.add(sample.position_error);
            }
            if orientation_valid && !kind.orientation_is_outlier() {
                orientation_inliers.add(sample.orientation_error);
            }
            if kind != OutlierKind::Inlier {
                outliers.push(OutlierRecord { index, kind });
            }
        }

        Ok(Self {
            position,
            orientation,
            position_mean_inliers: position_inliers.mean(),
            orientation_mean_inliers: orientation_inliers.mean(),
            outliers,
        })
    }

    /// Number of outliers of the given kind.
    pub fn count_of(&self, kind: OutlierKind) -> usize {
        self.outliers.iter().filter(|o| o.kind == kind).count()
    }
}
