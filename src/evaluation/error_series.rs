//! Per-sample pose error between a reference and a logged trajectory.

use serde::{Deserialize, Serialize};

use super::alignment::TemporalAligner;
use crate::core::types::{PoseSample, Trajectory};

/// Position and orientation error for one matched reference sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorSample {
    /// Time of the matched logged sample (seconds)
    pub time: f64,
    /// Euclidean position error in meters
    pub position_error: f64,
    /// Wraparound-aware heading error in radians
    pub orientation_error: f64,
}

impl ErrorSample {
    /// Error between a reference sample and its logged counterpart.
    pub fn between(reference: &PoseSample, logged: &PoseSample) -> Self {
        Self {
            time: logged.time,
            position_error: reference.distance(logged),
            orientation_error: reference.heading_error(logged),
        }
    }
}

/// A reference sample with no exact-timestamp counterpart in the log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnmatchedSample {
    /// Time of the reference sample (seconds)
    pub time: f64,
    /// Logged index the aligner settled on
    pub nearest_index: usize,
}

/// Output of [`compute_errors`].
///
/// `samples.len() + unmatched.len()` always equals the reference length,
/// and `samples` follows reference order.
#[derive(Debug, Clone, Default)]
pub struct ErrorSeries {
    /// One entry per matched reference sample
    pub samples: Vec<ErrorSample>,
    /// Reference samples that could not be matched
    pub unmatched: Vec<UnmatchedSample>,
}

impl ErrorSeries {
    /// Number of unmatched reference samples.
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Number of matched reference samples.
    pub fn matched_count(&self) -> usize {
        self.samples.len()
    }

    /// Number of reference samples processed.
    pub fn reference_count(&self) -> usize {
        self.samples.len() + self.unmatched.len()
    }
}

/// Match every reference sample against `logged` and compute its error.
///
/// A reference sample only matches when the aligned logged sample carries
/// the exact same timestamp. Near misses are reported as unmatched rather
/// than approximated.
pub fn compute_errors(
    reference: &Trajectory,
    logged: &Trajectory,
    aligner: &TemporalAligner,
) -> ErrorSeries {
    let mut series = ErrorSeries {
        samples: Vec::with_capacity(reference.len()),
        unmatched: Vec::new(),
    };

    for sample in reference {
        let index = aligner.align(logged, sample);
        let matched = &logged[index];

        if matched.time == sample.time {
            series.samples.push(ErrorSample::between(sample, matched));
        } else {
            log::warn!(
                "Unable to find logged entry at time {:.5}, nearest is index {}",
                sample.time,
                index
            );
            series.unmatched.push(UnmatchedSample {
                time: sample.time,
                nearest_index: index,
            });
        }
    }

    log::info!(
        "Matched {} of {} reference samples ({} unmatched)",
        series.matched_count(),
        reference.len(),
        series.unmatched_count()
    );

    series
}
