//! Temporal alignment of reference samples against a logged trajectory.
//!
//! Each ground-truth sample is looked up in the logged series by timestamp.
//! The lookup is a clamped binary search followed by a local refinement
//! that steers away from logged samples with an invalid (NaN) heading.
//!
//! # Tie-break policy
//!
//! The binary search is a lower bound: the candidate is the first logged
//! index whose time is `>=` the query time. With an exact match this is
//! the leftmost sample of a duplicate-timestamp run; without one it is the
//! upper neighbor of the bracketing pair.

use serde::{Deserialize, Serialize};

use crate::core::math::angular_error;
use crate::core::types::{PoseSample, Trajectory};

/// Configuration for [`TemporalAligner`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Number of neighbors on each side scanned during refinement.
    ///
    /// Refinement only runs when the candidate has at least this many
    /// samples on both sides.
    pub search_radius: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self { search_radius: 10 }
    }
}

/// Finds the logged sample that corresponds to a reference sample.
#[derive(Debug, Clone, Default)]
pub struct TemporalAligner {
    config: AlignmentConfig,
}

impl TemporalAligner {
    /// Create an aligner with the given configuration.
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    /// Index in `logged` that best matches `query`.
    ///
    /// The returned index is always in range. Whether it is an actual match
    /// (same timestamp) is for the caller to decide.
    pub fn align(&self, logged: &Trajectory, query: &PoseSample) -> usize {
        let candidate = Self::search(logged, query.time);
        self.refine(logged, query, candidate)
    }

    /// Clamped lower-bound search by time.
    fn search(logged: &Trajectory, time: f64) -> usize {
        let last = logged.len() - 1;
        if time <= logged.first().time {
            return 0;
        }
        if time >= logged.last().time {
            return last;
        }
        // first.time < time < last.time, so the result lies in 1..=last
        logged.samples().partition_point(|s| s.time < time)
    }

    /// Pick the best sample sharing the query timestamp within the window.
    ///
    /// Key 1: the sample has a usable yaw. Key 2: smallest angular error to
    /// the query yaw. Ties keep the candidate, then the lowest index.
    fn refine(&self, logged: &Trajectory, query: &PoseSample, candidate: usize) -> usize {
        let radius = self.config.search_radius;
        if candidate < radius || candidate + radius >= logged.len() {
            return candidate;
        }

        let usable = |s: &PoseSample| s.time == query.time && s.has_valid_yaw();

        let mut best: Option<(usize, f64)> = None;
        if usable(&logged[candidate]) {
            best = Some((candidate, angular_error(logged[candidate].yaw, query.yaw)));
        }

        for i in (candidate - radius)..=(candidate + radius) {
            let sample = &logged[i];
            if i == candidate || !usable(sample) {
                continue;
            }
            let error = angular_error(sample.yaw, query.yaw);
            match best {
                None => best = Some((i, error)),
                Some((_, best_error)) if error < best_error => best = Some((i, error)),
                Some(_) => {}
            }
        }

        match best {
            Some((index, _)) => {
                if index != candidate {
                    log::debug!(
                        "Alignment at t={:.5}: refined index {} -> {}",
                        query.time,
                        candidate,
                        index
                    );
                }
                index
            }
            None => candidate,
        }
    }
}
