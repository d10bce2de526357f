//! Validated, time-ordered pose series.

use std::ops::Index;

use super::PoseSample;
use crate::error::{EvalError, Result};

/// Ordered sequence of pose samples sorted by ascending time.
///
/// Construction fails fast on empty input, non-finite timestamps or
/// decreasing time, so every `Trajectory` can be binary searched and has
/// a first and last sample. Equal adjacent timestamps are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<PoseSample>,
}

impl Trajectory {
    /// Validate and wrap a list of samples.
    pub fn new(samples: Vec<PoseSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(EvalError::InvalidInput("trajectory is empty".to_string()));
        }

        for (i, sample) in samples.iter().enumerate() {
            if !sample.time.is_finite() {
                return Err(EvalError::InvalidInput(format!(
                    "sample {} has non-finite time {}",
                    i, sample.time
                )));
            }
        }

        if let Some(i) = samples.windows(2).position(|w| w[1].time < w[0].time) {
            return Err(EvalError::InvalidInput(format!(
                "samples not sorted by time: {:.9} follows {:.9} at index {}",
                samples[i + 1].time,
                samples[i].time,
                i + 1
            )));
        }

        Ok(Self { samples })
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First (earliest) sample.
    #[inline]
    pub fn first(&self) -> &PoseSample {
        &self.samples[0]
    }

    /// Last (latest) sample.
    #[inline]
    pub fn last(&self) -> &PoseSample {
        &self.samples[self.samples.len() - 1]
    }

    /// Sample at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PoseSample> {
        self.samples.get(index)
    }

    /// Underlying samples as a slice.
    #[inline]
    pub fn samples(&self) -> &[PoseSample] {
        &self.samples
    }

    /// Iterate over samples in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, PoseSample> {
        self.samples.iter()
    }

    /// Time span covered, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.last().time - self.first().time
    }

    /// Number of samples whose yaw is NaN.
    pub fn invalid_yaw_count(&self) -> usize {
        self.samples.iter().filter(|s| !s.has_valid_yaw()).count()
    }
}

impl Index<usize> for Trajectory {
    type Output = PoseSample;

    fn index(&self, index: usize) -> &PoseSample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a PoseSample;
    type IntoIter = std::slice::Iter<'a, PoseSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
