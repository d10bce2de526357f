//! Message timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nanoseconds per second.
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Seconds-per-nanosecond factor used for float conversion.
const SECS_PER_NANO: f64 = 1e-9;

/// Split seconds/nanoseconds timestamp as written by the robot logger.
///
/// Both the ground-truth table and the odometry log carry stamps in this
/// shape. Converting through [`Stamp::to_secs`] on both sides guarantees
/// that equal stamps produce bit-identical `f64` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Stamp {
    /// Whole seconds since epoch
    pub sec: u32,
    /// Nanoseconds within the second
    pub nsec: u32,
}

impl Stamp {
    /// Create a new stamp.
    #[inline]
    pub fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }

    /// Build a stamp from total nanoseconds.
    #[inline]
    pub fn from_nanos(nanos: u64) -> Self {
        Self {
            sec: (nanos / NANOS_PER_SEC) as u32,
            nsec: (nanos % NANOS_PER_SEC) as u32,
        }
    }

    /// Total nanoseconds since epoch.
    #[inline]
    pub fn as_nanos(&self) -> u64 {
        self.sec as u64 * NANOS_PER_SEC + self.nsec as u64
    }

    /// Time in floating point seconds.
    #[inline]
    pub fn to_secs(&self) -> f64 {
        self.sec as f64 + self.nsec as f64 * SECS_PER_NANO
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.sec, self.nsec)
    }
}
