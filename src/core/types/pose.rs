//! Pose sample and orientation types.

use serde::{Deserialize, Serialize};

use crate::core::math::{angular_error, yaw_from_quaternion};

/// A single timestamped planar pose.
///
/// Position is in meters, yaw in radians. Yaw is not normalized and may be
/// NaN when the logger recorded an invalid orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseSample {
    /// Time in seconds
    pub time: f64,
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Heading in radians (may be NaN)
    pub yaw: f64,
}

impl PoseSample {
    /// Create a new pose sample.
    #[inline]
    pub fn new(time: f64, x: f64, y: f64, yaw: f64) -> Self {
        Self { time, x, y, yaw }
    }

    /// Whether this sample carries a usable heading.
    #[inline]
    pub fn has_valid_yaw(&self) -> bool {
        !self.yaw.is_nan()
    }

    /// Euclidean distance between the positions of two samples.
    #[inline]
    pub fn distance(&self, other: &PoseSample) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Wraparound-aware heading error against another sample.
    #[inline]
    pub fn heading_error(&self, other: &PoseSample) -> f64 {
        angular_error(self.yaw, other.yaw)
    }
}

/// Orientation quaternion as carried by odometry messages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Create a new quaternion.
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Pure rotation about Z by `yaw` radians.
    #[inline]
    pub fn from_yaw(yaw: f64) -> Self {
        let (s, c) = (yaw * 0.5).sin_cos();
        Self::new(c, 0.0, 0.0, s)
    }

    /// Heading (rotation about Z) of this orientation.
    #[inline]
    pub fn yaw(&self) -> f64 {
        yaw_from_quaternion(self.w, self.x, self.y, self.z)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// 2D velocity (linear and angular).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Twist2D {
    /// Forward velocity in m/s
    pub linear: f64,
    /// Angular velocity in rad/s
    pub angular: f64,
}

impl Twist2D {
    /// Create a new twist.
    #[inline]
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    #[test]
    fn test_distance() {
        let a = PoseSample::new(0.0, 0.0, 0.0, 0.0);
        let b = PoseSample::new(0.0, 3.0, 4.0, 0.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_heading_error_wraps() {
        let a = PoseSample::new(0.0, 0.0, 0.0, 0.05);
        let b = PoseSample::new(0.0, 0.0, 0.0, TAU - 0.05);
        assert_relative_eq!(a.heading_error(&b), 0.1, epsilon = 1e-9);
    }

    #[test]
    fn test_valid_yaw() {
        assert!(PoseSample::new(0.0, 0.0, 0.0, 1.0).has_valid_yaw());
        assert!(!PoseSample::new(0.0, 0.0, 0.0, f64::NAN).has_valid_yaw());
    }

    #[test]
    fn test_quaternion_yaw_roundtrip() {
        for &yaw in &[-3.0, -1.2, 0.0, 0.7, 3.1] {
            assert_relative_eq!(Quaternion::from_yaw(yaw).yaw(), yaw, epsilon = 1e-12);
        }
    }
}
