//! Mathematical primitives for planar pose comparison.
//!
//! Functions for angular error and quaternion-to-yaw extraction.

use std::f64::consts::{PI, TAU};

/// Absolute angular error between two headings, accounting for wraparound.
///
/// Returns `|a - b|`, except when that raw difference lies strictly between
/// π and 2π, in which case the shorter way around the circle
/// (`2π - |a - b|`) is returned. NaN inputs propagate.
///
/// # Example
/// ```
/// use odom_eval::core::math::angular_error;
/// use std::f64::consts::TAU;
///
/// // Headings on either side of the wrap point are close together
/// assert!((angular_error(0.01, TAU - 0.01) - 0.02).abs() < 1e-9);
/// ```
#[inline]
pub fn angular_error(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff > PI && diff < TAU {
        TAU - diff
    } else {
        diff
    }
}

/// Extract yaw (rotation about Z) from a unit quaternion.
///
/// Uses the ZYX Euler convention, so the result lies in [-π, π].
#[inline]
pub fn yaw_from_quaternion(w: f64, x: f64, y: f64, z: f64) -> f64 {
    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    siny_cosp.atan2(cosy_cosp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_angular_error_zero() {
        assert_relative_eq!(angular_error(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_angular_error_is_symmetric() {
        assert_relative_eq!(angular_error(0.3, 1.2), 0.9, epsilon = 1e-12);
        assert_relative_eq!(angular_error(1.2, 0.3), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_error_wraparound() {
        let err = angular_error(0.01, TAU - 0.01);
        assert_relative_eq!(err, 0.02, epsilon = 1e-9);
        assert!(err < 1.0, "Should take the short way: {}", err);
    }

    #[test]
    fn test_angular_error_crossing_pi() {
        // 3.14 and -3.14 straddle the ±π boundary
        let err = angular_error(3.14, -3.14);
        assert_relative_eq!(err, TAU - 6.28, epsilon = 1e-9);
        assert!(err < 0.01);
    }

    #[test]
    fn test_angular_error_exactly_pi_not_wrapped() {
        assert_relative_eq!(angular_error(PI, 0.0), PI);
    }

    #[test]
    fn test_angular_error_beyond_full_turn_not_wrapped() {
        // Differences of 2π or more fall outside the correction band
        assert_relative_eq!(angular_error(TAU + 0.5, 0.0), TAU + 0.5);
    }

    #[test]
    fn test_angular_error_nan_propagates() {
        assert!(angular_error(f64::NAN, 0.0).is_nan());
        assert!(angular_error(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_yaw_from_identity_quaternion() {
        assert_relative_eq!(yaw_from_quaternion(1.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_yaw_from_quaternion_quarter_turn() {
        let half = FRAC_PI_2 / 2.0;
        let yaw = yaw_from_quaternion(half.cos(), 0.0, 0.0, half.sin());
        assert_relative_eq!(yaw, FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_yaw_from_quaternion_negative() {
        let half: f64 = -0.4;
        let yaw = yaw_from_quaternion(half.cos(), 0.0, 0.0, half.sin());
        assert_relative_eq!(yaw, -0.8, epsilon = 1e-12);
    }
}
