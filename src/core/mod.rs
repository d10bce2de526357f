//! Core foundation layer.
//!
//! This is the bottom layer of the evaluation stack with no internal
//! dependencies besides the crate error type. All other layers depend on core.
//!
//! # Contents
//!
//! - [`types`]: Core data types (stamps, pose samples, trajectories)
//! - [`math`]: Mathematical primitives (angular error, quaternion yaw)

pub mod math;
pub mod types;
