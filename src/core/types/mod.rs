//! Core data types for trajectory evaluation.
//!
//! - [`Stamp`]: seconds/nanoseconds logger timestamp
//! - [`PoseSample`]: timestamped planar pose (x, y, yaw)
//! - [`Trajectory`]: validated, time-ordered series of pose samples
//! - [`Quaternion`]: orientation as carried by odometry messages
//! - [`Twist2D`]: 2D velocity (linear and angular)
//! - [`Timestamped<T>`]: generic timestamp wrapper

mod pose;
mod stamp;
mod timestamped;
mod trajectory;

pub use pose::{PoseSample, Quaternion, Twist2D};
pub use stamp::Stamp;
pub use timestamped::Timestamped;
pub use trajectory::Trajectory;
