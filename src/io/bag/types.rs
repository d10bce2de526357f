//! Core data types for the bag file format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::types::{PoseSample, Quaternion, Stamp, Timestamped, Twist2D};

/// Magic bytes at start of bag file.
pub const BAG_MAGIC: [u8; 4] = *b"OBAG";

/// Current bag file format version.
pub const BAG_VERSION: u16 = 1;

/// Size of the bag file header in bytes.
pub const HEADER_SIZE: usize = 64;

/// Largest accepted message payload.
pub const MAX_MESSAGE_SIZE: usize = 10_000_000;

/// Bag file header (64 bytes fixed size).
///
/// Stored at the beginning of every bag file. The postcard encoding is
/// zero-padded to [`HEADER_SIZE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagHeader {
    /// Magic bytes: "OBAG"
    pub magic: [u8; 4],
    /// File format version
    pub version: u16,
    /// Feature flags (currently unused)
    pub flags: u16,
    /// Stamp of first message (nanoseconds since epoch)
    pub start_time_ns: u64,
    /// Stamp of last message (nanoseconds since epoch)
    pub end_time_ns: u64,
    /// Total number of messages in the file
    pub message_count: u64,
    /// Reserved for future use
    pub reserved: [u8; 16],
}

impl BagHeader {
    /// Create a new header with default values.
    pub fn new() -> Self {
        Self {
            magic: BAG_MAGIC,
            version: BAG_VERSION,
            flags: 0,
            start_time_ns: 0,
            end_time_ns: 0,
            message_count: 0,
            reserved: [0; 16],
        }
    }

    /// Check if magic bytes are valid.
    pub fn is_valid(&self) -> bool {
        self.magic == BAG_MAGIC
    }

    /// Recording duration in nanoseconds.
    pub fn duration_ns(&self) -> u64 {
        self.end_time_ns.saturating_sub(self.start_time_ns)
    }

    /// Recording duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_ns() as f64 * 1e-9
    }
}

impl Default for BagHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Odometry message: planar position plus full orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OdometryMsg {
    /// Logger timestamp
    pub stamp: Stamp,
    /// X position in meters
    pub x: f64,
    /// Y position in meters
    pub y: f64,
    /// Orientation quaternion
    pub orientation: Quaternion,
}

impl OdometryMsg {
    /// Create a new odometry message.
    pub fn new(stamp: Stamp, x: f64, y: f64, orientation: Quaternion) -> Self {
        Self {
            stamp,
            x,
            y,
            orientation,
        }
    }

    /// Heading extracted from the orientation quaternion.
    pub fn yaw(&self) -> f64 {
        self.orientation.yaw()
    }

    /// Convert to a pose sample.
    pub fn to_pose_sample(&self) -> PoseSample {
        PoseSample::new(self.stamp.to_secs(), self.x, self.y, self.yaw())
    }
}

/// Message types stored in bag files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BagMessage {
    /// Odometry pose estimate
    Odometry(OdometryMsg),
    /// Commanded or measured body velocity
    Twist(Timestamped<Twist2D>),
}

impl BagMessage {
    /// Timestamp of this message.
    pub fn stamp(&self) -> Stamp {
        match self {
            BagMessage::Odometry(msg) => msg.stamp,
            BagMessage::Twist(msg) => msg.stamp,
        }
    }

    /// Check if this is an odometry message.
    pub fn is_odometry(&self) -> bool {
        matches!(self, BagMessage::Odometry(_))
    }

    /// Get as odometry if this is that type.
    pub fn as_odometry(&self) -> Option<&OdometryMsg> {
        match self {
            BagMessage::Odometry(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Information about a bag file.
///
/// Returned after recording or when inspecting a bag file.
#[derive(Debug, Clone)]
pub struct BagInfo {
    /// Path to the bag file
    pub path: PathBuf,
    /// Recording duration in nanoseconds
    pub duration_ns: u64,
    /// Total number of messages
    pub message_count: u64,
    /// File size in bytes
    pub file_size_bytes: u64,
    /// Number of odometry messages
    pub odometry_count: u64,
    /// Number of twist messages
    pub twist_count: u64,
}

impl BagInfo {
    /// Recording duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_ns as f64 * 1e-9
    }

    /// Average message rate in Hz.
    pub fn message_rate_hz(&self) -> f64 {
        if self.duration_ns == 0 {
            0.0
        } else {
            self.message_count as f64 / self.duration_secs()
        }
    }
}
