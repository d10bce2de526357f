//! Bag file recording and playback for odometry logs.
//!
//! # File Format
//!
//! Bag files use a simple binary format with Postcard serialization:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Header (64 bytes, zero padded)                   │
//! │ - Magic: "OBAG" (4 bytes)                        │
//! │ - Version: u16                                   │
//! │ - Flags: u16                                     │
//! │ - Start time: u64 (nanoseconds)                  │
//! │ - End time: u64 (nanoseconds)                    │
//! │ - Message count: u64                             │
//! │ - Reserved: 16 bytes                             │
//! ├──────────────────────────────────────────────────┤
//! │ Message Stream                                   │
//! │ [len:u32 LE][postcard payload]...                │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use odom_eval::io::bag::BagPlayer;
//!
//! let mut player = BagPlayer::open("run.bag")?;
//! for msg in player.odometry_iter() {
//!     let msg = msg?;
//!     println!("{} x={:.3} y={:.3} yaw={:.3}", msg.stamp, msg.x, msg.y, msg.yaw());
//! }
//! # Ok::<(), odom_eval::io::bag::BagError>(())
//! ```

mod error;
mod player;
mod recorder;
mod types;

pub use error::{BagError, Result};
pub use player::BagPlayer;
pub use recorder::BagRecorder;
pub use types::{
    BAG_MAGIC, BAG_VERSION, BagHeader, BagInfo, BagMessage, HEADER_SIZE, MAX_MESSAGE_SIZE,
    OdometryMsg,
};

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
pub use test_fixtures::{BagTestFixture, FixturePose};
