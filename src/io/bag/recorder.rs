//! Bag file recorder for capturing odometry logs.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::error::{BagError, Result};
use super::types::{BagHeader, BagInfo, BagMessage, HEADER_SIZE, OdometryMsg};
use crate::core::types::{Stamp, Timestamped, Twist2D};

/// Bag file recorder.
///
/// Writes messages as `[len:u32 LE][postcard payload]` after a reserved
/// header block. The header is filled in by [`BagRecorder::finish`].
///
/// # Example
///
/// ```no_run
/// use odom_eval::core::types::{Quaternion, Stamp};
/// use odom_eval::io::bag::{BagRecorder, OdometryMsg};
///
/// let mut recorder = BagRecorder::create("run.bag")?;
/// recorder.record_odometry(&OdometryMsg::new(
///     Stamp::new(1, 0),
///     0.0,
///     0.0,
///     Quaternion::identity(),
/// ))?;
/// let info = recorder.finish()?;
/// println!("Recorded {} messages", info.message_count);
/// # Ok::<(), odom_eval::io::bag::BagError>(())
/// ```
pub struct BagRecorder {
    writer: BufWriter<File>,
    path: PathBuf,
    message_count: u64,
    odometry_count: u64,
    twist_count: u64,
    start_stamp: Option<Stamp>,
    end_stamp: Stamp,
}

impl BagRecorder {
    /// Create a new bag recorder writing to the specified path.
    ///
    /// The file is created immediately and the header space is reserved.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&[0u8; HEADER_SIZE])?;

        Ok(Self {
            writer,
            path,
            message_count: 0,
            odometry_count: 0,
            twist_count: 0,
            start_stamp: None,
            end_stamp: Stamp::default(),
        })
    }

    /// Record an odometry message.
    pub fn record_odometry(&mut self, msg: &OdometryMsg) -> Result<()> {
        self.odometry_count += 1;
        self.record_message(&BagMessage::Odometry(msg.clone()))
    }

    /// Record a velocity message.
    pub fn record_twist(&mut self, twist: &Timestamped<Twist2D>) -> Result<()> {
        self.twist_count += 1;
        self.record_message(&BagMessage::Twist(twist.clone()))
    }

    /// Record a generic bag message.
    ///
    /// Prefer the typed methods; messages recorded here are not reflected in
    /// the per-type counts of the returned [`BagInfo`].
    pub fn record_message(&mut self, msg: &BagMessage) -> Result<()> {
        let stamp = msg.stamp();
        if self.start_stamp.is_none() {
            self.start_stamp = Some(stamp);
        }
        self.end_stamp = stamp;

        let bytes = postcard::to_allocvec(msg).map_err(BagError::serialize)?;
        let len = u32::try_from(bytes.len()).map_err(|_| {
            BagError::InvalidFormat(format!("Message too large: {} bytes", bytes.len()))
        })?;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(&bytes)?;

        self.message_count += 1;
        Ok(())
    }

    /// Get current message count.
    pub fn message_count(&self) -> u64 {
        self.message_count
    }

    /// Get current recording duration in nanoseconds.
    pub fn duration_ns(&self) -> u64 {
        let start = self.start_stamp.unwrap_or_default();
        self.end_stamp.as_nanos().saturating_sub(start.as_nanos())
    }

    /// Finalize and close the bag file.
    ///
    /// Writes the header with final statistics and returns file info.
    pub fn finish(mut self) -> Result<BagInfo> {
        self.writer.flush()?;
        let file_size = self.writer.stream_position()?;

        let header = BagHeader {
            start_time_ns: self.start_stamp.unwrap_or_default().as_nanos(),
            end_time_ns: self.end_stamp.as_nanos(),
            message_count: self.message_count,
            ..BagHeader::new()
        };
        let header_bytes = postcard::to_allocvec(&header).map_err(BagError::serialize)?;
        if header_bytes.len() > HEADER_SIZE {
            return Err(BagError::InvalidFormat(format!(
                "Header encodes to {} bytes, limit is {}",
                header_bytes.len(),
                HEADER_SIZE
            )));
        }

        let mut header_buffer = [0u8; HEADER_SIZE];
        header_buffer[..header_bytes.len()].copy_from_slice(&header_bytes);

        self.writer.seek(SeekFrom::Start(0))?;
        self.writer.write_all(&header_buffer)?;
        self.writer.flush()?;

        log::debug!(
            "Finished {} ({} messages, {} bytes)",
            self.path.display(),
            self.message_count,
            file_size
        );

        let duration_ns = self.duration_ns();
        Ok(BagInfo {
            path: self.path,
            duration_ns,
            message_count: self.message_count,
            file_size_bytes: file_size,
            odometry_count: self.odometry_count,
            twist_count: self.twist_count,
        })
    }
}
