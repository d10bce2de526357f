//! Bag file player for reading recorded odometry logs.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use super::error::{BagError, Result};
use super::types::{BagHeader, BagMessage, HEADER_SIZE, MAX_MESSAGE_SIZE, OdometryMsg};

/// Sequential reader over a bag file.
///
/// # Example
///
/// ```no_run
/// use odom_eval::io::bag::BagPlayer;
///
/// let mut player = BagPlayer::open("run.bag")?;
/// while let Some(msg) = player.next_immediate()? {
///     println!("Message at {}", msg.stamp());
/// }
/// # Ok::<(), odom_eval::io::bag::BagError>(())
/// ```
pub struct BagPlayer {
    reader: BufReader<File>,
    header: BagHeader,
    messages_read: u64,
}

impl BagPlayer {
    /// Open a bag file and validate its header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut header_buffer = [0u8; HEADER_SIZE];
        reader.read_exact(&mut header_buffer).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => {
                BagError::InvalidFormat("File shorter than bag header".to_string())
            }
            _ => BagError::Io(e),
        })?;

        let header: BagHeader = postcard::from_bytes(&header_buffer)
            .map_err(|e| BagError::InvalidFormat(format!("Failed to parse header: {}", e)))?;

        if !header.is_valid() {
            return Err(BagError::InvalidFormat(
                "Invalid bag file magic bytes".to_string(),
            ));
        }

        Ok(Self {
            reader,
            header,
            messages_read: 0,
        })
    }

    /// Get the bag file header.
    pub fn header(&self) -> &BagHeader {
        &self.header
    }

    /// Get total message count recorded in the header.
    pub fn message_count(&self) -> u64 {
        self.header.message_count
    }

    /// Get number of messages read so far.
    pub fn messages_read(&self) -> u64 {
        self.messages_read
    }

    /// Read the next message.
    ///
    /// Returns `None` at a clean end of file.
    pub fn next_immediate(&mut self) -> Result<Option<BagMessage>> {
        let mut len_bytes = [0u8; 4];
        match self.reader.read_exact(&mut len_bytes) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        let len = u32::from_le_bytes(len_bytes) as usize;
        if len > MAX_MESSAGE_SIZE {
            return Err(BagError::InvalidFormat(format!(
                "Message too large: {} bytes",
                len
            )));
        }

        let mut payload = vec![0u8; len];
        self.reader.read_exact(&mut payload).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => BagError::InvalidFormat(format!(
                "Truncated message {} ({} bytes expected)",
                self.messages_read + 1,
                len
            )),
            _ => BagError::Io(e),
        })?;

        let msg: BagMessage = postcard::from_bytes(&payload).map_err(BagError::deserialize)?;
        self.messages_read += 1;

        Ok(Some(msg))
    }

    /// Reset to the first message.
    pub fn rewind(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(HEADER_SIZE as u64))?;
        self.messages_read = 0;
        Ok(())
    }

    /// Iterate over only odometry messages.
    pub fn odometry_iter(&mut self) -> impl Iterator<Item = Result<OdometryMsg>> + '_ {
        std::iter::from_fn(move || {
            loop {
                match self.next_immediate() {
                    Ok(Some(BagMessage::Odometry(msg))) => return Some(Ok(msg)),
                    Ok(Some(_)) => continue,
                    Ok(None) => return None,
                    Err(e) => return Some(Err(e)),
                }
            }
        })
    }
}

impl Iterator for BagPlayer {
    type Item = Result<BagMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_immediate().transpose()
    }
}
