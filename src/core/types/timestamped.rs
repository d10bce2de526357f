//! Generic timestamp wrapper.

use serde::{Deserialize, Serialize};

use super::Stamp;

/// Generic timestamp wrapper for any data type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamped<T> {
    /// The wrapped data
    pub data: T,
    /// Logger timestamp
    pub stamp: Stamp,
}

impl<T> Timestamped<T> {
    /// Create a new timestamped value.
    #[inline]
    pub fn new(data: T, stamp: Stamp) -> Self {
        Self { data, stamp }
    }
}
