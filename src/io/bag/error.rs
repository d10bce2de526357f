//! Error type shared by the bag recorder and player.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BagError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl BagError {
    pub(crate) fn serialize(e: postcard::Error) -> Self {
        BagError::Serialize(e.to_string())
    }

    pub(crate) fn deserialize(e: postcard::Error) -> Self {
        BagError::Deserialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BagError>;
