use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Compressed container formats recognized by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// A gzip stream (RFC 1952)
    Gzip,
    /// A zip archive
    Zip,
}

impl Display for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Gzip => f.write_str("gzip"),
            Container::Zip => f.write_str("zip"),
        }
    }
}

/// Error type for decoding compressed payloads
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The buffer is not a valid instance of the claimed container format
    #[error("payload is not in {0} format")]
    Format(Container),

    /// The archive holds more than one entry; only single-file archives
    /// are supported
    #[error("archive holds {0} entries, expected exactly one")]
    MultipleEntries(usize),

    /// The single archive entry could not be decoded
    #[error("failed to extract archive entry")]
    Extraction(#[source] std::io::Error),

    /// The extracted length does not match the size recorded in the archive
    #[error("extracted {actual} bytes, archive records {expected}")]
    SizeMismatch {
        /// Uncompressed size recorded in the archive entry
        expected: u64,
        /// Number of bytes actually extracted
        actual: u64,
    },
}

/// The result of a decode operation
pub type DecodeResult<T> = Result<T, DecodeError>;
