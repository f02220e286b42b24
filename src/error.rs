//! Error types for the samplering crate.

use std::fmt;

/// Errors that can occur while operating on a circular sample buffer.
///
/// Every variant is a local, synchronous condition surfaced as an ordinary
/// result value; none aborts the owning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A buffer was constructed with a capacity of zero bytes.
    ZeroCapacity,
    /// A transfer was requested with a byte count not below the capacity.
    RequestTooLarge { requested: usize, capacity: usize },
    /// A write would clobber unread data and the buffer rejects overwrites.
    WouldOverwrite { requested: usize, free: usize },
    /// A cursor was directed to a position outside the storage region.
    InvalidCursorPosition { position: usize, capacity: usize },
    /// I/O error while persisting the storage region.
    Io(String),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroCapacity => {
                write!(f, "buffer capacity must be non-zero")
            }
            BufferError::RequestTooLarge {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "transfer of {} bytes is not below the buffer capacity of {} bytes",
                    requested, capacity
                )
            }
            BufferError::WouldOverwrite { requested, free } => {
                write!(
                    f,
                    "write of {} bytes exceeds the {} free bytes and overwriting is disabled",
                    requested, free
                )
            }
            BufferError::InvalidCursorPosition {
                position,
                capacity,
            } => {
                write!(
                    f,
                    "cursor position {} is outside the buffer capacity of {} bytes",
                    position, capacity
                )
            }
            BufferError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for BufferError {}

impl From<std::io::Error> for BufferError {
    fn from(err: std::io::Error) -> Self {
        BufferError::Io(err.to_string())
    }
}
