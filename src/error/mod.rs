//! Error types for cbufrs.

use std::collections::TryReserveError;
use std::fmt;

/// Convenience alias used throughout the crate.
pub type Result<T, E = BufferError> = std::result::Result<T, E>;

/// Errors that can occur while operating on buffers and buffer queues.
///
/// Every variant is recoverable. Contract violations by the caller (for
/// example enqueueing a buffer that has not been flipped) are not reported
/// here; they panic.
#[derive(Debug)]
pub enum BufferError {
    /// A cursor or size computation would exceed its representable range.
    Overflow {
        /// What was being computed.
        context: &'static str,
    },

    /// A fixed-width read/write or a transfer does not fit in the
    /// currently available region.
    OutOfSpace {
        /// Bytes the operation needed.
        requested: usize,
        /// Bytes between position and limit.
        available: usize,
    },

    /// A zero-length transfer was requested.
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// Pullup could not gather the requested contiguous run.
    NoData {
        /// Contiguous bytes asked for.
        requested: usize,
        /// Bytes available across the whole queue.
        available: usize,
    },

    /// Growing or shrinking the backing storage failed.
    AllocationFailure(TryReserveError),

    /// The transport call failed. The error is passed through unchanged.
    Transport(std::io::Error),
}

/// Discriminant of a [`BufferError`], convenient for matching without
/// destructuring payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`BufferError::Overflow`].
    Overflow,
    /// See [`BufferError::OutOfSpace`].
    OutOfSpace,
    /// See [`BufferError::InvalidArgument`].
    InvalidArgument,
    /// See [`BufferError::NoData`].
    NoData,
    /// See [`BufferError::AllocationFailure`].
    AllocationFailure,
    /// See [`BufferError::Transport`].
    Transport,
}

impl BufferError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::Overflow { .. } => ErrorKind::Overflow,
            BufferError::OutOfSpace { .. } => ErrorKind::OutOfSpace,
            BufferError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            BufferError::NoData { .. } => ErrorKind::NoData,
            BufferError::AllocationFailure(_) => ErrorKind::AllocationFailure,
            BufferError::Transport(_) => ErrorKind::Transport,
        }
    }

    pub(crate) fn out_of_space(requested: usize, available: usize) -> Self {
        BufferError::OutOfSpace {
            requested,
            available,
        }
    }
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Overflow { context } => write!(f, "overflow: {}", context),
            BufferError::OutOfSpace {
                requested,
                available,
            } => write!(
                f,
                "out of space: {} bytes requested, {} available",
                requested, available
            ),
            BufferError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            BufferError::NoData {
                requested,
                available,
            } => write!(
                f,
                "no data: {} contiguous bytes requested, {} buffered",
                requested, available
            ),
            BufferError::AllocationFailure(e) => write!(f, "allocation failure: {}", e),
            BufferError::Transport(e) => write!(f, "transport error: {}", e),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::AllocationFailure(e) => Some(e),
            BufferError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BufferError {
    fn from(e: std::io::Error) -> Self {
        BufferError::Transport(e)
    }
}

impl From<TryReserveError> for BufferError {
    fn from(e: TryReserveError) -> Self {
        BufferError::AllocationFailure(e)
    }
}
