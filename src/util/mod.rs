//! Internal utility functions and helpers.
//!
//! Overflow-checked cursor arithmetic shared by the buffer and the queue.
//! It is an implementation detail and not part of the public API.

use crate::error::{BufferError, Result};

/// Adds two sizes, failing with [`BufferError::Overflow`] instead of wrapping.
pub(crate) fn checked_add(a: usize, b: usize, context: &'static str) -> Result<usize> {
    a.checked_add(b).ok_or(BufferError::Overflow { context })
}
