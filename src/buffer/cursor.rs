//! The `Buffer` type and its cursor model.
//!
//! A buffer owns a block of backing storage and three cursors:
//!
//! ```text
//! 0 <= position <= limit <= capacity
//! ```
//!
//! - `position` - index of the next byte to be read or written
//! - `limit` - first byte that must not be read or written
//! - `capacity` - size of the backing storage
//!
//! Every operation either preserves that invariant or fails without
//! touching the cursors.

use std::fmt;

use bytes::Bytes;
use tracing::trace;

use super::ByteOrder;
use crate::config::MAX_BUFFER_CAPACITY;
use crate::error::{BufferError, Result};
use crate::util::checked_add;

/// A growable byte region with explicit read/write cursors.
///
/// A freshly allocated buffer is ready for writing: position is 0 and limit
/// is the capacity. After filling it, [`flip`](Buffer::flip) makes the
/// written bytes readable.
///
/// # Example
///
/// ```
/// use cbufrs::Buffer;
///
/// let mut buf = Buffer::with_capacity(8)?;
/// buf.put_u32(0xdead_beef)?;
/// buf.flip();
///
/// assert_eq!(buf.available(), 4);
/// assert_eq!(buf.get_u32()?, 0xdead_beef);
/// # Ok::<(), cbufrs::BufferError>(())
/// ```
pub struct Buffer {
    /// Backing storage; `data.len()` is the capacity.
    pub(super) data: Vec<u8>,
    pub(super) position: usize,
    pub(super) limit: usize,
    pub(super) order: ByteOrder,
}

impl Buffer {
    /// Allocates a zero-filled buffer of `capacity` bytes, ready for writing.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Overflow`] if `capacity` exceeds
    ///   [`MAX_BUFFER_CAPACITY`]
    /// - [`BufferError::AllocationFailure`] if the allocator refuses
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity > MAX_BUFFER_CAPACITY {
            return Err(BufferError::Overflow {
                context: "buffer capacity",
            });
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        data.resize(capacity, 0);

        Ok(Self {
            data,
            position: 0,
            limit: capacity,
            order: ByteOrder::default(),
        })
    }

    /// Returns the size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the position cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the position cursor.
    ///
    /// Fails with [`BufferError::Overflow`] if `position > limit`.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.limit {
            return Err(BufferError::Overflow {
                context: "position beyond limit",
            });
        }

        self.position = position;
        Ok(())
    }

    /// Returns the limit cursor.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Moves the limit cursor.
    ///
    /// If the new limit falls below the current position, the position is
    /// pulled down to the new limit.
    ///
    /// Fails with [`BufferError::Overflow`] if `limit > capacity`.
    pub fn set_limit(&mut self, limit: usize) -> Result<()> {
        if limit > self.capacity() {
            return Err(BufferError::Overflow {
                context: "limit beyond capacity",
            });
        }

        self.limit = limit;
        if self.limit < self.position {
            self.position = self.limit;
        }

        Ok(())
    }

    /// Advances the position by `count` bytes without reading them.
    ///
    /// Fails with [`BufferError::OutOfSpace`] if fewer than `count` bytes
    /// are available.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        let available = self.available();
        if count > available {
            return Err(BufferError::out_of_space(count, available));
        }

        self.position = checked_add(self.position, count, "skip")?;
        Ok(())
    }

    /// Advances the position by `count` already-validated bytes.
    pub(crate) fn consume(&mut self, count: usize) {
        assert!(count <= self.available(), "consume beyond limit");
        self.position += count;
    }

    /// Bytes between position and limit.
    pub fn available(&self) -> usize {
        self.limit - self.position
    }

    /// Returns true if at least one byte lies between position and limit.
    pub fn has_available(&self) -> bool {
        self.position < self.limit
    }

    /// Bytes between limit and capacity.
    pub fn unused(&self) -> usize {
        self.capacity() - self.limit
    }

    /// Returns the byte order used by multi-byte codec operations.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Sets the byte order used by multi-byte codec operations.
    pub fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Makes the buffer ready for writing from the start: limit becomes the
    /// capacity and position 0.
    pub fn clear(&mut self) {
        self.limit = self.capacity();
        self.position = 0;
    }

    /// Makes written bytes readable: limit becomes the position and
    /// position 0.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    /// Moves the position back to 0 so the same bytes can be read again.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Makes the buffer ready for writing after the existing valid bytes:
    /// position becomes the limit and limit the capacity.
    pub fn resume(&mut self) {
        self.position = self.limit;
        self.limit = self.capacity();
    }

    /// Moves the unread bytes `[position, limit)` to the start of the buffer.
    ///
    /// Afterwards position is 0 and limit is the number of bytes moved.
    /// Bytes before the old position are discarded. Nothing happens if the
    /// position is already 0 or there is nothing left to read.
    pub fn compact(&mut self) {
        let start = self.position;
        let len = self.available();

        if start == 0 || len == 0 {
            return;
        }

        self.data.copy_within(start..self.limit, 0);
        self.position = 0;
        self.limit -= start;
    }

    /// Grows the backing storage to at least `new_capacity` bytes.
    ///
    /// Bytes in `[0, limit)` are preserved; new storage is zero-filled.
    /// Cursors are not moved. Requests that would not grow the buffer
    /// succeed without doing anything.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Overflow`] if `new_capacity` exceeds
    ///   [`MAX_BUFFER_CAPACITY`]
    /// - [`BufferError::AllocationFailure`] if the allocator refuses
    pub fn extend(&mut self, new_capacity: usize) -> Result<()> {
        let capacity = self.capacity();
        if new_capacity <= capacity {
            return Ok(());
        }

        if new_capacity > MAX_BUFFER_CAPACITY {
            return Err(BufferError::Overflow {
                context: "buffer capacity",
            });
        }

        self.data.try_reserve_exact(new_capacity - capacity)?;
        self.data.resize(new_capacity, 0);

        trace!(from = capacity, to = new_capacity, "buffer extended");
        Ok(())
    }

    /// Truncates the backing storage to the current limit.
    ///
    /// Capacity becomes equal to the limit, so [`unused`](Buffer::unused)
    /// drops to 0.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` mirrors [`extend`](Buffer::extend) so
    /// callers handle both storage changes the same way.
    pub fn shrink(&mut self) -> Result<()> {
        let capacity = self.capacity();
        self.data.truncate(self.limit);
        self.data.shrink_to_fit();

        trace!(from = capacity, to = self.limit, "buffer shrunk");
        Ok(())
    }

    /// Copies as many bytes as fit from `src` into `dst`.
    ///
    /// Transfers `min(src.available(), dst.available())` bytes from `src`'s
    /// position to `dst`'s position and advances both cursors by that
    /// amount. Returns the number of bytes copied, which is 0 when either
    /// side has no room.
    ///
    /// # Example
    ///
    /// ```
    /// use cbufrs::Buffer;
    ///
    /// let mut src = Buffer::from(b"hello".to_vec());
    /// let mut dst = Buffer::with_capacity(3)?;
    ///
    /// assert_eq!(Buffer::copy(&mut src, &mut dst), 3);
    /// assert_eq!(src.available(), 2);
    /// assert_eq!(dst.available(), 0);
    /// # Ok::<(), cbufrs::BufferError>(())
    /// ```
    pub fn copy(src: &mut Buffer, dst: &mut Buffer) -> usize {
        let count = src.available().min(dst.available());
        if count == 0 {
            return 0;
        }

        let from = src.position;
        let to = dst.position;
        dst.data[to..to + count].copy_from_slice(&src.data[from..from + count]);

        src.position += count;
        dst.position += count;
        count
    }

    /// Returns the unread (or unwritten) region `[position, limit)`.
    pub fn remaining_slice(&self) -> &[u8] {
        &self.data[self.position..self.limit]
    }

    /// Returns the region `[position, limit)` for in-place writing.
    ///
    /// Use [`skip`](Buffer::skip) afterwards to commit the bytes written.
    pub fn remaining_mut(&mut self) -> &mut [u8] {
        &mut self.data[self.position..self.limit]
    }

    /// Returns the valid region `[0, limit)`.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.limit]
    }

    /// Copies the unread region `[position, limit)` into a new [`Bytes`].
    ///
    /// Cursors are not moved.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self.remaining_slice())
    }
}

impl From<Vec<u8>> for Buffer {
    /// Adopts `data` as backing storage. Capacity and limit are `data.len()`
    /// and position is 0, so the contents are immediately readable.
    fn from(data: Vec<u8>) -> Self {
        let limit = data.len();
        Self {
            data,
            position: 0,
            limit,
            order: ByteOrder::default(),
        }
    }
}

impl From<&[u8]> for Buffer {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("position", &self.position)
            .field("limit", &self.limit)
            .field("capacity", &self.capacity())
            .field("order", &self.order)
            .finish()
    }
}
