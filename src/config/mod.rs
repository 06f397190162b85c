//! Configuration for buffer allocation.
//!
//! - [`BufferConfig`] - Initial capacity and byte order for new buffers
//!
//! # Example
//!
//! ```
//! use cbufrs::{BufferConfig, ByteOrder};
//!
//! // Custom capacity
//! let config = BufferConfig::new(4096)?;
//!
//! // Little-endian buffers for a host-order protocol
//! let config = BufferConfig::default()
//!     .with_order(ByteOrder::LittleEndian);
//!
//! let buf = config.allocate()?;
//! assert_eq!(buf.order(), ByteOrder::LittleEndian);
//! # Ok::<(), cbufrs::BufferError>(())
//! ```

use crate::buffer::{Buffer, ByteOrder};
use crate::error::{BufferError, Result};

/// Default buffer capacity (64 KiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

/// Largest capacity a buffer may have.
pub const MAX_BUFFER_CAPACITY: usize = isize::MAX as usize;

/// Settings applied to newly allocated buffers.
///
/// # Example
///
/// ```
/// use cbufrs::{BufferConfig, ByteOrder};
///
/// let config = BufferConfig::default()
///     .with_capacity(512)
///     .with_order(ByteOrder::LittleEndian);
///
/// assert_eq!(config.capacity(), 512);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferConfig {
    /// Capacity of each new buffer in bytes.
    capacity: usize,

    /// Byte order of each new buffer.
    order: ByteOrder,
}

impl BufferConfig {
    /// Creates a configuration with the given capacity and big-endian order.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Overflow`] if `capacity` exceeds
    /// [`MAX_BUFFER_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity > MAX_BUFFER_CAPACITY {
            return Err(BufferError::Overflow {
                context: "buffer capacity",
            });
        }

        Ok(Self {
            capacity,
            order: ByteOrder::default(),
        })
    }

    /// Sets the capacity.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`BufferConfig::validate`] to check it.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the byte order.
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the byte order.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.capacity).map(|_| ())
    }

    /// Allocates a write-ready buffer with these settings.
    ///
    /// # Errors
    ///
    /// - [`BufferError::Overflow`] if the configuration is invalid
    /// - [`BufferError::AllocationFailure`] if the allocator refuses
    pub fn allocate(&self) -> Result<Buffer> {
        self.validate()?;
        let mut buf = Buffer::with_capacity(self.capacity)?;
        buf.set_order(self.order);
        Ok(buf)
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_CAPACITY,
            order: ByteOrder::default(),
        }
    }
}
