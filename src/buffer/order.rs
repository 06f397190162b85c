//! Byte order used by multi-byte codec operations.

use std::fmt;

/// Byte order applied when encoding or decoding integers wider than one byte.
///
/// Buffers default to [`ByteOrder::BigEndian`] (network order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// The byte order of the host.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::BigEndian
    } else {
        ByteOrder::LittleEndian
    };

    /// Maps a numeric order tag (`1` big endian, `2` little endian) to a
    /// byte order.
    ///
    /// # Panics
    ///
    /// Panics on any other tag. An unknown tag is a caller bug, not a
    /// runtime condition.
    pub const fn from_tag(tag: u32) -> Self {
        match tag {
            1 => ByteOrder::BigEndian,
            2 => ByteOrder::LittleEndian,
            _ => panic!("invalid byte order tag"),
        }
    }

    /// Returns the numeric tag for this byte order.
    pub const fn tag(self) -> u32 {
        match self {
            ByteOrder::BigEndian => 1,
            ByteOrder::LittleEndian => 2,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::BigEndian => f.write_str("big-endian"),
            ByteOrder::LittleEndian => f.write_str("little-endian"),
        }
    }
}
