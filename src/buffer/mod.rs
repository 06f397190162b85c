//! Cursor-based byte buffers.
//!
//! - [`Buffer`] - Growable byte region with position/limit/capacity cursors
//! - [`ByteOrder`] - Byte order for multi-byte codec operations
//! - [`Want`] - Transfer size for transport adapters

mod codec;
mod cursor;
mod dump;
mod io;
mod order;

pub use cursor::Buffer;
pub use io::Want;
pub use order::ByteOrder;
