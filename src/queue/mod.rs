//! Buffer queues.
//!
//! - [`BufferQueue`] - FIFO of read-ready buffers with `pullup()` coalescing
//!
//! The queue also implements [`bytes::Buf`], so the whole logical stream
//! can be handed to APIs that consume `Buf` without pulling up first.

mod buf;
mod list;
mod pullup;

pub use list::BufferQueue;
