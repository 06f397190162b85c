//! cbufrs
//!
//! Cursor-based byte buffers and buffer queues for protocol and I/O code.
//!
//! `cbufrs` stages bytes between a transport and the code that parses or
//! emits structured fields. It is designed as a small, composable primitive
//! for:
//!
//! - accumulating bytes read from sockets, pipes and files
//! - decoding fixed-width integers in a chosen byte order
//! - reading fields that straddle the boundary between two reads
//! - handing buffers from a producer to a consumer without copying
//!
//! The crate intentionally:
//! - does NOT parse any higher-level protocol
//! - does NOT manage descriptors or connections
//! - does NOT retry short or failed transfers
//! - does NOT lock; callers synchronise shared access
//!
//! # Buffers
//!
//! ```
//! use cbufrs::Buffer;
//!
//! let mut buf = Buffer::with_capacity(4)?;
//! buf.put_u16(0x0102)?;
//! buf.put_u16(0x0102)?;
//! assert_eq!(buf.as_slice(), &[0x01, 0x02, 0x01, 0x02]);
//!
//! buf.flip();
//! assert_eq!(buf.get_u16()?, 0x0102);
//! assert_eq!(buf.get_u16()?, 0x0102);
//! # Ok::<(), cbufrs::BufferError>(())
//! ```
//!
//! # Queues
//!
//! ```
//! use cbufrs::{Buffer, BufferQueue};
//!
//! let mut queue = BufferQueue::new();
//! queue.enqueue(Buffer::from(vec![0x00, 0x00, 0x00]));
//! queue.enqueue(Buffer::from(vec![0x2a, 0xff]));
//!
//! // A u32 straddles the two buffers; pull it up into the head.
//! queue.pullup(4)?;
//! let head = queue.peek().unwrap();
//! assert_eq!(head.get_u32()?, 42);
//! # Ok::<(), cbufrs::BufferError>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::future::poll_fn;
//! use std::pin::Pin;
//! use cbufrs::{Buffer, Want};
//!
//! async fn demo<R: futures_io::AsyncRead + Unpin>(mut reader: R) -> Result<(), cbufrs::BufferError> {
//!     let mut buf = Buffer::with_capacity(1024)?;
//!     let n = poll_fn(|cx| buf.poll_sys_read(cx, Pin::new(&mut reader), Want::Available)).await?;
//!     println!("read {} bytes", n);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod queue;
mod transport;

mod util; // internal checked arithmetic

#[cfg(feature = "async-io")]
mod async_io;

//
// Public surface
//

pub use buffer::{Buffer, ByteOrder, Want};
pub use config::{BufferConfig, DEFAULT_BUFFER_CAPACITY, MAX_BUFFER_CAPACITY};
pub use error::{BufferError, ErrorKind, Result};
pub use queue::BufferQueue;
pub use transport::DatagramTransport;
