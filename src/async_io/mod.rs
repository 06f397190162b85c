//! Async transport adapters.
//!
//! This module provides poll-based counterparts of the blocking transport
//! adapters using the `futures-io` traits, making them runtime-agnostic and
//! compatible with tokio (via `tokio_util::compat`), async-std, smol, and
//! other async runtimes.
//!
//! - [`Buffer::poll_sys_read`](crate::Buffer::poll_sys_read) - Fill from an `AsyncRead`
//! - [`Buffer::poll_sys_write`](crate::Buffer::poll_sys_write) - Drain into an `AsyncWrite`
//!
//! This module requires the `async-io` feature to be enabled.

mod poll;
