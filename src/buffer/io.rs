//! Transport I/O adapters.
//!
//! Each adapter moves bytes between the transport and the region
//! `[position, position + want)` with exactly one transport call:
//!
//! - reads (`sys_read`, `sys_recvfrom`) fill the region
//! - writes (`sys_write`, `sys_send`, `sys_sendto`) drain it
//!
//! On success the position advances by the number of bytes actually
//! transferred, which may be less than `want`. On failure the transport's
//! error is returned as [`BufferError::Transport`] and the position is left
//! alone. Nothing is retried, not even [`std::io::ErrorKind::Interrupted`].

use std::io::{self, Read, Write};

use tracing::trace;

use super::Buffer;
use crate::error::{BufferError, Result};
use crate::transport::DatagramTransport;

/// How many bytes a transport adapter should try to move.
///
/// # Example
///
/// ```
/// use cbufrs::Want;
///
/// assert_eq!(Want::from(16), Want::Bytes(16));
/// assert_eq!(Want::default(), Want::Available);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Want {
    /// The whole region between position and limit.
    #[default]
    Available,
    /// Exactly this many bytes (at most; transports may move fewer).
    Bytes(usize),
}

impl From<usize> for Want {
    fn from(count: usize) -> Self {
        Want::Bytes(count)
    }
}

impl Buffer {
    /// Resolves `want` against the available region.
    pub(crate) fn resolve_want(&self, want: Want) -> Result<usize> {
        let available = self.available();
        let want = match want {
            Want::Available => available,
            Want::Bytes(count) => count,
        };

        if want == 0 {
            return Err(BufferError::InvalidArgument {
                message: "zero-length transfer",
            });
        }

        if want > available {
            return Err(BufferError::out_of_space(want, available));
        }

        Ok(want)
    }

    /// Advances the position after a transport moved `transferred` of the
    /// `want` bytes it was offered.
    pub(crate) fn commit_transfer(&mut self, want: usize, transferred: usize) -> Result<usize> {
        if transferred > want {
            return Err(BufferError::Overflow {
                context: "transport reported more bytes than offered",
            });
        }

        self.position += transferred;
        trace!(want, transferred, position = self.position, "transfer committed");
        Ok(transferred)
    }

    fn fill_with<T>(
        &mut self,
        want: Want,
        op: impl FnOnce(&mut [u8]) -> io::Result<(usize, T)>,
    ) -> Result<(usize, T)> {
        let want = self.resolve_want(want)?;
        let start = self.position;
        let (transferred, extra) = op(&mut self.data[start..start + want])?;
        let transferred = self.commit_transfer(want, transferred)?;
        Ok((transferred, extra))
    }

    fn drain_with(
        &mut self,
        want: Want,
        op: impl FnOnce(&[u8]) -> io::Result<usize>,
    ) -> Result<usize> {
        let want = self.resolve_want(want)?;
        let start = self.position;
        let transferred = op(&self.data[start..start + want])?;
        self.commit_transfer(want, transferred)
    }

    /// Reads from `reader` into the buffer with a single `read` call.
    ///
    /// Returns the number of bytes read; 0 means end of stream.
    ///
    /// # Errors
    ///
    /// - [`BufferError::InvalidArgument`] if the resolved `want` is 0
    /// - [`BufferError::OutOfSpace`] if `want` exceeds the available region
    /// - [`BufferError::Transport`] if the read fails
    ///
    /// # Example
    ///
    /// ```
    /// use cbufrs::{Buffer, Want};
    ///
    /// let mut src: &[u8] = b"abcdef";
    /// let mut buf = Buffer::with_capacity(4)?;
    ///
    /// assert_eq!(buf.sys_read(&mut src, Want::Available)?, 4);
    /// buf.flip();
    /// assert_eq!(buf.remaining_slice(), b"abcd");
    /// # Ok::<(), cbufrs::BufferError>(())
    /// ```
    pub fn sys_read<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
        want: impl Into<Want>,
    ) -> Result<usize> {
        self.fill_with(want.into(), |dst| reader.read(dst).map(|n| (n, ())))
            .map(|(n, ())| n)
    }

    /// Writes buffered bytes to `writer` with a single `write` call.
    ///
    /// Returns the number of bytes written, which may be short.
    ///
    /// # Errors
    ///
    /// Same size checks as [`sys_read`](Buffer::sys_read);
    /// [`BufferError::Transport`] if the write fails.
    pub fn sys_write<W: Write + ?Sized>(
        &mut self,
        writer: &mut W,
        want: impl Into<Want>,
    ) -> Result<usize> {
        self.drain_with(want.into(), |src| writer.write(src))
    }

    /// Sends buffered bytes to the connected peer of `socket`.
    pub fn sys_send<T: DatagramTransport + ?Sized>(
        &mut self,
        socket: &T,
        want: impl Into<Want>,
    ) -> Result<usize> {
        self.drain_with(want.into(), |src| socket.send(src))
    }

    /// Sends buffered bytes to `addr` through `socket`.
    pub fn sys_sendto<T: DatagramTransport + ?Sized>(
        &mut self,
        socket: &T,
        want: impl Into<Want>,
        addr: &T::Addr,
    ) -> Result<usize> {
        self.drain_with(want.into(), |src| socket.send_to(src, addr))
    }

    /// Receives one datagram from `socket` into the buffer.
    ///
    /// Returns the number of bytes stored and the sender's address. A
    /// datagram longer than `want` is truncated by the transport.
    pub fn sys_recvfrom<T: DatagramTransport + ?Sized>(
        &mut self,
        socket: &T,
        want: impl Into<Want>,
    ) -> Result<(usize, T::Addr)> {
        self.fill_with(want.into(), |dst| socket.recv_from(dst))
    }
}
