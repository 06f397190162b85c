//! Poll-based transport adapters over `futures-io`.
//!
//! Each call polls the transport exactly once. `Poll::Pending` leaves the
//! cursors untouched; the caller is woken through `cx` as usual and polls
//! again. Size checks and cursor rules match the blocking adapters.

use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures_io::{AsyncRead, AsyncWrite};

use crate::buffer::{Buffer, Want};
use crate::error::Result;

impl Buffer {
    /// Polls `reader` once to fill the buffer.
    ///
    /// Resolves to the number of bytes read; 0 means end of stream.
    ///
    /// # Errors
    ///
    /// Same as [`Buffer::sys_read`]. Size errors are reported without
    /// polling the reader.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use futures_util::future::poll_fn;
    /// use std::pin::Pin;
    /// use cbufrs::{Buffer, Want};
    ///
    /// async fn fill<R: futures_io::AsyncRead + Unpin>(
    ///     buf: &mut Buffer,
    ///     reader: &mut R,
    /// ) -> Result<usize, cbufrs::BufferError> {
    ///     poll_fn(|cx| buf.poll_sys_read(cx, Pin::new(&mut *reader), Want::Available)).await
    /// }
    /// ```
    pub fn poll_sys_read<R: AsyncRead + ?Sized>(
        &mut self,
        cx: &mut Context<'_>,
        reader: Pin<&mut R>,
        want: impl Into<Want>,
    ) -> Poll<Result<usize>> {
        let want = self.resolve_want(want.into())?;
        let transferred = ready!(reader.poll_read(cx, &mut self.remaining_mut()[..want]))?;
        Poll::Ready(self.commit_transfer(want, transferred))
    }

    /// Polls `writer` once to drain buffered bytes.
    ///
    /// Resolves to the number of bytes written, which may be short.
    ///
    /// # Errors
    ///
    /// Same as [`Buffer::sys_write`].
    pub fn poll_sys_write<W: AsyncWrite + ?Sized>(
        &mut self,
        cx: &mut Context<'_>,
        writer: Pin<&mut W>,
        want: impl Into<Want>,
    ) -> Poll<Result<usize>> {
        let want = self.resolve_want(want.into())?;
        let transferred = ready!(writer.poll_write(cx, &self.remaining_slice()[..want]))?;
        Poll::Ready(self.commit_transfer(want, transferred))
    }
}
