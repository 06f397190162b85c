//! The `BufferQueue` type: FIFO ownership of read-ready buffers.

use std::collections::VecDeque;
use std::fmt;
use std::io;

use crate::buffer::Buffer;
use crate::error::Result;
use crate::util::checked_add;

/// An ordered queue of read-ready buffers forming one logical byte stream.
///
/// Producers [`enqueue`](BufferQueue::enqueue) flipped buffers at the tail;
/// consumers take them from the head. [`pullup`](BufferQueue::pullup)
/// merges buffers so that a field spanning a buffer boundary can be read
/// from the head buffer alone.
///
/// Buffers are moved into the queue, so a queued buffer cannot be used or
/// dropped by anyone else until it is handed back by
/// [`dequeue`](BufferQueue::dequeue).
///
/// # Example
///
/// ```
/// use cbufrs::{Buffer, BufferQueue};
///
/// let mut queue = BufferQueue::new();
/// queue.enqueue(Buffer::from(vec![0x00, 0x00]));
/// queue.enqueue(Buffer::from(vec![0x01, 0x02]));
///
/// queue.pullup(4)?;
/// let head = queue.peek().unwrap();
/// assert_eq!(head.get_u32()?, 0x0102);
/// # Ok::<(), cbufrs::BufferError>(())
/// ```
#[derive(Default)]
pub struct BufferQueue {
    pub(super) bufs: VecDeque<Buffer>,
}

impl BufferQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            bufs: VecDeque::new(),
        }
    }

    /// Appends `buf` at the tail.
    ///
    /// # Panics
    ///
    /// Panics if `buf.position()` is not 0. Buffers must be made readable
    /// from the start ([`Buffer::flip`], [`Buffer::rewind`] or
    /// [`Buffer::compact`]) before they are queued.
    pub fn enqueue(&mut self, buf: Buffer) {
        assert_eq!(
            buf.position(),
            0,
            "buffer must be flipped, rewound or compacted before it is enqueued"
        );

        self.bufs.push_back(buf);
    }

    /// Removes the head buffer and hands it to the caller.
    ///
    /// The buffer is compacted first, so its unread bytes start at offset 0.
    pub fn dequeue(&mut self) -> Option<Buffer> {
        let mut head = self.bufs.pop_front()?;
        head.compact();
        Some(head)
    }

    /// Returns the head buffer, compacted, without removing it.
    pub fn peek(&mut self) -> Option<&mut Buffer> {
        let head = self.bufs.front_mut()?;
        head.compact();
        Some(head)
    }

    /// Returns the tail buffer, compacted, without removing it.
    pub fn peek_tail(&mut self) -> Option<&mut Buffer> {
        let tail = self.bufs.back_mut()?;
        tail.compact();
        Some(tail)
    }

    /// Number of buffers in the queue.
    pub fn count(&self) -> usize {
        self.bufs.len()
    }

    /// Returns true if the queue holds no buffers.
    pub fn is_empty(&self) -> bool {
        self.bufs.is_empty()
    }

    /// Total unread bytes across every queued buffer.
    ///
    /// Fails with [`BufferError::Overflow`](crate::BufferError::Overflow)
    /// only if the sum does not fit in `usize`.
    pub fn available(&self) -> Result<usize> {
        self.bufs.iter().try_fold(0usize, |total, buf| {
            checked_add(total, buf.available(), "queue available")
        })
    }

    /// Iterates over the queued buffers from head to tail.
    ///
    /// Unlike [`peek`](BufferQueue::peek) this borrows immutably, so buffers
    /// are seen as they are: a partially read head keeps its nonzero
    /// position.
    pub fn iter(&self) -> impl Iterator<Item = &Buffer> + '_ {
        self.bufs.iter()
    }

    /// Removes every buffer, handing each back compacted in FIFO order.
    pub fn drain(&mut self) -> impl Iterator<Item = Buffer> + '_ {
        self.bufs.drain(..).map(|mut buf| {
            buf.compact();
            buf
        })
    }

    /// Writes a hex dump of every queued buffer to `out`.
    pub fn dump<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl FromIterator<Buffer> for BufferQueue {
    /// Builds a queue by enqueueing each buffer in order.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`BufferQueue::enqueue`].
    fn from_iter<I: IntoIterator<Item = Buffer>>(iter: I) -> Self {
        let mut queue = BufferQueue::new();
        queue.extend(iter);
        queue
    }
}

impl Extend<Buffer> for BufferQueue {
    fn extend<I: IntoIterator<Item = Buffer>>(&mut self, iter: I) {
        for buf in iter {
            self.enqueue(buf);
        }
    }
}

impl fmt::Debug for BufferQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferQueue")
            .field("count", &self.bufs.len())
            .field("bufs", &self.bufs)
            .finish()
    }
}

impl fmt::Display for BufferQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "queue[{:p}]: count {:>8}", self, self.bufs.len())?;
        for (i, buf) in self.bufs.iter().enumerate() {
            writeln!(f, "--- entry {:>8} ---", i)?;
            write!(f, "{}", buf)?;
        }
        writeln!(f, "queue[{:p}]: end", self)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readable(bytes: &[u8]) -> Buffer {
        Buffer::from(bytes)
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = BufferQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.count(), 0);
        assert_eq!(queue.available().unwrap(), 0);
        assert!(queue.dequeue().is_none());
        assert!(queue.peek().is_none());
        assert!(queue.peek_tail().is_none());
    }

    #[test]
    fn test_iter_borrows_in_fifo_order() {
        let mut queue = BufferQueue::new();
        queue.enqueue(readable(b"one"));
        queue.enqueue(readable(b"two"));
        queue.bufs[0].skip(1).unwrap();

        let seen: Vec<&[u8]> = queue.iter().map(|buf| buf.remaining_slice()).collect();
        assert_eq!(seen, vec![&b"ne"[..], &b"two"[..]]);

        // Nothing was removed or compacted.
        assert_eq!(queue.count(), 2);
        assert_eq!(queue.iter().next().unwrap().position(), 1);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = BufferQueue::new();
        queue.enqueue(readable(b"one"));
        queue.enqueue(readable(b"two"));
        queue.enqueue(readable(b"three"));

        assert_eq!(queue.count(), 3);
        assert_eq!(queue.available().unwrap(), 11);
        assert_eq!(queue.peek_tail().unwrap().remaining_slice(), b"three");

        assert_eq!(queue.dequeue().unwrap().remaining_slice(), b"one");
        assert_eq!(queue.dequeue().unwrap().remaining_slice(), b"two");
        assert_eq!(queue.count(), 1);
    }

    #[test]
    #[should_panic(expected = "must be flipped")]
    fn test_enqueue_nonzero_position_panics() {
        let mut buf = Buffer::with_capacity(4).unwrap();
        buf.put_u8(1).unwrap();

        let mut queue = BufferQueue::new();
        queue.enqueue(buf);
    }

    #[test]
    fn test_peek_compacts_head() {
        let mut queue = BufferQueue::new();
        queue.enqueue(readable(b"abcdef"));

        let head = queue.peek().unwrap();
        head.skip(2).unwrap();

        let head = queue.peek().unwrap();
        assert_eq!(head.position(), 0);
        assert_eq!(head.limit(), 4);
        assert_eq!(head.remaining_slice(), b"cdef");
    }

    #[test]
    fn test_dequeue_compacts() {
        let mut queue = BufferQueue::new();
        queue.enqueue(readable(b"xyz"));
        queue.peek().unwrap().skip(1).unwrap();

        let buf = queue.dequeue().unwrap();
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.as_slice(), b"yz");
    }

    #[test]
    fn test_drain_hands_back_compacted() {
        let mut queue: BufferQueue = [readable(b"ab"), readable(b"cd")].into_iter().collect();
        queue.peek().unwrap().skip(1).unwrap();

        let drained: Vec<Buffer> = queue.drain().collect();
        assert!(queue.is_empty());
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].as_slice(), b"b");
        assert_eq!(drained[1].as_slice(), b"cd");
    }

    #[test]
    fn test_dump_lists_entries() {
        let queue: BufferQueue = [readable(b"a"), readable(b"b")].into_iter().collect();

        let mut out = Vec::new();
        queue.dump(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("queue["));
        assert!(text.contains("count        2"));
        assert!(text.contains("--- entry        0 ---"));
        assert!(text.contains("--- entry        1 ---"));
        assert!(text.contains("    0000:  62\n"));
        assert!(text.trim_end().ends_with(": end"));
    }
}
