//! Pullup: coalescing the head of a queue into one contiguous run.
//!
//! Fields that straddle a buffer boundary cannot be decoded with a single
//! buffer's codec operations. Pullup copies bytes from the buffers behind
//! the head into the head, growing it when it is too small, until the head
//! alone holds at least the requested number of unread bytes.
//!
//! # Termination
//!
//! Every pass that does not return either drains the second buffer (and
//! removes it, shrinking the queue by one) or fills the head up to its
//! capacity, which was grown to fit `min_contig` unread bytes; the next pass
//! then succeeds. So the loop runs at most `count() - 1` merging passes.

use tracing::debug;

use super::BufferQueue;
use crate::buffer::Buffer;
use crate::error::{BufferError, Result};
use crate::util::checked_add;

impl BufferQueue {
    /// Ensures the head buffer holds at least `min_contig` unread bytes.
    ///
    /// Bytes are moved from later buffers into the head buffer; buffers
    /// emptied by the move are dropped. The head buffer grows only when its
    /// storage cannot fit `min_contig` bytes after its position, and never
    /// shrinks. Bytes the consumer already read from the head stay skipped.
    ///
    /// Requesting 0 bytes always succeeds.
    ///
    /// # Errors
    ///
    /// - [`BufferError::NoData`] if the queue holds fewer than `min_contig`
    ///   bytes in total. The logical byte stream is unchanged, although
    ///   bytes may have been merged into the head.
    /// - [`BufferError::AllocationFailure`] or [`BufferError::Overflow`] if
    ///   the head buffer cannot grow.
    ///
    /// # Example
    ///
    /// ```
    /// use cbufrs::{Buffer, BufferQueue};
    ///
    /// let mut queue = BufferQueue::new();
    /// for part in [&b"abc"[..], b"def", b"ghi"] {
    ///     queue.enqueue(Buffer::from(part));
    /// }
    ///
    /// queue.pullup(7)?;
    /// let head = queue.peek().unwrap();
    /// assert!(head.available() >= 7);
    /// assert_eq!(&head.remaining_slice()[..7], b"abcdefg");
    /// # Ok::<(), cbufrs::BufferError>(())
    /// ```
    pub fn pullup(&mut self, min_contig: usize) -> Result<()> {
        if min_contig == 0 {
            return Ok(());
        }

        loop {
            let mut bufs = self.bufs.iter_mut();

            let Some(head) = bufs.next() else {
                return Err(BufferError::NoData {
                    requested: min_contig,
                    available: 0,
                });
            };

            if head.available() >= min_contig {
                return Ok(());
            }

            let Some(next) = bufs.next() else {
                return Err(BufferError::NoData {
                    requested: min_contig,
                    available: head.available(),
                });
            };

            let room = checked_add(head.available(), head.unused(), "pullup room")?;
            if room < min_contig {
                // Bytes before the position still occupy storage.
                let target = checked_add(head.position(), min_contig, "pullup target")?;
                debug!(from = head.capacity(), to = target, "growing queue head");
                head.extend(target)?;
            }

            let read_position = head.position();
            head.resume();
            let moved = Buffer::copy(next, head);
            let drained = !next.has_available();
            head.flip();
            head.set_position(read_position)?;

            debug!(
                moved,
                drained,
                head_available = head.available(),
                "pullup merged"
            );

            if drained {
                self.bufs.remove(1);
            }
        }
    }
}
