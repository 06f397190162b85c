//! [`bytes::Buf`] over the logical stream held by a queue.

use std::io::IoSlice;

use bytes::Buf;

use super::BufferQueue;

impl Buf for BufferQueue {
    fn remaining(&self) -> usize {
        self.bufs
            .iter()
            .fold(0usize, |total, buf| total.saturating_add(buf.available()))
    }

    fn chunk(&self) -> &[u8] {
        self.bufs
            .iter()
            .find(|buf| buf.has_available())
            .map(|buf| buf.remaining_slice())
            .unwrap_or(&[])
    }

    fn chunks_vectored<'a>(&'a self, dst: &mut [IoSlice<'a>]) -> usize {
        let mut filled = 0;
        for buf in self.bufs.iter().filter(|buf| buf.has_available()) {
            let Some(slot) = dst.get_mut(filled) else {
                break;
            };
            *slot = IoSlice::new(buf.remaining_slice());
            filled += 1;
        }
        filled
    }

    /// Consumes `cnt` bytes from the front of the stream, dropping buffers
    /// that become exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `cnt` exceeds [`remaining`](Buf::remaining).
    fn advance(&mut self, mut cnt: usize) {
        while cnt > 0 {
            let Some(head) = self.bufs.front_mut() else {
                panic!("advance past the end of the queue: {} bytes left over", cnt);
            };

            let step = cnt.min(head.available());
            head.consume(step);
            cnt -= step;

            if !head.has_available() {
                self.bufs.pop_front();
            }
        }
    }
}
