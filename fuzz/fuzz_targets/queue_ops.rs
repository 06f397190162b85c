#![no_main]

use libfuzzer_sys::fuzz_target;
use cbufrs::{Buffer, BufferQueue};

fuzz_target!(|data: Vec<u8>| {
    if data.is_empty() {
        return;
    }

    // First byte picks the fragment size; the rest is the stream.
    let fragment = usize::from(data[0] % 16) + 1;
    let stream = &data[1..];

    let mut queue: BufferQueue = stream.chunks(fragment).map(Buffer::from).collect();
    assert_eq!(queue.available().unwrap(), stream.len());

    // Walk the stream using pullups of varying size driven by the data.
    let mut consumed = Vec::with_capacity(stream.len());
    let mut i = 0usize;
    loop {
        let want = usize::from(stream.get(i).copied().unwrap_or(1) % 32) + 1;
        i += 1;

        match queue.pullup(want) {
            Ok(()) => {
                let head = queue.peek().unwrap();
                assert!(head.available() >= want);
                assert!(head.position() <= head.limit());
                assert!(head.limit() <= head.capacity());

                let mut field = vec![0u8; want];
                head.get_slice(&mut field).unwrap();
                consumed.extend_from_slice(&field);
            }
            Err(_) => {
                // Fewer than `want` bytes left: the rest must still be intact.
                let total = queue.available().unwrap();
                assert!(total < want);
                while let Some(buf) = queue.dequeue() {
                    consumed.extend_from_slice(buf.remaining_slice());
                }
                break;
            }
        }
    }

    assert_eq!(consumed, stream);
});
