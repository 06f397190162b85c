//! Length-prefixed framing over a fragmented byte stream.
//!
//! Run with:
//!     cargo run --example framing

use cbufrs::{Buffer, BufferConfig, BufferQueue, Want};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Encode a few frames: u16 big-endian length, then payload.
    let messages: [&[u8]; 3] = [b"ping", b"a somewhat longer message", b"pong"];
    let mut out = BufferConfig::new(256)?.allocate()?;
    for msg in messages {
        out.put_u16(msg.len() as u16)?;
        out.put_slice(msg)?;
    }
    out.flip();

    println!("Encoded {} bytes:\n", out.available());
    out.dump(&mut std::io::stdout())?;

    // Simulate a transport delivering 5 bytes per read.
    let mut wire = out.to_bytes();
    let mut queue = BufferQueue::new();
    while !wire.is_empty() {
        let mut buf = Buffer::with_capacity(5)?;
        let mut reader: &[u8] = &wire;
        let n = buf.sys_read(&mut reader, Want::Available)?;
        let _ = wire.split_to(n);
        buf.flip();
        queue.enqueue(buf);
    }

    println!("Queued {} fragments\n", queue.count());

    // Decode frames regardless of fragment boundaries.
    while queue.available()? > 0 {
        queue.pullup(2)?;
        let len = queue.peek().ok_or("empty queue")?.get_u16()? as usize;

        queue.pullup(len)?;
        let head = queue.peek().ok_or("empty queue")?;
        let mut payload = vec![0u8; len];
        head.get_slice(&mut payload)?;

        println!(
            "frame: {:>2} bytes {:?} ({} fragments left)",
            len,
            String::from_utf8_lossy(&payload),
            queue.count()
        );

        if queue.peek().is_some_and(|head| !head.has_available()) {
            queue.dequeue();
        }
    }

    Ok(())
}
