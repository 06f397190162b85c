//! Pumping bytes through an in-memory tokio pipe with the poll adapters.
//!
//! Run with:
//!     cargo run --example async_pump --features async-io

use std::pin::Pin;

use cbufrs::{Buffer, BufferQueue, Want};
use futures_util::future::poll_fn;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (client, server) = tokio::io::duplex(16);
    let mut client = client.compat();
    let mut server = server.compat();

    let writer = tokio::spawn(async move {
        let mut out = Buffer::with_capacity(64)?;
        for i in 0..8u32 {
            out.put_u32(i * 1000)?;
        }
        out.flip();

        while out.has_available() {
            let n = poll_fn(|cx| out.poll_sys_write(cx, Pin::new(&mut client), Want::Available))
                .await?;
            println!("sent {} bytes", n);
        }
        Ok::<(), cbufrs::BufferError>(())
    });

    let mut queue = BufferQueue::new();
    loop {
        let mut buf = Buffer::with_capacity(7)?;
        let n = poll_fn(|cx| buf.poll_sys_read(cx, Pin::new(&mut server), Want::Available))
            .await?;
        if n == 0 {
            break;
        }
        buf.flip();
        queue.enqueue(buf);
    }
    writer.await??;

    println!("received {} bytes in {} buffers", queue.available()?, queue.count());

    while queue.pullup(4).is_ok() {
        let head = queue.peek().ok_or("empty queue")?;
        println!("value: {}", head.get_u32()?);
    }

    Ok(())
}
