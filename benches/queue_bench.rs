//! Benchmarks for cbufrs.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use cbufrs::{Buffer, BufferQueue, ByteOrder};

fn fragmented_queue(total: usize, fragment: usize) -> BufferQueue {
    // Deterministic pseudo-random data
    let data: Vec<u8> = (0..total).map(|i| (i * 7 + 13) as u8).collect();
    data.chunks(fragment).map(Buffer::from).collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let count = 64 * 1024;

    for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
        group.throughput(Throughput::Bytes((count * 4) as u64));
        group.bench_function(format!("u32_{}", order), |b| {
            let mut buf = Buffer::with_capacity(count * 4).unwrap();
            buf.set_order(order);
            b.iter(|| {
                buf.clear();
                for i in 0..count as u32 {
                    buf.put_u32(black_box(i)).unwrap();
                }
                buf.flip();
                let mut sum = 0u64;
                while buf.has_available() {
                    sum += u64::from(buf.get_u32().unwrap());
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_pullup(c: &mut Criterion) {
    let mut group = c.benchmark_group("pullup");
    let total = 1024 * 1024; // 1 MB

    for fragment in [64, 1500, 16 * 1024] {
        group.throughput(Throughput::Bytes(total as u64));
        group.bench_function(format!("frames_of_4k_from_{}b", fragment), |b| {
            b.iter(|| {
                let mut queue = fragmented_queue(total, fragment);
                let mut frames = 0;
                while queue.pullup(4096).is_ok() {
                    let head = queue.peek().unwrap();
                    head.skip(4096).unwrap();
                    frames += 1;
                }
                black_box(frames)
            });
        });
    }

    group.bench_function("pullup_everything", |b| {
        b.iter(|| {
            let mut queue = fragmented_queue(total, 1500);
            queue.pullup(black_box(total)).unwrap();
            black_box(queue.count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_pullup);
criterion_main!(benches);
