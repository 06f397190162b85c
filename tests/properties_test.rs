// Property tests for buffer and queue invariants
// Tests cover: 0 <= position <= limit <= capacity under arbitrary operation
// sequences, and pullup preserving the logical byte stream

use cbufrs::{Buffer, BufferQueue, ByteOrder};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    SetPosition(usize),
    SetLimit(usize),
    Skip(usize),
    Clear,
    Flip,
    Rewind,
    Resume,
    Compact,
    Extend(usize),
    Shrink,
    PutU16(u16),
    PutU64(u64),
    GetU32,
    GetI8,
    SetOrder(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..80).prop_map(Op::SetPosition),
        (0usize..80).prop_map(Op::SetLimit),
        (0usize..40).prop_map(Op::Skip),
        Just(Op::Clear),
        Just(Op::Flip),
        Just(Op::Rewind),
        Just(Op::Resume),
        Just(Op::Compact),
        (0usize..96).prop_map(Op::Extend),
        Just(Op::Shrink),
        any::<u16>().prop_map(Op::PutU16),
        any::<u64>().prop_map(Op::PutU64),
        Just(Op::GetU32),
        Just(Op::GetI8),
        any::<bool>().prop_map(Op::SetOrder),
    ]
}

fn apply(buf: &mut Buffer, op: &Op) {
    // Failures are fine; corrupting the cursors is not.
    let _ = match *op {
        Op::SetPosition(p) => buf.set_position(p),
        Op::SetLimit(l) => buf.set_limit(l),
        Op::Skip(n) => buf.skip(n),
        Op::Clear => {
            buf.clear();
            Ok(())
        }
        Op::Flip => {
            buf.flip();
            Ok(())
        }
        Op::Rewind => {
            buf.rewind();
            Ok(())
        }
        Op::Resume => {
            buf.resume();
            Ok(())
        }
        Op::Compact => {
            buf.compact();
            Ok(())
        }
        Op::Extend(n) => buf.extend(n),
        Op::Shrink => buf.shrink(),
        Op::PutU16(v) => buf.put_u16(v),
        Op::PutU64(v) => buf.put_u64(v),
        Op::GetU32 => buf.get_u32().map(|_| ()),
        Op::GetI8 => buf.get_i8().map(|_| ()),
        Op::SetOrder(big) => {
            buf.set_order(if big {
                ByteOrder::BigEndian
            } else {
                ByteOrder::LittleEndian
            });
            Ok(())
        }
    };
}

proptest! {
    #[test]
    fn cursor_invariant_holds(capacity in 0usize..64, ops in prop::collection::vec(op(), 0..64)) {
        let mut buf = Buffer::with_capacity(capacity).unwrap();
        for op in &ops {
            apply(&mut buf, op);
            prop_assert!(buf.position() <= buf.limit(), "after {:?}: {:?}", op, buf);
            prop_assert!(buf.limit() <= buf.capacity(), "after {:?}: {:?}", op, buf);
            prop_assert_eq!(buf.available(), buf.limit() - buf.position());
            prop_assert_eq!(buf.unused(), buf.capacity() - buf.limit());
        }
    }

    #[test]
    fn compact_moves_unread_region(data in prop::collection::vec(any::<u8>(), 0..64), a in 0usize..64, b in 0usize..64) {
        let mut buf = Buffer::from(data.clone());
        let limit = a.min(data.len());
        let position = b.min(limit);
        buf.set_limit(limit).unwrap();
        buf.set_position(position).unwrap();

        buf.compact();

        if position != 0 && position != limit {
            prop_assert_eq!(buf.position(), 0);
            prop_assert_eq!(buf.limit(), limit - position);
        }
        prop_assert_eq!(buf.remaining_slice(), &data[position..limit]);
    }

    #[test]
    fn pullup_preserves_stream(
        parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 0..8),
        min_contig in 0usize..96,
    ) {
        let expected: Vec<u8> = parts.concat();
        let mut queue: BufferQueue = parts.iter().map(|p| Buffer::from(p.clone())).collect();

        let result = queue.pullup(min_contig);

        prop_assert_eq!(queue.available().unwrap(), expected.len());
        if min_contig <= expected.len() {
            prop_assert!(result.is_ok());
            if min_contig > 0 {
                prop_assert!(queue.peek().unwrap().available() >= min_contig);
            }
        } else {
            prop_assert!(result.is_err());
        }

        let actual: Vec<u8> = queue
            .drain()
            .flat_map(|buf| buf.remaining_slice().to_vec())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn signed_round_trip(v in any::<i64>(), big in any::<bool>()) {
        let mut buf = Buffer::with_capacity(8).unwrap();
        buf.set_order(if big { ByteOrder::BigEndian } else { ByteOrder::LittleEndian });
        buf.put_i64(v).unwrap();
        buf.flip();
        prop_assert_eq!(buf.get_i64().unwrap(), v);
    }
}
