//! Fixed-width integer codecs.
//!
//! Every `put_*` writes at the position and every `get_*` reads from it;
//! both advance the position by the width of the type. Values wider than
//! one byte are converted to or from the buffer's [`ByteOrder`].

use super::{Buffer, ByteOrder};
use crate::error::{BufferError, Result};

macro_rules! int_codec {
    ($($ty:ty => $put:ident, $get:ident;)*) => {
        $(
            #[doc = concat!(
                "Writes a `", stringify!($ty), "` at the position in the buffer's byte order.\n\n",
                "Fails with [`BufferError::OutOfSpace`] if fewer than `size_of::<",
                stringify!($ty), ">()` bytes are available."
            )]
            pub fn $put(&mut self, val: $ty) -> Result<()> {
                let bytes = match self.order {
                    ByteOrder::BigEndian => val.to_be_bytes(),
                    ByteOrder::LittleEndian => val.to_le_bytes(),
                };
                self.put_slice(&bytes)
            }

            #[doc = concat!(
                "Reads a `", stringify!($ty), "` at the position in the buffer's byte order.\n\n",
                "Fails with [`BufferError::OutOfSpace`] if fewer than `size_of::<",
                stringify!($ty), ">()` bytes are available."
            )]
            pub fn $get(&mut self) -> Result<$ty> {
                let mut bytes = [0u8; size_of::<$ty>()];
                self.get_slice(&mut bytes)?;
                Ok(match self.order {
                    ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                })
            }
        )*
    };
}

impl Buffer {
    int_codec! {
        u8 => put_u8, get_u8;
        u16 => put_u16, get_u16;
        u32 => put_u32, get_u32;
        u64 => put_u64, get_u64;
        i8 => put_i8, get_i8;
        i16 => put_i16, get_i16;
        i32 => put_i32, get_i32;
        i64 => put_i64, get_i64;
    }

    /// Writes `src` at the position and advances past it.
    ///
    /// Fails with [`BufferError::OutOfSpace`] if `src` does not fit in the
    /// available region; nothing is written in that case.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<()> {
        let available = self.available();
        if src.len() > available {
            return Err(BufferError::out_of_space(src.len(), available));
        }

        let start = self.position;
        self.data[start..start + src.len()].copy_from_slice(src);
        self.position += src.len();
        Ok(())
    }

    /// Fills `dst` from the position and advances past the bytes read.
    ///
    /// Fails with [`BufferError::OutOfSpace`] if fewer than `dst.len()`
    /// bytes are available; nothing is read in that case.
    pub fn get_slice(&mut self, dst: &mut [u8]) -> Result<()> {
        let available = self.available();
        if dst.len() > available {
            return Err(BufferError::out_of_space(dst.len(), available));
        }

        let start = self.position;
        dst.copy_from_slice(&self.data[start..start + dst.len()]);
        self.position += dst.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_u16_big_endian_layout() {
        let mut buf = Buffer::with_capacity(4).unwrap();
        buf.put_u16(0x0102).unwrap();
        buf.put_u16(0x0102).unwrap();

        assert_eq!(buf.as_slice(), &[0x01, 0x02, 0x01, 0x02]);

        buf.flip();
        assert_eq!(buf.get_u16().unwrap(), 0x0102);
        assert_eq!(buf.get_u16().unwrap(), 0x0102);
        assert_eq!(buf.available(), 0);
    }

    #[test]
    fn test_u32_little_endian_layout() {
        let mut buf = Buffer::with_capacity(4).unwrap();
        buf.set_order(ByteOrder::LittleEndian);
        buf.put_u32(0x0102_0304).unwrap();

        assert_eq!(buf.as_slice(), &[0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_u32_round_trip_both_orders() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            for val in [0u32, 1, 0x7fff_ffff, 0xffff_ffff] {
                let mut buf = Buffer::with_capacity(4).unwrap();
                buf.set_order(order);
                buf.put_u32(val).unwrap();
                buf.flip();
                assert_eq!(buf.get_u32().unwrap(), val, "order {}", order);
            }
        }
    }

    #[test]
    fn test_signed_values() {
        let mut buf = Buffer::with_capacity(15).unwrap();
        buf.put_i8(-1).unwrap();
        buf.put_i16(-2).unwrap();
        buf.put_i32(i32::MIN).unwrap();
        buf.put_i64(-42).unwrap();
        buf.flip();

        assert_eq!(buf.get_i8().unwrap(), -1);
        assert_eq!(buf.get_i16().unwrap(), -2);
        assert_eq!(buf.get_i32().unwrap(), i32::MIN);
        assert_eq!(buf.get_i64().unwrap(), -42);
    }

    #[test]
    fn test_u64_big_endian_layout() {
        let mut buf = Buffer::with_capacity(8).unwrap();
        buf.put_u64(0x0102_0304_0506_0708).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_put_out_of_space_leaves_cursor() {
        let mut buf = Buffer::with_capacity(3).unwrap();
        buf.put_u8(7).unwrap();

        let err = buf.put_u32(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfSpace);
        assert_eq!(buf.position(), 1);
    }

    #[test]
    fn test_get_out_of_space_leaves_cursor() {
        let mut buf = Buffer::from(vec![0xff; 7]);

        let err = buf.get_u64().unwrap_err();
        match err {
            BufferError::OutOfSpace {
                requested,
                available,
            } => {
                assert_eq!(requested, 8);
                assert_eq!(available, 7);
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(buf.position(), 0);
    }

    #[test]
    fn test_order_change_mid_stream() {
        let mut buf = Buffer::with_capacity(4).unwrap();
        buf.put_u16(0xabcd).unwrap();
        buf.set_order(ByteOrder::LittleEndian);
        buf.put_u16(0xabcd).unwrap();

        assert_eq!(buf.as_slice(), &[0xab, 0xcd, 0xcd, 0xab]);
    }

    #[test]
    fn test_slices() {
        let mut buf = Buffer::with_capacity(5).unwrap();
        buf.put_slice(b"hello").unwrap();
        assert!(buf.put_slice(b"!").is_err());
        buf.flip();

        let mut out = [0u8; 5];
        buf.get_slice(&mut out).unwrap();
        assert_eq!(&out, b"hello");
    }
}
