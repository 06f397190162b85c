//! Hex-dump diagnostics.

use std::fmt;
use std::io;

use super::Buffer;

/// Bytes rendered per hex-dump row.
const BYTES_PER_ROW: usize = 8;

impl Buffer {
    /// Writes a hex dump of the buffer to `out`.
    ///
    /// The output is a header line with the cursors followed by the valid
    /// region `[0, limit)` in rows of eight bytes. It is meant for humans
    /// and its exact layout is not a stable interface.
    ///
    /// ```text
    /// buffer[0x7ffd5c1e2a40]: pos        0 lim        3 cap        8
    ///     0000:  61 62 63
    /// ```
    pub fn dump<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "buffer[{:p}]: pos {:>8} lim {:>8} cap {:>8}",
            self,
            self.position,
            self.limit,
            self.capacity()
        )?;

        for (row, bytes) in self.as_slice().chunks(BYTES_PER_ROW).enumerate() {
            write!(f, "    {:04x}: ", row * BYTES_PER_ROW)?;
            for byte in bytes {
                write!(f, " {:02x}", byte)?;
            }
            writeln!(f)?;
        }

        writeln!(f)
    }
}
