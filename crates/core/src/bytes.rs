//! Byte-slice helpers
//!
//! Two unrelated concerns live here because both are about raw bytes:
//!
//! - [`pretty`]: human-readable rendering of arbitrary byte slices for
//!   diagnostics (`Display` impls, log lines)
//! - [`vint_len`] / [`write_vint`]: the variable-width length encoding the
//!   server's serialization layer uses for region names

use byteorder::WriteBytesExt;
use std::io::{self, Write};

/// How many bytes of a slice [`pretty`] renders before truncating.
const PRETTY_LIMIT: usize = 128;

/// Render a byte slice for diagnostics.
///
/// Printable ASCII passes through unchanged, everything else becomes a
/// `\xNN` escape. The result is wrapped in double quotes, and slices longer
/// than 128 bytes are truncated with a trailing `...`.
pub fn pretty(bytes: &[u8]) -> String {
    let shown = &bytes[..bytes.len().min(PRETTY_LIMIT)];
    let mut out = String::with_capacity(shown.len() + 2);
    out.push('"');
    for &b in shown {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\x{:02X}", b)),
        }
    }
    out.push('"');
    if bytes.len() > PRETTY_LIMIT {
        out.push_str("...");
    }
    out
}

/// Number of bytes [`write_vint`] produces for `n`.
///
/// Values `0..=127` fit in a single byte; larger values take a marker byte
/// plus the big-endian bytes of the value (2 to 5 bytes total).
pub fn vint_len(n: u32) -> usize {
    if n <= 127 {
        1
    } else {
        1 + payload_bytes(n)
    }
}

/// Write `n` in the variable-width integer encoding.
///
/// Values `0..=127` are written as-is in one byte. Larger values get a
/// negative marker byte encoding the payload width, followed by that many
/// big-endian bytes.
pub fn write_vint<W: Write>(w: &mut W, n: u32) -> io::Result<()> {
    if n <= 127 {
        return w.write_u8(n as u8);
    }
    let nbytes = payload_bytes(n);
    w.write_u8((-(112 + nbytes as i32)) as u8)?;
    for idx in (0..nbytes).rev() {
        w.write_u8((n >> (idx * 8)) as u8)?;
    }
    Ok(())
}

/// Minimum big-endian bytes needed to hold `n` (for `n > 127`).
fn payload_bytes(n: u32) -> usize {
    4 - (n.leading_zeros() / 8) as usize
}


#[cfg(test)]
mod vint_tests {
    use super::*;

    fn encode(n: u32) -> Vec<u8> {
        let mut out = Vec::new();
        write_vint(&mut out, n).unwrap();
        out
    }

    #[test]
    fn test_single_byte_range() {
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(1), vec![0x01]);
        assert_eq!(encode(127), vec![0x7f]);
    }

    #[test]
    fn test_two_byte_range() {
        assert_eq!(encode(128), vec![0x8f, 0x80]);
        assert_eq!(encode(255), vec![0x8f, 0xff]);
    }

    #[test]
    fn test_three_byte_range() {
        assert_eq!(encode(256), vec![0x8e, 0x01, 0x00]);
        assert_eq!(encode(32767), vec![0x8e, 0x7f, 0xff]);
        assert_eq!(encode(65535), vec![0x8e, 0xff, 0xff]);
    }

    #[test]
    fn test_wider_values() {
        assert_eq!(encode(65536), vec![0x8d, 0x01, 0x00, 0x00]);
        assert_eq!(encode(u32::MAX), vec![0x8c, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_len_matches_written_bytes() {
        for n in [0, 1, 127, 128, 255, 256, 32767, 32768, 65535, 65536, u32::MAX] {
            assert_eq!(vint_len(n), encode(n).len(), "length mismatch for {}", n);
        }
    }
}
