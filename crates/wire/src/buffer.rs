//! Fixed-capacity output buffer
//!
//! One allocation, sized by the prediction, never grown. The `io::Write`
//! impl refuses any write that would pass capacity instead of reallocating,
//! so an under-prediction surfaces as a hard fault at the offending write
//! rather than as a silently resized buffer.

use std::io::{self, Write};

/// A write-only buffer with an immovable capacity.
#[derive(Debug)]
pub struct FixedBuffer {
    buf: Vec<u8>,
    cap: usize,
    fault: Option<usize>,
}

impl FixedBuffer {
    /// Allocate the full capacity up front.
    pub fn with_capacity(cap: usize) -> Self {
        FixedBuffer {
            buf: Vec::with_capacity(cap),
            cap,
            fault: None,
        }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.buf.len()
    }

    /// The fixed capacity.
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// If a write was refused, the total bytes it would have required.
    pub fn fault(&self) -> Option<usize> {
        self.fault
    }

    /// Consume the buffer, returning the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl Write for FixedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let required = self.buf.len() + data.len();
        if required > self.cap {
            self.fault = Some(required);
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "fixed buffer capacity exceeded",
            ));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_within_capacity() {
        let mut buf = FixedBuffer::with_capacity(4);
        buf.write_all(&[1, 2]).unwrap();
        buf.write_all(&[3, 4]).unwrap();
        assert_eq!(buf.written(), 4);
        assert_eq!(buf.fault(), None);
        assert_eq!(buf.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_overflow_refused_not_grown() {
        let mut buf = FixedBuffer::with_capacity(3);
        buf.write_all(&[1, 2]).unwrap();
        assert!(buf.write_all(&[3, 4]).is_err());
        // the partial record stays as-is, nothing from the refused write lands
        assert_eq!(buf.written(), 2);
        assert_eq!(buf.fault(), Some(4));
    }

    #[test]
    fn test_zero_capacity() {
        let mut buf = FixedBuffer::with_capacity(0);
        assert!(buf.write_all(&[0]).is_err());
        assert_eq!(buf.fault(), Some(1));
    }

    #[test]
    fn test_exact_fill() {
        let mut buf = FixedBuffer::with_capacity(2);
        buf.write_all(&[9, 9]).unwrap();
        assert!(buf.write_all(&[9]).is_err());
    }
}
