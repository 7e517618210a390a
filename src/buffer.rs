//! Growable byte buffer shared by the input loop and the renderer.

use std::io::{self, ErrorKind, Read};

/// Capacity step used for rendered output
pub const OUTPUT_UNIT: usize = 64;

/// Default read increment for input
pub const READ_UNIT: usize = 1024;

/// Owned byte sequence that grows geometrically from a fixed unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
    unit: usize,
}

impl Buffer {
    pub fn new(unit: usize) -> Self {
        let unit = unit.max(1);
        Self {
            data: Vec::with_capacity(unit),
            unit,
        }
    }

    /// Make room for at least `needed` bytes, doubling from the current capacity
    pub fn grow(&mut self, needed: usize) {
        let capacity = self.data.capacity();
        if capacity >= needed {
            return;
        }

        let mut target = capacity.max(self.unit);
        while target < needed {
            target *= 2;
        }
        self.data.reserve_exact(target - self.data.len());
    }

    /// Append a run of bytes
    pub fn put(&mut self, bytes: &[u8]) {
        self.grow(self.data.len() + bytes.len());
        self.data.extend_from_slice(bytes);
    }

    /// Append a single byte
    pub fn putc(&mut self, byte: u8) {
        self.grow(self.data.len() + 1);
        self.data.push(byte);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Read `reader` to exhaustion in `unit`-sized increments.
    ///
    /// The buffer is grown ahead of every read so a read never lands past
    /// the current capacity. Returns the number of bytes read.
    pub fn fill_from<R: Read>(&mut self, mut reader: R) -> io::Result<usize> {
        let start = self.data.len();
        self.grow(start + self.unit);

        loop {
            let filled = self.data.len();
            let capacity = self.data.capacity();
            self.data.resize(capacity, 0);

            let read = match reader.read(&mut self.data[filled..]) {
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => {
                    self.data.truncate(filled);
                    continue;
                }
                Err(e) => {
                    self.data.truncate(filled);
                    return Err(e);
                }
            };
            self.data.truncate(filled + read);

            if read == 0 {
                break;
            }
            self.grow(self.data.len() + self.unit);
        }

        Ok(self.data.len() - start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out at most `chunk` bytes per call
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn test_put_appends_bytes() {
        let mut buf = Buffer::new(4);
        buf.put(b"abc");
        buf.putc(b'd');
        buf.put(b"efgh");
        assert_eq!(buf.as_bytes(), b"abcdefgh");
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn test_grow_is_geometric() {
        let mut buf = Buffer::new(4);
        buf.grow(5);
        assert!(buf.data.capacity() >= 8);
        buf.grow(33);
        assert!(buf.data.capacity() >= 33);
        assert!(buf.len() <= buf.data.capacity());
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buf = Buffer::new(OUTPUT_UNIT);
        assert!(buf.is_empty());
        assert!(buf.data.capacity() >= OUTPUT_UNIT);
    }

    #[test]
    fn test_fill_from_reads_everything() {
        let input: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let mut buf = Buffer::new(16);
        let read = buf
            .fill_from(Trickle {
                data: &input,
                chunk: 7,
            })
            .unwrap();

        assert_eq!(read, input.len());
        assert_eq!(buf.as_bytes(), input.as_slice());
    }

    #[test]
    fn test_fill_from_empty_reader() {
        let mut buf = Buffer::new(READ_UNIT);
        let read = buf.fill_from(io::empty()).unwrap();
        assert_eq!(read, 0);
        assert!(buf.is_empty());
    }
}
