//! Checksumming reader for formats without stored per-entry checksums.
//!
//! Tar stores no content checksum, so the tar reader streams each entry
//! through a `ChecksumReader` to obtain the same CRC-32 fingerprint that zip
//! records in its central directory.

use std::io;
use std::io::Read;

use crc32fast::Hasher;

/// Wrapper reader that computes CRC-32 and byte count of everything read.
///
/// # Examples
///
/// ```
/// use archscope_core::io::ChecksumReader;
/// use std::io::Read;
///
/// let mut reader = ChecksumReader::new(&b"hello"[..]);
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
///
/// assert_eq!(reader.total_bytes(), 5);
/// assert_eq!(reader.checksum(), 0x3610_A686);
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct ChecksumReader<R> {
    /// Inner reader being wrapped
    inner: R,
    /// Running CRC-32 state
    hasher: Hasher,
    /// Total bytes successfully read
    bytes_read: u64,
}

impl<R> ChecksumReader<R> {
    /// Creates a new checksumming reader.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            hasher: Hasher::new(),
            bytes_read: 0,
        }
    }

    /// Returns the total number of bytes read so far.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the CRC-32 of the bytes read so far.
    #[must_use]
    pub fn checksum(&self) -> u32 {
        self.hasher.clone().finalize()
    }
}

impl<R: Read> ChecksumReader<R> {
    /// Reads the inner reader to its end, discarding the data.
    ///
    /// Returns the final `(byte count, CRC-32)`.
    pub fn drain(mut self) -> io::Result<(u64, u32)> {
        io::copy(&mut self, &mut io::sink())?;
        Ok((self.bytes_read, self.hasher.finalize()))
    }
}

impl<R: Read> Read for ChecksumReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes_read += n as u64;
        Ok(n)
    }
}
