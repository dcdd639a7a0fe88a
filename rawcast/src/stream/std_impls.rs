use std::io::{self, Read, Seek, SeekFrom, Write};

use super::{ByteSink, ByteSource};
use crate::Result;

/// Adapts a `std::io` reader or writer (a `File`, a `BufWriter`, a
/// socket) into a byte stream.
///
/// Interrupted calls are retried. Any other I/O error becomes
/// [`CodecError::StreamUnavailable`](crate::CodecError::StreamUnavailable).
/// The stream closes when the adapter (or the value returned by
/// [`into_inner`](Self::into_inner)) is dropped.
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
}

impl<T> IoStream<T> {
    /// Wrap an I/O stream.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Get a reference to the wrapped stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Get a mutable reference to the wrapped stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the adapter and return the wrapped stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Seek> IoStream<T> {
    /// Move the cursor back to the start of the stream.
    pub fn rewind(&mut self) -> Result<()> {
        self.inner.rewind()?;
        Ok(())
    }

    /// Move the cursor to an absolute byte offset.
    pub fn seek_to(&mut self, offset: u64) -> Result<u64> {
        Ok(self.inner.seek(SeekFrom::Start(offset))?)
    }

    /// Current cursor position.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }
}

impl<T: Write> ByteSink for IoStream<T> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        loop {
            match self.inner.write(bytes) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                res => return Ok(res?),
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

impl<T: Read> ByteSource for IoStream<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                res => return Ok(res?),
            }
        }
    }
}
