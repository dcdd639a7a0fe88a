use alloc::vec::Vec;

use super::{ByteSink, ByteSource};
use crate::Result;

/// Appends to the end of the vector.
impl ByteSink for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        self.extend_from_slice(bytes);
        Ok(bytes.len())
    }
}

/// Fixed capacity sink: fills the slice front to back, then reports full.
impl ByteSink for &mut [u8] {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        let n = self.len().min(bytes.len());
        let (head, tail) = core::mem::take(self).split_at_mut(n);
        head.copy_from_slice(&bytes[..n]);
        *self = tail;
        Ok(n)
    }
}

/// Consumes the slice front to back.
impl ByteSource for &[u8] {
    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.len().min(buf.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        Ok(n)
    }
}

/// In-memory stream with a movable cursor.
///
/// Reads and writes share one cursor. Writing past the end grows the
/// buffer; writing before the end overwrites. Setting the cursor back
/// lets the same bytes be read again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteCursor {
    buf: Vec<u8>,
    pos: usize,
}

impl ByteCursor {
    /// Create an empty cursor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move the cursor. Positions past the end are allowed; reads there
    /// hit end of stream, writes zero-fill the gap.
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Move the cursor back to the start.
    #[inline]
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Bytes left between the cursor and the end.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// All stored bytes, regardless of the cursor.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the cursor and return the stored bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }
}

impl ByteSink for ByteCursor {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        if self.pos > self.buf.len() {
            self.buf.resize(self.pos, 0);
        }
        let overlap = (self.buf.len() - self.pos).min(bytes.len());
        self.buf[self.pos..self.pos + overlap].copy_from_slice(&bytes[..overlap]);
        self.buf.extend_from_slice(&bytes[overlap..]);
        self.pos += bytes.len();
        Ok(bytes.len())
    }
}

impl ByteSource for ByteCursor {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.remaining().min(buf.len());
        if n == 0 {
            return Ok(0);
        }
        buf[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
