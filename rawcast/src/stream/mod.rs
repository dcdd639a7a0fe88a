//! The byte stream boundary.
//!
//! The codec only needs "write these bytes at the cursor, tell me how many
//! you took" and "fill this buffer from the cursor, tell me how many you
//! had". Streams stay owned by the caller; encode and decode calls borrow
//! them for the duration of one call.

mod core_impls;

#[cfg(any(feature = "std", test))]
mod std_impls;

pub use core_impls::ByteCursor;

#[cfg(any(feature = "std", test))]
pub use std_impls::IoStream;

use crate::Result;

/// Destination for encoded bytes.
pub trait ByteSink {
    /// Write as much of `bytes` as the sink accepts at its cursor.
    ///
    /// Returns the number of bytes accepted. `Ok(0)` for a non-empty
    /// `bytes` means the sink is full.
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize>;

    /// Push buffered bytes down to the underlying storage.
    #[inline]
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Origin of encoded bytes.
pub trait ByteSource {
    /// Fill as much of `buf` as the source has, starting at its cursor.
    ///
    /// Returns the number of bytes obtained. `Ok(0)` for a non-empty `buf`
    /// means the stream has ended.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }
}

/// Write all of `bytes`, returning how many the sink took before stopping.
pub(crate) fn drain<S: ByteSink + ?Sized>(sink: &mut S, bytes: &[u8]) -> Result<usize> {
    let mut written = 0;
    while written < bytes.len() {
        match sink.write_bytes(&bytes[written..])? {
            0 => break,
            n => written += n,
        }
    }
    Ok(written)
}

/// Fill all of `buf`, returning how many bytes the source had.
pub(crate) fn fill<S: ByteSource + ?Sized>(source: &mut S, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read_bytes(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}
