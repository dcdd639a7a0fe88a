use log::{debug, trace};
use zerocopy::IntoBytes;

use crate::stream::{ByteSink, drain};
use crate::{CodecError, FixedWidth, Result};

/// Append the in-memory bytes of `value` to `sink`, in host byte order.
///
/// Writes exactly `T::WIDTH` bytes and returns that count.
pub fn encode<T, S>(sink: &mut S, value: &T) -> Result<usize>
where
    T: FixedWidth,
    S: ByteSink + ?Sized,
{
    let n = put_all(sink, value.as_bytes())?;
    trace!("encoded {} ({n} bytes)", core::any::type_name::<T>());
    Ok(n)
}

/// Append the UTF-8 bytes of `text` to `sink`, verbatim.
///
/// No length prefix and no terminator are written: a reader needs
/// `text.len()` from somewhere else to decode it.
pub fn encode_text<S: ByteSink + ?Sized>(sink: &mut S, text: &str) -> Result<usize> {
    let n = put_all(sink, text.as_bytes())?;
    trace!("encoded text ({n} bytes)");
    Ok(n)
}

/// Append raw bytes to `sink`, verbatim.
pub fn encode_bytes<S: ByteSink + ?Sized>(sink: &mut S, bytes: &[u8]) -> Result<usize> {
    put_all(sink, bytes)
}

fn put_all<S: ByteSink + ?Sized>(sink: &mut S, bytes: &[u8]) -> Result<usize> {
    let written = drain(sink, bytes)?;
    if written < bytes.len() {
        debug!("short write: {written} of {} bytes accepted", bytes.len());
        return Err(CodecError::ShortWrite {
            needed: bytes.len(),
            written,
        });
    }
    Ok(written)
}

/// Writes a sequence of values to one borrowed sink.
///
/// ```
/// use rawcast::Encoder;
///
/// let mut stream = Vec::new();
/// let mut enc = Encoder::new(&mut stream);
/// enc.put(&1u16)?.put(&2.5f64)?.put_text("abc")?;
/// assert_eq!(enc.written(), 13);
/// # Ok::<(), rawcast::CodecError>(())
/// ```
#[derive(Debug)]
pub struct Encoder<'s, S: ?Sized> {
    sink: &'s mut S,
    written: usize,
}

impl<'s, S: ByteSink + ?Sized> Encoder<'s, S> {
    /// Borrow `sink` for a sequence of writes.
    pub fn new(sink: &'s mut S) -> Self {
        Self { sink, written: 0 }
    }

    /// Write a fixed-width value.
    pub fn put<T: FixedWidth>(&mut self, value: &T) -> Result<&mut Self> {
        self.written += encode(&mut *self.sink, value)?;
        Ok(self)
    }

    /// Write text without a length prefix.
    pub fn put_text(&mut self, text: &str) -> Result<&mut Self> {
        self.written += encode_text(&mut *self.sink, text)?;
        Ok(self)
    }

    /// Write raw bytes.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.written += encode_bytes(&mut *self.sink, bytes)?;
        Ok(self)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Bytes written through this encoder so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.written
    }
}
