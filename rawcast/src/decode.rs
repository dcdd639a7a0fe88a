use alloc::{string::String, vec::Vec};

use log::{debug, trace};
use zerocopy::{FromZeros, IntoBytes};

use crate::stream::{ByteSource, fill};
use crate::{CodecError, FixedWidth, Result};

/// Read `T::WIDTH` bytes from `source` and reinterpret them as a `T`.
///
/// Fails with [`CodecError::ShortRead`] if the source ends first; the
/// bytes read up to that point are dropped.
pub fn decode<T, S>(source: &mut S) -> Result<T>
where
    T: FixedWidth,
    S: ByteSource + ?Sized,
{
    match try_decode(source)? {
        Some(value) => Ok(value),
        None => Err(CodecError::ShortRead {
            needed: T::WIDTH,
            available: 0,
        }),
    }
}

/// Like [`decode`], but a source with no bytes left yields `Ok(None)`.
///
/// A source that ends partway through the value is still an error.
pub fn try_decode<T, S>(source: &mut S) -> Result<Option<T>>
where
    T: FixedWidth,
    S: ByteSource + ?Sized,
{
    let mut value = T::new_zeroed();
    let available = fill(source, value.as_mut_bytes())?;
    if available == T::WIDTH {
        trace!("decoded {} ({available} bytes)", core::any::type_name::<T>());
        return Ok(Some(value));
    }
    if available == 0 {
        return Ok(None);
    }
    debug!(
        "short read: {available} of {} bytes for {}",
        T::WIDTH,
        core::any::type_name::<T>()
    );
    Err(CodecError::ShortRead {
        needed: T::WIDTH,
        available,
    })
}

/// Read exactly `len` bytes of UTF-8 text.
///
/// The stream does not record text lengths, so `len` has to come from
/// the caller. `len == 0` succeeds with an empty string.
pub fn decode_text<S: ByteSource + ?Sized>(source: &mut S, len: usize) -> Result<String> {
    let bytes = decode_bytes(source, len)?;
    String::from_utf8(bytes).map_err(|e| CodecError::InvalidText {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Largest step `decode_bytes` grows its buffer by before the source
/// has produced the bytes to fill it.
const READ_CHUNK: usize = 8 * 1024;

/// Read exactly `len` raw bytes.
///
/// Memory grows with what the source produces, not with `len`, so an
/// oversized length fails with [`CodecError::ShortRead`] instead of
/// allocating it up front.
pub fn decode_bytes<S: ByteSource + ?Sized>(source: &mut S, len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    while buf.len() < len {
        let start = buf.len();
        let step = (len - start).min(READ_CHUNK);
        buf.resize(start + step, 0);
        let got = fill(source, &mut buf[start..])?;
        buf.truncate(start + got);
        if got < step {
            break;
        }
    }
    let available = buf.len();
    if available < len {
        debug!("short read: {available} of {len} bytes");
        return Err(CodecError::ShortRead {
            needed: len,
            available,
        });
    }
    trace!("decoded {len} bytes");
    Ok(buf)
}

/// Reads a sequence of values from one borrowed source.
///
/// ```
/// use rawcast::{Decoder, Encoder};
///
/// let mut stream = Vec::new();
/// Encoder::new(&mut stream).put(&7i32)?.put_text("seven")?;
///
/// let mut source = stream.as_slice();
/// let mut dec = Decoder::new(&mut source);
/// assert_eq!(dec.get::<i32>()?, 7);
/// assert_eq!(dec.get_text(5)?, "seven");
/// assert_eq!(dec.try_get::<i32>()?, None);
/// # Ok::<(), rawcast::CodecError>(())
/// ```
#[derive(Debug)]
pub struct Decoder<'s, S: ?Sized> {
    source: &'s mut S,
    consumed: usize,
}

impl<'s, S: ByteSource + ?Sized> Decoder<'s, S> {
    /// Borrow `source` for a sequence of reads.
    pub fn new(source: &'s mut S) -> Self {
        Self {
            source,
            consumed: 0,
        }
    }

    /// Read a fixed-width value.
    pub fn get<T: FixedWidth>(&mut self) -> Result<T> {
        let value = decode(&mut *self.source)?;
        self.consumed += T::WIDTH;
        Ok(value)
    }

    /// Read a fixed-width value, or `None` at a clean end of stream.
    pub fn try_get<T: FixedWidth>(&mut self) -> Result<Option<T>> {
        let value = try_decode::<T, _>(&mut *self.source)?;
        if value.is_some() {
            self.consumed += T::WIDTH;
        }
        Ok(value)
    }

    /// Read `len` bytes of text.
    pub fn get_text(&mut self, len: usize) -> Result<String> {
        let text = decode_text(&mut *self.source, len)?;
        self.consumed += len;
        Ok(text)
    }

    /// Read `len` raw bytes.
    pub fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let bytes = decode_bytes(&mut *self.source, len)?;
        self.consumed += len;
        Ok(bytes)
    }

    /// Bytes consumed through this decoder so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}
