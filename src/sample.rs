//! The sample record: one integer, one float, one short text.

use core::fmt;

use rawcast::{ByteSink, ByteSource, Decoder, Encoder, FixedWidth};
use snafu::ensure;

use crate::error::{Result, TextLengthSnafu};

/// Byte length of [`Sample::text`]. The file does not record it.
pub const SAMPLE_TEXT_LEN: usize = 4;

/// A fixed-schema record: `i32`, `f32`, then `SAMPLE_TEXT_LEN` bytes of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Integer field.
    pub int: i32,
    /// Float field.
    pub float: f32,
    /// Text field, exactly `SAMPLE_TEXT_LEN` bytes.
    pub text: String,
}

impl Sample {
    /// Encoded size of one record.
    pub const ENCODED_LEN: usize = i32::WIDTH + f32::WIDTH + SAMPLE_TEXT_LEN;

    /// The record every demo writes: 42, 42.0, "hola".
    pub fn answer() -> Self {
        const ANSWER: i32 = 42;
        Self {
            int: ANSWER,
            float: ANSWER as f32,
            text: "hola".into(),
        }
    }

    /// Append this record to `sink`.
    ///
    /// The text length is checked before anything is written, so a bad
    /// record never leaves a partial one behind.
    pub fn write_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        ensure!(
            self.text.len() == SAMPLE_TEXT_LEN,
            TextLengthSnafu {
                expected: SAMPLE_TEXT_LEN,
                actual: self.text.len(),
            }
        );
        let mut enc = Encoder::new(sink);
        enc.put(&self.int)?.put(&self.float)?.put_text(&self.text)?;
        Ok(enc.written())
    }

    /// Read one record from `source`.
    pub fn read_from<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        let mut dec = Decoder::new(source);
        let int = dec.get()?;
        let float = dec.get()?;
        let text = dec.get_text(SAMPLE_TEXT_LEN)?;
        Ok(Self { int, float, text })
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.int, self.float, self.text)
    }
}
