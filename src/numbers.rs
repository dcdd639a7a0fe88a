//! Integer list files: `i32` values back to back until end of file.

use log::{debug, warn};
use rawcast::{ByteSink, ByteSource, Decoder, Encoder};

use crate::Result;

/// Append every number to `sink`. Returns how many were written.
pub fn write_numbers<S, I>(sink: &mut S, numbers: I) -> Result<usize>
where
    S: ByteSink + ?Sized,
    I: IntoIterator<Item = i32>,
{
    let mut enc = Encoder::new(sink);
    let mut count = 0;
    for n in numbers {
        enc.put(&n)?;
        count += 1;
    }
    debug!("wrote {count} numbers ({} bytes)", enc.written());
    Ok(count)
}

/// Read numbers until the stream ends.
///
/// Each stored value is read exactly once. A trailing fragment shorter
/// than one number is an error, not a silent drop.
pub fn read_numbers<S: ByteSource + ?Sized>(source: &mut S) -> Result<Vec<i32>> {
    let mut dec = Decoder::new(source);
    let mut numbers = Vec::new();
    while let Some(n) = dec.try_get::<i32>()? {
        numbers.push(n);
    }
    debug!("read {} numbers", numbers.len());
    Ok(numbers)
}

/// Parse whitespace separated integers.
///
/// Parsing stops at the first token that is not an `i32`; everything
/// after it is ignored.
pub fn parse_numbers(text: &str) -> Vec<i32> {
    let mut numbers = Vec::new();
    for token in text.split_whitespace() {
        match token.parse() {
            Ok(n) => numbers.push(n),
            Err(_) => {
                warn!("stopping at non-integer input {token:?}");
                break;
            }
        }
    }
    numbers
}
