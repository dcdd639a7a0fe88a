//! Unframed binary encoding of fixed-width values and text.
//!
//! Values are written to a byte stream back to back, with no header, no
//! tags and no length prefixes. A reader has to know the sequence of types
//! (and the byte length of every text field) to get them back.
//!
//! Fixed-width values go through [`encode`]/[`decode`], which copy the
//! value's in-memory bytes in host byte order. Text goes through
//! [`encode_text`]/[`decode_text`], where the reader supplies the length.
//!
//! ```
//! use rawcast::{decode, decode_text, encode, encode_text};
//!
//! let mut stream = Vec::new();
//! encode(&mut stream, &42i32).unwrap();
//! encode(&mut stream, &42.0f32).unwrap();
//! encode_text(&mut stream, "hola").unwrap();
//! assert_eq!(stream.len(), 12);
//!
//! let mut source = stream.as_slice();
//! assert_eq!(decode::<i32, _>(&mut source).unwrap(), 42);
//! assert_eq!(decode::<f32, _>(&mut source).unwrap(), 42.0);
//! assert_eq!(decode_text(&mut source, 4).unwrap(), "hola");
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod fixed;
mod stream;

pub use decode::{Decoder, decode, decode_bytes, decode_text, try_decode};
pub use encode::{Encoder, encode, encode_bytes, encode_text};
pub use error::{CodecError, Result};
pub use fixed::FixedWidth;
pub use stream::{ByteCursor, ByteSink, ByteSource};

#[cfg(any(feature = "std", test))]
pub use stream::IoStream;

/// Explicit byte order wrappers (`U32<LittleEndian>` and friends).
///
/// These are fixed-width values whose layout does not depend on the host,
/// for streams that have to move between machines.
pub use zerocopy::byteorder;

// zerocopy derives for opting user structs into `FixedWidth`.
pub use zerocopy::{FromBytes as ZcFromBytes, Immutable, IntoBytes, KnownLayout};

#[cfg(test)]
mod tests;
