//! Fixed-width values: types whose encoding is their in-memory bytes.
//!
//! zerocopy proves the layout facts (no padding, every bit pattern valid,
//! size known at compile time). The marker trait on top keeps the set of
//! encodable types explicit, so a text descriptor or a pointer-carrying
//! type can never slip through the fixed-width path.

use zerocopy::byteorder::{
    ByteOrder, F32, F64, I16, I32, I64, I128, Isize, U16, U32, U64, U128, Usize,
};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Marker for values encoded as exactly `size_of::<Self>()` raw bytes.
///
/// Implemented for the primitive integers, `f32`, `f64`, arrays of
/// fixed-width values and the explicit byte order wrappers in
/// [`byteorder`](crate::byteorder). A `#[repr(C)]` struct opts in by
/// deriving the zerocopy traits and implementing the marker:
///
/// ```
/// use rawcast::{FixedWidth, Immutable, IntoBytes, KnownLayout, ZcFromBytes};
///
/// #[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Debug, PartialEq)]
/// #[repr(C)]
/// struct Point { x: i32, y: i32 }
///
/// impl FixedWidth for Point {}
///
/// let mut stream = Vec::new();
/// rawcast::encode(&mut stream, &Point { x: 1, y: 2 }).unwrap();
/// let p: Point = rawcast::decode(&mut stream.as_slice()).unwrap();
/// assert_eq!(p, Point { x: 1, y: 2 });
/// ```
///
/// `bool` and `char` are left out on purpose: not every byte pattern is a
/// valid value, so decoding them would need validation this format does
/// not have.
pub trait FixedWidth: IntoBytes + FromBytes + Immutable + KnownLayout + Sized {
    /// Encoded size in bytes.
    const WIDTH: usize = core::mem::size_of::<Self>();
}

macro_rules! impl_fixed_width {
    ($($ty:ty),+ $(,)?) => {
        $(impl FixedWidth for $ty {})+
    };
}

impl_fixed_width!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

macro_rules! impl_fixed_width_ordered {
    ($($ty:ident),+ $(,)?) => {
        $(impl<O: ByteOrder> FixedWidth for $ty<O> {})+
    };
}

impl_fixed_width_ordered!(U16, U32, U64, U128, Usize, I16, I32, I64, I128, Isize, F32, F64);

impl<T: FixedWidth, const N: usize> FixedWidth for [T; N] {}
