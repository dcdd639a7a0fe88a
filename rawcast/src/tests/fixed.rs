use crate::byteorder::{BigEndian, F32, LittleEndian, U32};
use crate::{
    ByteCursor, CodecError, Decoder, Encoder, FixedWidth, Immutable, IntoBytes, KnownLayout,
    ZcFromBytes, decode, encode, try_decode,
};

#[derive(ZcFromBytes, IntoBytes, Immutable, KnownLayout, Debug, PartialEq)]
#[repr(C)]
struct Point {
    x: i32,
    y: i32,
}

impl FixedWidth for Point {}

#[test]
fn int_roundtrip() {
    let mut stream = Vec::new();
    assert_eq!(encode(&mut stream, &42i32).unwrap(), 4);
    assert_eq!(stream, 42i32.to_ne_bytes());

    let value: i32 = decode(&mut stream.as_slice()).unwrap();
    assert_eq!(value, 42);
}

#[test]
fn float_roundtrip_is_bit_exact() {
    let mut stream = Vec::new();
    encode(&mut stream, &42.0f32).unwrap();
    assert_eq!(stream, 42.0f32.to_ne_bytes());

    let value: f32 = decode(&mut stream.as_slice()).unwrap();
    assert_eq!(value.to_bits(), 42.0f32.to_bits());
}

#[test]
fn nan_payload_survives() {
    let weird = f32::from_bits(0x7fc0_1234);
    let mut stream = Vec::new();
    encode(&mut stream, &weird).unwrap();

    let value: f32 = decode(&mut stream.as_slice()).unwrap();
    assert_eq!(value.to_bits(), 0x7fc0_1234);
}

#[test]
fn encoded_len_matches_width() {
    assert_eq!(<u8 as FixedWidth>::WIDTH, 1);
    assert_eq!(<i64 as FixedWidth>::WIDTH, 8);
    assert_eq!(<[u16; 3] as FixedWidth>::WIDTH, 6);
    assert_eq!(<Point as FixedWidth>::WIDTH, 8);

    let mut stream = Vec::new();
    encode(&mut stream, &u128::MAX).unwrap();
    assert_eq!(stream.len(), 16);
}

#[test]
fn truncated_int_fails() {
    let stream = [0x2au8, 0];
    let err = decode::<i32, _>(&mut &stream[..]).unwrap_err();
    assert!(matches!(
        err,
        CodecError::ShortRead {
            needed: 4,
            available: 2
        }
    ));
    assert!(!err.is_end_of_stream());
}

#[test]
fn empty_source_is_end_of_stream() {
    let err = decode::<i32, _>(&mut &[0u8; 0][..]).unwrap_err();
    assert!(err.is_end_of_stream());
}

#[test]
fn try_decode_distinguishes_end_from_truncation() {
    let mut stream = Vec::new();
    encode(&mut stream, &1i32).unwrap();
    stream.push(0xff);

    let mut source = stream.as_slice();
    assert_eq!(try_decode::<i32, _>(&mut source).unwrap(), Some(1));
    assert!(matches!(
        try_decode::<i32, _>(&mut source),
        Err(CodecError::ShortRead {
            needed: 4,
            available: 1
        })
    ));
    assert_eq!(try_decode::<i32, _>(&mut source).unwrap(), None);
}

#[test]
fn struct_and_array_roundtrip() {
    let mut stream = Vec::new();
    Encoder::new(&mut stream)
        .put(&Point { x: -3, y: 9 })
        .unwrap()
        .put(&[1u16, 2, 3])
        .unwrap();
    assert_eq!(stream.len(), 14);

    let mut source = stream.as_slice();
    let mut dec = Decoder::new(&mut source);
    assert_eq!(dec.get::<Point>().unwrap(), Point { x: -3, y: 9 });
    assert_eq!(dec.get::<[u16; 3]>().unwrap(), [1, 2, 3]);
    assert_eq!(dec.consumed(), 14);
}

#[test]
fn explicit_byte_order_is_host_independent() {
    let mut stream = Vec::new();
    encode(&mut stream, &U32::<LittleEndian>::new(1)).unwrap();
    encode(&mut stream, &U32::<BigEndian>::new(1)).unwrap();
    assert_eq!(stream, [1, 0, 0, 0, 0, 0, 0, 1]);

    let mut source = stream.as_slice();
    assert_eq!(decode::<U32<LittleEndian>, _>(&mut source).unwrap().get(), 1);
    assert_eq!(decode::<U32<BigEndian>, _>(&mut source).unwrap().get(), 1);
}

#[test]
fn little_endian_float() {
    let mut stream = Vec::new();
    encode(&mut stream, &F32::<LittleEndian>::new(42.0)).unwrap();
    assert_eq!(stream, 42.0f32.to_le_bytes());
}

#[test]
fn reread_after_rewind() {
    let mut cursor = ByteCursor::new();
    encode(&mut cursor, &0x0102_0304u32).unwrap();
    let before = cursor.as_bytes().to_vec();

    cursor.rewind();
    let first: u32 = decode(&mut cursor).unwrap();
    cursor.rewind();
    let second: u32 = decode(&mut cursor).unwrap();

    assert_eq!(first, 0x0102_0304);
    assert_eq!(first, second);
    assert_eq!(cursor.as_bytes(), before);
}
