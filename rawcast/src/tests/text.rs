use crate::{
    ByteCursor, CodecError, Decoder, Encoder, decode, decode_bytes, decode_text, encode,
    encode_text,
};

#[test]
fn text_roundtrip_with_known_length() {
    let mut stream = Vec::new();
    assert_eq!(encode_text(&mut stream, "hola").unwrap(), 4);
    assert_eq!(stream, b"hola");

    assert_eq!(decode_text(&mut stream.as_slice(), 4).unwrap(), "hola");
}

#[test]
fn text_has_no_prefix_or_terminator() {
    let mut stream = Vec::new();
    encode_text(&mut stream, "ab").unwrap();
    encode_text(&mut stream, "cd").unwrap();
    assert_eq!(stream, b"abcd");

    // The reader decides where one text ends.
    assert_eq!(decode_text(&mut stream.as_slice(), 3).unwrap(), "abc");
}

#[test]
fn empty_text() {
    let mut stream = Vec::new();
    assert_eq!(encode_text(&mut stream, "").unwrap(), 0);
    assert!(stream.is_empty());

    assert_eq!(decode_text(&mut stream.as_slice(), 0).unwrap(), "");
}

#[test]
fn zero_length_read_leaves_cursor_alone() {
    let mut source: &[u8] = b"xyz";
    assert_eq!(decode_text(&mut source, 0).unwrap(), "");
    assert_eq!(source, b"xyz");
}

#[test]
fn short_text_fails() {
    let err = decode_text(&mut &b"hol"[..], 4).unwrap_err();
    assert!(matches!(
        err,
        CodecError::ShortRead {
            needed: 4,
            available: 3
        }
    ));
}

#[test]
fn invalid_utf8_is_rejected() {
    let bytes = [b'o', b'k', 0xff, 0xfe];
    let err = decode_text(&mut &bytes[..], 4).unwrap_err();
    assert!(matches!(err, CodecError::InvalidText { valid_up_to: 2 }));

    // Raw bytes are fine.
    assert_eq!(decode_bytes(&mut &bytes[..], 4).unwrap(), bytes);
}

#[test]
fn multibyte_text_length_counts_bytes() {
    let mut stream = Vec::new();
    let n = encode_text(&mut stream, "niño").unwrap();
    assert_eq!(n, 5);
    assert_eq!(decode_text(&mut stream.as_slice(), n).unwrap(), "niño");
}

#[test]
fn mixed_sequence_roundtrip() {
    let mut stream = Vec::new();
    encode(&mut stream, &42i32).unwrap();
    encode(&mut stream, &42.0f32).unwrap();
    encode_text(&mut stream, "hola").unwrap();
    assert_eq!(stream.len(), 12);

    let mut source = stream.as_slice();
    let int: i32 = decode(&mut source).unwrap();
    let float: f32 = decode(&mut source).unwrap();
    let text = decode_text(&mut source, 4).unwrap();

    assert_eq!(int, 42);
    assert_eq!(float, 42.0);
    assert_eq!(text, "hola");
    assert!(source.is_empty());
}

#[test]
fn mixed_sequence_through_cursor() {
    let mut cursor = ByteCursor::new();
    let mut enc = Encoder::new(&mut cursor);
    enc.put(&42i32)
        .unwrap()
        .put(&42.0f32)
        .unwrap()
        .put_text("hola")
        .unwrap()
        .put_bytes(&[0xde, 0xad])
        .unwrap();
    assert_eq!(enc.written(), 14);

    cursor.rewind();
    let mut dec = Decoder::new(&mut cursor);
    assert_eq!(dec.get::<i32>().unwrap(), 42);
    assert_eq!(dec.get::<f32>().unwrap(), 42.0);
    assert_eq!(dec.get_text(4).unwrap(), "hola");
    assert_eq!(dec.get_bytes(2).unwrap(), [0xde, 0xad]);
    assert_eq!(dec.consumed(), 14);
    assert_eq!(dec.try_get::<u8>().unwrap(), None);
}

#[test]
fn oversized_length_is_short_read() {
    for len in [usize::MAX, 1 << 40, 1 << 24] {
        let err = decode_text(&mut &b"abc"[..], len).unwrap_err();
        assert!(
            matches!(err, CodecError::ShortRead { needed, available: 3 } if needed == len),
            "len {len}: {err:?}"
        );
    }

    let err = decode_bytes(&mut &[0u8; 0][..], usize::MAX).unwrap_err();
    assert!(err.is_end_of_stream());
}

#[test]
fn long_read_spans_several_chunks() {
    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    let mut cursor = ByteCursor::from(data.clone());

    assert_eq!(decode_bytes(&mut cursor, data.len()).unwrap(), data);
    assert_eq!(cursor.remaining(), 0);

    cursor.rewind();
    let err = decode_bytes(&mut cursor, data.len() + 1).unwrap_err();
    assert!(matches!(
        err,
        CodecError::ShortRead {
            available: 20_000,
            ..
        }
    ));
}
