//! Variable-length integer and string primitives.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::{Bytes, BytesMut};

use scriptgate_core::error::ErrorCode;
use scriptgate_core::protocol::stream::{
    read_string, read_vint, read_vlong, string_len_prefix, write_string, write_vint,
    write_vlong,
};

#[test]
fn vint_known_encodings() {
    let cases: [(u32, &[u8]); 5] = [
        (0, &[0x00]),
        (127, &[0x7f]),
        (128, &[0x80, 0x01]),
        (300, &[0xac, 0x02]),
        (u32::MAX, &[0xff, 0xff, 0xff, 0xff, 0x0f]),
    ];
    for (v, want) in cases {
        let mut out = BytesMut::new();
        write_vint(&mut out, v);
        assert_eq!(&out[..], want, "v={v}");
        let mut buf = out.freeze();
        assert_eq!(read_vint(&mut buf).unwrap(), v);
    }
}

#[test]
fn vint_overflow_is_rejected() {
    let mut buf = Bytes::from_static(&[0xff, 0xff, 0xff, 0xff, 0x1f]);
    let err = read_vint(&mut buf).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Decode);
}

#[test]
fn vlong_max_value() {
    let mut out = BytesMut::new();
    write_vlong(&mut out, u64::MAX);
    assert_eq!(out.len(), 10);
    let mut buf = out.freeze();
    assert_eq!(read_vlong(&mut buf).unwrap(), u64::MAX);
}

#[test]
fn empty_input_is_truncated() {
    let mut buf = Bytes::new();
    assert_eq!(read_vlong(&mut buf).unwrap_err().code(), ErrorCode::Decode);
    assert_eq!(read_string(&mut buf).unwrap_err().code(), ErrorCode::Decode);
}

#[test]
fn string_keeps_multibyte_characters_whole() {
    let mut out = BytesMut::new();
    write_string(&mut out, "né#τ").unwrap();
    // 1 + 2 + 1 + 2 bytes of utf-8
    assert_eq!(out[0], 6);
    let mut buf = out.freeze();
    assert_eq!(read_string(&mut buf).unwrap(), "né#τ");
}

#[test]
fn oversized_length_prefix_is_an_error() {
    assert_eq!(string_len_prefix(u32::MAX as usize).unwrap(), u32::MAX);

    #[cfg(target_pointer_width = "64")]
    {
        let err = string_len_prefix(u32::MAX as usize + 1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert!(err.to_string().contains("u32 length prefix"), "{err}");
    }
}
