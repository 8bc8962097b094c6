//! Binary stream primitives (panic-free).
//!
//! Parsing rules:
//! - Never index (`buf[0]`) — always use `Buf` and `remaining()` checks.
//! - Never `unwrap()` / `expect()` / `panic!()` in production paths.
//!
//! Integers are variable-length: 7 payload bits per byte, high bit set on
//! every byte except the last. Strings are a vint byte length followed by
//! UTF-8 bytes.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, ScriptGateError};

/// Longest valid vint encoding (u32).
const MAX_VINT_BYTES: usize = 5;
/// Longest valid vlong encoding (u64).
const MAX_VLONG_BYTES: usize = 10;

/// Types that can append themselves to an outbound buffer.
pub trait Writeable {
    fn write_to(&self, out: &mut BytesMut) -> Result<()>;

    /// Encode into a fresh frozen buffer.
    fn to_bytes(&self) -> Result<Bytes> {
        let mut out = BytesMut::new();
        self.write_to(&mut out)?;
        Ok(out.freeze())
    }
}

/// Types that can be decoded from an inbound buffer.
pub trait Readable: Sized {
    fn read_from(buf: &mut Bytes) -> Result<Self>;
}

pub fn write_vint(out: &mut impl BufMut, mut v: u32) {
    while v >= 0x80 {
        out.put_u8((v as u8 & 0x7f) | 0x80);
        v >>= 7;
    }
    out.put_u8(v as u8);
}

pub fn read_vint(buf: &mut impl Buf) -> Result<u32> {
    let mut v: u32 = 0;
    for i in 0..MAX_VINT_BYTES {
        if !buf.has_remaining() {
            return Err(ScriptGateError::Decode("vint truncated".into()));
        }
        let b = buf.get_u8();
        // last byte may only carry the 4 remaining bits
        if i == MAX_VINT_BYTES - 1 && b > 0x0f {
            return Err(ScriptGateError::Decode("vint overflows u32".into()));
        }
        v |= u32::from(b & 0x7f) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(v);
        }
    }
    Err(ScriptGateError::Decode("vint overflows u32".into()))
}

pub fn write_vlong(out: &mut impl BufMut, mut v: u64) {
    while v >= 0x80 {
        out.put_u8((v as u8 & 0x7f) | 0x80);
        v >>= 7;
    }
    out.put_u8(v as u8);
}

pub fn read_vlong(buf: &mut impl Buf) -> Result<u64> {
    let mut v: u64 = 0;
    for i in 0..MAX_VLONG_BYTES {
        if !buf.has_remaining() {
            return Err(ScriptGateError::Decode("vlong truncated".into()));
        }
        let b = buf.get_u8();
        if i == MAX_VLONG_BYTES - 1 && b > 0x01 {
            return Err(ScriptGateError::Decode("vlong overflows u64".into()));
        }
        v |= u64::from(b & 0x7f) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(v);
        }
    }
    Err(ScriptGateError::Decode("vlong overflows u64".into()))
}

/// Length prefix for a string of `len` bytes. Longer than `u32::MAX` is an
/// error; nothing is written in that case.
pub fn string_len_prefix(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        ScriptGateError::Encode(format!("string of {len} bytes exceeds the u32 length prefix"))
    })
}

/// Write a length-prefixed UTF-8 string.
pub fn write_string(out: &mut impl BufMut, s: &str) -> Result<()> {
    let len = string_len_prefix(s.len())?;
    write_vint(out, len);
    out.put_slice(s.as_bytes());
    Ok(())
}

pub fn read_string(buf: &mut Bytes) -> Result<String> {
    let len = read_vint(buf)? as usize;
    if buf.remaining() < len {
        return Err(ScriptGateError::Decode(format!(
            "string length {len} exceeds remaining {}",
            buf.remaining()
        )));
    }
    let raw = buf.copy_to_bytes(len);
    String::from_utf8(raw.to_vec())
        .map_err(|e| ScriptGateError::Decode(format!("string is not valid utf-8: {e}")))
}
