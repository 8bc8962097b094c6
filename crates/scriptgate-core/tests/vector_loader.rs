//! Wire vectors for stored-template requests.
//!
//! Each file names a hex frame and either the decoded request fields or the
//! error code decoding must fail with.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteVector {
    pub description: String,
    pub frame: HexFrame,
    #[serde(default)]
    pub expect: Option<DecodedDelete>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

/// Fields of a successfully decoded delete request.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecodedDelete {
    pub id: String,
    pub master_timeout_ms: u64,
    pub ack_timeout_ms: u64,
    /// Messages `validate()` must report, in order.
    pub validation: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectError {
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HexFrame {
    pub encoding: String,
    pub data: String,
}

impl HexFrame {
    pub fn bytes(&self) -> Vec<u8> {
        assert_eq!(self.encoding, "hex", "only hex frames are supported");
        hex::decode(&self.data).expect("invalid hex in test vector")
    }
}

pub fn load(name: &str) -> DeleteVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    let v: DeleteVector = serde_json::from_str(&s).unwrap();
    assert!(
        v.expect.is_some() != v.expect_error.is_some(),
        "vector {name} needs exactly one of expect / expect_error"
    );
    v
}
