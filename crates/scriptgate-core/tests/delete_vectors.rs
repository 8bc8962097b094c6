//! Delete-stored-template wire vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use scriptgate_core::protocol::delete::DeleteStoredTemplateRequest;
use scriptgate_core::protocol::stream::Readable;

mod vector_loader;

const VECTORS: [&str; 6] = [
    "delete_ok.json",
    "delete_reserved_char.json",
    "delete_empty_id.json",
    "delete_string_truncated.json",
    "delete_header_truncated.json",
    "delete_bad_utf8.json",
];

#[test]
fn delete_vectors() {
    for f in VECTORS {
        let v = vector_loader::load(f);
        let mut raw = Bytes::from(v.frame.bytes());
        let res = DeleteStoredTemplateRequest::read_from(&mut raw);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let req = res.expect("expected ok request");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(req.id(), ex.id, "vector={}", v.description);
        assert_eq!(
            req.header().master_timeout.as_millis(),
            u128::from(ex.master_timeout_ms),
            "vector={}",
            v.description
        );
        assert_eq!(
            req.header().ack_timeout.as_millis(),
            u128::from(ex.ack_timeout_ms),
            "vector={}",
            v.description
        );
        assert_eq!(req.validate().errors(), ex.validation.as_slice(), "vector={}", v.description);
        assert!(raw.is_empty(), "trailing bytes, vector={}", v.description);
    }
}
