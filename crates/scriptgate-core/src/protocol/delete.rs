//! Delete-stored-template request.
//!
//! Stored template ids are namespaced internally as `{lang}#{id}`, so `#` is
//! reserved and rejected by `validate`.

use std::fmt;

use bytes::{Bytes, BytesMut};
use serde::Serialize;

use crate::error::Result;
use crate::protocol::ack::AckHeader;
use crate::protocol::stream::{read_string, write_string, Readable, Writeable};

/// Separator used to namespace stored template ids.
pub const RESERVED_ID_CHAR: char = '#';

pub const MISSING_ID: &str = "must specify id for stored search template";
pub const ILLEGAL_ID_CHAR: &str = "id cannot contain '#' for stored search template";

/// Accumulated request validation failures.
///
/// Returned rather than raised so callers can merge problems from several
/// request parts before rejecting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Append another set of failures to this one.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation Failed: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            write!(f, "{}: {};", i + 1, e)?;
        }
        Ok(())
    }
}

/// Request to remove a stored search template by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteStoredTemplateRequest {
    header: AckHeader,
    id: String,
}

impl DeleteStoredTemplateRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            header: AckHeader::default(),
            id: id.into(),
        }
    }

    pub fn with_header(mut self, header: AckHeader) -> Self {
        self.header = header;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &AckHeader {
        &self.header
    }

    /// Check the id. At most one failure is reported: an empty id is not
    /// inspected for the reserved separator.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.id.is_empty() {
            errors.add(MISSING_ID);
        } else if self.id.contains(RESERVED_ID_CHAR) {
            errors.add(ILLEGAL_ID_CHAR);
        }
        errors
    }
}

impl Writeable for DeleteStoredTemplateRequest {
    fn write_to(&self, out: &mut BytesMut) -> Result<()> {
        self.header.write_to(out)?;
        write_string(out, &self.id)
    }
}

impl Readable for DeleteStoredTemplateRequest {
    fn read_from(buf: &mut Bytes) -> Result<Self> {
        let header = AckHeader::read_from(buf)?;
        let id = read_string(buf)?;
        tracing::trace!(%id, "decoded delete stored template request");
        Ok(Self { header, id })
    }
}

impl fmt::Display for DeleteStoredTemplateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delete stored script {{id [{}]}}", self.id)
    }
}
