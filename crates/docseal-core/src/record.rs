//! Integrity records: the persisted (identifier, digest, tag) triple.
//!
//! A record is created once at registration and never edited. A changed
//! document is a new registration under a new identifier, never an update.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::digest::ContentDigest;
use crate::tag::AuthTag;

/// A caller-assigned document identifier.
///
/// Uniqueness is enforced by the record store at registration time, not
/// by this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new document identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A registered document's integrity record.
///
/// Immutable after creation. The invariant `tag == compute(key, digest)`
/// holds at registration and must still hold at verification for the
/// record to be considered authentic. `key_version` records which key
/// version produced the tag, as the extension point for rotation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityRecord {
    /// The caller-assigned identifier.
    pub document_id: DocumentId,
    /// SHA-256 digest of the registered bytes.
    pub digest: ContentDigest,
    /// HMAC-SHA256 tag over the digest.
    pub tag: AuthTag,
    /// Version of the secret key that produced the tag.
    pub key_version: u32,
    /// Registration time (Unix ms).
    pub registered_at: i64,
}
