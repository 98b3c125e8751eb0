//! # DocSeal Core
//!
//! Pure primitives for DocSeal: content digests, keyed authenticity tags,
//! and integrity records.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over cryptographic data structures, safe to call from any
//! number of threads without coordination.
//!
//! ## Key Types
//!
//! - [`ContentDigest`] - SHA-256 fingerprint of document bytes
//! - [`Digester`] - Incremental digest over chunked input
//! - [`SecretKey`] - Process-wide HMAC key, injected at startup
//! - [`AuthTag`] - HMAC-SHA256 tag binding a digest to the secret key
//! - [`IntegrityRecord`] - The persisted (identifier, digest, tag) triple
//!
//! ## Constant-Time Comparison
//!
//! Tag equality is only defined under constant-time comparison. `AuthTag`'s
//! `PartialEq` goes through [`subtle`], so there is no timing-unsafe path
//! to compare two tags.

pub mod digest;
pub mod error;
pub mod record;
pub mod tag;

pub use digest::{ContentDigest, Digester, DIGEST_LEN};
pub use error::CoreError;
pub use record::{DocumentId, IntegrityRecord};
pub use tag::{AuthTag, SecretKey, TAG_LEN};
