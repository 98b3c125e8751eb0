//! # DocSeal
//!
//! The unified API for DocSeal - document integrity verification through
//! content digests, keyed authenticity tags, and an append-only record
//! ledger.
//!
//! ## Overview
//!
//! DocSeal answers one question: is the document I hold now byte-identical
//! to the one registered earlier? It does so with two primitives and a
//! ledger:
//!
//! - **Digest**: SHA-256 fingerprint of the document bytes
//! - **Tag**: HMAC-SHA256 over the digest, keyed by a deployment secret,
//!   so a record cannot be forged without the key
//! - **Ledger**: register once, verify any number of times; a record is
//!   immutable and removed only by explicit revocation
//!
//! ## Key Concepts
//!
//! - **Record**: Immutable. Never edited. A changed document is a new
//!   registration.
//! - **Tamper detection**: a verification outcome, not an error. A digest
//!   mismatch means the content changed; a tag mismatch with a matching
//!   digest means the stored record itself is suspect.
//! - **Secret key**: injected at construction, immutable for the process
//!   lifetime, never logged and never returned to callers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docseal::{Ledger, SecretKey, VerifyOutcome};
//! use docseal::store::SqliteStore;
//!
//! async fn example() {
//!     let key = SecretKey::new(b"deployment-secret-at-least-32-b!".to_vec());
//!     let store = SqliteStore::open("records.db").unwrap();
//!     let ledger = Ledger::new(key, store).unwrap();
//!
//!     let record = ledger.register("doc-1".into(), b"contents").await.unwrap();
//!     println!("registered {} as {}", record.document_id, record.digest.to_hex());
//!
//!     match ledger.verify(&"doc-1".into(), b"contents").await.unwrap() {
//!         VerifyOutcome::Verified => println!("intact"),
//!         VerifyOutcome::TamperDetected(kind) => println!("tampered: {:?}", kind),
//!     }
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `docseal::core` - Core primitives (ContentDigest, AuthTag, etc.)
//! - `docseal::store` - Storage abstraction, SQLite and memory backends

pub mod error;
pub mod ledger;

// Re-export component crates
pub use docseal_core as core;
pub use docseal_store as store;

// Re-export main types for convenience
pub use error::{LedgerError, Result};
pub use ledger::{Ledger, TamperKind, VerifyOutcome};

// Re-export commonly used core types
pub use docseal_core::{
    AuthTag, ContentDigest, Digester, DocumentId, IntegrityRecord, SecretKey,
};
