//! # DocSeal Testkit
//!
//! Testing utilities for DocSeal.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: known digest test cases with expected outputs
//!   for cross-platform verification
//! - **Generators**: proptest strategies for property-based testing
//! - **Fixtures**: helper structs for setting up ledger test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use docseal_testkit::vectors::{all_digest_vectors, verify_all_vectors};
//!
//! verify_all_vectors().expect("digest engine must reproduce the published vectors");
//! for vector in all_digest_vectors() {
//!     println!("{}: {}", vector.name, vector.expected_hex);
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use docseal_testkit::fixtures::TestFixture;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let fixture = TestFixture::new();
//! let record = fixture.ledger.register("doc-1".into(), b"data").await.unwrap();
//! # });
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::{document_id_strategy, key_strategy, payload_strategy};
pub use vectors::{all_digest_vectors, verify_all_vectors, DigestVector};
