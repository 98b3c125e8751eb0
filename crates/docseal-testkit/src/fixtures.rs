//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use docseal::{Ledger, SecretKey};
use docseal_core::{AuthTag, ContentDigest, DocumentId, IntegrityRecord};
use docseal_store::MemoryStore;
use rand::RngCore;

/// A test fixture with a secret key and a memory-backed ledger.
pub struct TestFixture {
    /// The key the ledger was built with, kept for recomputing expected
    /// tags in assertions.
    pub key: SecretKey,
    /// Ledger over a fresh [`MemoryStore`].
    pub ledger: Ledger<MemoryStore>,
}

impl TestFixture {
    /// Create a fixture with a random 32-byte key.
    pub fn new() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::with_key(SecretKey::new(bytes.to_vec()))
    }

    /// Create a fixture with a deterministic key.
    pub fn with_key(key: SecretKey) -> Self {
        let ledger =
            Ledger::new(key.clone(), MemoryStore::new()).expect("test key must not be empty");
        Self { key, ledger }
    }

    /// The tag the fixture's key produces for the given bytes' digest.
    pub fn expected_tag(&self, bytes: &[u8]) -> AuthTag {
        let digest = ContentDigest::hash(bytes);
        AuthTag::compute(&self.key, &digest).expect("fixture key is valid")
    }

    /// Build a record whose tag was computed under a different random
    /// key - content matches, authenticity does not. Planting this in
    /// the store exercises the tag-mismatch branch of verification.
    pub fn forged_record(&self, id: impl Into<DocumentId>, bytes: &[u8]) -> IntegrityRecord {
        let digest = ContentDigest::hash(bytes);
        let mut wrong = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut wrong);
        IntegrityRecord {
            document_id: id.into(),
            digest,
            tag: AuthTag::compute(&SecretKey::new(wrong.to_vec()), &digest)
                .expect("random key is non-empty"),
            key_version: self.key.version(),
            registered_at: 0,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
