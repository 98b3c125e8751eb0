//! The Ledger: register/verify state machine over a record store.
//!
//! A tracked document moves through
//! `Unregistered -> Registered -> {Verified, TamperDetected}`. The ledger
//! holds the deployment secret key and drives the digest and tag engines;
//! persistence goes through the [`RecordStore`] seam.

use std::sync::Arc;

use tracing::debug;

use docseal_core::{AuthTag, ContentDigest, DocumentId, IntegrityRecord, SecretKey};
use docseal_store::RecordStore;

use crate::error::{LedgerError, Result};

/// Why verification flagged a document as tampered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TamperKind {
    /// The recomputed digest differs from the stored one: the content
    /// changed since registration.
    DigestMismatch,
    /// The digest matches but the stored tag does not authenticate under
    /// the current key: the stored record itself is suspect.
    TagMismatch,
}

/// Outcome of verifying a document against its record.
///
/// Tampering is an expected, meaningful result - it is reported here,
/// never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum VerifyOutcome {
    /// Content and record authenticity both check out.
    Verified,
    /// Digest or tag disagreed with the stored record.
    TamperDetected(TamperKind),
}

impl VerifyOutcome {
    /// Whether the document verified clean.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified)
    }
}

/// The integrity ledger.
///
/// Generic over the record store so the same ledger runs against SQLite
/// in production and memory in tests. The secret key is injected at
/// construction and immutable thereafter; all tag operations borrow it.
#[derive(Debug)]
pub struct Ledger<S: RecordStore> {
    key: SecretKey,
    store: Arc<S>,
}

impl<S: RecordStore> Ledger<S> {
    /// Create a ledger over the given store.
    ///
    /// Fails with [`LedgerError::InvalidKey`] if the key is empty: a
    /// process without a valid key must not serve requests.
    pub fn new(key: SecretKey, store: S) -> Result<Self> {
        if key.is_empty() {
            return Err(LedgerError::InvalidKey);
        }
        Ok(Self {
            key,
            store: Arc::new(store),
        })
    }

    /// The version of the key this ledger tags records with.
    pub fn key_version(&self) -> u32 {
        self.key.version()
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a document's bytes under a caller-assigned identifier.
    ///
    /// Computes the digest and tag and persists the record atomically
    /// with the uniqueness check: of two racing registrations for one
    /// identifier, exactly one succeeds, the other fails with
    /// [`LedgerError::DuplicateIdentifier`].
    ///
    /// Returns the record (digest and tag included, for audit/display).
    /// The secret key is never part of the response.
    pub async fn register(&self, id: DocumentId, bytes: &[u8]) -> Result<IntegrityRecord> {
        self.register_digest(id, ContentDigest::hash(bytes)).await
    }

    /// Register a pre-computed digest, for callers that digest locally
    /// and submit only the fingerprint.
    pub async fn register_digest(
        &self,
        id: DocumentId,
        digest: ContentDigest,
    ) -> Result<IntegrityRecord> {
        let tag = AuthTag::compute(&self.key, &digest)?;
        let record = IntegrityRecord {
            document_id: id,
            digest,
            tag,
            key_version: self.key.version(),
            registered_at: now_millis(),
        };

        self.store.put(&record).await?;
        debug!(document_id = %record.document_id, "document registered");
        Ok(record)
    }

    /// Verify a document's bytes against its registered record.
    ///
    /// Recomputes the digest over the supplied bytes and checks, in
    /// order: digest equality against the stored record, then tag
    /// authenticity via constant-time comparison. Fails with
    /// [`LedgerError::UnknownIdentifier`] if no record exists.
    pub async fn verify(&self, id: &DocumentId, bytes: &[u8]) -> Result<VerifyOutcome> {
        self.verify_digest(id, ContentDigest::hash(bytes)).await
    }

    /// Verify a pre-computed digest against the registered record.
    pub async fn verify_digest(
        &self,
        id: &DocumentId,
        digest: ContentDigest,
    ) -> Result<VerifyOutcome> {
        let record = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| LedgerError::UnknownIdentifier(id.clone()))?;

        // Check 1: content. A mismatch means the bytes changed since
        // registration.
        if digest != record.digest {
            debug!(document_id = %id, "verification failed: digest mismatch");
            return Ok(VerifyOutcome::TamperDetected(TamperKind::DigestMismatch));
        }

        // Check 2: record authenticity. The digest matched, so a tag
        // failure here points at the stored record, not the document.
        if !AuthTag::verify(&self.key, &digest, &record.tag) {
            debug!(document_id = %id, "verification failed: tag mismatch");
            return Ok(VerifyOutcome::TamperDetected(TamperKind::TagMismatch));
        }

        debug!(document_id = %id, "document verified");
        Ok(VerifyOutcome::Verified)
    }

    /// Revoke a registration, freeing the identifier for re-registration.
    ///
    /// Returns whether a record existed.
    pub async fn revoke(&self, id: &DocumentId) -> Result<bool> {
        let existed = self.store.delete(id).await?;
        if existed {
            debug!(document_id = %id, "registration revoked");
        }
        Ok(existed)
    }
}

/// Get current time in milliseconds.
fn now_millis() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use docseal_store::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        let key = SecretKey::new(b"unit-test-secret-key-32-bytes!!!".to_vec());
        Ledger::new(key, MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_empty_key_rejected_at_construction() {
        let err = Ledger::new(SecretKey::new(Vec::new()), MemoryStore::new()).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidKey));
    }

    #[tokio::test]
    async fn test_register_returns_record() {
        let ledger = ledger();
        let record = ledger.register("doc-1".into(), b"hello").await.unwrap();

        assert_eq!(record.document_id, DocumentId::new("doc-1"));
        assert_eq!(record.digest, ContentDigest::hash(b"hello"));
        assert_eq!(record.key_version, 1);
        assert!(record.registered_at > 0);
    }

    #[tokio::test]
    async fn test_register_digest_matches_register() {
        let ledger = ledger();
        let by_bytes = ledger.register("a".into(), b"content").await.unwrap();
        let by_digest = ledger
            .register_digest("b".into(), ContentDigest::hash(b"content"))
            .await
            .unwrap();

        assert_eq!(by_bytes.digest, by_digest.digest);
        assert_eq!(by_bytes.tag, by_digest.tag);
    }

    #[tokio::test]
    async fn test_verify_unknown_identifier() {
        let ledger = ledger();
        let err = ledger.verify(&"ghost".into(), b"anything").await.unwrap_err();
        assert!(matches!(err, LedgerError::UnknownIdentifier(_)));
    }

    #[tokio::test]
    async fn test_revoke_then_reregister() {
        let ledger = ledger();
        let id = DocumentId::new("doc-1");

        ledger.register(id.clone(), b"v1").await.unwrap();
        assert!(ledger.revoke(&id).await.unwrap());
        assert!(!ledger.revoke(&id).await.unwrap());

        // Verify after revoke fails: the record is gone.
        let err = ledger.verify(&id, b"v1").await.unwrap_err();
        assert!(matches!(err, LedgerError::UnknownIdentifier(_)));

        // The identifier is free again, possibly for different content.
        ledger.register(id.clone(), b"v2").await.unwrap();
        let outcome = ledger.verify(&id, b"v2").await.unwrap();
        assert!(outcome.is_verified());
    }

    #[tokio::test]
    async fn test_key_version_recorded() {
        let key = SecretKey::with_version(b"versioned-key".to_vec(), 7);
        let ledger = Ledger::new(key, MemoryStore::new()).unwrap();

        let record = ledger.register("doc-1".into(), b"data").await.unwrap();
        assert_eq!(record.key_version, 7);
        assert_eq!(ledger.key_version(), 7);
    }
}
