//! In-memory implementation of the RecordStore trait.
//!
//! Suited to tests and embedded use. Same semantics as SQLite but keeps
//! everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use docseal_core::{DocumentId, IntegrityRecord};

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;

/// In-memory record store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock;
/// the write lock makes the check-and-insert in `put` atomic.
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<HashMap<DocumentId, IntegrityRecord>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put(&self, record: &IntegrityRecord) -> Result<()> {
        let mut records = self.records.write().unwrap();

        if records.contains_key(&record.document_id) {
            return Err(StoreError::DuplicateIdentifier(record.document_id.clone()));
        }

        records.insert(record.document_id.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<IntegrityRecord>> {
        let records = self.records.read().unwrap();
        Ok(records.get(id).cloned())
    }

    async fn delete(&self, id: &DocumentId) -> Result<bool> {
        let mut records = self.records.write().unwrap();
        Ok(records.remove(id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        let records = self.records.read().unwrap();
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docseal_core::{AuthTag, ContentDigest};

    fn make_record(id: &str, payload: &[u8]) -> IntegrityRecord {
        IntegrityRecord {
            document_id: DocumentId::new(id),
            digest: ContentDigest::hash(payload),
            tag: AuthTag::from_bytes([0x42; 32]),
            key_version: 1,
            registered_at: 1234567890000,
        }
    }

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = MemoryStore::new();
        let record = make_record("doc-1", b"hello");

        store.put(&record).await.unwrap();
        let fetched = store.get(&record.document_id).await.unwrap().unwrap();
        assert_eq!(fetched, record);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_put_duplicate_fails_and_keeps_original() {
        let store = MemoryStore::new();
        let first = make_record("doc-1", b"original");
        let second = make_record("doc-1", b"imposter");

        store.put(&first).await.unwrap();
        let err = store.put(&second).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateIdentifier(_)));

        // The first record is left unmodified.
        let fetched = store.get(&first.document_id).await.unwrap().unwrap();
        assert_eq!(fetched, first);
    }

    #[tokio::test]
    async fn test_get_absent() {
        let store = MemoryStore::new();
        let got = store.get(&DocumentId::new("nope")).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_delete_allows_reregistration() {
        let store = MemoryStore::new();
        let record = make_record("doc-1", b"hello");

        store.put(&record).await.unwrap();
        assert!(store.delete(&record.document_id).await.unwrap());
        assert!(!store.delete(&record.document_id).await.unwrap());

        // Identifier is free again.
        store.put(&record).await.unwrap();
    }
}
