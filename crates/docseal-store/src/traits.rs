//! RecordStore trait: the abstract interface for record persistence.
//!
//! This trait keeps the ledger storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests and embedding).

use async_trait::async_trait;
use docseal_core::{DocumentId, IntegrityRecord};

use crate::error::Result;

/// The RecordStore trait: async interface for integrity record persistence.
///
/// All methods are async to suit I/O-backed implementations. For SQLite,
/// `spawn_blocking` is used internally to avoid blocking the runtime.
///
/// # Contract
///
/// - `put` is atomic with respect to the uniqueness check: of two racing
///   `put` calls for the same identifier, exactly one succeeds and the
///   other fails with `DuplicateIdentifier`. A failed `put` leaves the
///   existing record unmodified.
/// - `get` is a point-in-time read; it never observes a partially
///   written record.
/// - Records are immutable: there is no update operation. `delete`
///   models explicit revocation, after which the identifier may be
///   registered again.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record. Fails with `DuplicateIdentifier` if a record
    /// already exists for the identifier.
    async fn put(&self, record: &IntegrityRecord) -> Result<()>;

    /// Fetch the record for an identifier, if any.
    async fn get(&self, id: &DocumentId) -> Result<Option<IntegrityRecord>>;

    /// Delete the record for an identifier. Returns whether a record
    /// existed.
    async fn delete(&self, id: &DocumentId) -> Result<bool>;

    /// Number of records in the store.
    async fn count(&self) -> Result<u64>;
}
