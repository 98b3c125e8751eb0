//! SQLite implementation of the RecordStore trait.
//!
//! The primary storage backend. Uses rusqlite with bundled SQLite,
//! wrapped in async via tokio::spawn_blocking.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use docseal_core::{AuthTag, ContentDigest, DocumentId, IntegrityRecord};

use crate::error::{Result, StoreError};
use crate::migration;
use crate::traits::RecordStore;

/// SQLite-based record store.
///
/// Thread-safe via internal Mutex. All operations use spawn_blocking to
/// avoid blocking the async runtime. Identifier uniqueness is backed by
/// the PRIMARY KEY on the records table, so `put` is atomic at the
/// database level.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and runs migrations if it doesn't exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut conn = Connection::open(path.as_ref())?;
        migration::migrate(&mut conn)?;
        debug!(path = %path.as_ref().display(), "opened sqlite record store");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        migration::migrate(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

/// Map a poisoned mutex to a database error.
fn lock_poisoned<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
        Some(format!("mutex poisoned: {}", e)),
    ))
}

/// Map a spawn_blocking join failure to a database error.
fn join_failed(e: tokio::task::JoinError) -> StoreError {
    StoreError::Database(rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
        Some(format!("spawn_blocking failed: {}", e)),
    ))
}

/// Convert a row to an IntegrityRecord.
fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<IntegrityRecord> {
    let document_id: String = row.get("document_id")?;
    let digest_bytes: Vec<u8> = row.get("digest")?;
    let tag_bytes: Vec<u8> = row.get("tag")?;

    let digest = ContentDigest::from_bytes(digest_bytes.try_into().map_err(|_| {
        rusqlite::Error::InvalidColumnType(1, "digest".into(), rusqlite::types::Type::Blob)
    })?);
    let tag = AuthTag::from_bytes(tag_bytes.try_into().map_err(|_| {
        rusqlite::Error::InvalidColumnType(2, "tag".into(), rusqlite::types::Type::Blob)
    })?);

    Ok(IntegrityRecord {
        document_id: DocumentId::new(document_id),
        digest,
        tag,
        key_version: row.get("key_version")?,
        registered_at: row.get("registered_at")?,
    })
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn put(&self, record: &IntegrityRecord) -> Result<()> {
        let record = record.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let result = conn.execute(
                "INSERT INTO records (document_id, digest, tag, key_version, registered_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.document_id.as_str(),
                    record.digest.as_bytes().as_slice(),
                    record.tag.as_bytes().as_slice(),
                    record.key_version,
                    record.registered_at,
                ],
            );

            match result {
                Ok(_) => Ok(()),
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                {
                    Err(StoreError::DuplicateIdentifier(record.document_id))
                }
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(join_failed)?
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<IntegrityRecord>> {
        let id = id.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            conn.query_row(
                "SELECT document_id, digest, tag, key_version, registered_at
                 FROM records WHERE document_id = ?1",
                params![id.as_str()],
                row_to_record,
            )
            .optional()
            .map_err(StoreError::from)
        })
        .await
        .map_err(join_failed)?
    }

    async fn delete(&self, id: &DocumentId) -> Result<bool> {
        let id = id.clone();
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let deleted = conn.execute(
                "DELETE FROM records WHERE document_id = ?1",
                params![id.as_str()],
            )?;
            Ok(deleted > 0)
        })
        .await
        .map_err(join_failed)?
    }

    async fn count(&self) -> Result<u64> {
        let conn = self.conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(lock_poisoned)?;

            let count: u64 =
                conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(join_failed)?
    }
}
