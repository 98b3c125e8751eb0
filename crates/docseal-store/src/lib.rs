//! # DocSeal Store
//!
//! Storage abstraction for DocSeal integrity records. Provides a
//! trait-based interface with SQLite and in-memory implementations.
//!
//! ## Overview
//!
//! The store abstracts record persistence behind the [`RecordStore`]
//! trait, keeping the ledger storage-agnostic. The primary implementation
//! is [`SqliteStore`], with [`MemoryStore`] for tests and embedding.
//!
//! ## Key Types
//!
//! - [`RecordStore`] - The async trait for record persistence
//! - [`SqliteStore`] - SQLite-based persistent storage
//! - [`MemoryStore`] - In-memory storage
//!
//! ## Design Notes
//!
//! - **Atomic put**: the uniqueness check and the write are a single
//!   atomic step. Of two racing `put` calls for one identifier, exactly
//!   one succeeds; the other fails with
//!   [`StoreError::DuplicateIdentifier`].
//! - **Point-in-time get**: a read observes a fully written record or
//!   nothing, never a partial write.
//! - **No updates**: records are immutable; the only mutation is
//!   `delete`, which models revocation.

pub mod error;
pub mod memory;
pub mod migration;
pub mod sqlite;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
