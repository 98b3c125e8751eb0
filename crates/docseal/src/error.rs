//! Error types for the Ledger.

use docseal_core::{CoreError, DocumentId};
use docseal_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Ledger operations.
///
/// Tamper detection is not represented here: a mismatched document is a
/// first-class [`VerifyOutcome`](crate::VerifyOutcome), not a malfunction.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The secret key holds no material. Fatal configuration error; the
    /// process must not serve requests in this state.
    #[error("invalid secret key: key material is empty")]
    InvalidKey,

    /// A record already exists for this identifier. Caller error,
    /// recoverable.
    #[error("identifier already registered: {0}")]
    DuplicateIdentifier(DocumentId),

    /// No record exists for this identifier. Caller error, recoverable.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(DocumentId),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for LedgerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateIdentifier(id) => LedgerError::DuplicateIdentifier(id),
            other => LedgerError::Store(other),
        }
    }
}

impl From<CoreError> for LedgerError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidKey => LedgerError::InvalidKey,
        }
    }
}

/// Result type for Ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
