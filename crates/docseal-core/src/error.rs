//! Error types for DocSeal core.

use thiserror::Error;

/// Core errors that can occur during digest and tag operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The secret key holds no key material. A process must not serve
    /// requests in this state.
    #[error("invalid secret key: key material is empty")]
    InvalidKey,
}
