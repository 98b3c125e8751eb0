//! The Tag Engine: HMAC-SHA256 authenticity tags over content digests.
//!
//! A tag binds a digest to the deployment's secret key. Unlike a plain
//! digest, it cannot be recomputed without the key, so a matching tag
//! proves the record was written by a key holder.
//!
//! Tag comparison is constant-time via `subtle`; there is no
//! timing-unsafe equality path on [`AuthTag`].

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::digest::ContentDigest;
use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

/// Length of an authenticity tag in bytes (HMAC-SHA256).
pub const TAG_LEN: usize = 32;

/// The process-wide HMAC secret key.
///
/// Constructed once at startup from whatever secret store the deployment
/// uses and passed by reference into tag operations - never an ambient
/// global. The key is read-only for the process lifetime; rotation means
/// constructing a new `SecretKey` with a higher version and re-tagging.
///
/// `Debug` never prints key material.
#[derive(Clone)]
pub struct SecretKey {
    bytes: Vec<u8>,
    version: u32,
}

impl SecretKey {
    /// Create a key with version 1.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_version(bytes, 1)
    }

    /// Create a key with an explicit version.
    ///
    /// The version is bookkeeping for rotation: each record stores the
    /// version of the key that tagged it.
    pub fn with_version(bytes: impl Into<Vec<u8>>, version: u32) -> Self {
        Self {
            bytes: bytes.into(),
            version,
        }
    }

    /// The key version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Whether the key holds no material. An empty key is invalid for
    /// tag computation.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Length of the key material in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(v{}, {} bytes)", self.version, self.bytes.len())
    }
}

/// HMAC-SHA256 over an arbitrary message. `compute` feeds it the raw
/// digest bytes; kept separate so it can be checked against RFC 4231
/// vectors directly.
fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; TAG_LEN] {
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// A 32-byte HMAC-SHA256 authenticity tag.
///
/// `PartialEq` is constant-time. `Debug` never prints tag bytes; use
/// [`AuthTag::to_hex`] where the caller explicitly wants the value.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct AuthTag(pub [u8; TAG_LEN]);

impl AuthTag {
    /// Compute the tag for a digest under the given key.
    ///
    /// Deterministic for the same (key, digest). Fails with
    /// [`CoreError::InvalidKey`] if the key is empty; no other failure
    /// modes.
    pub fn compute(key: &SecretKey, digest: &ContentDigest) -> Result<Self, CoreError> {
        if key.is_empty() {
            return Err(CoreError::InvalidKey);
        }
        Ok(Self(hmac_sha256(&key.bytes, digest.as_bytes())))
    }

    /// Verify a candidate tag against the tag recomputed from (key, digest).
    ///
    /// The comparison is constant-time regardless of where the bytes
    /// diverge. An empty key authenticates nothing and yields `false`.
    pub fn verify(key: &SecretKey, digest: &ContentDigest, candidate: &Self) -> bool {
        match Self::compute(key, digest) {
            Ok(expected) => expected.ct_eq(candidate),
            Err(CoreError::InvalidKey) => false,
        }
    }

    /// Constant-time equality.
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != TAG_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; TAG_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl PartialEq for AuthTag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for AuthTag {}

impl fmt::Debug for AuthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthTag(..)")
    }
}

impl AsRef<[u8]> for AuthTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; TAG_LEN]> for AuthTag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}
