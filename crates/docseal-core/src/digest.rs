//! The Digest Engine: SHA-256 content fingerprints.
//!
//! A digest is a deterministic pure function of the input bytes. The
//! incremental [`Digester`] produces the same digest as the one-shot
//! [`ContentDigest::hash`] for the same logical byte sequence, so large
//! documents can be digested chunk by chunk without buffering.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;

/// Length of a content digest in bytes (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// A 32-byte SHA-256 content digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; DIGEST_LEN]);

impl ContentDigest {
    /// Compute the digest of an in-memory buffer.
    ///
    /// Total: any byte input, including empty, yields a digest.
    pub fn hash(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(s)?;
        if bytes.len() != DIGEST_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// The zero digest (sentinel value).
    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256({})", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for ContentDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for ContentDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// Incremental digest computation over a stream of chunks.
///
/// Feeding the same logical bytes in any chunking yields the same digest
/// as [`ContentDigest::hash`] over the concatenation.
pub struct Digester {
    inner: Sha256,
}

impl Digester {
    /// Start a new digest computation.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Feed a chunk of input bytes.
    pub fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Finish and produce the digest.
    pub fn finalize(self) -> ContentDigest {
        ContentDigest(self.inner.finalize().into())
    }
}

impl Default for Digester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digest_deterministic() {
        let data = b"test data";
        let h1 = ContentDigest::hash(data);
        let h2 = ContentDigest::hash(data);
        assert_eq!(h1, h2);

        let different = b"different data";
        let h3 = ContentDigest::hash(different);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_digest_known_vectors() {
        // FIPS 180-4 vectors.
        assert_eq!(
            ContentDigest::hash(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            ContentDigest::hash(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_single_bit_flip_changes_digest() {
        let h1 = ContentDigest::hash(b"hello");
        let h2 = ContentDigest::hash(b"hellx");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_digester_matches_one_shot() {
        let mut digester = Digester::new();
        digester.update(b"hello ");
        digester.update(b"world");
        assert_eq!(digester.finalize(), ContentDigest::hash(b"hello world"));
    }

    #[test]
    fn test_digester_empty_input() {
        let digester = Digester::new();
        assert_eq!(digester.finalize(), ContentDigest::hash(b""));
    }

    #[test]
    fn test_digest_hex_roundtrip() {
        let digest = ContentDigest::hash(b"roundtrip");
        let recovered = ContentDigest::from_hex(&digest.to_hex()).unwrap();
        assert_eq!(digest, recovered);
    }

    #[test]
    fn test_digest_from_hex_rejects_wrong_length() {
        assert!(ContentDigest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_digest_debug_truncated() {
        let digest = ContentDigest::from_bytes([0xab; 32]);
        assert_eq!(format!("{:?}", digest), "Sha256(abababababababab)");
    }

    proptest! {
        #[test]
        fn prop_chunked_digest_equals_one_shot(
            data in proptest::collection::vec(any::<u8>(), 0..2048),
            chunk_size in 1usize..256,
        ) {
            let mut digester = Digester::new();
            for chunk in data.chunks(chunk_size) {
                digester.update(chunk);
            }
            prop_assert_eq!(digester.finalize(), ContentDigest::hash(&data));
        }

        #[test]
        fn prop_digest_deterministic(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            prop_assert_eq!(ContentDigest::hash(&data), ContentDigest::hash(&data));
        }
    }
}
