//! Golden digest vectors for cross-implementation verification.
//!
//! Every implementation of the digest engine must reproduce these
//! published SHA-256 values exactly (FIPS 180-4 / NIST CAVP, plus the
//! well-known digest of b"hello" used throughout the ledger scenario
//! tests). The keyed-tag engine is pinned against RFC 4231 vectors in
//! docseal-core's own tests, where the raw HMAC primitive is visible.

use docseal_core::{ContentDigest, Digester};
use serde::{Deserialize, Serialize};

/// A single golden digest vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestVector {
    /// Vector name, stable across releases.
    pub name: String,
    /// Input bytes, hex-encoded.
    pub input_hex: String,
    /// Expected SHA-256 digest, hex-encoded.
    pub expected_hex: String,
}

fn vector(name: &str, input: &[u8], expected_hex: &str) -> DigestVector {
    DigestVector {
        name: name.to_string(),
        input_hex: hex::encode(input),
        expected_hex: expected_hex.to_string(),
    }
}

/// All golden digest vectors.
pub fn all_digest_vectors() -> Vec<DigestVector> {
    vec![
        vector(
            "empty",
            b"",
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ),
        vector(
            "abc",
            b"abc",
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
        ),
        vector(
            "hello",
            b"hello",
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ),
        vector(
            "two_block_message",
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ),
    ]
}

/// Verify the digest engine against every vector, in both one-shot and
/// chunked form. Returns the name of the first failing vector.
pub fn verify_all_vectors() -> Result<(), String> {
    for v in all_digest_vectors() {
        let input = hex::decode(&v.input_hex).map_err(|e| format!("{}: bad input hex: {e}", v.name))?;

        let one_shot = ContentDigest::hash(&input);
        if one_shot.to_hex() != v.expected_hex {
            return Err(format!("{}: one-shot digest mismatch", v.name));
        }

        let mut digester = Digester::new();
        for chunk in input.chunks(3) {
            digester.update(chunk);
        }
        if digester.finalize() != one_shot {
            return Err(format!("{}: chunked digest mismatch", v.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        verify_all_vectors().unwrap();
    }

    #[test]
    fn test_vectors_serialize() {
        let json = serde_json::to_string_pretty(&all_digest_vectors()).unwrap();
        let back: Vec<DigestVector> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), all_digest_vectors().len());
    }
}
