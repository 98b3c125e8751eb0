//! Proptest strategies for DocSeal property tests.

use docseal_core::{DocumentId, SecretKey};
use proptest::prelude::*;

/// Arbitrary document payloads, empty included.
pub fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..4096)
}

/// Non-empty secret keys of varied length. Empty keys are invalid by
/// contract and covered by dedicated tests.
pub fn key_strategy() -> impl Strategy<Value = SecretKey> {
    proptest::collection::vec(any::<u8>(), 1..64).prop_map(SecretKey::new)
}

/// Caller-assigned document identifiers.
pub fn document_id_strategy() -> impl Strategy<Value = DocumentId> {
    "[a-z0-9][a-z0-9._-]{0,39}".prop_map(DocumentId::new)
}

/// A payload together with a chunk size for exercising incremental
/// digesting against the one-shot form.
pub fn chunked_payload_strategy() -> impl Strategy<Value = (Vec<u8>, usize)> {
    (payload_strategy(), 1usize..512)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docseal_core::{AuthTag, ContentDigest, Digester};

    /// Key material ending in a nonzero byte. HMAC zero-pads short keys
    /// to the block size, so keys differing only in trailing zeros would
    /// collide; pinning the last byte keeps distinct vectors distinct
    /// after padding.
    fn distinct_key_bytes() -> impl Strategy<Value = Vec<u8>> {
        (proptest::collection::vec(any::<u8>(), 0..48), 1u8..=255).prop_map(|(mut v, last)| {
            v.push(last);
            v
        })
    }

    proptest! {
        #[test]
        fn prop_tag_roundtrip(key in key_strategy(), payload in payload_strategy()) {
            let digest = ContentDigest::hash(&payload);
            let tag = AuthTag::compute(&key, &digest).unwrap();
            prop_assert!(AuthTag::verify(&key, &digest, &tag));
        }

        #[test]
        fn prop_distinct_keys_distinct_tags(
            b1 in distinct_key_bytes(),
            b2 in distinct_key_bytes(),
            payload in payload_strategy(),
        ) {
            prop_assume!(b1 != b2);
            let digest = ContentDigest::hash(&payload);
            let t1 = AuthTag::compute(&SecretKey::new(b1), &digest).unwrap();
            let t2 = AuthTag::compute(&SecretKey::new(b2), &digest).unwrap();
            prop_assert_ne!(t1, t2);
        }

        #[test]
        fn prop_chunked_digest_matches((payload, chunk_size) in chunked_payload_strategy()) {
            let mut digester = Digester::new();
            for chunk in payload.chunks(chunk_size) {
                digester.update(chunk);
            }
            prop_assert_eq!(digester.finalize(), ContentDigest::hash(&payload));
        }

        #[test]
        fn prop_generated_ids_are_nonempty(id in document_id_strategy()) {
            prop_assert!(!id.as_str().is_empty());
        }
    }
}
