//! SHA-256 digests and commitment hashes.

use sha2::{Digest, Sha256};

use super::{
    baid64::{self, Prefix},
    hex,
};

/// A 32-byte SHA-256 digest.
pub type Digest32 = [u8; 32];

/// Computes the SHA-256 digest of `bytes`.
#[must_use]
pub fn digest(bytes: &[u8]) -> Digest32 {
    Sha256::digest(bytes).into()
}

/// Computes the commitment hash of `bytes`: the digest of the digest.
///
/// # Examples
///
/// ```
/// use baidkit::codec::commitment::{commitment_hash, digest};
///
/// let data = b"state transition";
/// assert_eq!(commitment_hash(data), digest(&digest(data)));
/// ```
#[must_use]
pub fn commitment_hash(bytes: &[u8]) -> Digest32 {
    digest(&digest(bytes))
}

/// Returns the commitment hash of `bytes` as lowercase hex.
#[must_use]
pub fn commitment_hex(bytes: &[u8]) -> String {
    hex::encode(&commitment_hash(bytes))
}

/// Returns the commitment hash of `bytes` as a grouped identifier under
/// `prefix`.
#[must_use]
pub fn commitment_id(prefix: &Prefix, bytes: &[u8]) -> String {
    format!(
        "{prefix}:{}",
        baid64::encode(&commitment_hash(bytes), baid64::DEFAULT_GROUP_SIZE)
    )
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"; "empty")]
    #[test_case(b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"; "abc")]
    fn sha256_vectors(bytes: &[u8], expected: &str) {
        assert_eq!(hex::encode(&digest(bytes)), expected);
    }

    #[test]
    fn commitment_of_empty_is_fixed() {
        assert_eq!(
            commitment_hex(&[]),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn commitment_is_double_digest() {
        let samples: [&[u8]; 4] = [&[], &[0], b"hello", &[0xab; 100]];
        for bytes in samples {
            assert_eq!(commitment_hash(bytes), digest(&digest(bytes)));
            assert_ne!(commitment_hash(bytes), digest(bytes));
        }
    }

    #[test]
    fn commitment_id_parses_back() {
        let id = commitment_id(&Prefix::default(), b"hello");
        assert!(id.starts_with("rgb:"));

        let parsed = baid64::parse_identifier(&id).unwrap();
        assert_eq!(parsed.bytes(), commitment_hash(b"hello"));
    }
}
