//! Hex-encoded message digests
//!
//! SHA-256 is the general-purpose digest exposed to callers. MD5 exists only
//! because the legacy key derivation is defined in terms of it.

use md5::Md5;
use sha2::{Digest, Sha256};

/// SHA-256 of `input` as a lowercase hex string (64 chars)
pub fn sha256_hex(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

/// MD5 of `input` as a lowercase hex string (32 chars)
pub fn md5_hex(input: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_golden_vector() {
        assert_eq!(
            sha256_hex(b"Hello_world"),
            "af4e61dac3e037a684eedb5d9000f9cd3df89d911cc8e2354f73d3f6552b0357"
        );
        assert_eq!(
            sha256_hex(b"Silly_me"),
            "7dd36b96ef802e44626d16ab98e1582f7d56f1a283e76c963224f108eafcde3e"
        );
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_md5_vectors() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"random.key"), "6c3a21b06f4fb4d6c77dc3750169c084");
    }

    #[test]
    fn test_digest_determinism() {
        let input = b"the same bytes twice";
        assert_eq!(sha256_hex(input), sha256_hex(input));
        assert_eq!(md5_hex(input), md5_hex(input));
    }

    #[test]
    fn test_lowercase_hex() {
        let digest = sha256_hex(b"abc");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
