//! Nonce generation
//!
//! Sealing draws its nonce through the [`NonceSource`] trait so the random
//! source is injected rather than ambient. Production code uses
//! [`OsNonceSource`]; tests can supply a deterministic source.

use aes_gcm::aead::{rand_core::RngCore, OsRng};

use crate::error::{SealError, SealResult};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Produces one fresh nonce per seal call
///
/// Implementations must never hand out the same nonce twice for the same key.
/// An implementation that cannot produce a nonce must return an error rather
/// than a zero or predictable value.
pub trait NonceSource {
    fn fill_nonce(&mut self, nonce: &mut [u8; NONCE_SIZE]) -> SealResult<()>;
}

/// Operating system CSPRNG
///
/// Stateless; safe to create per call and to use from many threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill_nonce(&mut self, nonce: &mut [u8; NONCE_SIZE]) -> SealResult<()> {
        OsRng
            .try_fill_bytes(nonce)
            .map_err(|e| SealError::EntropySource(format!("Failed to generate nonce: {}", e)))
    }
}

impl<N: NonceSource + ?Sized> NonceSource for &mut N {
    fn fill_nonce(&mut self, nonce: &mut [u8; NONCE_SIZE]) -> SealResult<()> {
        (**self).fill_nonce(nonce)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_os_source_fills_nonce() {
        let mut nonce = [0u8; NONCE_SIZE];
        OsNonceSource.fill_nonce(&mut nonce).unwrap();
        // 2^-96 chance of a false failure
        assert_ne!(nonce, [0u8; NONCE_SIZE]);
    }

    #[test]
    fn test_os_source_distinct_nonces() {
        let mut source = OsNonceSource;
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let mut nonce = [0u8; NONCE_SIZE];
            source.fill_nonce(&mut nonce).unwrap();
            assert!(seen.insert(nonce));
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        struct Fixed;
        impl NonceSource for Fixed {
            fn fill_nonce(&mut self, nonce: &mut [u8; NONCE_SIZE]) -> SealResult<()> {
                nonce.fill(7);
                Ok(())
            }
        }

        fn draw<N: NonceSource>(mut source: N) -> [u8; NONCE_SIZE] {
            let mut nonce = [0u8; NONCE_SIZE];
            source.fill_nonce(&mut nonce).unwrap();
            nonce
        }

        let mut fixed = Fixed;
        assert_eq!(draw(&mut fixed), [7u8; NONCE_SIZE]);
    }
}
