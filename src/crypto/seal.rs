//! AES-256-GCM seal and open
//!
//! Each call derives its own key, builds its own cipher and (for seal) draws
//! its own nonce. Nothing is shared between calls.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::envelope::{self, Envelope};
use super::key_derivation::{derive_key, DerivedKey};
use super::nonce::{NonceSource, OsNonceSource, NONCE_SIZE};
use crate::error::{SealError, SealResult};

/// Seals and opens envelopes with an injected nonce source
#[derive(Debug, Default)]
pub struct Sealer<N = OsNonceSource> {
    nonces: N,
}

impl Sealer<OsNonceSource> {
    /// Sealer backed by the operating system CSPRNG
    pub fn new() -> Self {
        Self {
            nonces: OsNonceSource,
        }
    }
}

impl<N: NonceSource> Sealer<N> {
    pub fn with_nonce_source(nonces: N) -> Self {
        Self { nonces }
    }

    /// Derive the legacy key from `passphrase` and seal `plaintext`
    pub fn seal(&mut self, plaintext: &[u8], passphrase: &[u8]) -> SealResult<Envelope> {
        let key = derive_key(passphrase);
        self.seal_with_key(plaintext, &key)
    }

    /// Seal `plaintext` under an already-derived key, no associated data
    pub fn seal_with_key(&mut self, plaintext: &[u8], key: &DerivedKey) -> SealResult<Envelope> {
        let cipher = build_cipher(key)?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        self.nonces.fill_nonce(&mut nonce_bytes)?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let body = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| SealError::CipherConstruction(format!("Encryption failed: {}", e)))?;

        Ok(Envelope::assemble(&nonce_bytes, &body))
    }

    /// Derive the legacy key from `passphrase` and open `envelope`
    pub fn open(&self, envelope: &[u8], passphrase: &[u8]) -> SealResult<Vec<u8>> {
        let key = derive_key(passphrase);
        self.open_with_key(envelope, &key)
    }

    /// Open raw envelope bytes under an already-derived key
    ///
    /// No plaintext is returned unless the tag verifies.
    pub fn open_with_key(&self, sealed: &[u8], key: &DerivedKey) -> SealResult<Vec<u8>> {
        let cipher = build_cipher(key)?;
        let (nonce, body) = envelope::split(sealed)?;

        cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| SealError::AuthenticationFailure)
    }
}

/// Seal `plaintext` under `passphrase` using the OS random source
pub fn seal(plaintext: &[u8], passphrase: &[u8]) -> SealResult<Envelope> {
    Sealer::new().seal(plaintext, passphrase)
}

/// Open an envelope produced by [`seal`]
pub fn open(envelope: &[u8], passphrase: &[u8]) -> SealResult<Vec<u8>> {
    Sealer::new().open(envelope, passphrase)
}

fn build_cipher(key: &DerivedKey) -> SealResult<Aes256Gcm> {
    Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealError::CipherConstruction(format!("Failed to create cipher: {}", e)))
}
