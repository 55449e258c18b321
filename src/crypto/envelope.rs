//! Sealed envelope wire format
//!
//! ```text
//! [nonce: 12 bytes][ciphertext: len(plaintext) bytes][tag: 16 bytes]
//! ```
//!
//! No header, version byte or algorithm identifier. The nonce length is
//! fixed, so the layout is self-describing.

use base64::{engine::general_purpose::STANDARD, Engine};

use super::nonce::NONCE_SIZE;
use crate::error::{SealError, SealResult};

/// Size of the GCM authentication tag in bytes
pub const TAG_SIZE: usize = 16;

/// `nonce || ciphertext || tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    bytes: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from a nonce and the sealed body
    pub(crate) fn assemble(nonce: &[u8; NONCE_SIZE], body: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(NONCE_SIZE + body.len());
        bytes.extend_from_slice(nonce);
        bytes.extend_from_slice(body);
        Self { bytes }
    }

    /// Wrap received bytes
    ///
    /// Only the nonce prefix is checked here; a body too short to hold a tag
    /// is rejected at open time as an authentication failure.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> SealResult<Self> {
        let bytes = bytes.into();
        check_len(&bytes)?;
        Ok(Self { bytes })
    }

    /// Bytes added on top of the plaintext length
    pub const fn overhead() -> usize {
        NONCE_SIZE + TAG_SIZE
    }

    /// Envelope length for a plaintext of `plaintext_len` bytes
    pub const fn sealed_len(plaintext_len: usize) -> usize {
        plaintext_len + Self::overhead()
    }

    pub fn nonce(&self) -> &[u8] {
        &self.bytes[..NONCE_SIZE]
    }

    /// Ciphertext followed by the tag
    pub fn body(&self) -> &[u8] {
        &self.bytes[NONCE_SIZE..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: an envelope holds at least a nonce
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Standard base64 with padding
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn from_base64(encoded: &str) -> SealResult<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| SealError::Encoding(format!("Invalid base64 envelope: {}", e)))?;
        Self::from_bytes(bytes)
    }

    /// Lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn from_hex(encoded: &str) -> SealResult<Self> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| SealError::Encoding(format!("Invalid hex envelope: {}", e)))?;
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Envelope {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Envelope> for Vec<u8> {
    fn from(envelope: Envelope) -> Self {
        envelope.bytes
    }
}

impl TryFrom<Vec<u8>> for Envelope {
    type Error = SealError;

    fn try_from(bytes: Vec<u8>) -> SealResult<Self> {
        Self::from_bytes(bytes)
    }
}

/// Split raw envelope bytes into `(nonce, body)`
pub(crate) fn split(bytes: &[u8]) -> SealResult<(&[u8], &[u8])> {
    check_len(bytes)?;
    Ok(bytes.split_at(NONCE_SIZE))
}

fn check_len(bytes: &[u8]) -> SealResult<()> {
    if bytes.len() < NONCE_SIZE {
        return Err(SealError::EnvelopeTooShort {
            expected: NONCE_SIZE,
            actual: bytes.len(),
        });
    }
    Ok(())
}
