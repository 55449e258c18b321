//! Passphrase to key material
//!
//! Two derivations are provided:
//!
//! - [`derive_key`]: the legacy derivation used by [`seal`](super::seal()) and
//!   [`open`](super::open()). The key is the lowercase MD5 hex digest of the
//!   passphrase, taken as 32 raw ASCII bytes. Envelopes produced by the
//!   reference tooling can only be opened with this derivation.
//! - [`derive_key_argon2`]: Argon2id with a stored salt. Use this for
//!   anything new; the legacy key has at most 128 bits of entropy spread over
//!   a hex alphabet and MD5 is not a password hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, Params,
};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::digest::md5_hex;
use crate::error::{SealError, SealResult};

/// Size of the cipher key in bytes (AES-256)
pub const KEY_SIZE: usize = 32;

/// Which derivation turns a passphrase into key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KeyDerivationMode {
    /// MD5 hex digest used as raw key bytes (wire compatible, weak)
    #[default]
    LegacyMd5Hex,
    /// Argon2id with a per-installation salt
    Argon2id,
}

impl std::fmt::Display for KeyDerivationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyDerivationMode::LegacyMd5Hex => write!(f, "legacy-md5-hex"),
            KeyDerivationMode::Argon2id => write!(f, "argon2id"),
        }
    }
}

/// Parameters for Argon2id key derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDerivationParams {
    /// Salt for key derivation (base64 encoded, no padding)
    pub salt: String,
    /// Memory cost in KiB (default: 65536 = 64 MiB)
    pub memory_cost: u32,
    /// Time cost (iterations, default: 3)
    pub time_cost: u32,
    /// Parallelism degree (default: 4)
    pub parallelism: u32,
}

impl Default for KeyDerivationParams {
    fn default() -> Self {
        Self {
            salt: String::new(),
            memory_cost: 65536,
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl KeyDerivationParams {
    /// Create new params with a random salt
    pub fn new() -> Self {
        let salt = SaltString::generate(&mut OsRng);
        Self {
            salt: salt.to_string(),
            ..Default::default()
        }
    }
}

/// Key material for one seal or open call
///
/// Zeroed on drop. Never persisted.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Key bytes never reach Debug output
impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("len", &self.key.len())
            .finish()
    }
}

/// Derive the legacy key for `passphrase`
///
/// Deterministic and infallible: the MD5 hex digest is always 32 ASCII bytes.
pub fn derive_key(passphrase: &[u8]) -> DerivedKey {
    let mut digest = md5_hex(passphrase).into_bytes();

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&digest);
    digest.zeroize();

    DerivedKey { key }
}

/// Derive a key from a passphrase with Argon2id
pub fn derive_key_argon2(
    passphrase: &[u8],
    params: &KeyDerivationParams,
) -> SealResult<DerivedKey> {
    let salt = SaltString::from_b64(&params.salt)
        .map_err(|e| SealError::KeyDerivation(format!("Invalid salt: {}", e)))?;

    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(KEY_SIZE),
    )
    .map_err(|e| SealError::KeyDerivation(format!("Invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon2_params,
    );

    let hash = argon2
        .hash_password(passphrase, &salt)
        .map_err(|e| SealError::KeyDerivation(format!("Argon2 hashing failed: {}", e)))?;

    let hash_output = hash
        .hash
        .ok_or_else(|| SealError::KeyDerivation("No hash output generated".to_string()))?;

    let hash_bytes = hash_output.as_bytes();
    if hash_bytes.len() < KEY_SIZE {
        return Err(SealError::KeyDerivation(
            "Hash output too short for AES-256 key".to_string(),
        ));
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&hash_bytes[..KEY_SIZE]);

    Ok(DerivedKey { key })
}
