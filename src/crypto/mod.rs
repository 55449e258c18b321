//! Cryptographic core for envelope-seal
//!
//! Digests, passphrase key derivation and AES-256-GCM envelopes. The core
//! performs no I/O besides reading the random source during seal.

pub mod digest;
pub mod envelope;
pub mod key_derivation;
pub mod nonce;
pub mod seal;
pub mod secure_memory;

pub use digest::{md5_hex, sha256_hex};
pub use envelope::{Envelope, TAG_SIZE};
pub use key_derivation::{
    derive_key, derive_key_argon2, DerivedKey, KeyDerivationMode, KeyDerivationParams, KEY_SIZE,
};
pub use nonce::{NonceSource, OsNonceSource, NONCE_SIZE};
pub use seal::{open, seal, Sealer};
pub use secure_memory::Passphrase;
