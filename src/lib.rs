//! envelope-seal - passphrase-based AES-256-GCM envelopes
//!
//! Three operations make up the core:
//!
//! - [`crypto::sha256_hex`]: hex SHA-256 digest
//! - [`crypto::seal`]: derive a key from a passphrase and seal bytes into an
//!   envelope (`nonce || ciphertext || tag`)
//! - [`crypto::open`]: the inverse of seal; fails instead of returning
//!   unauthenticated plaintext
//!
//! # Architecture
//!
//! - `crypto`: digests, key derivation, nonce sources and envelopes
//! - `error`: custom error types
//! - `config`: CLI path resolution and settings
//! - `audit`: JSONL audit log of CLI operations
//! - `cli`: command handlers for the `envseal` binary
//!
//! # Example
//!
//! ```rust
//! use envelope_seal::crypto::{open, seal};
//!
//! let envelope = seal(b"This is some random text", b"random.key")?;
//! let plaintext = open(envelope.as_bytes(), b"random.key")?;
//! assert_eq!(plaintext, b"This is some random text");
//! # Ok::<(), envelope_seal::SealError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod error;

pub use crypto::{open, seal, sha256_hex, Envelope};
pub use error::{SealError, SealResult};
