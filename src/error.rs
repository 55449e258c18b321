//! Custom error types for envelope-seal
//!
//! Every failure of a digest, key derivation, seal or open operation is
//! reported through [`SealError`]. No operation returns an empty value in
//! place of an error.

use thiserror::Error;

/// The main error type for envelope-seal operations
#[derive(Error, Debug)]
pub enum SealError {
    /// Key material could not be derived from the passphrase
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),

    /// The cipher rejected the key size or mode parameters
    #[error("Cipher construction error: {0}")]
    CipherConstruction(String),

    /// The envelope cannot even hold a nonce
    #[error("Envelope too short: expected at least {expected} bytes, got {actual}")]
    EnvelopeTooShort { expected: usize, actual: usize },

    /// Tag verification failed (wrong passphrase or tampered envelope)
    #[error("Authentication failed: wrong passphrase or corrupted envelope")]
    AuthenticationFailure,

    /// The secure random source could not produce a nonce
    #[error("Entropy source error: {0}")]
    EntropySource(String),

    /// Text transport encoding (base64/hex) errors
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SealError {
    /// Check if this is a tag verification failure
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::AuthenticationFailure)
    }

    /// Check if this is a short-envelope error
    pub fn is_envelope_too_short(&self) -> bool {
        matches!(self, Self::EnvelopeTooShort { .. })
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for envelope-seal operations
pub type SealResult<T> = Result<T, SealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SealError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_envelope_too_short_display() {
        let err = SealError::EnvelopeTooShort {
            expected: 12,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Envelope too short: expected at least 12 bytes, got 3"
        );
        assert!(err.is_envelope_too_short());
        assert!(!err.is_authentication_failure());
    }

    #[test]
    fn test_authentication_failure() {
        let err = SealError::AuthenticationFailure;
        assert!(err.is_authentication_failure());
        assert!(err.to_string().contains("Authentication failed"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let seal_err: SealError = io_err.into();
        assert!(matches!(seal_err, SealError::Io(_)));
    }
}
