//! Secure memory handling for passphrases
//!
//! Passphrases are zeroed on drop and never printed.

use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Passphrase bytes that zero themselves on drop
///
/// Passphrases are opaque bytes: no length or charset rule is enforced.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase {
    inner: Vec<u8>,
}

impl Passphrase {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for Passphrase {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for Passphrase {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<String> for Passphrase {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl From<&str> for Passphrase {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl From<Vec<u8>> for Passphrase {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Passphrase")
            .field("len", &self.inner.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.inner.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passphrase_creation() {
        let p = Passphrase::new("test");
        assert_eq!(p.as_bytes(), b"test");
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
    }

    #[test]
    fn test_passphrase_from_string() {
        let p: Passphrase = String::from("test").into();
        assert_eq!(p.as_bytes(), b"test");
    }

    #[test]
    fn test_passphrase_non_utf8() {
        let p = Passphrase::from(vec![0xff, 0x00, 0xfe]);
        assert_eq!(&*p, &[0xff, 0x00, 0xfe]);
    }

    #[test]
    fn test_passphrase_debug() {
        let p = Passphrase::new("secret");
        let debug = format!("{:?}", p);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("Passphrase"));
    }

    #[test]
    fn test_passphrase_display() {
        let p = Passphrase::new("secret");
        let display = format!("{}", p);
        assert!(!display.contains("secret"));
        assert!(display.contains("REDACTED"));
    }

    #[test]
    fn test_zeroize() {
        let mut p = Passphrase::new("secret");
        p.zeroize();
        assert!(p.is_empty());
    }
}
