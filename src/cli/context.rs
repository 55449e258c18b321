//! Shared state for CLI command handlers

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{SealPaths, Settings};
use crate::crypto::{derive_key, derive_key_argon2, DerivedKey, KeyDerivationMode, Passphrase};
use crate::error::{SealError, SealResult};

/// Paths and settings loaded once per invocation
pub struct CliContext {
    pub paths: SealPaths,
    pub settings: Settings,
}

impl CliContext {
    pub fn new(paths: SealPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    /// Load paths and settings from the environment
    pub fn load() -> SealResult<Self> {
        let paths = SealPaths::new()?;
        let settings = Settings::load_or_create(&paths)?;
        Ok(Self::new(paths, settings))
    }

    /// Append an entry to the audit log when auditing is enabled
    pub fn record(&self, entry: &AuditEntry) -> SealResult<()> {
        if !self.settings.audit_enabled {
            return Ok(());
        }
        AuditLogger::new(self.paths.audit_log()).log(entry)
    }

    /// Like [`record`](Self::record), but a failed write only prints a warning
    ///
    /// The command's own result always reaches the caller.
    pub fn record_or_warn(&self, entry: &AuditEntry) {
        if let Err(err) = self.record(entry) {
            eprintln!("Warning: failed to write audit log: {}", err);
        }
    }

    /// Derive key material with the configured derivation
    ///
    /// Never touches the settings file. In Argon2id mode a stored salt is
    /// required; without one there is nothing this key could open.
    pub fn derive_key(&self, passphrase: &Passphrase) -> SealResult<DerivedKey> {
        match self.settings.key_derivation {
            KeyDerivationMode::LegacyMd5Hex => Ok(derive_key(passphrase.as_bytes())),
            KeyDerivationMode::Argon2id => {
                let params = self.settings.key_params.as_ref().ok_or_else(|| {
                    SealError::KeyDerivation(
                        "No Argon2id salt configured; seal something first".to_string(),
                    )
                })?;
                derive_key_argon2(passphrase.as_bytes(), params)
            }
        }
    }

    /// Derive key material for sealing
    ///
    /// The first Argon2id seal generates a salt and saves it to the settings
    /// file; without it, the envelope could not be opened later.
    pub fn derive_key_for_seal(&mut self, passphrase: &Passphrase) -> SealResult<DerivedKey> {
        if self.settings.key_derivation == KeyDerivationMode::Argon2id
            && self.settings.ensure_argon2_params()
        {
            self.settings.save(&self.paths)?;
        }
        self.derive_key(passphrase)
    }
}
