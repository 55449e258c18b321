//! User settings for the envseal CLI
//!
//! The library functions take no configuration; these settings only steer
//! how the CLI encodes envelopes, derives keys and records its audit log.

use serde::{Deserialize, Serialize};

use super::paths::SealPaths;
use crate::crypto::key_derivation::{KeyDerivationMode, KeyDerivationParams};
use crate::error::SealError;

/// Text encoding for envelopes written by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    /// Standard base64 (default)
    #[default]
    Base64,
    /// Lowercase hex
    Hex,
    /// Raw bytes, no text encoding
    Raw,
}

impl std::fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputEncoding::Base64 => write!(f, "base64"),
            OutputEncoding::Hex => write!(f, "hex"),
            OutputEncoding::Raw => write!(f, "raw"),
        }
    }
}

/// User settings for envseal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Encoding used when no `--encoding` flag is given
    #[serde(default)]
    pub output_encoding: OutputEncoding,

    /// Key derivation used by seal and open
    #[serde(default)]
    pub key_derivation: KeyDerivationMode,

    /// Argon2id parameters (salt, memory cost, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_params: Option<KeyDerivationParams>,

    /// Whether CLI operations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            output_encoding: OutputEncoding::default(),
            key_derivation: KeyDerivationMode::default(),
            key_params: None,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SealPaths) -> Result<Self, SealError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SealError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SealError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SealPaths) -> Result<(), SealError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SealError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SealError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Generate Argon2id parameters unless some are already stored
    ///
    /// Returns `true` when they were just created and the settings need to
    /// be saved.
    pub fn ensure_argon2_params(&mut self) -> bool {
        if self.key_params.is_some() {
            return false;
        }
        self.key_params = Some(KeyDerivationParams::new());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.output_encoding, OutputEncoding::Base64);
        assert_eq!(settings.key_derivation, KeyDerivationMode::LegacyMd5Hex);
        assert!(settings.key_params.is_none());
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.output_encoding = OutputEncoding::Hex;
        settings.key_derivation = KeyDerivationMode::Argon2id;
        settings.audit_enabled = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.output_encoding, OutputEncoding::Hex);
        assert_eq!(loaded.key_derivation, KeyDerivationMode::Argon2id);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SealError::Config(_)));
    }

    #[test]
    fn test_argon2_params_generated_once() {
        let mut settings = Settings::default();

        assert!(settings.ensure_argon2_params());
        let first = settings.key_params.clone().unwrap();
        assert!(!first.salt.is_empty());

        assert!(!settings.ensure_argon2_params());
        assert_eq!(settings.key_params, Some(first));
    }
}
