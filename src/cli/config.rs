//! Configuration CLI commands

use clap::{Subcommand, ValueEnum};

use super::context::CliContext;
use super::seal::EncodingArg;
use crate::crypto::KeyDerivationMode;
use crate::error::SealResult;

/// Key derivation choice on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KdfArg {
    /// MD5 hex digest as key (compatible with existing envelopes)
    Legacy,
    /// Argon2id with a stored salt
    Argon2id,
}

impl From<KdfArg> for KeyDerivationMode {
    fn from(arg: KdfArg) -> Self {
        match arg {
            KdfArg::Legacy => KeyDerivationMode::LegacyMd5Hex,
            KdfArg::Argon2id => KeyDerivationMode::Argon2id,
        }
    }
}

/// Configuration commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,

    /// Write the settings file with defaults if it does not exist
    Init,

    /// Change one or more settings
    Set {
        /// Default envelope encoding
        #[arg(long, value_enum)]
        encoding: Option<EncodingArg>,

        /// Key derivation for seal and open
        #[arg(long, value_enum)]
        kdf: Option<KdfArg>,

        /// Enable or disable the audit log
        #[arg(long)]
        audit: Option<bool>,
    },
}

/// Handle configuration commands
pub fn handle_config_command(ctx: &mut CliContext, cmd: ConfigCommands) -> SealResult<()> {
    match cmd {
        ConfigCommands::Show => show_config(ctx),
        ConfigCommands::Init => init_config(ctx),
        ConfigCommands::Set {
            encoding,
            kdf,
            audit,
        } => {
            if let Some(encoding) = encoding {
                ctx.settings.output_encoding = encoding.into();
            }
            if let Some(kdf) = kdf {
                ctx.settings.key_derivation = kdf.into();
            }
            if let Some(audit) = audit {
                ctx.settings.audit_enabled = audit;
            }
            ctx.settings.save(&ctx.paths)?;
            show_config(ctx)
        }
    }
}

fn init_config(ctx: &CliContext) -> SealResult<()> {
    if ctx.paths.is_initialized() {
        println!(
            "Settings already exist at: {}",
            ctx.paths.settings_file().display()
        );
        return Ok(());
    }

    ctx.settings.save(&ctx.paths)?;
    println!("Wrote settings to: {}", ctx.paths.settings_file().display());
    Ok(())
}

fn show_config(ctx: &CliContext) -> SealResult<()> {
    let settings = &ctx.settings;

    println!("envseal Configuration");
    println!("=====================");
    println!("Settings file: {}", ctx.paths.settings_file().display());
    println!("Audit log:     {}", ctx.paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Output encoding: {}", settings.output_encoding);
    println!("  Key derivation:  {}", settings.key_derivation);
    if let Some(ref params) = settings.key_params {
        println!("    Memory Cost: {} KiB", params.memory_cost);
        println!("    Time Cost:   {} iterations", params.time_cost);
        println!("    Parallelism: {} threads", params.parallelism);
    }
    println!("  Audit log:       {}", if settings.audit_enabled { "enabled" } else { "disabled" });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputEncoding, SealPaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = CliContext::new(paths.clone(), Settings::default());

        handle_config_command(
            &mut ctx,
            ConfigCommands::Set {
                encoding: Some(EncodingArg::Hex),
                kdf: Some(KdfArg::Argon2id),
                audit: Some(false),
            },
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.output_encoding, OutputEncoding::Hex);
        assert_eq!(loaded.key_derivation, KeyDerivationMode::Argon2id);
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_init_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SealPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut ctx = CliContext::new(paths.clone(), Settings::default());

        handle_config_command(&mut ctx, ConfigCommands::Init).unwrap();
        assert!(paths.is_initialized());

        // Second init leaves the file alone
        std::fs::write(paths.settings_file(), "{\"audit_enabled\": false}").unwrap();
        handle_config_command(&mut ctx, ConfigCommands::Init).unwrap();
        assert!(!Settings::load_or_create(&paths).unwrap().audit_enabled);
    }
}
