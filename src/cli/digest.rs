//! Digest and key derivation CLI commands

use std::path::PathBuf;

use clap::Args;

use super::context::CliContext;
use super::io::{read_input, read_passphrase, PASSPHRASE_ENV_VAR};
use crate::audit::{AuditEntry, Operation};
use crate::crypto::{md5_hex, sha256_hex, KeyDerivationMode};
use crate::error::SealResult;

/// Arguments for `envseal digest`
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Text to digest (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Digest the contents of a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Use MD5 instead of SHA-256
    #[arg(long)]
    pub md5: bool,
}

/// Arguments for `envseal derive-key`
#[derive(Args, Debug)]
pub struct DeriveKeyArgs {
    /// Environment variable holding the passphrase (prompts when unset)
    #[arg(long, default_value = PASSPHRASE_ENV_VAR)]
    pub passphrase_env: String,
}

/// Print the hex digest of the input
pub fn handle_digest_command(ctx: &CliContext, args: DigestArgs) -> SealResult<()> {
    let input = read_input(args.text.as_deref(), args.file.as_deref())?;

    let digest = if args.md5 {
        md5_hex(&input)
    } else {
        sha256_hex(&input)
    };

    ctx.record_or_warn(&AuditEntry::success(
        Operation::Digest,
        input.len(),
        digest.len(),
    ));

    println!("{}", digest);
    Ok(())
}

/// Print the derived key as hex
///
/// The legacy key is already hex text, so it is printed as-is.
pub fn handle_derive_key_command(ctx: &CliContext, args: DeriveKeyArgs) -> SealResult<()> {
    let passphrase = read_passphrase(&args.passphrase_env, false)?;

    let result = ctx.derive_key(&passphrase);
    let entry = match &result {
        Ok(key) => AuditEntry::success(Operation::DeriveKey, passphrase.len(), key.as_bytes().len()),
        Err(e) => AuditEntry::failure(Operation::DeriveKey, passphrase.len(), e),
    };
    ctx.record_or_warn(&entry);
    let key = result?;

    match ctx.settings.key_derivation {
        KeyDerivationMode::LegacyMd5Hex => {
            println!("{}", String::from_utf8_lossy(key.as_bytes()))
        }
        KeyDerivationMode::Argon2id => println!("{}", hex::encode(key.as_bytes())),
    }

    Ok(())
}
