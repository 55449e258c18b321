//! Seal and open CLI commands

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::context::CliContext;
use super::io::{
    decode_envelope, encode_envelope, read_input, read_passphrase, write_output,
    PASSPHRASE_ENV_VAR,
};
use crate::audit::{AuditEntry, Operation};
use crate::config::OutputEncoding;
use crate::crypto::Sealer;
use crate::error::SealResult;

/// Envelope text encoding on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingArg {
    Base64,
    Hex,
    Raw,
}

impl From<EncodingArg> for OutputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Base64 => OutputEncoding::Base64,
            EncodingArg::Hex => OutputEncoding::Hex,
            EncodingArg::Raw => OutputEncoding::Raw,
        }
    }
}

/// Arguments for `envseal seal`
#[derive(Args, Debug)]
pub struct SealArgs {
    /// Plaintext file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Envelope output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Envelope encoding (defaults to the configured encoding)
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Environment variable holding the passphrase (prompts when unset)
    #[arg(long, default_value = PASSPHRASE_ENV_VAR)]
    pub passphrase_env: String,
}

/// Arguments for `envseal open`
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Envelope file (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Plaintext output file (writes stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Envelope encoding (defaults to the configured encoding)
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Environment variable holding the passphrase (prompts when unset)
    #[arg(long, default_value = PASSPHRASE_ENV_VAR)]
    pub passphrase_env: String,
}

/// Seal the input and write the envelope
pub fn handle_seal_command(ctx: &mut CliContext, args: SealArgs) -> SealResult<()> {
    let encoding = resolve_encoding(ctx, args.encoding);
    let plaintext = read_input(None, args.input.as_deref())?;
    let passphrase = read_passphrase(&args.passphrase_env, true)?;

    let result = ctx
        .derive_key_for_seal(&passphrase)
        .and_then(|key| Sealer::new().seal_with_key(&plaintext, &key));
    ctx.record_or_warn(&AuditEntry::from_result(
        Operation::Seal,
        plaintext.len(),
        &result,
    ));
    let envelope = result?;

    write_output(args.output.as_deref(), &encode_envelope(&envelope, encoding))
}

/// Open the input envelope and write the plaintext
///
/// Nothing is written unless the envelope authenticates.
pub fn handle_open_command(ctx: &CliContext, args: OpenArgs) -> SealResult<()> {
    let encoding = resolve_encoding(ctx, args.encoding);
    let input = read_input(None, args.input.as_deref())?;
    let input_len = input.len();
    let passphrase = read_passphrase(&args.passphrase_env, false)?;

    let result = decode_envelope(input, encoding).and_then(|envelope| {
        let key = ctx.derive_key(&passphrase)?;
        Sealer::new().open_with_key(envelope.as_bytes(), &key)
    });
    ctx.record_or_warn(&AuditEntry::from_result(Operation::Open, input_len, &result));
    let plaintext = result?;

    write_output(args.output.as_deref(), &plaintext)
}

fn resolve_encoding(ctx: &CliContext, arg: Option<EncodingArg>) -> OutputEncoding {
    arg.map(OutputEncoding::from)
        .unwrap_or(ctx.settings.output_encoding)
}
