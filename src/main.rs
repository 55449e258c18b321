use anyhow::Result;
use clap::{Parser, Subcommand};

use envelope_seal::cli::{
    handle_audit_command, handle_config_command, handle_demo_command, handle_derive_key_command,
    handle_digest_command, handle_open_command, handle_seal_command, CliContext, ConfigCommands,
    DeriveKeyArgs, DigestArgs, OpenArgs, SealArgs,
};

#[derive(Parser)]
#[command(
    name = "envseal",
    author = "Kaylee Beyene",
    version,
    about = "Passphrase-based AES-256-GCM envelope encryption",
    long_about = "envseal seals data into self-contained AES-256-GCM envelopes \
                  (nonce || ciphertext || tag) keyed from a passphrase, opens \
                  them again, and computes SHA-256 digests."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hex digest of text, a file, or stdin
    Digest(DigestArgs),

    /// Print the key derived from a passphrase
    DeriveKey(DeriveKeyArgs),

    /// Encrypt input into an envelope
    Seal(SealArgs),

    /// Decrypt and authenticate an envelope
    Open(OpenArgs),

    /// Digest, seal and open the built-in sample inputs
    Demo,

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = CliContext::load()?;

    match cli.command {
        Some(Commands::Digest(args)) => handle_digest_command(&ctx, args)?,
        Some(Commands::DeriveKey(args)) => handle_derive_key_command(&ctx, args)?,
        Some(Commands::Seal(args)) => handle_seal_command(&mut ctx, args)?,
        Some(Commands::Open(args)) => handle_open_command(&ctx, args)?,
        Some(Commands::Demo) => handle_demo_command(&ctx)?,
        Some(Commands::Config(cmd)) => handle_config_command(&mut ctx, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&ctx, limit)?,
        None => {
            println!("envseal - passphrase-based envelope encryption");
            println!();
            println!("Run 'envseal --help' for usage information.");
        }
    }

    Ok(())
}
