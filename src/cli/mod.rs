//! CLI command handlers
//!
//! Bridges clap argument parsing with the crypto core. All console output
//! lives here; the core never prints.

pub mod audit;
pub mod config;
pub mod context;
pub mod demo;
pub mod digest;
pub mod io;
pub mod seal;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigCommands};
pub use context::CliContext;
pub use demo::handle_demo_command;
pub use digest::{handle_derive_key_command, handle_digest_command, DeriveKeyArgs, DigestArgs};
pub use seal::{handle_open_command, handle_seal_command, OpenArgs, SealArgs};
