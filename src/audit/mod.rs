//! Audit logging for the envseal CLI
//!
//! Every digest, key derivation, seal and open performed by the CLI is
//! appended to a line-delimited JSON log (JSONL). Entries carry sizes and
//! outcomes, never secrets or message contents.
//!
//! # Example
//!
//! ```rust,ignore
//! use envelope_seal::audit::{AuditEntry, AuditLogger, Operation};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let result = envelope_seal::crypto::seal(plaintext, passphrase);
//! logger.log(&AuditEntry::from_result(Operation::Seal, plaintext.len(), &result))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation, Outcome};
pub use logger::AuditLogger;
