//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SealError;

/// Operations recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Digest,
    DeriveKey,
    Seal,
    Open,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Digest => write!(f, "DIGEST"),
            Operation::DeriveKey => write!(f, "DERIVE_KEY"),
            Operation::Seal => write!(f, "SEAL"),
            Operation::Open => write!(f, "OPEN"),
        }
    }
}

/// Whether the operation succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Success => write!(f, "OK"),
            Outcome::Failure => write!(f, "FAILED"),
        }
    }
}

/// A single audit log entry
///
/// Records sizes and outcomes only. Passphrases, keys and message contents
/// are never written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub outcome: Outcome,

    /// Length of the operation's input in bytes
    pub input_len: usize,

    /// Length of the produced output in bytes (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_len: Option<usize>,

    /// Error message for failed operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuditEntry {
    /// Entry for a successful operation
    pub fn success(operation: Operation, input_len: usize, output_len: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            outcome: Outcome::Success,
            input_len,
            output_len: Some(output_len),
            error: None,
        }
    }

    /// Entry for a failed operation
    pub fn failure(operation: Operation, input_len: usize, error: &SealError) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            outcome: Outcome::Failure,
            input_len,
            output_len: None,
            error: Some(error.to_string()),
        }
    }

    /// Entry for the result of an operation
    pub fn from_result<T: AsRef<[u8]>>(
        operation: Operation,
        input_len: usize,
        result: &Result<T, SealError>,
    ) -> Self {
        match result {
            Ok(output) => Self::success(operation, input_len, output.as_ref().len()),
            Err(e) => Self::failure(operation, input_len, e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// One-line human-readable rendering
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "[{}] {} {} in={}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.outcome,
            self.input_len
        );

        if let Some(out) = self.output_len {
            line.push_str(&format!(" out={}", out));
        }

        if let Some(ref error) = self.error {
            line.push_str(&format!(" ({})", error));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_entry() {
        let entry = AuditEntry::success(Operation::Seal, 24, 52);
        assert!(entry.is_success());
        assert_eq!(entry.output_len, Some(52));
        assert!(entry.error.is_none());
    }

    #[test]
    fn test_failure_entry() {
        let entry = AuditEntry::failure(Operation::Open, 52, &SealError::AuthenticationFailure);
        assert!(!entry.is_success());
        assert!(entry.output_len.is_none());
        assert!(entry.error.unwrap().contains("Authentication failed"));
    }

    #[test]
    fn test_from_result() {
        let ok: Result<Vec<u8>, SealError> = Ok(vec![0u8; 8]);
        let entry = AuditEntry::from_result(Operation::Open, 36, &ok);
        assert_eq!(entry.output_len, Some(8));

        let err: Result<Vec<u8>, SealError> = Err(SealError::EnvelopeTooShort {
            expected: 12,
            actual: 2,
        });
        let entry = AuditEntry::from_result(Operation::Open, 2, &err);
        assert_eq!(entry.outcome, Outcome::Failure);
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let entry = AuditEntry::success(Operation::DeriveKey, 10, 32);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"derive_key\""));
        assert!(json.contains("\"outcome\":\"success\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_human_readable() {
        let entry = AuditEntry::failure(Operation::Open, 5, &SealError::AuthenticationFailure);
        let line = entry.format_human_readable();
        assert!(line.contains("OPEN FAILED in=5"));
        assert!(!line.contains("out="));

        let entry = AuditEntry::success(Operation::Seal, 24, 52);
        assert!(entry
            .format_human_readable()
            .contains("SEAL OK in=24 out=52"));
    }
}
