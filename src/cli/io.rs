//! Input, output and passphrase handling for CLI commands

use std::io::{Read, Write};
use std::path::Path;

use crate::config::OutputEncoding;
use crate::crypto::{Envelope, Passphrase};
use crate::error::{SealError, SealResult};

/// Default environment variable checked for a passphrase
pub const PASSPHRASE_ENV_VAR: &str = "ENVSEAL_PASSPHRASE";

/// Read command input from a literal argument, a file, or stdin
pub fn read_input(literal: Option<&str>, file: Option<&Path>) -> SealResult<Vec<u8>> {
    if let Some(text) = literal {
        return Ok(text.as_bytes().to_vec());
    }

    if let Some(path) = file {
        return std::fs::read(path).map_err(|e| {
            SealError::Io(format!("Failed to read {}: {}", path.display(), e))
        });
    }

    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .map_err(|e| SealError::Io(format!("Failed to read stdin: {}", e)))?;
    Ok(buf)
}

/// Write command output to a file, or stdout when no path is given
pub fn write_output(file: Option<&Path>, bytes: &[u8]) -> SealResult<()> {
    match file {
        Some(path) => std::fs::write(path, bytes)
            .map_err(|e| SealError::Io(format!("Failed to write {}: {}", path.display(), e))),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Render an envelope for output
pub fn encode_envelope(envelope: &Envelope, encoding: OutputEncoding) -> Vec<u8> {
    match encoding {
        OutputEncoding::Base64 => format!("{}\n", envelope.to_base64()).into_bytes(),
        OutputEncoding::Hex => format!("{}\n", envelope.to_hex()).into_bytes(),
        OutputEncoding::Raw => envelope.as_bytes().to_vec(),
    }
}

/// Parse envelope input in the given encoding
pub fn decode_envelope(input: Vec<u8>, encoding: OutputEncoding) -> SealResult<Envelope> {
    match encoding {
        OutputEncoding::Raw => Envelope::from_bytes(input),
        OutputEncoding::Base64 | OutputEncoding::Hex => {
            let text = String::from_utf8(input)
                .map_err(|_| SealError::Encoding(format!("{} envelope is not valid UTF-8", encoding)))?;
            if encoding == OutputEncoding::Base64 {
                Envelope::from_base64(&text)
            } else {
                Envelope::from_hex(&text)
            }
        }
    }
}

/// Passphrase from `env_var`, or a hidden prompt when it is unset
///
/// With `confirm`, an interactive prompt asks twice and rejects mismatches.
pub fn read_passphrase(env_var: &str, confirm: bool) -> SealResult<Passphrase> {
    if let Some(value) = std::env::var_os(env_var) {
        return passphrase_from_os(env_var, value);
    }

    let first = prompt_passphrase("Passphrase: ")?;
    if confirm {
        let second = prompt_passphrase("Confirm passphrase: ")?;
        if first.as_bytes() != second.as_bytes() {
            return Err(SealError::Config("Passphrases do not match".to_string()));
        }
    }
    Ok(first)
}

// The passphrase is opaque bytes; Unix environments hand them over as-is
#[cfg(unix)]
fn passphrase_from_os(_env_var: &str, value: std::ffi::OsString) -> SealResult<Passphrase> {
    use std::os::unix::ffi::OsStringExt;
    Ok(Passphrase::from(value.into_vec()))
}

#[cfg(not(unix))]
fn passphrase_from_os(env_var: &str, value: std::ffi::OsString) -> SealResult<Passphrase> {
    value
        .into_string()
        .map(Passphrase::from)
        .map_err(|_| SealError::Config(format!("{} does not contain valid UTF-8", env_var)))
}

/// Prompt for a passphrase (hidden input)
fn prompt_passphrase(prompt: &str) -> SealResult<Passphrase> {
    rpassword::prompt_password(prompt)
        .map(Passphrase::from)
        .map_err(|e| SealError::Io(format!("Failed to read passphrase: {}", e)))
}
