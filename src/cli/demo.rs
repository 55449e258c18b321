//! Sample run over fixed inputs
//!
//! Always uses the legacy derivation so the output matches envelopes made by
//! other tools sharing the same wire format.

use super::context::CliContext;
use crate::audit::{AuditEntry, Operation};
use crate::crypto::{open, seal, sha256_hex};
use crate::error::SealResult;

const DIGEST_SAMPLES: [&str; 2] = ["Hello_world", "Silly_me"];
const SAMPLE_KEY: &str = "random.key";
const SAMPLE_TEXT: &str = "This is some random text";

/// Digest, seal and open the sample inputs and print every stage
pub fn handle_demo_command(ctx: &CliContext) -> SealResult<()> {
    for sample in DIGEST_SAMPLES {
        let digest = sha256_hex(sample.as_bytes());
        ctx.record_or_warn(&AuditEntry::success(Operation::Digest, sample.len(), digest.len()));
        println!("sha256({}) = {}", sample, digest);
    }

    let sealed = seal(SAMPLE_TEXT.as_bytes(), SAMPLE_KEY.as_bytes());
    ctx.record_or_warn(&AuditEntry::from_result(Operation::Seal, SAMPLE_TEXT.len(), &sealed));
    let envelope = sealed?;

    let opened = open(envelope.as_bytes(), SAMPLE_KEY.as_bytes());
    ctx.record_or_warn(&AuditEntry::from_result(Operation::Open, envelope.len(), &opened));
    let plaintext = opened?;

    println!();
    println!("Encrypted");
    println!("---------");
    println!("Bytes:  {:?}", envelope.as_bytes());
    println!("Base64: {}", envelope.to_base64());
    println!();
    println!("Decrypted");
    println!("---------");
    println!("Bytes:  {:?}", plaintext);
    println!("String: {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
