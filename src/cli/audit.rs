//! Audit log CLI command

use super::context::CliContext;
use crate::audit::AuditLogger;
use crate::error::SealResult;

/// Print the most recent audit entries
pub fn handle_audit_command(ctx: &CliContext, limit: usize) -> SealResult<()> {
    let logger = AuditLogger::new(ctx.paths.audit_log());

    if !logger.exists() {
        println!("No audit entries recorded.");
        return Ok(());
    }

    for entry in logger.read_recent(limit)? {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
