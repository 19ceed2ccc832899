// src/presentation.rs
use std::io::Write;

use mcp_shared_memory_shared_kernel::{ApplicationIdentity, PresentationError, PresentationResult};
use serde_json::error::Category;

/// Writes `identity` as a single line of JSON.
pub fn write_identity<W: Write>(out: &mut W, identity: &ApplicationIdentity) -> PresentationResult<()> {
    serde_json::to_writer(&mut *out, identity).map_err(|e| match e.classify() {
        Category::Io => write_error("identity", e.into()),
        _ => PresentationError::from(e),
    })?;
    writeln!(out).map_err(|source| write_error("identity", source))?;
    out.flush().map_err(|source| write_error("identity", source))?;
    log::debug!("wrote identity for {identity}");
    Ok(())
}

/// Human readable `<cli name> <version>` line.
pub fn banner(identity: &ApplicationIdentity) -> String {
    identity.to_string()
}

fn write_error(target: &str, source: std::io::Error) -> PresentationError {
    PresentationError::Write { target: target.to_string(), source }
}
