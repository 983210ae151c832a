//! Session snapshots and storage flags loaded from JSON files.

use crate::infrastructure::{CliError, Result};
use conference_view_core::{SessionContext, SessionFlags};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::snapshot_not_found(path.to_path_buf()),
        _ => CliError::Io(e),
    })
}

/// Load a `SessionContext` snapshot (camelCase JSON, missing fields default)
pub fn load_context(path: &Path) -> Result<SessionContext> {
    let raw = read_file(path)?;
    let ctx: SessionContext = serde_json::from_str(&raw)
        .map_err(|e| CliError::invalid_snapshot(path.to_path_buf(), e.to_string()))?;

    tracing::debug!(path = %path.display(), role = ?ctx.local_peer_role, "Loaded session snapshot");
    Ok(ctx)
}

/// Load a local-storage dump and read the session flags from it.
///
/// Values are stored as strings in the browser; other JSON scalars are
/// stringified the same way, so `null` reads as absent.
pub fn load_flags(path: Option<&Path>) -> Result<SessionFlags> {
    let Some(path) = path else {
        return Ok(SessionFlags::default());
    };

    let raw = read_file(path)?;
    let entries: HashMap<String, Value> = serde_json::from_str(&raw)
        .map_err(|e| CliError::invalid_snapshot(path.to_path_buf(), e.to_string()))?;

    let store: HashMap<String, String> = entries
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect();

    Ok(SessionFlags::read(&store))
}
