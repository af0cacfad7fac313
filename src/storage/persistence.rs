//! Atomic writes for exported Markdown and rewritten chat files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::parsers::read_chat_values;
use crate::utils::backup_path;

/// Outcome of an empty-chat cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub original: usize,
    pub removed: usize,
    pub kept: usize,
    /// Copy of the untouched input; `None` when nothing was removed
    pub backup: Option<PathBuf>,
}

/// Write `content` to `path` via a sibling temp file and rename
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let temp = temp_path(path);
    fs::write(&temp, content)
        .with_context(|| format!("Failed to write temp file {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to move output into place at {}", path.display()))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Drop every chat whose `interactions` array is empty or missing, in place.
///
/// The original file is copied to `<input>.backup` before being overwritten. Every other
/// field of the surviving chats is preserved as read, in its original key order.
///
/// The input belongs to the user, so it is truncated and rewritten where it is rather than
/// replaced: symlinks keep pointing at the rewritten file and permissions stay as they were.
pub fn remove_empty_chats(path: &Path) -> Result<CleanupReport> {
    let values = read_chat_values(path)?;
    let original = values.len();

    let kept: Vec<Value> = values.into_iter().filter(has_interactions).collect();
    let removed = original - kept.len();

    if removed == 0 {
        info!(path = %path.display(), "no empty chats to remove");
        return Ok(CleanupReport { original, removed, kept: kept.len(), backup: None });
    }

    let backup = backup_path(path);
    fs::copy(path, &backup)
        .with_context(|| format!("Failed to create backup at {}", backup.display()))?;

    let json = serde_json::to_string_pretty(&kept).context("Failed to serialize chats")?;
    fs::write(path, &json)
        .with_context(|| format!("Failed to rewrite chat file {}", path.display()))?;

    info!(original, removed, backup = %backup.display(), "removed empty chats");
    Ok(CleanupReport { original, removed, kept: kept.len(), backup: Some(backup) })
}

fn has_interactions(value: &Value) -> bool {
    value.get("interactions").and_then(Value::as_array).is_some_and(|list| !list.is_empty())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
