use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::models::Record;
use crate::utils::validate_file_size;

/// Read a chat export file and return its top-level array untouched.
///
/// The raw values are what a destructive rewrite serializes back, so every field the file
/// carries survives even if [`Record`] does not model it.
pub fn read_chat_values(path: &Path) -> Result<Vec<Value>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open chat file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    BufReader::new(file)
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read chat file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid JSON in chat file: {}", path.display()))?;

    match value {
        Value::Array(items) => {
            debug!(path = %path.display(), chats = items.len(), "read chat file");
            Ok(items)
        }
        other => bail!(
            "Expected a JSON array of chats in {}, found {}",
            path.display(),
            json_kind(&other)
        ),
    }
}

/// Decode raw chat values into records, one record per value.
///
/// A value that is not a chat object still occupies its position (as an empty record) so
/// 1-based numbering always matches the file.
pub fn records_from_values(values: &[Value]) -> Vec<Record> {
    let mut skipped = 0;
    let records: Vec<Record> = values
        .iter()
        .enumerate()
        .map(|(idx, value)| match Record::deserialize(value) {
            Ok(record) => {
                if record.timestamp().is_none() {
                    let id = record.id.raw();
                    debug!(chat = idx + 1, id, "chat id is not a readable date");
                }
                record
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse chat {}: {}", idx + 1, e);
                skipped += 1;
                Record::default()
            }
        })
        .collect();

    if skipped > 0 {
        eprintln!("Parsed {} chats ({} unreadable, treated as empty)", records.len(), skipped);
    }

    records
}

/// Load every chat record from a JSON export file
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let values = read_chat_values(path)?;
    Ok(records_from_values(&values))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
