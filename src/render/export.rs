use anyhow::{Result, bail};
use tracing::debug;

use super::text::{ThinkingMode, render_text};
use crate::models::Record;

/// First line of every exported document
pub const DOCUMENT_TITLE: &str = "# Cody Chat Exports";

const SEPARATOR: &str = "---";

/// Formatting choices for an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub include_timestamps: bool,
    pub include_model_info: bool,
    pub thinking: ThinkingMode,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { include_timestamps: true, include_model_info: true, thinking: ThinkingMode::Keep }
    }
}

/// Build the Markdown document for the chosen records.
///
/// Sections follow `selection` order and are numbered by position in it, so selecting the
/// same chat twice yields two independently numbered sections.
///
/// # Errors
///
/// Returns an error if an index is outside `records`.
pub fn assemble_document(
    records: &[Record],
    selection: &[usize],
    options: &ExportOptions,
) -> Result<String> {
    let mut output = String::new();
    output.push_str(DOCUMENT_TITLE);
    output.push_str("\n\n");

    for (position, &idx) in selection.iter().enumerate() {
        let Some(record) = records.get(idx) else {
            bail!("Chat index {} out of range ({} chats loaded)", idx + 1, records.len());
        };

        if options.include_timestamps {
            output.push_str(&format!("## Chat {} - {}\n\n", position + 1, record.display_date()));
        } else {
            output.push_str(&format!("## Chat {}\n\n", position + 1));
        }

        for interaction in &record.interactions {
            if let Some(text) = interaction.human_text() {
                output.push_str("### Human:\n\n");
                output.push_str(&render_text(text, options.thinking));
                output.push_str("\n\n");
            }

            if let Some(text) = interaction.assistant_text() {
                output.push_str("### Assistant:");
                if let Some(model) = interaction.model().filter(|_| options.include_model_info) {
                    output.push_str(&format!(" ({})", model));
                }
                output.push_str("\n\n");
                output.push_str(&render_text(text, options.thinking));
                output.push_str("\n\n");
            }

            output.push_str(SEPARATOR);
            output.push_str("\n\n");
        }
    }

    debug!(chats = selection.len(), bytes = output.len(), "assembled export document");
    Ok(output)
}
