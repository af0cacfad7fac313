//! Chat Scribe - pick chats from a Cody JSON export and turn them into Markdown
//!
//! The library holds everything behind the `chat-scribe` binary:
//!
//! - Loading a chat export leniently, with per-chat recovery
//! - An interactive selection engine with paging, keyword/date filters and search
//! - Rendering of `<think>` sections and file-annotated code fences
//! - Assembling and atomically writing the Markdown document
//! - Pruning empty chats from the export file (with a backup)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use chat_scribe::{ExportOptions, assemble_document, load_records};
//!
//! let records = load_records(Path::new("chats.json"))?;
//! let markdown = assemble_document(&records, &[0, 2], &ExportOptions::default())?;
//! println!("{}", markdown);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod render;
pub mod selection;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use models::{Interaction, Record};
pub use parsers::load_records;
pub use render::{ExportOptions, ThinkingMode, assemble_document, render_text};
pub use selection::SelectionEngine;
pub use storage::{remove_empty_chats, write_document};
pub use utils::format_path_with_tilde;
