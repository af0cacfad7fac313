//! Markdown export: per-message text rendering and whole-document assembly

pub mod export;
pub mod text;

pub use export::{DOCUMENT_TITLE, ExportOptions, assemble_document};
pub use text::{THINKING_SUMMARY, ThinkingMode, render_text};
