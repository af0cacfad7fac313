//! Writing results back to disk: exported documents and cleaned chat files

pub mod persistence;

pub use persistence::{CleanupReport, remove_empty_chats, write_document};
