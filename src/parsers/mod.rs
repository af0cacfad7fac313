//! Loader for JSON chat export files
//!
//! # Error Handling Strategy
//!
//! Loading follows the same graceful degradation as the rest of the CLI:
//!
//! - **File-level failures** (missing, unreadable, oversized, invalid JSON, not an array)
//!   are returned as `anyhow` errors with the path in context. Nothing is written.
//!
//! - **Chat-level failures**: a chat that is not an object is warned about on stderr and
//!   kept as an empty record, so numbering stays aligned with the file.
//!
//! - **Field-level drift**: missing or mistyped `interactions`, messages, texts and model
//!   tags decode to "absent" via the lenient deserializers instead of failing the chat.

pub mod chats;
pub mod deserializers;

pub use chats::{load_records, read_chat_values, records_from_values};
pub use deserializers::parse_chat_timestamp;
