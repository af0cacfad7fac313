//! Data models for exported chat history files.
//!
//! - [`Record`] - One stored conversation with its identifier and interactions
//! - [`Interaction`] - A human/assistant exchange inside a record
//! - [`ChatId`] - Raw chat identifier plus the timestamp it encodes
//!
//! Records are decoded with serde using the lenient deserializers in
//! [`crate::parsers::deserializers`], so schema drift degrades to "empty" rather than failing.

pub mod chat;

pub use chat::{AssistantMessage, ChatId, HumanMessage, INVALID_DATE, Interaction, Record};
