use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::parsers::deserializers::parse_chat_timestamp;

/// Shown in place of a date when a chat identifier cannot be read as one
pub const INVALID_DATE: &str = "Invalid Date";

/// Chat identifier: the raw id text plus the timestamp it encodes, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatId {
    raw: String,
    timestamp: Option<DateTime<Utc>>,
}

impl ChatId {
    pub fn parse(raw: &str) -> Self {
        Self { raw: raw.to_string(), timestamp: parse_chat_timestamp(raw) }
    }

    pub fn from_millis(ms: i64) -> Self {
        Self { raw: ms.to_string(), timestamp: DateTime::from_timestamp_millis(ms) }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Local date-time used in listings, search reports and exported headers
    pub fn display_date(&self) -> String {
        match self.timestamp {
            Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => INVALID_DATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HumanMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssistantMessage {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_lenient")]
    pub model: Option<String>,
}

/// One human/assistant exchange; either side may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Interaction {
    #[serde(
        rename = "humanMessage",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient"
    )]
    pub human_message: Option<HumanMessage>,
    #[serde(
        rename = "assistantMessage",
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_lenient"
    )]
    pub assistant_message: Option<AssistantMessage>,
}

impl Interaction {
    /// Human text, if present and non-empty
    pub fn human_text(&self) -> Option<&str> {
        self.human_message.as_ref().and_then(|m| m.text.as_deref()).filter(|t| !t.is_empty())
    }

    /// Assistant text, if present and non-empty
    pub fn assistant_text(&self) -> Option<&str> {
        self.assistant_message.as_ref().and_then(|m| m.text.as_deref()).filter(|t| !t.is_empty())
    }

    pub fn model(&self) -> Option<&str> {
        self.assistant_message.as_ref().and_then(|m| m.model.as_deref()).filter(|m| !m.is_empty())
    }
}

/// One stored conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_chat_id")]
    pub id: ChatId,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_interactions")]
    pub interactions: Vec<Interaction>,
}

impl Record {
    pub fn new(id: ChatId, interactions: Vec<Interaction>) -> Self {
        Self { id, interactions }
    }

    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.id.timestamp()
    }

    pub fn display_date(&self) -> String {
        self.id.display_date()
    }

    /// All message texts in authored order, human before assistant within an interaction
    pub fn message_texts(&self) -> impl Iterator<Item = &str> {
        self.interactions.iter().flat_map(|i| i.human_text().into_iter().chain(i.assistant_text()))
    }

    /// First `max_chars` characters of the opening human message, with `...` when cut
    pub fn preview(&self, max_chars: usize) -> String {
        let Some(text) = self.interactions.first().and_then(Interaction::human_text) else {
            return String::new();
        };

        let mut preview: String = text.chars().take(max_chars).collect();
        if text.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}
