//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a chat export file inside its own temp directory
pub struct ChatFileBuilder {
    temp_dir: TempDir,
    chats: Vec<Value>,
}

impl ChatFileBuilder {
    /// Create a new builder with no chats
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, chats: Vec::new() }
    }

    /// Add a chat built with [`RecordBuilder`]
    pub fn with_chat(mut self, chat: RecordBuilder) -> Self {
        self.chats.push(chat.to_json());
        self
    }

    /// Add an arbitrary JSON value as a chat
    pub fn with_raw_chat(mut self, chat: Value) -> Self {
        self.chats.push(chat);
        self
    }

    /// Write `chats.json` and return the directory and file path
    pub fn build(self) -> (TempDir, PathBuf) {
        let path = self.temp_dir.path().join("chats.json");
        let content = serde_json::to_string_pretty(&self.chats).expect("Failed to serialize");
        fs::write(&path, content).expect("Failed to write chats.json");
        (self.temp_dir, path)
    }
}

impl Default for ChatFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single chat object
pub struct RecordBuilder {
    id: Value,
    interactions: Vec<Value>,
}

impl RecordBuilder {
    /// Create a chat with the given id and no interactions
    pub fn new(id: &str) -> Self {
        Self { id: json!(id), interactions: Vec::new() }
    }

    /// Use epoch milliseconds as the id
    pub fn with_millis_id(mut self, millis: i64) -> Self {
        self.id = json!(millis);
        self
    }

    /// Add a full exchange
    pub fn exchange(mut self, human: &str, assistant: &str, model: Option<&str>) -> Self {
        let mut assistant_message = json!({ "text": assistant });
        if let Some(model) = model {
            assistant_message["model"] = json!(model);
        }
        self.interactions
            .push(json!({ "humanMessage": { "text": human }, "assistantMessage": assistant_message }));
        self
    }

    /// Add an interaction with only a human message
    pub fn human_only(mut self, human: &str) -> Self {
        self.interactions.push(json!({ "humanMessage": { "text": human } }));
        self
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        json!({ "id": self.id, "interactions": self.interactions })
    }
}

/// Twelve chats, one per day from 2024-03-01; chats 4, 8 and 12 are empty
pub fn twelve_chats_with_three_empty() -> (TempDir, PathBuf) {
    let mut builder = ChatFileBuilder::new();
    for i in 1..=12 {
        let id = format!("2024-03-{:02}T09:00:00Z", i);
        let chat = if i % 4 == 0 {
            RecordBuilder::new(&id)
        } else {
            RecordBuilder::new(&id).exchange(
                &format!("Question number {}", i),
                &format!("Answer number {}", i),
                Some("claude-3-sonnet"),
            )
        };
        builder = builder.with_chat(chat);
    }
    builder.build()
}

/// Read a file to string, panicking with the path on failure
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
