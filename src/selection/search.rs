use crate::models::Record;
use crate::utils::{context_window, find_case_insensitive};

/// One record containing the search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Index into the full record list (0-based)
    pub index: usize,
    pub date: String,
    /// Text around the first match, wrapped in ellipses
    pub context: String,
}

impl SearchHit {
    /// 1-based number the user types to select this record
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

/// Case-insensitive search over every record, ignoring any active filter or page.
///
/// Only the first match per record is reported, scanning interactions in order and the
/// human text before the assistant text of each interaction.
pub fn search_records(records: &[Record], query: &str) -> SearchReport {
    let hits = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            record.message_texts().find_map(|text| {
                find_case_insensitive(text, query).map(|range| SearchHit {
                    index,
                    date: record.display_date(),
                    context: context_window(text, range),
                })
            })
        })
        .collect();

    SearchReport { query: query.to_string(), hits }
}
