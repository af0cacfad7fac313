use super::ast::{DateFilter, DateOperator, ViewFilter};
use crate::models::Record;
use crate::utils::contains_case_insensitive;

/// Evaluate a filter against the full record list, returning the original indices of the
/// matching records in their original order.
///
/// The result never depends on any previously applied filter.
pub fn apply_filter(records: &[Record], filter: &ViewFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_filter(record, filter))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn matches_filter(record: &Record, filter: &ViewFilter) -> bool {
    match filter {
        ViewFilter::Keyword(keyword) => match_keyword(record, keyword),
        ViewFilter::Date(date) => match_date(record, date),
    }
}

/// Any human or assistant text contains the keyword (case-insensitive)
fn match_keyword(record: &Record, keyword: &str) -> bool {
    record.message_texts().any(|text| contains_case_insensitive(text, keyword))
}

/// Records without a readable date never match a date filter
fn match_date(record: &Record, filter: &DateFilter) -> bool {
    let Some(timestamp) = record.timestamp() else {
        return false;
    };

    match filter.operator {
        DateOperator::On => timestamp.date_naive() == filter.at.date_naive(),
        DateOperator::After => timestamp > filter.at,
        DateOperator::Before => timestamp < filter.at,
    }
}
