//! Parser for date filter expressions.
//!
//! # Syntax
//!
//! ```text
//! date_expr := [ '>' | '<' ] date
//! date      := YYYY-MM-DD | YYYY/MM/DD | any chat timestamp form (RFC 3339, ISO date-time, ...)
//! ```
//!
//! - No prefix: records whose date (UTC day) equals the given day
//! - `>`: records strictly after the given instant (a bare date means midnight UTC)
//! - `<`: records strictly before the given instant
//!
//! # Examples
//!
//! ```rust
//! # use chat_scribe::filters::parser::parse_date_filter;
//! # use chat_scribe::filters::DateOperator;
//! let filter = parse_date_filter(">2024-01-01").unwrap();
//! assert_eq!(filter.operator, DateOperator::After);
//!
//! assert!(parse_date_filter("next tuesday").is_err());
//! ```

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

use super::ast::{DateFilter, DateOperator};
use crate::parsers::parse_chat_timestamp;

/// Parse a date filter expression, rejecting anything that is not a calendar date
pub fn parse_date_filter(input: &str) -> Result<DateFilter> {
    let input = input.trim();

    let (operator, date_str) = if let Some(rest) = input.strip_prefix('>') {
        (DateOperator::After, rest.trim())
    } else if let Some(rest) = input.strip_prefix('<') {
        (DateOperator::Before, rest.trim())
    } else {
        (DateOperator::On, input)
    };

    if date_str.is_empty() {
        return Err(anyhow!("Empty date in filter expression"));
    }

    // Bare numbers are epoch millis in chat ids, never a date the user typed
    if date_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", date_str));
    }

    let at = parse_chat_timestamp(date_str)
        .or_else(|| {
            NaiveDate::parse_from_str(date_str, "%Y/%m/%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
        .ok_or_else(|| anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", date_str))?;

    Ok(DateFilter::new(operator, at))
}
