use std::fmt;

use chrono::{DateTime, Utc};

/// Comparison applied by a date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOperator {
    /// Same calendar day (UTC)
    On,
    /// Strictly after the given instant
    After,
    /// Strictly before the given instant
    Before,
}

impl DateOperator {
    fn prefix(self) -> &'static str {
        match self {
            DateOperator::On => "",
            DateOperator::After => ">",
            DateOperator::Before => "<",
        }
    }
}

/// Parsed `[>|<]date` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFilter {
    pub operator: DateOperator,
    pub at: DateTime<Utc>,
}

impl DateFilter {
    pub fn new(operator: DateOperator, at: DateTime<Utc>) -> Self {
        Self { operator, at }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator.prefix(), self.at.format("%Y-%m-%d"))
    }
}

/// Predicate that produces the filtered view. Only one is active at a time; setting a new
/// one replaces the previous one and is evaluated against the full record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFilter {
    /// Case-insensitive substring over human and assistant texts
    Keyword(String),
    /// Comparison against the record's identifier date
    Date(DateFilter),
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewFilter::Keyword(keyword) => write!(f, "Keyword: \"{}\"", keyword),
            ViewFilter::Date(date) => write!(f, "Date: {}", date),
        }
    }
}
