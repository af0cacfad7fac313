//! Interactive chat selection state machine.
//!
//! [`SelectionEngine`] owns everything the selection prompt needs: the current page, the
//! filtered view, the active filter and the empty-chat visibility toggle. The session driver
//! feeds it one line of user input per prompt through [`SelectionEngine::handle_input`] and
//! acts on the returned [`Effect`]; the engine itself never touches the terminal.
//!
//! # Modes
//!
//! ```text
//! Listing ──f──▶ AwaitingKeyword ──line──▶ Listing
//!         ──d──▶ AwaitingDate ─────line──▶ Listing
//!         ──j──▶ AwaitingJumpTarget ─line▶ Listing
//!         ──s──▶ Searching ────────line──▶ Listing
//!         ──numbers / all / q──────────▶ Terminated
//! ```
//!
//! Invalid input produces [`Effect::Notice`] and leaves the engine where it was.
//!
//! # Filters
//!
//! Keyword and date filters replace each other: each one is evaluated against the full
//! record list, never against the current view.

use thiserror::Error;
use tracing::debug;

use super::search::{SearchReport, search_records};
use super::view::{PageRow, PageView};
use crate::filters::{ViewFilter, apply_filter, parse_date_filter};
use crate::models::Record;

/// Records shown per listing page
pub const PAGE_SIZE: usize = 10;

/// Characters of the opening human message shown in a listing row
const PREVIEW_CHARS: usize = 60;

/// Which input the engine expects next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Page shown; expects a command or a list of chat numbers
    Listing,
    AwaitingKeyword,
    AwaitingDate,
    AwaitingJumpTarget,
    Searching,
    /// Selection is final; further input is rejected
    Terminated,
}

/// Validation problems reported inline; none of them ends the session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("Invalid page number. Please enter a number between 1 and {total_pages}.")]
    InvalidPage { total_pages: usize },
    #[error("Invalid date format. Please use YYYY-MM-DD format.")]
    InvalidDate { input: String },
    #[error("Invalid selection. Please try again.")]
    InvalidSelection,
    #[error("Selection already finished.")]
    SelectionClosed,
}

/// What the driver should do after an input line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// State changed (or not); show the current page again
    Redraw,
    /// Ask for the follow-up input named by the mode
    Prompt(Mode),
    /// Show a validation message, then redraw
    Notice(Notice),
    /// Show search results, then redraw
    SearchResults(SearchReport),
    /// Selection finished: original indices, in the order chosen (may be empty)
    Finished(Vec<usize>),
}

pub struct SelectionEngine<'a> {
    records: &'a [Record],
    mode: Mode,
    current_page: usize,
    filtered_view: Vec<usize>,
    active_filter: Option<ViewFilter>,
    show_empty: bool,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self {
            records,
            mode: Mode::Listing,
            current_page: 1,
            filtered_view: (0..records.len()).collect(),
            active_filter: None,
            show_empty: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Original indices of the records matching the active filter (all records if none)
    pub fn filtered_view(&self) -> &[usize] {
        &self.filtered_view
    }

    pub fn active_filter(&self) -> Option<&ViewFilter> {
        self.active_filter.as_ref()
    }

    pub fn show_empty(&self) -> bool {
        self.show_empty
    }

    /// Filtered view minus empty records, unless empty records are shown
    pub fn displayed(&self) -> Vec<usize> {
        self.filtered_view
            .iter()
            .copied()
            .filter(|&idx| self.show_empty || !self.records[idx].is_empty())
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.displayed().len())
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn jump_to_page(&mut self, page: usize) -> Result<(), Notice> {
        let total_pages = self.total_pages();
        if page == 0 || page > total_pages {
            return Err(Notice::InvalidPage { total_pages });
        }
        self.current_page = page;
        Ok(())
    }

    /// Restrict the view to records mentioning `keyword`. An empty keyword changes nothing.
    pub fn set_keyword_filter(&mut self, keyword: &str) {
        if keyword.is_empty() {
            return;
        }
        self.apply(ViewFilter::Keyword(keyword.to_string()));
    }

    /// Restrict the view by date (`YYYY-MM-DD`, `>YYYY-MM-DD` or `<YYYY-MM-DD`).
    /// An empty expression changes nothing; an unparseable one leaves state untouched.
    pub fn set_date_filter(&mut self, expr: &str) -> Result<(), Notice> {
        if expr.trim().is_empty() {
            return Ok(());
        }

        let filter = parse_date_filter(expr).map_err(|e| {
            debug!(error = %e, "rejected date filter");
            Notice::InvalidDate { input: expr.trim().to_string() }
        })?;
        self.apply(ViewFilter::Date(filter));
        Ok(())
    }

    pub fn toggle_empty_visibility(&mut self) {
        self.show_empty = !self.show_empty;
        self.current_page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.filtered_view = (0..self.records.len()).collect();
        self.active_filter = None;
        self.current_page = 1;
    }

    /// Search every record regardless of filter or page
    pub fn search(&self, query: &str) -> SearchReport {
        search_records(self.records, query)
    }

    /// Handle one line of user input according to the current mode
    pub fn handle_input(&mut self, input: &str) -> Effect {
        match self.mode {
            Mode::Listing => self.resolve_selection(input),
            Mode::AwaitingKeyword => {
                self.mode = Mode::Listing;
                self.set_keyword_filter(input);
                Effect::Redraw
            }
            Mode::AwaitingDate => {
                self.mode = Mode::Listing;
                match self.set_date_filter(input) {
                    Ok(()) => Effect::Redraw,
                    Err(notice) => Effect::Notice(notice),
                }
            }
            Mode::AwaitingJumpTarget => {
                self.mode = Mode::Listing;
                let page = input.trim().parse::<usize>().unwrap_or(0);
                match self.jump_to_page(page) {
                    Ok(()) => Effect::Redraw,
                    Err(notice) => Effect::Notice(notice),
                }
            }
            Mode::Searching => {
                self.mode = Mode::Listing;
                if input.is_empty() {
                    Effect::Redraw
                } else {
                    Effect::SearchResults(self.search(input))
                }
            }
            Mode::Terminated => Effect::Notice(Notice::SelectionClosed),
        }
    }

    /// Resolve a line typed at the listing prompt: a command, or chat numbers
    pub fn resolve_selection(&mut self, input: &str) -> Effect {
        let command = input.trim().to_lowercase();
        debug!(command = %command, page = self.current_page, "listing input");

        match command.as_str() {
            "n" => {
                self.next_page();
                Effect::Redraw
            }
            "p" => {
                self.prev_page();
                Effect::Redraw
            }
            "j" => self.await_input(Mode::AwaitingJumpTarget),
            "f" => self.await_input(Mode::AwaitingKeyword),
            "d" => self.await_input(Mode::AwaitingDate),
            "s" => self.await_input(Mode::Searching),
            "e" => {
                self.toggle_empty_visibility();
                Effect::Redraw
            }
            "r" => {
                self.reset_filters();
                Effect::Redraw
            }
            "all" => {
                let selection = self.filtered_view.clone();
                self.finish(selection)
            }
            "q" => self.finish(Vec::new()),
            _ => match parse_selection(&command, self.records.len()) {
                Some(selection) => self.finish(selection),
                None => Effect::Notice(Notice::InvalidSelection),
            },
        }
    }

    /// Snapshot of the current page for presentation
    pub fn page_view(&self) -> PageView {
        let displayed = self.displayed();
        let start = (self.current_page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(displayed.len());

        let rows = displayed
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|&idx| {
                let record = &self.records[idx];
                PageRow {
                    number: idx + 1,
                    date: record.display_date(),
                    message_count: record.interaction_count(),
                    preview: record.preview(PREVIEW_CHARS),
                }
            })
            .collect();

        PageView {
            page: self.current_page,
            total_pages: total_pages(displayed.len()),
            first: start + 1,
            last: end,
            displayed_count: displayed.len(),
            filtered_count: self.filtered_view.len(),
            total_count: self.records.len(),
            hidden_empty: self.filtered_view.len() - displayed.len(),
            show_empty: self.show_empty,
            active_filter: self.active_filter.as_ref().map(ToString::to_string),
            rows,
        }
    }

    fn apply(&mut self, filter: ViewFilter) {
        self.filtered_view = apply_filter(self.records, &filter);
        debug!(filter = %filter, matched = self.filtered_view.len(), "applied filter");
        self.active_filter = Some(filter);
        self.current_page = 1;
    }

    fn await_input(&mut self, mode: Mode) -> Effect {
        self.mode = mode;
        Effect::Prompt(mode)
    }

    fn finish(&mut self, selection: Vec<usize>) -> Effect {
        debug!(selected = selection.len(), "selection finished");
        self.mode = Mode::Terminated;
        Effect::Finished(selection)
    }
}

/// `ceil(count / PAGE_SIZE)`; zero records means zero pages
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Parse comma-separated 1-based chat numbers into original indices.
///
/// Tokens that are not numbers or fall outside `1..=record_count` are dropped. Order and
/// duplicates are kept. Returns `None` when nothing survives.
pub fn parse_selection(input: &str, record_count: usize) -> Option<Vec<usize>> {
    let selection: Vec<usize> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<usize>().ok())
        .filter(|&number| number >= 1 && number <= record_count)
        .map(|number| number - 1)
        .collect();

    if selection.is_empty() { None } else { Some(selection) }
}
