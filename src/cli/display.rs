//! Terminal presentation for the interactive session.
//!
//! Every screen is built as plain `String` lines first so it can be tested without a
//! terminal; colors are applied through [`Palette`] and disappear when output is not a TTY.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize, style};
use crossterm::terminal::{Clear, ClearType};

use crate::selection::{PageRow, PageView, SearchReport};
use crate::utils::sanitize_line;

/// Color switch for styled output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled { style(text).with(color).to_string() } else { text.to_string() }
    }

    fn heading(&self, text: &str, color: Color) -> String {
        if self.enabled { style(text).with(color).bold().to_string() } else { text.to_string() }
    }

    fn key(&self, key: &str) -> String {
        self.paint(&format!("{}:", key), Color::Magenta)
    }
}

/// Clear the screen and home the cursor; a no-op unless colors are enabled
pub fn clear_screen<W: Write>(out: &mut W, palette: Palette) -> io::Result<()> {
    if palette.enabled() {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    Ok(())
}

/// Lines of the chat selection screen for one page
pub fn listing_lines(view: &PageView, palette: Palette) -> Vec<String> {
    let mut lines = vec![String::new(), palette.heading("===== Chat Selection =====", Color::Cyan)];

    let toggle_hint = format!("Use {} to toggle visibility.", palette.paint("e", Color::Magenta));
    if view.show_empty {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            palette.paint("Showing all chats including empty ones.", Color::Green),
            toggle_hint
        ));
    } else if view.hidden_empty > 0 {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            palette.paint(&format!("Hidden {} empty chats.", view.hidden_empty), Color::Yellow),
            toggle_hint
        ));
    }

    if let Some(filter) = &view.active_filter {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            palette.paint("Active filters:", Color::Yellow),
            palette.paint(&sanitize_line(filter), Color::Green)
        ));
        lines.push(palette.paint(
            &format!("Showing {} of {} chats", view.filtered_count, view.total_count),
            Color::Yellow,
        ));
    }

    lines.push(String::new());
    if view.displayed_count == 0 {
        lines.push(palette.paint("No chats to display.", Color::Yellow));
    } else {
        lines.push(palette.heading(
            &format!(
                "Page {}/{} ({}-{} of {})",
                view.page, view.total_pages, view.first, view.last, view.displayed_count
            ),
            Color::Blue,
        ));
    }
    lines.push(String::new());

    lines.extend(view.rows.iter().map(|row| row_line(row, palette)));

    lines.push(String::new());
    lines.push(palette.heading("===== Navigation =====", Color::Cyan));
    lines.push(format!(
        "{} Next page   {} Previous page   {} Jump to page   {} Filter by keyword   {} Filter by date",
        palette.key("n"),
        palette.key("p"),
        palette.key("j"),
        palette.key("f"),
        palette.key("d"),
    ));
    lines.push(format!(
        "{} {} empty chats   {} Reset filters   {} Search   {} Select all chats   {} Quit selection",
        palette.key("e"),
        if view.show_empty { "Hide" } else { "Show" },
        palette.key("r"),
        palette.key("s"),
        palette.key("all"),
        palette.key("q"),
    ));
    lines.push(String::new());
    lines.push(palette.heading(
        "Enter chat numbers to export (comma-separated) or command:",
        Color::White,
    ));
    lines
}

/// `[n] date (k msgs) - preview`
pub fn row_line(row: &PageRow, palette: Palette) -> String {
    format!(
        "{} {} ({}) - {}",
        palette.paint(&format!("[{}]", row.number), Color::Green),
        palette.paint(&row.date, Color::Yellow),
        palette.paint(&format!("{} msgs", row.message_count), Color::Cyan),
        sanitize_line(&row.preview)
    )
}

/// Search hits followed by the summary count
pub fn search_lines(report: &SearchReport, palette: Palette) -> Vec<String> {
    let mut lines = vec![String::new(), "Search results:".to_string()];

    lines.extend(report.hits.iter().map(|hit| {
        format!(
            "{} {} - {}",
            palette.paint(&format!("[{}]", hit.number()), Color::Green),
            palette.paint(&hit.date, Color::Yellow),
            sanitize_line(&hit.context)
        )
    }));

    lines.push(String::new());
    lines.push(format!(
        "Found {} chats containing \"{}\"",
        report.hits.len(),
        sanitize_line(&report.query)
    ));
    lines
}

/// Menu shown before asking how `<think>` sections are exported
pub fn thinking_menu_lines() -> Vec<String> {
    vec![
        String::new(),
        "How to handle <think></think> sections:".to_string(),
        "1. Remove completely".to_string(),
        "2. Convert to foldable sections".to_string(),
        "3. Keep as is".to_string(),
    ]
}
