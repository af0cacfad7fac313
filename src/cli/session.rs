//! Line-oriented driver for the interactive selection and export prompts.
//!
//! [`Session`] reads one line per prompt and hands it to the
//! [`SelectionEngine`]; the engine decides what happens, the session only prints. End of
//! input at any selection prompt quits with an empty selection, and at the option prompts
//! counts as an empty answer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use super::display::{Palette, clear_screen, listing_lines, search_lines, thinking_menu_lines};
use crate::models::Record;
use crate::render::ThinkingMode;
use crate::selection::{Effect, Mode, SelectionEngine};
use crate::utils::ensure_markdown_extension;

const CONTINUE_PROMPT: &str = "Press Enter to continue...";

pub struct Session<R, W> {
    input: R,
    out: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, palette: Palette) -> Self {
        Self { input, out, palette }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line).context("Failed to write to output")
    }

    fn say_all(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    /// Show `question` and read one line without its line ending. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{}", question).context("Failed to write prompt")?;
        self.out.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn pause(&mut self) -> Result<()> {
        self.ask(CONTINUE_PROMPT)?;
        Ok(())
    }

    /// Run the selection loop until the user picks chats or quits.
    ///
    /// Returns original record indices in the order chosen; empty when the user quit.
    pub fn select_chats(&mut self, records: &[Record]) -> Result<Vec<usize>> {
        let mut engine = SelectionEngine::new(records);

        loop {
            clear_screen(&mut self.out, self.palette).context("Failed to clear screen")?;
            let lines = listing_lines(&engine.page_view(), self.palette);
            self.say_all(&lines)?;

            let Some(line) = self.ask("> ")? else {
                debug!("input closed at selection prompt");
                return Ok(Vec::new());
            };
            let mut effect = engine.handle_input(&line);

            loop {
                match effect {
                    Effect::Redraw => break,
                    Effect::Prompt(mode) => {
                        let question = follow_up_prompt(mode, engine.total_pages());
                        let Some(answer) = self.ask(&question)? else {
                            debug!(?mode, "input closed at follow-up prompt");
                            return Ok(Vec::new());
                        };
                        effect = engine.handle_input(&answer);
                    }
                    Effect::Notice(notice) => {
                        self.say(&notice.to_string())?;
                        self.pause()?;
                        break;
                    }
                    Effect::SearchResults(report) => {
                        let lines = search_lines(&report, self.palette);
                        self.say_all(&lines)?;
                        self.say("")?;
                        self.pause()?;
                        break;
                    }
                    Effect::Finished(selection) => return Ok(selection),
                }
            }
        }
    }

    /// Yes unless the answer is `n` (any case)
    pub fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?.unwrap_or_default();
        Ok(!answer.trim().eq_ignore_ascii_case("n"))
    }

    pub fn ask_thinking_mode(&mut self) -> Result<ThinkingMode> {
        self.say_all(&thinking_menu_lines())?;
        let choice = self.ask("Choose an option (1/2/3): ")?.unwrap_or_default();
        Ok(ThinkingMode::from_menu_choice(&choice))
    }

    /// Ask for a file name, falling back to `default` on an empty answer
    pub fn ask_output_path(&mut self, default: PathBuf) -> Result<PathBuf> {
        let answer = self.ask("Enter custom filename (leave empty for default): ")?;
        match answer.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(ensure_markdown_extension(name)),
            _ => Ok(default),
        }
    }
}

fn follow_up_prompt(mode: Mode, total_pages: usize) -> String {
    match mode {
        Mode::AwaitingJumpTarget => format!("Enter page number (1-{}): ", total_pages),
        Mode::AwaitingKeyword => "Enter keyword to filter by: ".to_string(),
        Mode::AwaitingDate => {
            "Enter date to filter by (YYYY-MM-DD, or use > or < before date): ".to_string()
        }
        Mode::Searching => "Enter search term: ".to_string(),
        Mode::Listing | Mode::Terminated => "> ".to_string(),
    }
}
