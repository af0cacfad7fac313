use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use super::display::Palette;
use super::session::Session;
use crate::parsers::load_records;
use crate::render::{ExportOptions, ThinkingMode, assemble_document};
use crate::storage::{remove_empty_chats, write_document};
use crate::utils::{default_output_path, format_path_with_tilde};

#[derive(Parser, Debug)]
#[command(name = "chat-scribe")]
#[command(version = "0.1.0")]
#[command(about = "Select chats from a Cody JSON export and convert them to Markdown", long_about = None)]
pub struct Cli {
    /// Chat export file (a JSON array of chats)
    pub input: PathBuf,

    /// Remove empty chats from the JSON file permanently (creates a backup of the original file)
    #[arg(short = 'r', long)]
    pub remove_empty: bool,

    /// Output Markdown file (default: <input>.md)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// How to export <think> sections; asked interactively when omitted
    #[arg(long, value_enum, value_name = "MODE")]
    pub thinking: Option<ThinkingMode>,

    /// Leave chat dates out of section headers
    #[arg(long)]
    pub no_timestamps: bool,

    /// Leave model names out of assistant headers
    #[arg(long)]
    pub no_model_info: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let palette = Palette::new(stdout.is_terminal());
    execute(&cli, io::stdin().lock(), stdout.lock(), palette)
}

/// Run one invocation against arbitrary input and output streams
pub fn execute<R: BufRead, W: Write>(cli: &Cli, input: R, out: W, palette: Palette) -> Result<()> {
    let mut session = Session::new(input, out, palette);
    session.say(&format!("Loading file: {}...", format_path_with_tilde(&cli.input)))?;

    if cli.remove_empty {
        return prune_empty_chats(cli, &mut session);
    }

    let records = load_records(&cli.input)?;
    session.say(&format!("Loaded {} chats successfully.", records.len()))?;

    let selection = session.select_chats(&records)?;
    if selection.is_empty() {
        session.say("No chats selected. Exiting.")?;
        return Ok(());
    }
    session.say(&format!("Selected {} chats for export.", selection.len()))?;

    let output_path = match &cli.output {
        Some(path) => path.clone(),
        None => session.ask_output_path(default_output_path(&cli.input))?,
    };

    let include_timestamps =
        if cli.no_timestamps { false } else { session.ask_yes_no("Include timestamps? (Y/n): ")? };
    let include_model_info = if cli.no_model_info {
        false
    } else {
        session.ask_yes_no("Include model information? (Y/n): ")?
    };
    let thinking = match cli.thinking {
        Some(mode) => mode,
        None => session.ask_thinking_mode()?,
    };
    let options = ExportOptions { include_timestamps, include_model_info, thinking };

    let document = assemble_document(&records, &selection, &options)?;
    write_document(&output_path, &document)?;
    info!(chats = selection.len(), path = %output_path.display(), "export written");

    session.say(&format!(
        "Conversion complete! Markdown file saved to: {}",
        format_path_with_tilde(&output_path)
    ))
}

fn prune_empty_chats<R: BufRead, W: Write>(cli: &Cli, session: &mut Session<R, W>) -> Result<()> {
    let report = remove_empty_chats(&cli.input)?;
    session.say(&format!("Loaded {} chats successfully.", report.original))?;

    match &report.backup {
        Some(backup) => {
            session.say(&format!("Removed {} empty chats from the data.", report.removed))?;
            session.say(&format!(
                "Original file backed up to: {}",
                format_path_with_tilde(backup)
            ))?;
            session.say(&format!("Modified JSON saved with {} chats.", report.kept))
        }
        None => session.say("No empty chats found to remove."),
    }
}
