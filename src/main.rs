//! jrnl - a simple journaling CLI
//!
//! Appends free text to one plain-text file per day under `~/.jrnl/`,
//! replaces or deletes a day's entry, or opens it in an editor.

use clap::Parser;
use std::process::ExitCode;
use termion::color;

/// Prints a status line to stdout, dropping write errors so a closed or full
/// stdout never aborts a run.
macro_rules! report {
    ($($arg:tt)*) => {{
        use std::io::Write as _;
        let _ = writeln!(std::io::stdout(), $($arg)*);
    }};
}

mod commands;
mod config;
mod date;


use config::Config;
use date::EntryDate;

/// Command-line interface for jrnl
#[derive(Parser)]
#[command(name = "jrnl")]
#[command(about = "A simple journaling CLI tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to add to the entry (words are joined with single spaces)
    text: Vec<String>,
    /// Date of the entry to add to or edit, as MM-DD-YYYY (default: today)
    #[arg(short = 'd', long = "date", value_name = "MM-DD-YYYY")]
    date: Option<String>,
    /// Open the entry in an editor instead of writing text
    #[arg(short = 'v', long = "vim")]
    vim: bool,
    /// Replace the entry with the given text, or delete it when no text is given
    #[arg(short = 'o', long = "overwrite")]
    overwrite: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.date, cli.vim, cli.overwrite, cli.text)
    }
}

/// Echoes the date and reports whether it is valid.
fn validate_date(input: &str) -> Option<EntryDate> {
    report!("{}", input);
    match EntryDate::parse(input) {
        Ok(date) => {
            report!("Valid date format");
            Some(date)
        }
        Err(e) => {
            report!(
                "{}Invalid date format: {}{}",
                color::Fg(color::Red),
                e,
                color::Fg(color::Reset)
            );
            None
        }
    }
}

/// Runs the parse, validate, write-or-edit pipeline. Failures are printed;
/// the process still exits successfully.
fn run(config: &Config) {
    let Some(date) = validate_date(&config.date) else {
        report!("Invalid date format. Please use the format: mm-dd-yyyy");
        return;
    };

    let path = commands::resolve_entry_path(dirs::home_dir(), &date);

    let result = if config.use_editor {
        commands::edit_entry(&config.editor, &path)
    } else {
        commands::write_entry(&path, &date, &config.entry_text, config.overwrite)
    };

    if let Err(e) = result {
        commands::report_error(&e);
    }
}

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    run(&config);
    ExitCode::SUCCESS
}
