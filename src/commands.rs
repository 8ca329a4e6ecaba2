//! Command implementations for the jrnl journaling tool.
//!
//! Every entry lives in `~/.jrnl/<MM-DD-YYYY>.txt`. This module resolves that
//! path, decides what a run should do to the file, carries it out, and hands
//! the file to an external editor when asked.

use crate::date::EntryDate;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use termion::color;

/// Name of the journal directory under the user's home directory.
pub const JOURNAL_DIR_NAME: &str = ".jrnl";

/// What a run should do to the entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add text to the end of the entry, creating it if needed.
    Append(String),
    /// Throw away existing content and write text in its place.
    Replace(String),
    /// Remove the entry file if it exists.
    Delete,
}

/// What actually happened to the entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Appended { bytes: usize },
    Replaced { bytes: usize },
    Deleted,
    NothingToDelete,
}

/// Resolves `<home>/.jrnl`. The directory itself is not created.
pub fn journal_dir(home: Option<PathBuf>) -> Result<PathBuf> {
    let home = home.ok_or_else(|| anyhow!("cannot determine path to home directory"))?;
    Ok(home.join(JOURNAL_DIR_NAME))
}

/// Fallback used when the home directory cannot be resolved.
/// Mirrors joining the journal directory onto an empty home path.
pub fn fallback_journal_dir() -> PathBuf {
    Path::new("/").join(JOURNAL_DIR_NAME)
}

/// Absolute path of the entry file for `date` inside `dir`.
pub fn entry_path(dir: &Path, date: &EntryDate) -> Result<PathBuf> {
    let path = dir.join(date.file_name());
    std::path::absolute(&path)
        .with_context(|| format!("failed to resolve absolute path for {}", path.display()))
}

/// Resolves the entry path for `date`, reporting failures and falling back
/// instead of aborting, so the write or editor launch is still attempted.
pub fn resolve_entry_path(home: Option<PathBuf>, date: &EntryDate) -> PathBuf {
    let dir = journal_dir(home).unwrap_or_else(|e| {
        report_error(&e);
        fallback_journal_dir()
    });
    entry_path(&dir, date).unwrap_or_else(|e| {
        report_error(&e);
        dir.join(date.file_name())
    })
}

/// Prints an error with its context chain.
pub fn report_error(err: &anyhow::Error) {
    report!(
        "{}Error: {:#}{}",
        color::Fg(color::Red),
        err,
        color::Fg(color::Reset)
    );
}

/// Decides the action for a run.
///
/// Emptiness is judged on the token list, not the joined text, so a single
/// empty argument still counts as input.
pub fn plan(overwrite: bool, tokens: &[String]) -> Action {
    let text = tokens.join(" ");
    match (overwrite, tokens.is_empty()) {
        (false, _) => Action::Append(text),
        (true, false) => Action::Replace(text),
        (true, true) => Action::Delete,
    }
}

/// Carries out `action` against the entry file at `path`.
pub fn apply(path: &Path, action: &Action) -> Result<Outcome> {
    match action {
        Action::Append(text) => {
            append_text(path, text)?;
            Ok(Outcome::Appended { bytes: text.len() })
        }
        Action::Replace(text) => {
            if path.exists() {
                let file = OpenOptions::new()
                    .write(true)
                    .open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                file.set_len(0)
                    .with_context(|| format!("failed to truncate {}", path.display()))?;
            }
            append_text(path, text)?;
            Ok(Outcome::Replaced { bytes: text.len() })
        }
        Action::Delete => match fs::remove_file(path) {
            Ok(()) => Ok(Outcome::Deleted),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Outcome::NothingToDelete),
            Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
        },
    }
}

fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("failed to write to {}", path.display()))?;
    Ok(())
}

/// Writes, replaces, or deletes the entry for `date` and reports the result.
pub fn write_entry(path: &Path, date: &EntryDate, tokens: &[String], overwrite: bool) -> Result<()> {
    let action = plan(overwrite, tokens);
    let outcome = apply(path, &action)?;

    match outcome {
        Outcome::Appended { bytes } => report!(
            "{}✓ Added {} byte(s) to {}{}",
            color::Fg(color::Green),
            bytes,
            date,
            color::Fg(color::Reset)
        ),
        Outcome::Replaced { bytes } => report!(
            "{}✓ Replaced {} with {} byte(s){}",
            color::Fg(color::Green),
            date,
            bytes,
            color::Fg(color::Reset)
        ),
        Outcome::Deleted => report!(
            "{}✓ Deleted entry for {}{}",
            color::Fg(color::Green),
            date,
            color::Fg(color::Reset)
        ),
        Outcome::NothingToDelete => report!(
            "{}No entry for {} to delete.{}",
            color::Fg(color::Yellow),
            date,
            color::Fg(color::Reset)
        ),
    }

    Ok(())
}

/// Runs `editor <path>` attached to this terminal and waits for it to exit.
pub fn open_in_editor(editor: &str, path: &Path) -> Result<ExitStatus> {
    let status = Command::new(editor)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor '{}'", editor))?;
    Ok(status)
}

/// Opens the entry in the editor and reports a failing exit status.
pub fn edit_entry(editor: &str, path: &Path) -> Result<()> {
    let status = open_in_editor(editor, path)?;

    if !status.success() {
        report!(
            "{}Editor exited with error code: {}{}",
            color::Fg(color::Red),
            status.code().unwrap_or(-1),
            color::Fg(color::Reset)
        );
    }

    Ok(())
}
