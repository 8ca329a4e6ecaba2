//! Run configuration assembled from the command line and environment.

use std::env;

/// Environment variable that overrides the editor binary.
pub const EDITOR_ENV: &str = "JRNL_EDITOR";

/// Editor used when `JRNL_EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "vim";

/// Everything a single invocation needs, passed explicitly down the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Unvalidated entry date as typed (or today's date).
    pub date: String,
    pub use_editor: bool,
    pub overwrite: bool,
    /// Free-text tokens, joined with single spaces when written.
    pub entry_text: Vec<String>,
    pub editor: String,
}

impl Config {
    /// Builds a config, falling back to today's date and reading the editor
    /// from the environment.
    pub fn new(date: Option<String>, use_editor: bool, overwrite: bool, entry_text: Vec<String>) -> Self {
        Config {
            date: date.unwrap_or_else(crate::date::today_string),
            use_editor,
            overwrite,
            entry_text,
            editor: editor_from_env(),
        }
    }
}

/// Resolves the editor command: `$JRNL_EDITOR`, then `vim`.
pub fn editor_from_env() -> String {
    resolve_editor(env::var(EDITOR_ENV).ok())
}

fn resolve_editor(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_defaults_to_vim() {
        assert_eq!(resolve_editor(None), "vim");
        assert_eq!(resolve_editor(Some("   ".to_string())), "vim");
    }

    #[test]
    fn editor_override_is_trimmed() {
        assert_eq!(resolve_editor(Some(" nano ".to_string())), "nano");
    }

    #[test]
    fn missing_date_defaults_to_today() {
        let config = Config::new(None, false, false, vec![]);
        assert_eq!(config.date, crate::date::today_string());
    }
}
