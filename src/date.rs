//! Entry date parsing and validation.
//!
//! Journal entries are keyed by a calendar date written as `MM-DD-YYYY`.
//! The same string doubles as the entry's file stem, so the layout is strict:
//! two-digit month, two-digit day, four-digit year, dash separated.

use chrono::{Local, NaiveDate};
use std::fmt;

/// The layout used for entry dates, in chrono's format syntax.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// A validated journal date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    /// Parses a `MM-DD-YYYY` string.
    ///
    /// The shape is checked byte by byte before handing off to chrono, since
    /// chrono alone would also accept one-digit months and days. Chrono then
    /// rejects impossible calendar dates (month 13, February 30, February 29
    /// outside leap years).
    pub fn parse(input: &str) -> Result<EntryDate, String> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 {
            return Err(format!(
                "\"{}\" must be exactly 10 characters (MM-DD-YYYY)",
                input
            ));
        }

        for (idx, &b) in bytes.iter().enumerate() {
            let ok = match idx {
                2 | 5 => b == b'-',
                _ => b.is_ascii_digit(),
            };
            if !ok {
                return Err(format!(
                    "\"{}\" has an unexpected character at position {}",
                    input,
                    idx + 1
                ));
            }
        }

        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(EntryDate)
            .map_err(|e| format!("\"{}\": {}", input, e))
    }

    /// Today's date in the local timezone.
    pub fn today() -> EntryDate {
        EntryDate(Local::now().naive_local().date())
    }

    /// File name of the entry for this date, e.g. `01-02-2024.txt`.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self)
    }
}

impl fmt::Display for EntryDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Today's date rendered in the entry layout. Used as the `--date` default.
pub fn today_string() -> String {
    EntryDate::today().to_string()
}
