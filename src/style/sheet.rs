//! The `key: value` style-sheet format.
//!
//! One setting per line. Everything after an unquoted `#` is a comment, blank
//! lines are skipped, and values are kept as raw strings: interpreting them is
//! the job of `PlotStyle`. Entry order is preserved so a sheet renders back in
//! the order it was written.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, StyleError};

/// The bundled style sheet.
pub const BUILTIN_STYLE: &str = include_str!("../../styles/plots.mplstyle");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    entries: Vec<(String, String)>,
}

impl StyleSheet {
    /// Parse sheet text. A repeated key overrides the earlier value in place.
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let mut sheet = StyleSheet::default();
        for (idx, raw) in text.lines().enumerate() {
            let line = strip_comment(raw).trim();
            if line.is_empty() {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                return Err(StyleError::Syntax {
                    line: idx + 1,
                    text: raw.trim().to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(StyleError::Syntax {
                    line: idx + 1,
                    text: raw.trim().to_string(),
                });
            }
            sheet.set(key, unquote(value.trim()));
        }
        Ok(sheet)
    }

    /// The sheet shipped with the crate.
    pub fn builtin() -> Result<Self, StyleError> {
        Self::parse(BUILTIN_STYLE)
    }

    /// Read and parse a sheet from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::new(2, format!("Failed to read style sheet '{}': {e}", path.display())))?;
        let sheet = Self::parse(&text)?;
        debug!(path = %path.display(), entries = sheet.len(), "loaded style sheet");
        Ok(sheet)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `key: value` lines (comments are not preserved). Values
    /// containing `#` are quoted so they survive a re-parse.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.entries {
            out.push_str(k);
            out.push_str(": ");
            if v.contains('#') {
                let q = if v.contains('\'') { '"' } else { '\'' };
                out.push(q);
                out.push_str(v);
                out.push(q);
            } else {
                out.push_str(v);
            }
            out.push('\n');
        }
        out
    }
}

/// Cut the line at the first `#` that is not inside quotes. An apostrophe
/// inside a word (`it's`) does not open a quote.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev = ' ';
    for (i, ch) in line.char_indices() {
        match (quote, ch) {
            (None, '#') => return &line[..i],
            (None, '"') => quote = Some(ch),
            (None, '\'') if !prev.is_alphanumeric() => quote = Some(ch),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
        prev = ch;
    }
    line
}

/// Drop one pair of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    for q in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
