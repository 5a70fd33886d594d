//! Color values as written in style sheets.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The basic named colors the analysis scripts use.
const NAMED: [(&str, Rgb); 22] = [
    ("black", Rgb(0, 0, 0)),
    ("k", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("w", Rgb(255, 255, 255)),
    ("blue", Rgb(0, 0, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("orange", Rgb(255, 165, 0)),
    ("purple", Rgb(128, 0, 128)),
    ("pink", Rgb(255, 192, 203)),
    ("brown", Rgb(165, 42, 42)),
    ("gray", Rgb(128, 128, 128)),
    ("grey", Rgb(128, 128, 128)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
    ("yellow", Rgb(255, 255, 0)),
    ("b", Rgb(0, 0, 255)),
    ("g", Rgb(0, 128, 0)),
    ("r", Rgb(255, 0, 0)),
    ("c", Rgb(0, 191, 191)),
    ("m", Rgb(191, 0, 191)),
    ("y", Rgb(191, 191, 0)),
];

impl Rgb {
    /// Parse a named color or a `rrggbb` hex string (leading `#` optional).
    pub fn parse(text: &str) -> Result<Self, StyleError> {
        let t = text.trim().trim_matches(|c: char| c == '\'' || c == '"');
        let lower = t.to_ascii_lowercase();
        if let Some((_, rgb)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(*rgb);
        }

        let hex = lower.strip_prefix('#').unwrap_or(&lower);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                return Ok(Rgb(r, g, b));
            }
        }
        Err(StyleError::UnknownColor(text.trim().to_string()))
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
