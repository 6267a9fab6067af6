//! Style markers and the marker codec.
//!
//! Annotated text carries ANSI colour sequences as markers. Before text is
//! reflowed by column width, each multi-byte sequence is swapped for a single
//! sentinel symbol so it counts as one column; afterwards the symbols are
//! swapped back. For any text without sentinel symbols,
//! `to_markers(&to_symbols(x)) == x`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A style instruction placed around a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Reserved for text added interactively.
    Blue,
    /// Adverbs and qualifiers.
    Cyan,
    /// Passive voice and cliché openers.
    Green,
    /// Complex phrases.
    Purple,
    /// Hard sentences.
    Yellow,
    /// Very hard sentences.
    Red,
    /// End of styling.
    End,
}

impl Marker {
    /// All markers, in codec iteration order.
    pub const ALL: [Self; 7] = [
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Purple,
        Self::Yellow,
        Self::Red,
        Self::End,
    ];

    /// The ANSI escape sequence for this marker.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Blue => "\x1b[94m",
            Self::Cyan => "\x1b[36m",
            Self::Green => "\x1b[32m",
            Self::Purple => "\x1b[35m",
            Self::Yellow => "\x1b[93m",
            Self::Red => "\x1b[91m",
            Self::End => "\x1b[0m",
        }
    }

    /// The single-character sentinel standing in for this marker.
    pub const fn symbol(self) -> char {
        match self {
            Self::Blue => 'Ⓑ',
            Self::Cyan => 'Ⓒ',
            Self::Green => 'Ⓖ',
            Self::Purple => 'Ⓟ',
            Self::Yellow => 'Ⓨ',
            Self::Red => 'Ⓡ',
            Self::End => 'Ⓧ',
        }
    }

    /// Look up the marker a sentinel symbol stands for.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.symbol() == symbol)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Replace every marker sequence with its sentinel symbol.
pub fn to_symbols(text: &str) -> String {
    let mut out = text.to_string();
    for marker in Marker::ALL {
        if out.contains(marker.code()) {
            out = out.replace(marker.code(), marker.symbol().encode_utf8(&mut [0; 4]));
        }
    }
    out
}

/// Replace every sentinel symbol with its marker sequence.
pub fn to_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        match Marker::from_symbol(ch) {
            Some(marker) => out.push_str(marker.code()),
            None => out.push(ch),
        }
    }
    out
}

/// Remove markers in both raw and symbol form, leaving plain text.
pub fn strip_markers(text: &str) -> String {
    let mut out = text.to_string();
    for marker in Marker::ALL {
        if out.contains(marker.code()) {
            out = out.replace(marker.code(), "");
        }
    }
    out.retain(|ch| Marker::from_symbol(ch).is_none());
    out
}
