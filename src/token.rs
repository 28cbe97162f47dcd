//! The token tree produced by a scan.
//!
//! A scan partitions its input into tokens: contiguous, non-overlapping,
//! ascending spans that together cover the whole text. `start`/`end` are
//! half-open character (scalar value) indices into the outermost input.
//!
//! Tokens inside a `decoded` list carry indices relative to their own
//! decoded payload, not the outer text - decoded content is re-scanned as a
//! fresh top-level string. Consumers that need outer-text positions for
//! nested content must track the enclosing token themselves.

use serde::Serialize;

/// One classified span of the scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// Maximal run of ordinary characters.
    Plain {
        value: String,
        start: usize,
        end: usize,
    },
    /// Run of Unicode Tag characters; `decoded` is the recursive re-scan of
    /// the ASCII payload.
    UnicodeTag {
        original: String,
        decoded: Vec<Token>,
        start: usize,
        end: usize,
    },
    /// Single variation selector with its label (`"VS1"`..`"VS256"`).
    VariationSelector {
        original: char,
        label: String,
        start: usize,
        end: usize,
    },
    /// Run of sneaky-bit markers. Decodable only when the run is a whole
    /// number of bytes that form valid UTF-8; `original` keeps the markers
    /// verbatim either way.
    SneakyBits {
        original: String,
        decoded: Vec<Token>,
        is_decoded: bool,
        start: usize,
        end: usize,
    },
    /// Single named invisible character or control code.
    Invisible {
        original: char,
        name: String,
        start: usize,
        end: usize,
    },
}

impl Token {
    /// Start of the token's span (inclusive, character index).
    pub fn start(&self) -> usize {
        match self {
            Token::Plain { start, .. }
            | Token::UnicodeTag { start, .. }
            | Token::VariationSelector { start, .. }
            | Token::SneakyBits { start, .. }
            | Token::Invisible { start, .. } => *start,
        }
    }

    /// End of the token's span (exclusive, character index).
    pub fn end(&self) -> usize {
        match self {
            Token::Plain { end, .. }
            | Token::UnicodeTag { end, .. }
            | Token::VariationSelector { end, .. }
            | Token::SneakyBits { end, .. }
            | Token::Invisible { end, .. } => *end,
        }
    }

    /// The exact source characters this token covers.
    pub fn source_text(&self) -> String {
        match self {
            Token::Plain { value, .. } => value.clone(),
            Token::UnicodeTag { original, .. } | Token::SneakyBits { original, .. } => {
                original.clone()
            }
            Token::VariationSelector { original, .. } | Token::Invisible { original, .. } => {
                original.to_string()
            }
        }
    }

    /// True for every variant except `Plain`.
    pub fn is_hidden(&self) -> bool {
        !matches!(self, Token::Plain { .. })
    }
}
