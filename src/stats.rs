//! Summary statistics and the flat detected-character report.
//!
//! Both walkers read the top-level token list only. Hidden content nested
//! inside a decoded payload is already represented by its wrapping token;
//! counting it again would double-report a single steganographic channel.

use serde::Serialize;

use crate::token::Token;

/// Per-category occurrence counts for one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HiddenCounts {
    /// Sum of all non-plain token counts.
    pub total_hidden: usize,
    /// Unicode Tag runs.
    pub unicode_tags: usize,
    /// Variation selectors.
    pub variant_selectors: usize,
    /// Sneaky-bit runs.
    pub sneaky_bit_chars: usize,
    /// Total marker characters across all sneaky-bit runs (8x the decoded
    /// byte count when a run decodes).
    pub sneaky_bit_bytes: usize,
    /// Named invisible characters and control codes.
    pub invisible_others: usize,
}

/// Counts token occurrences per category over a top-level token list.
pub fn aggregate(tokens: &[Token]) -> HiddenCounts {
    let mut counts = HiddenCounts::default();

    for token in tokens {
        match token {
            Token::Plain { .. } => {}
            Token::UnicodeTag { .. } => counts.unicode_tags += 1,
            Token::VariationSelector { .. } => counts.variant_selectors += 1,
            Token::SneakyBits { original, .. } => {
                counts.sneaky_bit_chars += 1;
                counts.sneaky_bit_bytes += original.chars().count();
            }
            Token::Invisible { .. } => counts.invisible_others += 1,
        }
    }

    counts.total_hidden = counts.unicode_tags
        + counts.variant_selectors
        + counts.sneaky_bit_chars
        + counts.invisible_others;

    counts
}

/// One hidden occurrence, flattened for display: where it sits, the raw
/// characters, and what it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedChar {
    /// Character index of the occurrence in the scanned text.
    pub position: usize,
    /// The raw hidden characters, verbatim.
    pub chars: String,
    /// Human-readable description of the occurrence.
    pub description: String,
}

/// Flattens the top-level hidden tokens into a display list.
pub fn detected_chars(tokens: &[Token]) -> Vec<DetectedChar> {
    tokens
        .iter()
        .filter(|t| t.is_hidden())
        .map(|token| DetectedChar {
            position: token.start(),
            chars: token.source_text(),
            description: describe(token),
        })
        .collect()
}

fn describe(token: &Token) -> String {
    match token {
        Token::Plain { .. } => String::new(),
        Token::UnicodeTag { original, .. } => {
            format!("Unicode tag run ({} chars)", original.chars().count())
        }
        Token::VariationSelector { label, .. } => {
            format!("Variation selector {}", label)
        }
        Token::SneakyBits {
            original,
            is_decoded,
            ..
        } => {
            let markers = original.chars().count();
            if *is_decoded {
                format!("Sneaky bits ({} markers, {} bytes)", markers, markers / 8)
            } else {
                format!("Sneaky bits ({} markers, undecodable)", markers)
            }
        }
        Token::Invisible { name, .. } => name.clone(),
    }
}
