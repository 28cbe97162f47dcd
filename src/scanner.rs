//! The scanner walks input text one scalar value at a time and produces the
//! token tree.
//!
//! Classification priority (load-bearing, see `classify`):
//! 1. Unicode Tag run (maximal munch, recursive decode)
//! 2. Sneaky-bit marker run (maximal munch, recursive decode)
//! 3. Variation selector (single character)
//! 4. Named invisible / control code (single character)
//! 5. Plain run (coalesced until the next special character)
//!
//! The scanner NEVER fails. A tool whose job is to surface adversarial
//! hidden content must not itself be crashable by that content, so every
//! input - including noncharacters and lone controls - is representable.

use crate::classify::{classify, invisible_display_name, CharClass};
use crate::decode::{decode_bit_run, decode_tag_run, selector_label};
use crate::token::Token;

/// Scans text into an ordered token sequence.
///
/// The returned tokens partition the input exactly: spans are contiguous,
/// non-overlapping, ascending, and cover `[0, char_count)`. The empty
/// string yields an empty token list.
pub fn scan(text: &str) -> Vec<Token> {
    scan_with_offset(text, 0, 0)
}

/// Scan worker shared with the recursive decoders.
///
/// `base` shifts reported positions (0 for the outermost text and for every
/// decoded payload - payload offsets restart at zero); `depth` counts
/// decode layers toward `MAX_DECODE_DEPTH`.
pub(crate) fn scan_with_offset(text: &str, base: usize, depth: usize) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;

        match classify(chars[i]) {
            CharClass::UnicodeTag => {
                while i < chars.len() && classify(chars[i]) == CharClass::UnicodeTag {
                    i += 1;
                }
                tokens.push(decode_tag_run(&chars[start..i], base + start, base + i, depth));
            }
            CharClass::SneakyBitZero | CharClass::SneakyBitOne => {
                while i < chars.len() && is_sneaky_bit(chars[i]) {
                    i += 1;
                }
                tokens.push(decode_bit_run(&chars[start..i], base + start, base + i, depth));
            }
            CharClass::VariationSelectorBasic | CharClass::VariationSelectorSupplement => {
                i += 1;
                // Every character in either selector range has a label
                let label = selector_label(chars[start]).unwrap_or_default();
                tokens.push(Token::VariationSelector {
                    original: chars[start],
                    label,
                    start: base + start,
                    end: base + i,
                });
            }
            CharClass::NamedInvisible(_) | CharClass::ControlInvisible => {
                i += 1;
                tokens.push(Token::Invisible {
                    original: chars[start],
                    name: invisible_display_name(chars[start]),
                    start: base + start,
                    end: base + i,
                });
            }
            CharClass::Ordinary => {
                while i < chars.len() && classify(chars[i]) == CharClass::Ordinary {
                    i += 1;
                }
                tokens.push(Token::Plain {
                    value: chars[start..i].iter().collect(),
                    start: base + start,
                    end: base + i,
                });
            }
        }
    }

    tokens
}

/// Both marker classes extend the same run.
fn is_sneaky_bit(c: char) -> bool {
    matches!(
        classify(c),
        CharClass::SneakyBitZero | CharClass::SneakyBitOne
    )
}
