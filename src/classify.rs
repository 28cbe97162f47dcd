//! Codepoint classification for the scanner.
//!
//! Every Unicode scalar value maps to exactly one [`CharClass`]. The check
//! order matters: the sneaky-bit markers (U+2062, U+2064) also appear in the
//! named-invisible table, so the marker check must run before the table
//! lookup.

use crate::{SNEAKY_BIT_ONE, SNEAKY_BIT_ZERO};

/// First codepoint of the Unicode Tag block. Tag characters decode to ASCII
/// bytes via `codepoint - TAG_BASE`.
pub const TAG_BASE: u32 = 0xE0000;

/// Last codepoint of the Unicode Tag block.
pub const TAG_END: u32 = 0xE007F;

/// Basic variation selector range (VS1-VS16).
pub const VS_BASIC_START: u32 = 0xFE00;
pub const VS_BASIC_END: u32 = 0xFE0F;

/// Supplementary variation selector range (VS17-VS256).
pub const VS_SUPPLEMENT_START: u32 = 0xE0100;
pub const VS_SUPPLEMENT_END: u32 = 0xE01EF;

/// The semantic category of a single Unicode scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Member of the Unicode Tag block (steganographic ASCII channel).
    UnicodeTag,
    /// Basic variation selector (U+FE00-U+FE0F).
    VariationSelectorBasic,
    /// Supplementary variation selector (U+E0100-U+E01EF).
    VariationSelectorSupplement,
    /// Sneaky-bit marker standing for binary 0.
    SneakyBitZero,
    /// Sneaky-bit marker standing for binary 1.
    SneakyBitOne,
    /// Entry in the named invisible-character table.
    NamedInvisible(&'static str),
    /// C0/C1 control code or DEL.
    ControlInvisible,
    /// Everything else: visible, ordinary text.
    Ordinary,
}

/// Named invisible characters worth reporting individually.
///
/// U+2062 and U+2064 are listed for completeness but are claimed by the
/// sneaky-bit channel before this table is consulted.
const NAMED_INVISIBLES: &[(char, &str)] = &[
    ('\u{00A0}', "No-Break Space"),
    ('\u{00AD}', "Soft Hyphen"),
    ('\u{034F}', "Combining Grapheme Joiner"),
    ('\u{180E}', "Mongolian Vowel Separator"),
    ('\u{200B}', "Zero Width Space"),
    ('\u{200C}', "Zero Width Non-Joiner"),
    ('\u{200D}', "Zero Width Joiner"),
    ('\u{200E}', "Left-to-Right Mark"),
    ('\u{200F}', "Right-to-Left Mark"),
    ('\u{202A}', "Left-to-Right Embedding"),
    ('\u{202B}', "Right-to-Left Embedding"),
    ('\u{202C}', "Pop Directional Formatting"),
    ('\u{202D}', "Left-to-Right Override"),
    ('\u{202E}', "Right-to-Left Override"),
    ('\u{2060}', "Word Joiner"),
    ('\u{2061}', "Function Application"),
    ('\u{2062}', "Invisible Times"),
    ('\u{2063}', "Invisible Separator"),
    ('\u{2064}', "Invisible Plus"),
    ('\u{2066}', "Left-to-Right Isolate"),
    ('\u{2067}', "Right-to-Left Isolate"),
    ('\u{2068}', "First Strong Isolate"),
    ('\u{2069}', "Pop Directional Isolate"),
    ('\u{FEFF}', "Zero Width No-Break Space"),
    ('\u{FFFE}', "Noncharacter"),
    ('\u{FFFF}', "Noncharacter"),
];

/// Classifies a single scalar value. Total: every `char` maps to exactly one
/// category, and the function never fails.
pub fn classify(c: char) -> CharClass {
    let cp = c as u32;

    // Tag block first: it must never fall through to Ordinary.
    if (TAG_BASE..=TAG_END).contains(&cp) {
        return CharClass::UnicodeTag;
    }

    // Sneaky-bit markers before the named table (they shadow two entries).
    if c == SNEAKY_BIT_ZERO {
        return CharClass::SneakyBitZero;
    }
    if c == SNEAKY_BIT_ONE {
        return CharClass::SneakyBitOne;
    }

    if (VS_BASIC_START..=VS_BASIC_END).contains(&cp) {
        return CharClass::VariationSelectorBasic;
    }
    if (VS_SUPPLEMENT_START..=VS_SUPPLEMENT_END).contains(&cp) {
        return CharClass::VariationSelectorSupplement;
    }

    if let Some(name) = named_invisible(c) {
        return CharClass::NamedInvisible(name);
    }

    if is_control_invisible(cp) {
        return CharClass::ControlInvisible;
    }

    CharClass::Ordinary
}

/// Looks up a character in the named invisible table.
fn named_invisible(c: char) -> Option<&'static str> {
    NAMED_INVISIBLES
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, name)| *name)
}

/// C0 controls (minus tab/newline/CR and friends), DEL, and C1 controls.
fn is_control_invisible(cp: u32) -> bool {
    matches!(cp, 0x00..=0x08 | 0x0E..=0x1F | 0x7F | 0x80..=0x9F)
}

/// Formats the display name for an invisible character, e.g.
/// `"Zero Width Space (U+200B)"` or `"Control Character (U+0007)"`.
pub fn invisible_display_name(c: char) -> String {
    match named_invisible(c) {
        Some(name) => format!("{} (U+{:04X})", name, c as u32),
        None => format!("Control Character (U+{:04X})", c as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_range_boundaries() {
        assert_eq!(classify('\u{E0000}'), CharClass::UnicodeTag);
        assert_eq!(classify('\u{E0041}'), CharClass::UnicodeTag);
        assert_eq!(classify('\u{E007F}'), CharClass::UnicodeTag);
        // One past the block is a variation selector, not a tag
        assert_eq!(
            classify('\u{E0100}'),
            CharClass::VariationSelectorSupplement
        );
    }

    #[test]
    fn test_sneaky_bits_win_over_named_table() {
        // Both markers have named-table entries; the marker class must win
        assert_eq!(classify('\u{2062}'), CharClass::SneakyBitZero);
        assert_eq!(classify('\u{2064}'), CharClass::SneakyBitOne);
        // Their neighbors stay in the table
        assert_eq!(
            classify('\u{2061}'),
            CharClass::NamedInvisible("Function Application")
        );
        assert_eq!(
            classify('\u{2063}'),
            CharClass::NamedInvisible("Invisible Separator")
        );
    }

    #[test]
    fn test_variation_selector_ranges() {
        assert_eq!(classify('\u{FE00}'), CharClass::VariationSelectorBasic);
        assert_eq!(classify('\u{FE0F}'), CharClass::VariationSelectorBasic);
        assert_eq!(
            classify('\u{E0100}'),
            CharClass::VariationSelectorSupplement
        );
        assert_eq!(
            classify('\u{E01EF}'),
            CharClass::VariationSelectorSupplement
        );
        // Just outside both ranges
        assert_eq!(classify('\u{FE10}'), CharClass::Ordinary);
        assert_eq!(classify('\u{E01F0}'), CharClass::Ordinary);
    }

    #[test]
    fn test_control_ranges() {
        assert_eq!(classify('\u{0000}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{0008}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{000E}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{001F}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{007F}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{0080}'), CharClass::ControlInvisible);
        assert_eq!(classify('\u{009F}'), CharClass::ControlInvisible);
    }

    #[test]
    fn test_visible_whitespace_is_ordinary() {
        assert_eq!(classify('\t'), CharClass::Ordinary);
        assert_eq!(classify('\n'), CharClass::Ordinary);
        assert_eq!(classify('\r'), CharClass::Ordinary);
        assert_eq!(classify(' '), CharClass::Ordinary);
    }

    #[test]
    fn test_ordinary_text() {
        assert_eq!(classify('a'), CharClass::Ordinary);
        assert_eq!(classify('Ñ'), CharClass::Ordinary);
        assert_eq!(classify('漢'), CharClass::Ordinary);
        assert_eq!(classify('🎉'), CharClass::Ordinary);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            invisible_display_name('\u{200B}'),
            "Zero Width Space (U+200B)"
        );
        assert_eq!(
            invisible_display_name('\u{0007}'),
            "Control Character (U+0007)"
        );
        assert_eq!(
            invisible_display_name('\u{0080}'),
            "Control Character (U+0080)"
        );
    }
}
