//! Variation selector labeling.
//!
//! Variation selectors traditionally request a glyph variant for the
//! preceding character; repurposed, the 256 selectors form an arbitrary
//! steganographic byte channel. Each selector maps to exactly one label.

use crate::classify::{VS_BASIC_END, VS_BASIC_START, VS_SUPPLEMENT_END, VS_SUPPLEMENT_START};

/// Returns the label for a variation selector, or `None` if the character
/// is not one. `U+FE00` is `"VS1"`, `U+FE0F` is `"VS16"`, `U+E0100` is
/// `"VS17"`, `U+E01EF` is `"VS256"`.
pub fn selector_label(c: char) -> Option<String> {
    let cp = c as u32;

    if (VS_BASIC_START..=VS_BASIC_END).contains(&cp) {
        return Some(format!("VS{}", cp - VS_BASIC_START + 1));
    }
    if (VS_SUPPLEMENT_START..=VS_SUPPLEMENT_END).contains(&cp) {
        return Some(format!("VS{}", cp - VS_SUPPLEMENT_START + 16 + 1));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_range_labels() {
        assert_eq!(selector_label('\u{FE00}').as_deref(), Some("VS1"));
        assert_eq!(selector_label('\u{FE07}').as_deref(), Some("VS8"));
        assert_eq!(selector_label('\u{FE0F}').as_deref(), Some("VS16"));
    }

    #[test]
    fn test_supplement_range_labels() {
        assert_eq!(selector_label('\u{E0100}').as_deref(), Some("VS17"));
        assert_eq!(selector_label('\u{E01EF}').as_deref(), Some("VS256"));
    }

    #[test]
    fn test_non_selectors() {
        assert_eq!(selector_label('a'), None);
        assert_eq!(selector_label('\u{FDFF}'), None);
        assert_eq!(selector_label('\u{FE10}'), None);
        assert_eq!(selector_label('\u{E00FF}'), None);
        assert_eq!(selector_label('\u{E01F0}'), None);
    }
}
