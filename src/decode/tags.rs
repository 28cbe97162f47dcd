//! Unicode Tag payload decoding.
//!
//! The tag block (U+E0000-U+E007F) mirrors ASCII: each tag character
//! carries one byte as `codepoint - 0xE0000`. A run of tag characters is
//! therefore an invisible ASCII string, which gets decoded and re-scanned
//! recursively - hidden content can itself wrap more hidden content.

use crate::classify::TAG_BASE;
use crate::scanner::scan_with_offset;
use crate::token::Token;
use crate::MAX_DECODE_DEPTH;

/// Decodes a run of tag characters to the ASCII payload they carry.
///
/// Every character in the tag block maps to a valid byte, so this cannot
/// fail; callers are expected to pass only tag-block characters.
pub fn decode_tag_payload(run: &[char]) -> String {
    run.iter()
        .map(|&c| {
            let byte = (c as u32).saturating_sub(TAG_BASE) as u8;
            byte as char
        })
        .collect()
}

/// Builds a `UnicodeTag` token from a maximal run of tag characters.
///
/// The decoded payload is re-scanned with offsets restarting at zero; the
/// nested tokens describe positions within the payload, not the outer text.
/// At the recursion cap the payload is left undecoded (empty `decoded`).
pub(crate) fn decode_tag_run(run: &[char], start: usize, end: usize, depth: usize) -> Token {
    let payload = decode_tag_payload(run);

    let decoded = if payload.is_empty() || depth >= MAX_DECODE_DEPTH {
        Vec::new()
    } else {
        scan_with_offset(&payload, 0, depth + 1)
    };

    Token::UnicodeTag {
        original: run.iter().collect(),
        decoded,
        start,
        end,
    }
}
