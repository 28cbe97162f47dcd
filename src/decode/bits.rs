//! Sneaky-bits payload decoding.
//!
//! Two invisible math operators stand in for binary digits: U+2062 is 0 and
//! U+2064 is 1. Eight markers encode one byte, MSB first; the byte sequence
//! is then read as UTF-8 and the result re-scanned recursively.
//!
//! This is the only channel with a failure mode. A run whose length is not
//! a multiple of 8, or whose bytes are not valid UTF-8, is marked
//! undecodable - never an error. The original markers are kept verbatim for
//! display either way.

use crate::scanner::scan_with_offset;
use crate::token::Token;
use crate::{MAX_DECODE_DEPTH, SNEAKY_BIT_ONE};

/// Groups a marker run into bytes, MSB first. `None` when the run is not a
/// whole number of bytes.
fn run_to_bytes(run: &[char]) -> Option<Vec<u8>> {
    if run.is_empty() || run.len() % 8 != 0 {
        return None;
    }

    let bytes = run
        .chunks_exact(8)
        .map(|group| {
            group.iter().fold(0u8, |acc, &c| {
                let bit = u8::from(c == SNEAKY_BIT_ONE);
                (acc << 1) | bit
            })
        })
        .collect();

    Some(bytes)
}

/// Builds a `SneakyBits` token from a maximal run of marker characters.
///
/// On a successful decode the payload is re-scanned with offsets restarting
/// at zero, exactly like tag payloads. Failure (partial trailing byte,
/// invalid UTF-8, or recursion cap reached) yields `is_decoded: false` with
/// empty `decoded`.
pub(crate) fn decode_bit_run(run: &[char], start: usize, end: usize, depth: usize) -> Token {
    let original: String = run.iter().collect();

    let payload = run_to_bytes(run).and_then(|bytes| String::from_utf8(bytes).ok());

    let (decoded, is_decoded) = match payload {
        Some(text) if depth < MAX_DECODE_DEPTH => (scan_with_offset(&text, 0, depth + 1), true),
        _ => (Vec::new(), false),
    };

    Token::SneakyBits {
        original,
        decoded,
        is_decoded,
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SNEAKY_BIT_ZERO;

    /// Encodes bytes into marker characters for test inputs.
    fn to_markers(bytes: &[u8]) -> Vec<char> {
        let mut run = Vec::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            for shift in (0..8).rev() {
                run.push(if (byte >> shift) & 1 == 1 {
                    SNEAKY_BIT_ONE
                } else {
                    SNEAKY_BIT_ZERO
                });
            }
        }
        run
    }

    #[test]
    fn test_run_to_bytes_msb_first() {
        // 'A' = 0x41 = 01000001
        let run = to_markers(b"A");
        assert_eq!(run_to_bytes(&run), Some(vec![0x41]));
    }

    #[test]
    fn test_partial_byte_is_rejected() {
        let run = vec![SNEAKY_BIT_ONE; 7];
        assert_eq!(run_to_bytes(&run), None);

        let run = vec![SNEAKY_BIT_ZERO; 9];
        assert_eq!(run_to_bytes(&run), None);
    }

    #[test]
    fn test_decode_valid_utf8() {
        let run = to_markers("hi".as_bytes());
        let token = decode_bit_run(&run, 0, 16, 0);

        match token {
            Token::SneakyBits {
                decoded,
                is_decoded,
                original,
                ..
            } => {
                assert!(is_decoded);
                assert_eq!(original.chars().count(), 16);
                assert_eq!(
                    decoded,
                    vec![Token::Plain {
                        value: "hi".to_string(),
                        start: 0,
                        end: 2,
                    }]
                );
            }
            other => panic!("expected SneakyBits, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_degrades() {
        // 0xFF is never valid UTF-8
        let run = to_markers(&[0xFF]);
        let token = decode_bit_run(&run, 0, 8, 0);

        match token {
            Token::SneakyBits {
                decoded,
                is_decoded,
                original,
                ..
            } => {
                assert!(!is_decoded);
                assert!(decoded.is_empty());
                // Markers are retained for display
                assert_eq!(original.chars().count(), 8);
            }
            other => panic!("expected SneakyBits, got {:?}", other),
        }
    }

    #[test]
    fn test_multibyte_utf8_payload() {
        let run = to_markers("ñ".as_bytes());
        let token = decode_bit_run(&run, 0, 16, 0);

        match token {
            Token::SneakyBits {
                decoded,
                is_decoded,
                ..
            } => {
                assert!(is_decoded);
                assert_eq!(
                    decoded,
                    vec![Token::Plain {
                        value: "ñ".to_string(),
                        start: 0,
                        end: 1,
                    }]
                );
            }
            other => panic!("expected SneakyBits, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_cap_marks_undecodable() {
        let run = to_markers(b"x");
        let token = decode_bit_run(&run, 0, 8, MAX_DECODE_DEPTH);

        match token {
            Token::SneakyBits {
                decoded,
                is_decoded,
                ..
            } => {
                assert!(!is_decoded);
                assert!(decoded.is_empty());
            }
            other => panic!("expected SneakyBits, got {:?}", other),
        }
    }
}
