//! Steganographic encoders - the scanner's counterpart.
//!
//! This module provides:
//! - ASCII to Unicode Tag characters (invisible ASCII channel)
//! - Arbitrary UTF-8 to sneaky-bit markers (invisible binary channel)
//! - Byte index to variation selector (inverse of the VS labeling)
//!
//! Everything produced here scans back to a decodable token, which is also
//! how the round-trip tests exercise the scanner.

use thiserror::Error;

use crate::classify::{TAG_BASE, VS_BASIC_START, VS_SUPPLEMENT_START};
use crate::{SNEAKY_BIT_ONE, SNEAKY_BIT_ZERO};

/// Errors that can occur during encoding.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The tag channel only carries ASCII; each tag character holds one
    /// byte in `0x00..=0x7F`.
    #[error("Character '{0}' is not ASCII and cannot be tag-encoded")]
    NonAscii(char),
}

/// Encodes an ASCII message into invisible Unicode Tag characters.
///
/// Each byte maps to `0xE0000 + byte`. Returns an error on the first
/// non-ASCII character.
pub fn encode_tags(message: &str) -> Result<String, EncodeError> {
    message
        .chars()
        .map(|c| {
            if !c.is_ascii() {
                return Err(EncodeError::NonAscii(c));
            }
            // Safe range: TAG_BASE + 0..=0x7F is always a valid scalar
            Ok(char::from_u32(TAG_BASE + c as u32).unwrap_or(c))
        })
        .collect()
}

/// Encodes any message into sneaky-bit markers, one marker per bit of the
/// UTF-8 encoding, MSB first within each byte. Cannot fail.
pub fn encode_sneaky_bits(message: &str) -> String {
    let mut out = String::with_capacity(message.len() * 8 * 3);

    for byte in message.bytes() {
        for shift in (0..8).rev() {
            out.push(if (byte >> shift) & 1 == 1 {
                SNEAKY_BIT_ONE
            } else {
                SNEAKY_BIT_ZERO
            });
        }
    }

    out
}

/// Returns the variation selector for a 1-based index, the inverse of the
/// scanner's `VS1`..`VS256` labeling. `None` outside `1..=256`.
pub fn variation_selector(index: u16) -> Option<char> {
    match index {
        1..=16 => char::from_u32(VS_BASIC_START + u32::from(index) - 1),
        17..=256 => char::from_u32(VS_SUPPLEMENT_START + u32::from(index) - 17),
        _ => None,
    }
}
