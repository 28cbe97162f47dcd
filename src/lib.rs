//! # Unhide - Reveal anything hidden in text
//!
//! Unhide scans arbitrary text for hidden-Unicode steganography and decodes
//! the payloads it finds.
//!
//! ## Overview
//!
//! Several Unicode mechanisms can smuggle invisible content through plain
//! text:
//! - **Unicode Tags** (U+E0000-U+E007F): one invisible codepoint per ASCII
//!   byte
//! - **Sneaky bits**: two invisible math operators (U+2062, U+2064) acting
//!   as binary 0/1, eight markers per byte
//! - **Variation selectors** (VS1-VS256): 256 selectors usable as an
//!   arbitrary byte channel
//! - **Invisible characters**: zero-width spaces and joiners, directional
//!   overrides, control codes
//!
//! The scanner classifies every scalar value, decodes the decodable
//! channels (recursively - hidden content can wrap more hidden content),
//! and returns a position-annotated token tree plus summary statistics.
//!
//! ## Security Model
//!
//! - **Never fails**: adversarial input produces tokens, not errors. An
//!   undecodable payload is reported in-band (`is_decoded: false`), never
//!   raised.
//! - **Pure and synchronous**: no I/O, no shared state; safe to call from
//!   any number of threads on different inputs.
//! - **Bounded recursion**: decode depth is capped at [`MAX_DECODE_DEPTH`]
//!   even though each decoded layer is already smaller than its wrapping.
//!
//! ## Example Usage
//!
//! ```rust
//! use unhide::{aggregate, scan, Token};
//!
//! // A zero-width space hides between the letters
//! let tokens = scan("A\u{200B}B");
//! assert_eq!(tokens.len(), 3);
//!
//! match &tokens[1] {
//!     Token::Invisible { name, .. } => {
//!         assert_eq!(name, "Zero Width Space (U+200B)");
//!     }
//!     _ => unreachable!(),
//! }
//!
//! let counts = aggregate(&tokens);
//! assert_eq!(counts.total_hidden, 1);
//! assert_eq!(counts.invisible_others, 1);
//! ```
//!
//! ## Modules
//!
//! - [`classify`]: codepoint classification (ranges and the named table)
//! - [`scanner`]: the tokenizer walking text scalar by scalar
//! - [`decode`]: payload decoders for tags, sneaky bits, and selectors
//! - [`encode`]: the encoding counterparts (used by the CLI and tests)
//! - [`stats`]: summary counts and the flat detected-character report
//! - [`token`]: the token tree data model

/// Invisible marker standing for binary 0 (Invisible Times).
///
/// The marker pair is a protocol constant: both sides of the channel must
/// agree on it, but nothing structural depends on these exact codepoints.
pub const SNEAKY_BIT_ZERO: char = '\u{2062}';

/// Invisible marker standing for binary 1 (Invisible Plus).
pub const SNEAKY_BIT_ONE: char = '\u{2064}';

/// Hard cap on nested decode layers.
///
/// Termination already follows from payloads shrinking layer over layer;
/// the cap makes it explicit. A payload at the cap is reported undecoded.
pub const MAX_DECODE_DEPTH: usize = 8;

pub mod classify;
pub mod decode;
pub mod encode;
pub mod scanner;
pub mod stats;
pub mod token;

// Re-export commonly used items at the crate root
pub use classify::{classify, CharClass};
pub use encode::{encode_sneaky_bits, encode_tags, variation_selector, EncodeError};
pub use scanner::scan;
pub use stats::{aggregate, detected_chars, DetectedChar, HiddenCounts};
pub use token::Token;
