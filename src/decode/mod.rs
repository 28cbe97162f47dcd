//! Payload decoders for the steganographic channels.
//!
//! This module provides:
//! - Unicode Tag runs to ASCII (`tags`) - cannot fail
//! - Sneaky-bit marker runs to UTF-8 (`bits`) - degrades to undecodable
//! - Variation selector labeling (`selectors`) - pure lookup

pub mod bits;
pub mod selectors;
pub mod tags;

pub use selectors::selector_label;
pub use tags::decode_tag_payload;

pub(crate) use bits::decode_bit_run;
pub(crate) use tags::decode_tag_run;
