//! # Label Decoders
//!
//! Decoders map codes back to the string keys of a [`crate::vocab::LabelVocab`]:
//!
//! * [`PositionalDecoder`] - direct index lookup; the default.
//! * [`SubstitutionDecoder`] - text buffer substitution,
//!   for codes which already live in a text buffer.
//!
//! ## Example
//!
//! ```rust
//! use ordlabel::decoders::{LabelDecoder, PositionalDecoder};
//! use ordlabel::vocab::{LabelVocab, VocabOrder};
//!
//! let values: Vec<String> = ["b", "a", "b"].iter().map(|s| s.to_string()).collect();
//! let vocab = LabelVocab::from_values(&values, VocabOrder::FirstSeen);
//!
//! let decoder = PositionalDecoder::new(&vocab);
//! assert_eq!(decoder.try_decode_to_keys(&[1_i32, 0]).unwrap(), vec!["a", "b"]);
//! ```

pub mod decode_strategy;
pub mod label_decoder;
pub mod positional_decoder;
pub mod substitution_decoder;

#[cfg(test)]
pub(crate) mod test_utils;

pub use decode_strategy::DecodeStrategy;
pub use label_decoder::{LabelDecoder, code_index};
pub use positional_decoder::PositionalDecoder;
pub use substitution_decoder::SubstitutionDecoder;
