//! # Vocabulary
//!
//! A [`LabelVocab`] is the fixed, deduplicated, ordered set of string keys
//! built by one `fit` call. A key's code is its position; codes never change
//! once the vocabulary is built.
//!
//! Code order is selected by [`VocabOrder`].

pub mod label_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use label_vocab::LabelVocab;
#[doc(inline)]
pub use vocab_types::{KeyCodeMap, VocabOrder};
