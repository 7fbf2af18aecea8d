//! # Text Substitution Label Decoder
//!
//! Decodes a buffer of textual codes by replacing the text of each
//! distinct code with its key.
//!
//! Codes are visited from high to low, and an entry is rewritten at most
//! once. Entries that already hold a key are never matched again, so keys
//! which look like codes (``"10"``, ``"x0"``) decode exactly.
//! Prefer [`crate::decoders::PositionalDecoder`] unless the codes already
//! live in a text buffer.

use crate::decoders::label_decoder::{LabelDecoder, code_index};
use crate::errors::LCResult;
use crate::types::{CodeType, LCHashSet};
use crate::vocab::LabelVocab;

/// A descending-order text substitution [`LabelDecoder`].
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionDecoder<'a> {
    vocab: &'a LabelVocab,
}

impl<'a> SubstitutionDecoder<'a> {
    /// Build a [`SubstitutionDecoder`] over a vocabulary.
    pub fn new(vocab: &'a LabelVocab) -> Self {
        Self { vocab }
    }

    /// Replace codes in a text buffer, in place.
    ///
    /// Each buffer entry is the textual rendering of one code.
    /// All codes are range-checked before any entry is rewritten.
    ///
    /// ## Arguments
    /// * `buffer` - the text buffer.
    /// * `codes` - the distinct codes present in `buffer`.
    pub fn try_substitute<C: CodeType>(
        &self,
        buffer: &mut [String],
        codes: impl IntoIterator<Item = C>,
    ) -> LCResult<()> {
        let mut descending: Vec<C> = codes
            .into_iter()
            .collect::<LCHashSet<C>>()
            .into_iter()
            .collect();
        descending.sort_unstable_by(|a, b| b.cmp(a));

        let keys = self.vocab.keys();
        let mut replacements: Vec<(String, &str)> = Vec::with_capacity(descending.len());
        for code in descending {
            let key = keys[code_index(code, keys.len())?].as_str();
            replacements.push((code.to_string(), key));
        }

        let mut decoded = vec![false; buffer.len()];
        for (pattern, key) in replacements {
            for (text, done) in buffer.iter_mut().zip(decoded.iter_mut()) {
                if !*done && *text == pattern {
                    key.clone_into(text);
                    *done = true;
                }
            }
        }

        let pending = decoded.iter().filter(|&&done| !done).count();
        if pending > 0 {
            log::debug!("{pending} buffer entries matched no code");
        }

        Ok(())
    }
}

impl LabelDecoder for SubstitutionDecoder<'_> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn try_decode_to_keys<C: CodeType>(
        &self,
        codes: &[C],
    ) -> LCResult<Vec<String>> {
        let mut buffer: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        self.try_substitute(&mut buffer, codes.iter().copied())?;
        Ok(buffer)
    }
}
