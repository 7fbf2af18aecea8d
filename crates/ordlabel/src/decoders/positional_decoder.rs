//! # Positional ``{ code -> key }`` Label Decoder

use crate::decoders::label_decoder::{LabelDecoder, code_index};
use crate::errors::LCResult;
use crate::types::CodeType;
use crate::vocab::LabelVocab;

/// A direct index lookup [`LabelDecoder`].
///
/// Each code is decoded independently, so codes which are textual
/// prefixes of each other (``1`` and ``10``) cannot interfere.
#[derive(Debug, Clone, Copy)]
pub struct PositionalDecoder<'a> {
    vocab: &'a LabelVocab,
}

impl<'a> PositionalDecoder<'a> {
    /// Build a [`PositionalDecoder`] over a vocabulary.
    pub fn new(vocab: &'a LabelVocab) -> Self {
        Self { vocab }
    }

    /// Decode a single code.
    #[inline]
    pub fn try_decode_one<C: CodeType>(
        &self,
        code: C,
    ) -> LCResult<&'a str> {
        let keys = self.vocab.keys();
        Ok(keys[code_index(code, keys.len())?].as_str())
    }
}

impl LabelDecoder for PositionalDecoder<'_> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn try_decode_to_keys<C: CodeType>(
        &self,
        codes: &[C],
    ) -> LCResult<Vec<String>> {
        codes
            .iter()
            .map(|&code| self.try_decode_one(code).map(str::to_string))
            .collect()
    }
}
