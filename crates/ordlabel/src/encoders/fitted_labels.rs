//! # Fitted Encoder State

use crate::column::{LabelColumn, LabelDType, cast_back};
use crate::errors::LCResult;
use crate::vocab::LabelVocab;

/// The state produced by one `fit` call.
///
/// This is the vocabulary, and the dtype the labels had before coercion.
/// It is immutable; refitting replaces it whole.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "FittedLabelsData", into = "FittedLabelsData")
)]
pub struct FittedLabels {
    vocab: LabelVocab,
    dtype: LabelDType,
}

impl FittedLabels {
    /// Create fitted state from a vocabulary and original dtype.
    pub fn new(
        vocab: LabelVocab,
        dtype: LabelDType,
    ) -> Self {
        Self { vocab, dtype }
    }

    /// The fitted vocabulary.
    pub fn vocab(&self) -> &LabelVocab {
        &self.vocab
    }

    /// The dtype of the labels before string coercion.
    pub fn dtype(&self) -> LabelDType {
        self.dtype
    }

    /// The vocabulary keys, in code order, cast back to the original dtype.
    pub fn classes(&self) -> LCResult<LabelColumn> {
        cast_back(self.vocab.keys().to_vec(), self.dtype)
    }
}

/// The serialized form of [`FittedLabels`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FittedLabelsData {
    dtype: LabelDType,
    order: crate::vocab::VocabOrder,
    keys: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<FittedLabels> for FittedLabelsData {
    fn from(fitted: FittedLabels) -> Self {
        let order = fitted.vocab.order();
        Self {
            dtype: fitted.dtype,
            order,
            keys: fitted.vocab.keys().to_vec(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<FittedLabelsData> for FittedLabels {
    type Error = crate::errors::LabelError;

    fn try_from(data: FittedLabelsData) -> Result<Self, Self::Error> {
        let vocab = LabelVocab::from_keys(data.keys, data.order)?;
        let fitted = FittedLabels::new(vocab, data.dtype);

        // Every key must cast back to the recorded dtype.
        fitted.classes()?;

        Ok(fitted)
    }
}
