//! # Rayon Utilities
//!
//! [`rayon`] powered parallel variants of the [`LabelEncoder`] operations.
//!
//! Results are identical to the serial operations; including the
//! all-or-nothing failure behavior.

use ::rayon::prelude::*;

use crate::column::{LabelColumn, cast_back, coerce};
use crate::decoders::{PositionalDecoder, code_index};
use crate::encoders::LabelEncoder;
use crate::encoders::label_encoder::check_unseen;
use crate::errors::LCResult;
use crate::types::CodeType;

impl<C: CodeType> LabelEncoder<C> {
    /// Parallel [`LabelEncoder::transform`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn par_transform(
        &self,
        y: &LabelColumn,
    ) -> LCResult<Vec<C>> {
        let vocab = self.fitted()?.vocab();
        let values = coerce(y);

        let codes: Vec<C> = values
            .par_iter()
            .map(|v| vocab.code_or_unseen(v))
            .collect();

        check_unseen(&values, codes)
    }

    /// Parallel [`LabelEncoder::inverse_transform`].
    ///
    /// Always decodes positionally.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn par_inverse_transform(
        &self,
        codes: &[C],
    ) -> LCResult<LabelColumn> {
        let fitted = self.fitted()?;
        let decoder = PositionalDecoder::new(fitted.vocab());
        let size = fitted.vocab().len();

        // Report the first bad code in input order, as the serial path does.
        if let Some(&bad) = codes
            .par_iter()
            .find_first(|&&code| code_index(code, size).is_err())
        {
            code_index(bad, size)?;
        }

        let keys: Vec<String> = codes
            .par_iter()
            .map(|&code| decoder.try_decode_one(code).map(str::to_string))
            .collect::<LCResult<Vec<_>>>()?;

        cast_back(keys, fitted.dtype())
    }
}
