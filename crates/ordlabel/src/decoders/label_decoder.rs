//! # Label Decoder Trait

use crate::column::{LabelColumn, LabelDType, cast_back};
use crate::errors::{LCResult, LabelError};
use crate::types::CodeType;

/// Validate a code against a vocabulary size.
///
/// ## Returns
/// The code as a vocabulary position,
/// or [`LabelError::CodeOutOfRange`] if it is outside ``[0, size)``.
#[inline]
pub fn code_index<C: CodeType>(
    code: C,
    size: usize,
) -> LCResult<usize> {
    match code.to_usize() {
        Some(index) if index < size => Ok(index),
        _ => Err(LabelError::CodeOutOfRange {
            code: code.to_i64().unwrap_or(i64::MIN),
        }),
    }
}

/// Trait for code-to-label decoders.
pub trait LabelDecoder: Send + Sync {
    /// Decodes codes into their string keys.
    ///
    /// ## Arguments
    /// * `codes` - A slice of codes to decode.
    ///
    /// ## Returns
    /// The keys, positionally aligned with `codes`;
    /// or [`LabelError::CodeOutOfRange`] on the first invalid code.
    fn try_decode_to_keys<C: CodeType>(
        &self,
        codes: &[C],
    ) -> LCResult<Vec<String>>;

    /// Decodes codes into a column of `dtype`.
    ///
    /// ## Arguments
    /// * `codes` - A slice of codes to decode.
    /// * `dtype` - The element type of the result.
    fn try_decode_to_column<C: CodeType>(
        &self,
        codes: &[C],
        dtype: LabelDType,
    ) -> LCResult<LabelColumn> {
        cast_back(self.try_decode_to_keys(codes)?, dtype)
    }
}
