//! # Ordinal Label Encoder

use core::marker::PhantomData;

use crate::column::{LabelColumn, LabelDType, coerce};
use crate::decoders::{DecodeStrategy, LabelDecoder, PositionalDecoder, SubstitutionDecoder};
use crate::encoders::{FittedLabels, LabelEncoderOptions};
use crate::errors::{LCResult, LabelError};
use crate::types::{CodeType, code_from_index, unseen_code};
use crate::vocab::LabelVocab;

/// Ordinal label encoder.
///
/// Maps a column of labels to dense codes in ``[0, n_classes)``,
/// and maps codes back to labels of the original dtype.
///
/// ## Example
///
/// ```rust
/// use ordlabel::{LabelColumn, LabelEncoder};
///
/// let mut encoder: LabelEncoder = LabelEncoder::new();
/// let codes = encoder.fit_transform(&vec!["a", "b", "c", "d"].into()).unwrap();
/// assert_eq!(codes, vec![0, 1, 2, 3]);
///
/// assert_eq!(encoder.transform(&vec!["c", "a"].into()).unwrap(), vec![2, 0]);
/// assert_eq!(
///     encoder.inverse_transform(&[2, 0]).unwrap(),
///     LabelColumn::from(vec!["c", "a"])
/// );
/// assert!(encoder.transform(&vec!["z"].into()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEncoder<C: CodeType = i32> {
    options: LabelEncoderOptions,

    /// `None` until the first successful fit.
    fitted: Option<FittedLabels>,

    _marker: PhantomData<C>,
}

impl<C: CodeType> Default for LabelEncoder<C> {
    fn default() -> Self {
        Self::with_options(LabelEncoderOptions::default())
    }
}

impl<C: CodeType> LabelEncoder<C> {
    /// Create an unfitted encoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unfitted encoder.
    pub fn with_options(options: LabelEncoderOptions) -> Self {
        Self {
            options,
            fitted: None,
            _marker: PhantomData,
        }
    }

    /// Create an encoder from previously fitted state.
    ///
    /// The configured order is taken from the fitted vocabulary.
    ///
    /// ## Returns
    /// [`LabelError::VocabSizeOverflow`] if the vocabulary does not fit `C`.
    pub fn from_fitted(
        fitted: FittedLabels,
        options: LabelEncoderOptions,
    ) -> LCResult<Self> {
        fitted.vocab().check_code_capacity::<C>()?;
        Ok(Self {
            options: options.with_order(fitted.vocab().order()),
            fitted: Some(fitted),
            _marker: PhantomData,
        })
    }

    /// The encoder options.
    pub fn options(&self) -> &LabelEncoderOptions {
        &self.options
    }

    /// Sets the decode strategy used by `inverse_transform`.
    ///
    /// This does not affect fitted state.
    pub fn set_decode(
        &mut self,
        decode: DecodeStrategy,
    ) {
        self.options.set_decode(decode);
    }

    /// Has this encoder been fit?
    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted state.
    ///
    /// ## Returns
    /// [`LabelError::NotFitted`] before the first successful fit.
    pub fn fitted(&self) -> LCResult<&FittedLabels> {
        self.fitted.as_ref().ok_or(LabelError::NotFitted)
    }

    /// The fitted vocabulary, if fit.
    pub fn vocab(&self) -> Option<&LabelVocab> {
        self.fitted.as_ref().map(FittedLabels::vocab)
    }

    /// The dtype of the fitted labels, if fit.
    pub fn original_dtype(&self) -> Option<LabelDType> {
        self.fitted.as_ref().map(FittedLabels::dtype)
    }

    /// The fitted classes, in code order, as the original dtype.
    pub fn classes(&self) -> LCResult<LabelColumn> {
        self.fitted()?.classes()
    }

    /// Release the fitted state.
    pub fn into_fitted(self) -> Option<FittedLabels> {
        self.fitted
    }

    /// Commit new fitted state; nothing changes on failure.
    fn commit(
        &mut self,
        vocab: LabelVocab,
        dtype: LabelDType,
    ) -> LCResult<()> {
        vocab.check_code_capacity::<C>()?;

        log::debug!(
            "fit {} classes of dtype {} ({:?} order)",
            vocab.len(),
            dtype,
            vocab.order()
        );

        self.fitted = Some(FittedLabels::new(vocab, dtype));
        Ok(())
    }

    /// Fit the encoder to a column of labels.
    ///
    /// Replaces any previous fit.
    ///
    /// ## Arguments
    /// * `y` - the labels; duplicates allowed, may be empty.
    ///
    /// ## Returns
    /// The encoder, for chaining.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fit(
        &mut self,
        y: &LabelColumn,
    ) -> LCResult<&mut Self> {
        let vocab = LabelVocab::from_values(&coerce(y), self.options.order);
        self.commit(vocab, y.dtype())?;
        Ok(self)
    }

    /// Fit the encoder, and return the codes of `y`.
    ///
    /// Equivalent to `fit(y)` followed by `transform(y)`; but the codes are
    /// produced by the vocabulary build pass, with no second lookup.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn fit_transform(
        &mut self,
        y: &LabelColumn,
    ) -> LCResult<Vec<C>> {
        let (vocab, indices) = LabelVocab::from_values_with_codes(&coerce(y), self.options.order);
        self.commit(vocab, y.dtype())?;

        // Capacity was checked on commit.
        Ok(indices
            .into_iter()
            .map(|index| code_from_index(index).unwrap_or_else(unseen_code))
            .collect())
    }

    /// Encode a column of labels against the fitted vocabulary.
    ///
    /// ## Returns
    /// * [`LabelError::NotFitted`] before the first fit.
    /// * [`LabelError::UnseenLabel`] if any label is not in the vocabulary;
    ///   no partial codes are returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn transform(
        &self,
        y: &LabelColumn,
    ) -> LCResult<Vec<C>> {
        let vocab = self.fitted()?.vocab();
        let values = coerce(y);
        let codes: Vec<C> = vocab.lookup_codes(&values);
        check_unseen(&values, codes)
    }

    /// Decode codes back to labels of the original dtype.
    ///
    /// ## Returns
    /// * [`LabelError::NotFitted`] before the first fit.
    /// * [`LabelError::CodeOutOfRange`] for any code outside ``[0, n_classes)``.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn inverse_transform(
        &self,
        codes: &[C],
    ) -> LCResult<LabelColumn> {
        let fitted = self.fitted()?;
        let vocab = fitted.vocab();

        match self.options.decode {
            DecodeStrategy::Positional => {
                PositionalDecoder::new(vocab).try_decode_to_column(codes, fitted.dtype())
            }
            DecodeStrategy::Substitution => {
                SubstitutionDecoder::new(vocab).try_decode_to_column(codes, fitted.dtype())
            }
        }
    }

    /// Decode an integer column back to labels of the original dtype.
    ///
    /// ## Returns
    /// * [`LabelError::NotFitted`] before the first fit.
    /// * [`LabelError::InvalidInput`] if `y` is not an integer column.
    /// * [`LabelError::CodeOutOfRange`] for any code outside ``[0, n_classes)``.
    pub fn inverse_transform_column(
        &self,
        y: &LabelColumn,
    ) -> LCResult<LabelColumn> {
        self.fitted()?;
        let codes: Vec<C> = y.to_codes()?;
        self.inverse_transform(&codes)
    }
}

/// Fail with [`LabelError::UnseenLabel`] if any code is the unseen sentinel.
pub(crate) fn check_unseen<C: CodeType>(
    values: &[String],
    codes: Vec<C>,
) -> LCResult<Vec<C>> {
    let unseen = unseen_code::<C>();

    let mut misses = codes.iter().zip(values).filter(|&(&code, _)| code == unseen);
    if let Some((_, first)) = misses.next() {
        return Err(LabelError::UnseenLabel {
            count: 1 + misses.count(),
            first: first.clone(),
        });
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoders::test_utils::FRUIT;
    use crate::types::{check_is_send, check_is_sync};
    use crate::vocab::VocabOrder;

    #[test]
    fn test_example_scenario() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&vec!["a", "b", "c", "d"].into()).unwrap();

        assert_eq!(encoder.transform(&vec!["c", "a"].into()).unwrap(), vec![2, 0]);
        assert_eq!(
            encoder.inverse_transform(&[2, 0]).unwrap(),
            LabelColumn::from(vec!["c", "a"])
        );
        assert!(matches!(
            encoder.transform(&vec!["z"].into()),
            Err(LabelError::UnseenLabel { count: 1, .. })
        ));
    }

    #[test]
    fn test_not_fitted() {
        let encoder: LabelEncoder = LabelEncoder::new();
        assert!(!encoder.is_fitted());
        assert_eq!(encoder.original_dtype(), None);

        assert!(matches!(
            encoder.transform(&vec!["a"].into()),
            Err(LabelError::NotFitted)
        ));
        assert!(matches!(
            encoder.inverse_transform(&[0]),
            Err(LabelError::NotFitted)
        ));
        assert!(matches!(
            encoder.inverse_transform_column(&vec!["a"].into()),
            Err(LabelError::NotFitted)
        ));
        assert!(matches!(encoder.classes(), Err(LabelError::NotFitted)));
    }

    #[test]
    fn test_fit_chaining() {
        let mut encoder: LabelEncoder<i64> = LabelEncoder::new();
        let codes = encoder
            .fit(&vec!["x", "y"].into())
            .unwrap()
            .transform(&vec!["y", "y", "x"].into())
            .unwrap();
        assert_eq!(codes, vec![1, 1, 0]);
    }

    #[test]
    fn test_unseen_reports_first_and_count() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&vec!["a", "b"].into()).unwrap();

        match encoder.transform(&vec!["a", "q", "b", "r", "q"].into()) {
            Err(LabelError::UnseenLabel { count, first }) => {
                assert_eq!(count, 3);
                assert_eq!(first, "q");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_fit_transform_matches_fit_then_transform() {
        let y: LabelColumn = vec!["d", "b", "d", "a", "c", "b"].into();

        for order in [VocabOrder::FirstSeen, VocabOrder::Sorted] {
            let options = LabelEncoderOptions::default().with_order(order);

            let mut fused: LabelEncoder = LabelEncoder::with_options(options);
            let fused_codes = fused.fit_transform(&y).unwrap();

            let mut split: LabelEncoder = LabelEncoder::with_options(options);
            let split_codes = split.fit(&y).unwrap().transform(&y).unwrap();

            assert_eq!(fused_codes, split_codes);
            assert_eq!(fused, split);
        }
    }

    #[test]
    fn test_sorted_order() {
        let mut encoder: LabelEncoder =
            LabelEncoder::with_options(LabelEncoderOptions::default().with_order(VocabOrder::Sorted));

        let codes = encoder.fit_transform(&vec!["pear", "apple", "fig"].into()).unwrap();
        assert_eq!(codes, vec![2, 0, 1]);
        assert_eq!(
            encoder.classes().unwrap(),
            LabelColumn::from(vec!["apple", "fig", "pear"])
        );
    }

    #[test]
    fn test_digit_collision_both_strategies() {
        for decode in [DecodeStrategy::Positional, DecodeStrategy::Substitution] {
            let mut encoder: LabelEncoder =
                LabelEncoder::with_options(LabelEncoderOptions::default().with_decode(decode));
            encoder.fit(&FRUIT.into()).unwrap();

            assert_eq!(
                encoder.inverse_transform(&[10, 1, 0]).unwrap(),
                LabelColumn::from(vec!["mango", "banana", "apple"])
            );
        }
    }

    #[test]
    fn test_dtype_preservation() {
        let y: LabelColumn = vec![10_i64, 20, 10, 30].into();

        for decode in [DecodeStrategy::Positional, DecodeStrategy::Substitution] {
            let mut encoder: LabelEncoder =
                LabelEncoder::with_options(LabelEncoderOptions::default().with_decode(decode));
            let codes = encoder.fit_transform(&y).unwrap();
            assert_eq!(codes, vec![0, 1, 0, 2]);
            assert_eq!(encoder.original_dtype(), Some(LabelDType::Int64));

            assert_eq!(encoder.inverse_transform(&codes).unwrap(), y);
            assert_eq!(encoder.transform(&vec![30_i64].into()).unwrap(), vec![2]);
        }
    }

    #[test]
    fn test_code_range() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&vec!["a", "b", "c"].into()).unwrap();

        assert!(matches!(
            encoder.inverse_transform(&[0, 3]),
            Err(LabelError::CodeOutOfRange { code: 3 })
        ));
        assert!(matches!(
            encoder.inverse_transform(&[-1]),
            Err(LabelError::CodeOutOfRange { code: -1 })
        ));
    }

    #[test]
    fn test_inverse_transform_column() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&vec!["a", "b"].into()).unwrap();

        assert_eq!(
            encoder
                .inverse_transform_column(&vec![1_u64, 0].into())
                .unwrap(),
            LabelColumn::from(vec!["b", "a"])
        );
        assert!(matches!(
            encoder.inverse_transform_column(&vec![1.0_f64].into()),
            Err(LabelError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_failed_fit_keeps_state() {
        let mut encoder: LabelEncoder<i8> = LabelEncoder::new();
        encoder.fit(&vec!["a", "b"].into()).unwrap();
        let before = encoder.clone();

        let wide: LabelColumn = (0..300_i64).collect::<Vec<_>>().into();
        assert!(matches!(
            encoder.fit(&wide),
            Err(LabelError::VocabSizeOverflow { size: 300 })
        ));
        assert!(matches!(
            encoder.fit_transform(&wide),
            Err(LabelError::VocabSizeOverflow { size: 300 })
        ));
        assert_eq!(encoder, before);
    }

    #[test]
    fn test_empty_fit() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        let codes = encoder.fit_transform(&Vec::<String>::new().into()).unwrap();

        assert!(codes.is_empty());
        assert!(encoder.is_fitted());
        assert!(encoder.vocab().unwrap().is_empty());
        assert!(encoder.transform(&vec!["a"].into()).is_err());
        assert!(encoder.inverse_transform(&[0]).is_err());
    }

    #[test]
    fn test_send_sync() {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&vec!["a"].into()).unwrap();
        check_is_send(&encoder);
        check_is_sync(&encoder);
    }
}
