//! # Decode Strategy

/// Selects the [`crate::decoders::LabelDecoder`] used by `inverse_transform`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecodeStrategy {
    /// Direct index lookup; see [`crate::decoders::PositionalDecoder`].
    #[default]
    Positional,

    /// Descending-order text substitution; see [`crate::decoders::SubstitutionDecoder`].
    Substitution,
}
