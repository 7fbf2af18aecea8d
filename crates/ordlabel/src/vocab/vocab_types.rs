//! # Vocabulary Types

use crate::types::LCHashMap;

/// `{ String -> usize }` map, from key to vocabulary position.
///
/// ## Style Hints
/// Instance names should prefer `key_codes`, or `key_code_map`.
pub type KeyCodeMap = LCHashMap<String, usize>;

/// Vocabulary code ordering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VocabOrder {
    /// Codes are assigned in first-occurrence order.
    #[default]
    FirstSeen,

    /// Codes are assigned in lexicographic order of the string keys.
    ///
    /// This matches category dictionaries which keep their keys sorted.
    Sorted,
}
