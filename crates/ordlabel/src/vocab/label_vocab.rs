//! # Label Vocabulary ``{ String <-> code }``

use core::fmt::Debug;

use crate::errors::{LCResult, LabelError};
use crate::types::{CodeType, code_from_index, hash_map_with_capacity, unseen_code};
use crate::vocab::{KeyCodeMap, VocabOrder};

/// An ordered, deduplicated set of string keys.
///
/// The code of a key is its position in [`LabelVocab::keys`];
/// positions are fixed once the vocabulary is built.
#[derive(Default, Clone, PartialEq)]
pub struct LabelVocab {
    /// Keys in code order.
    keys: Vec<String>,

    /// Index from key to code.
    key_codes: KeyCodeMap,

    /// The ordering used to assign codes.
    order: VocabOrder,
}

impl Debug for LabelVocab {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("LabelVocab")
            .field("order", &self.order)
            .field("keys", &self.keys)
            .finish()
    }
}

/// Single-pass deduplication; appends the code of every value to `codes`, if given.
fn dedup_values(
    values: &[String],
    mut codes: Option<&mut Vec<usize>>,
) -> (Vec<String>, KeyCodeMap) {
    let mut keys: Vec<String> = Vec::new();
    let mut key_codes: KeyCodeMap = hash_map_with_capacity(values.len().min(1 << 16));

    for value in values {
        let code = match key_codes.get(value.as_str()) {
            Some(&code) => code,
            None => {
                let code = keys.len();
                keys.push(value.clone());
                key_codes.insert(value.clone(), code);
                code
            }
        };
        if let Some(codes) = codes.as_deref_mut() {
            codes.push(code);
        }
    }

    (keys, key_codes)
}

impl LabelVocab {
    /// Build a vocabulary from a sequence of values.
    ///
    /// ## Arguments
    /// * `values` - the coerced input values; duplicates allowed.
    /// * `order` - the code ordering.
    pub fn from_values(
        values: &[String],
        order: VocabOrder,
    ) -> Self {
        let (keys, key_codes) = dedup_values(values, None);
        Self::init_ordered(keys, key_codes, order, None)
    }

    /// Build a vocabulary, and the code of every input value, in one pass.
    ///
    /// The returned codes are positionally aligned with `values`.
    ///
    /// ## Arguments
    /// * `values` - the coerced input values; duplicates allowed.
    /// * `order` - the code ordering.
    pub fn from_values_with_codes(
        values: &[String],
        order: VocabOrder,
    ) -> (Self, Vec<usize>) {
        let mut codes = Vec::with_capacity(values.len());
        let (keys, key_codes) = dedup_values(values, Some(&mut codes));
        let vocab = Self::init_ordered(keys, key_codes, order, Some(&mut codes));
        (vocab, codes)
    }

    /// Rebuild a vocabulary from keys already in code order.
    ///
    /// ## Returns
    /// [`LabelError::VocabConflict`] if a key is repeated,
    /// or if `order` is [`VocabOrder::Sorted`] and the keys are not sorted.
    pub fn from_keys(
        keys: Vec<String>,
        order: VocabOrder,
    ) -> LCResult<Self> {
        let mut key_codes: KeyCodeMap = hash_map_with_capacity(keys.len());
        for (code, key) in keys.iter().enumerate() {
            if let Some(prev) = key_codes.insert(key.clone(), code) {
                return Err(LabelError::VocabConflict(format!(
                    "duplicate key {key:?} at codes {prev} and {code}"
                )));
            }
        }

        if order == VocabOrder::Sorted && !keys.is_sorted() {
            return Err(LabelError::VocabConflict(
                "sorted vocabulary keys are out of order".to_string(),
            ));
        }

        Ok(Self {
            keys,
            key_codes,
            order,
        })
    }

    /// Apply `order` to first-seen keys; remapping `codes` through the same permutation.
    fn init_ordered(
        mut keys: Vec<String>,
        mut key_codes: KeyCodeMap,
        order: VocabOrder,
        codes: Option<&mut Vec<usize>>,
    ) -> Self {
        if order == VocabOrder::Sorted {
            let mut perm: Vec<usize> = (0..keys.len()).collect();
            perm.sort_unstable_by(|&a, &b| keys[a].cmp(&keys[b]));

            // remap[first_seen_code] = sorted_code
            let mut remap = vec![0; keys.len()];
            for (sorted, &seen) in perm.iter().enumerate() {
                remap[seen] = sorted;
            }

            for code in key_codes.values_mut() {
                *code = remap[*code];
            }
            if let Some(codes) = codes {
                for code in codes.iter_mut() {
                    *code = remap[*code];
                }
            }

            let mut slots: Vec<Option<String>> = keys.into_iter().map(Some).collect();
            keys = perm
                .into_iter()
                .filter_map(|seen| slots[seen].take())
                .collect();
        }

        keys.shrink_to_fit();
        key_codes.shrink_to_fit();

        Self {
            keys,
            key_codes,
            order,
        }
    }

    /// The number of keys in the vocabulary.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The ordering used to assign codes.
    pub fn order(&self) -> VocabOrder {
        self.order
    }

    /// The keys, in code order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Iterate over ``(code, key)`` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keys.iter().map(String::as_str).enumerate()
    }

    /// Return the code for the key, if any.
    pub fn lookup_code(
        &self,
        key: &str,
    ) -> Option<usize> {
        self.key_codes.get(key).copied()
    }

    /// Return the key for the code, if any.
    pub fn lookup_key(
        &self,
        code: usize,
    ) -> Option<&str> {
        self.keys.get(code).map(String::as_str)
    }

    /// Look up the code of a value, or the unseen sentinel.
    #[inline]
    pub fn code_or_unseen<C: CodeType>(
        &self,
        value: &str,
    ) -> C {
        self.lookup_code(value)
            .and_then(code_from_index)
            .unwrap_or_else(unseen_code)
    }

    /// Look up the code of every value; unseen values map to the `-1` sentinel.
    pub fn lookup_codes<C: CodeType>(
        &self,
        values: &[String],
    ) -> Vec<C> {
        values.iter().map(|v| self.code_or_unseen(v)).collect()
    }

    /// Check that every code in this vocabulary is representable by `C`.
    ///
    /// ## Returns
    /// [`LabelError::VocabSizeOverflow`] if it is not.
    pub fn check_code_capacity<C: CodeType>(&self) -> LCResult<()> {
        match self.len().checked_sub(1) {
            Some(max_code) if code_from_index::<C>(max_code).is_none() => {
                Err(LabelError::VocabSizeOverflow { size: self.len() })
            }
            _ => Ok(()),
        }
    }
}
