//! # Common Decoder Unit Tests

use crate::errors::{LCResult, LabelError};
use crate::vocab::{LabelVocab, VocabOrder};

/// Twelve labels; so codes span both one and two digits.
pub const FRUIT: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elder",
    "fig",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
    "mango",
    "nectarine",
];

/// Build a first-seen vocabulary over [`FRUIT`].
pub fn build_fruit_vocab() -> LabelVocab {
    let values: Vec<String> = FRUIT.iter().map(|s| s.to_string()).collect();
    LabelVocab::from_values(&values, VocabOrder::FirstSeen)
}

/// Common unittest for decoder implementations.
///
/// `decode` must build a decoder over the given vocab and decode the codes.
pub fn common_decoder_unit_test<F>(decode: F)
where
    F: Fn(&LabelVocab, &[i32]) -> LCResult<Vec<String>>,
{
    let vocab = build_fruit_vocab();

    assert!(decode(&vocab, &[]).unwrap().is_empty());

    // Mixed one and two digit codes.
    assert_eq!(
        decode(&vocab, &[10, 1, 0]).unwrap(),
        vec!["mango", "banana", "apple"]
    );
    assert_eq!(
        decode(&vocab, &[11, 1, 1, 10, 0, 11]).unwrap(),
        vec!["nectarine", "banana", "banana", "mango", "apple", "nectarine"]
    );

    let samples: Vec<String> = ["kiwi", "fig", "kiwi", "nectarine", "apple"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let codes: Vec<i32> = vocab.lookup_codes(&samples);
    assert_eq!(decode(&vocab, &codes).unwrap(), samples);

    assert!(matches!(
        decode(&vocab, &[0, 12]),
        Err(LabelError::CodeOutOfRange { code: 12 })
    ));
    assert!(matches!(
        decode(&vocab, &[-1, 3]),
        Err(LabelError::CodeOutOfRange { code: -1 })
    ));
}
