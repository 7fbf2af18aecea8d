#![allow(missing_docs)]

use ordlabel::{
    LabelColumn,
    LabelEncoder,
    LabelEncoderOptions,
    LabelError,
    decoders::DecodeStrategy,
    vocab::VocabOrder,
};
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = VocabOrder> {
    prop_oneof![Just(VocabOrder::FirstSeen), Just(VocabOrder::Sorted)]
}

fn decode_strategy() -> impl Strategy<Value = DecodeStrategy> {
    prop_oneof![
        Just(DecodeStrategy::Positional),
        Just(DecodeStrategy::Substitution)
    ]
}

proptest! {
    #[test]
    fn round_trip_non_numeric_labels(
        labels in prop::collection::vec("[a-z]{1,6}", 0..64),
        order in order_strategy(),
        decode in decode_strategy(),
    ) {
        let options = LabelEncoderOptions::default().with_order(order).with_decode(decode);
        let mut encoder: LabelEncoder = LabelEncoder::with_options(options);

        let y: LabelColumn = labels.clone().into();
        let codes = encoder.fit_transform(&y).unwrap();

        let n_classes = encoder.vocab().unwrap().len() as i32;
        prop_assert!(codes.iter().all(|&c| (0..n_classes).contains(&c)));
        prop_assert_eq!(encoder.transform(&y).unwrap(), codes.clone());
        prop_assert_eq!(encoder.inverse_transform(&codes).unwrap(), y);
    }

    #[test]
    fn round_trip_integer_labels(
        labels in prop::collection::vec(-1000_i64..1000, 0..64),
        order in order_strategy(),
        decode in decode_strategy(),
    ) {
        let options = LabelEncoderOptions::default().with_order(order).with_decode(decode);
        let mut encoder: LabelEncoder = LabelEncoder::with_options(options);

        let y: LabelColumn = labels.into();
        let codes = encoder.fit_transform(&y).unwrap();
        prop_assert_eq!(encoder.inverse_transform(&codes).unwrap(), y);
    }

    #[test]
    fn unseen_is_never_encoded(
        labels in prop::collection::vec("[a-m]{1,3}", 1..32),
        unseen in "[n-z]{1,3}",
    ) {
        let mut encoder: LabelEncoder = LabelEncoder::new();
        encoder.fit(&labels.clone().into()).unwrap();

        let mut queries = labels;
        queries.push(unseen.clone());

        match encoder.transform(&queries.into()) {
            Err(LabelError::UnseenLabel { count, first }) => {
                prop_assert_eq!(count, 1);
                prop_assert_eq!(first, unseen);
            }
            other => {
                prop_assert!(false, "expected UnseenLabel: {:?}", other);
            }
        }
    }
}
