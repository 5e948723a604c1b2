//! Property-based checks of the iteration contract.

use proptest::prelude::*;
use recast_core::Caster;
use recast_value::ValueCaster;
use serde_json::{Value, json};

proptest! {
    /// A strategy that never fails maps the input one-to-one, in order.
    #[test]
    fn total_strategy_preserves_length_and_order(input in prop::collection::vec(any::<i64>(), 0..64)) {
        let to_int = ValueCaster::<i64>::one_argument();
        let values: Vec<Value> = input.iter().map(|n| json!(n)).collect();

        let cast: Vec<i64> = to_int.cast_iter(values).collect::<Result<_, _>>().unwrap();

        prop_assert_eq!(cast, input);
    }

    /// Without a handler, exactly the successful prefix is produced and the
    /// terminating failure points at the first failing element.
    #[test]
    fn unhandled_failure_yields_the_successful_prefix(
        prefix in prop::collection::vec(any::<i64>(), 0..16),
        suffix in prop::collection::vec(any::<i64>(), 0..16),
    ) {
        let to_int = ValueCaster::<i64>::one_argument();
        let mut values: Vec<Value> = prefix.iter().map(|n| json!(n)).collect();
        values.push(json!("not a number"));
        values.extend(suffix.iter().map(|n| json!(n)));

        let mut iter = to_int.cast_iter(values);
        let mut cast = Vec::new();
        let failure = loop {
            match iter.next() {
                Some(Ok(n)) => cast.push(n),
                Some(Err(failure)) => break failure,
                None => {
                    prop_assert!(false, "the failing element must surface");
                    unreachable!();
                }
            }
        };

        prop_assert_eq!(cast, prefix.clone());
        prop_assert_eq!(failure.index, prefix.len());
        prop_assert_eq!(failure.element, json!("not a number"));
        prop_assert!(iter.next().is_none());
    }

    /// With a handler, survivors keep their order and the handler sees each
    /// failing element exactly once, with its original index.
    #[test]
    fn handler_sees_each_failing_element_exactly_once(flags in prop::collection::vec(any::<bool>(), 0..64)) {
        let to_int = ValueCaster::<i64>::one_argument();
        let values: Vec<Value> = flags
            .iter()
            .enumerate()
            .map(|(i, ok)| if *ok { json!(i as i64) } else { json!(format!("bad-{i}")) })
            .collect();

        let mut seen = Vec::new();
        let cast: Vec<i64> = to_int
            .cast_iter_with(values, |element, index, _| seen.push((element, index)))
            .collect();

        let expected_cast: Vec<i64> = flags
            .iter()
            .enumerate()
            .filter(|(_, ok)| **ok)
            .map(|(i, _)| i as i64)
            .collect();
        let expected_seen: Vec<(Value, usize)> = flags
            .iter()
            .enumerate()
            .filter(|(_, ok)| !**ok)
            .map(|(i, _)| (json!(format!("bad-{i}")), i))
            .collect();

        prop_assert_eq!(cast, expected_cast);
        prop_assert_eq!(seen, expected_seen);
    }
}
