//! Differential tests: random operation sequences applied to a
//! `GrowableArray` and to a `Vec`-backed reference model must agree on every
//! outcome, on contents and on capacity, with invariants holding throughout.

use growvec::GrowableArray;
use growvec_test_utils::model::{self, ops_strategy, Model, Op, Outcome};
use growvec_test_utils::{assert_invariants, LiveCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn array_matches_model(ops in ops_strategy(64)) {
        let mut array = GrowableArray::new();
        let mut reference = Model::new();
        for op in &ops {
            let got = model::apply(&mut array, op);
            let want = reference.apply(op);
            prop_assert_eq!(got, want, "op {:?}", op);
            prop_assert_eq!(array.as_slice(), reference.values());
            prop_assert_eq!(array.capacity(), reference.capacity());
            assert_invariants(&array);
        }
    }

    #[test]
    fn failed_ops_do_not_mutate(
        start in proptest::collection::vec(any::<i32>(), 0..16),
        offset in 1i64..8,
    ) {
        let mut array = GrowableArray::from(start.clone());
        let len = start.len() as i64;
        let capacity = array.capacity();
        for op in [
            Op::At(-offset),
            Op::At(len + offset - 1),
            Op::Insert(-offset, 0),
            Op::Insert(len + offset, 0),
            Op::Erase(-offset),
            Op::Erase(len + offset - 1),
        ] {
            prop_assert_eq!(model::apply(&mut array, &op), Outcome::OutOfRange);
            prop_assert_eq!(array.as_slice(), start.as_slice());
            prop_assert_eq!(array.capacity(), capacity);
        }
    }

    #[test]
    fn insert_erase_round_trip_at_every_index(
        start in proptest::collection::vec(any::<i32>(), 0..16),
        x in any::<i32>(),
    ) {
        for i in 0..=start.len() {
            let mut array = GrowableArray::from(start.clone());
            array.insert(i, x).unwrap();
            prop_assert_eq!(array.erase(i), Ok(x));
            prop_assert_eq!(array.as_slice(), start.as_slice());
        }
    }

    #[test]
    fn every_element_dropped_exactly_once(ops in ops_strategy(48)) {
        let counter = LiveCounter::new();
        {
            let mut array = GrowableArray::new();
            for op in &ops {
                apply_tracked(&mut array, op, &counter);
                prop_assert_eq!(counter.live(), array.len());
            }
        }
        prop_assert_eq!(counter.live(), 0);
    }
}

/// Mirror of `model::apply` over tracked elements. Values returned by the
/// array are dropped immediately so `live` always equals the array length.
fn apply_tracked(
    array: &mut GrowableArray<growvec_test_utils::Tracked<i32>>,
    op: &Op,
    counter: &LiveCounter,
) {
    match op {
        Op::PushBack(v) => array.push_back(counter.track(*v)),
        Op::PopBack => drop(array.pop_back()),
        Op::Insert(i, v) => {
            // A rejected insert drops the value it was given.
            let _ = array.insert(*i, counter.track(*v));
        }
        Op::Erase(i) => drop(array.erase(*i)),
        Op::At(i) => {
            let _ = array.at(*i);
        }
        Op::Front => {
            let _ = array.front();
        }
        Op::Back => {
            let _ = array.back();
        }
        Op::Clear => array.clear(),
        Op::Resize(n, v) => array.resize(*n, counter.track(*v)),
        Op::Reserve(n) => array.reserve(*n),
        Op::Assign(values) => {
            let fresh: Vec<_> = values.iter().map(|v| counter.track(*v)).collect();
            array.assign(fresh);
        }
    }
}
