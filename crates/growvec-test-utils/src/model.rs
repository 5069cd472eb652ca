//! Reference model for differential testing.
//!
//! [`Op`] names every public mutation and checked accessor. [`Model`] applies
//! an `Op` to a plain `Vec` while computing the capacity the growth rules
//! dictate, and [`apply`] applies the same `Op` to a real
//! [`GrowableArray`]. Tests run both and compare contents, capacity and
//! [`Outcome`] after every step.

use growvec::{ArrayError, GrowableArray};
use proptest::prelude::*;

/// One call against the array. Indices and counts are signed so negative
/// arguments are exercised.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    PushBack(i32),
    PopBack,
    Insert(i64, i32),
    Erase(i64),
    At(i64),
    Front,
    Back,
    Clear,
    Resize(i64, i32),
    Reserve(i64),
    Assign(Vec<i32>),
}

/// Observable result of an [`Op`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Value(i32),
    OutOfRange,
    Empty,
}

impl Outcome {
    fn from_error(err: &ArrayError) -> Self {
        match err {
            ArrayError::IndexOutOfRange { .. } => Self::OutOfRange,
            ArrayError::ContainerEmpty => Self::Empty,
        }
    }

    fn of_value(result: Result<i32, ArrayError>) -> Self {
        match result {
            Ok(v) => Self::Value(v),
            Err(e) => Self::from_error(&e),
        }
    }

    fn of_unit(result: Result<(), ArrayError>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(e) => Self::from_error(&e),
        }
    }
}

/// Apply `op` to a real array.
pub fn apply(array: &mut GrowableArray<i32>, op: &Op) -> Outcome {
    match op {
        Op::PushBack(v) => {
            array.push_back(*v);
            Outcome::Done
        }
        Op::PopBack => Outcome::of_value(array.pop_back()),
        Op::Insert(i, v) => Outcome::of_unit(array.insert(*i, *v)),
        Op::Erase(i) => Outcome::of_value(array.erase(*i)),
        Op::At(i) => Outcome::of_value(array.at(*i).copied()),
        Op::Front => Outcome::of_value(array.front().copied()),
        Op::Back => Outcome::of_value(array.back().copied()),
        Op::Clear => {
            array.clear();
            Outcome::Done
        }
        Op::Resize(n, fill) => {
            array.resize(*n, *fill);
            Outcome::Done
        }
        Op::Reserve(n) => {
            array.reserve(*n);
            Outcome::Done
        }
        Op::Assign(values) => {
            array.assign(values.iter().copied());
            Outcome::Done
        }
    }
}

/// `Vec`-backed reference with independently computed capacity.
#[derive(Clone, Debug, Default)]
pub struct Model {
    values: Vec<i32>,
    capacity: usize,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model matching an array built from `values` (capacity == len).
    pub fn from_values(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            capacity: values.len(),
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn grow_if_full(&mut self) {
        if self.values.len() == self.capacity {
            self.capacity = if self.capacity == 0 { 1 } else { self.capacity * 2 };
        }
    }

    fn reserve(&mut self, n: i64) {
        if let Ok(n) = usize::try_from(n) {
            self.capacity = self.capacity.max(n);
        }
    }

    fn index(&self, i: i64, inclusive: bool) -> Option<usize> {
        let i = usize::try_from(i).ok()?;
        let ok = if inclusive {
            i <= self.values.len()
        } else {
            i < self.values.len()
        };
        ok.then_some(i)
    }

    pub fn apply(&mut self, op: &Op) -> Outcome {
        match op {
            Op::PushBack(v) => {
                self.grow_if_full();
                self.values.push(*v);
                Outcome::Done
            }
            Op::PopBack => self.values.pop().map_or(Outcome::Empty, Outcome::Value),
            Op::Insert(i, v) => match self.index(*i, true) {
                Some(i) => {
                    self.grow_if_full();
                    self.values.insert(i, *v);
                    Outcome::Done
                }
                None => Outcome::OutOfRange,
            },
            Op::Erase(i) => match self.index(*i, false) {
                Some(i) => Outcome::Value(self.values.remove(i)),
                None => Outcome::OutOfRange,
            },
            Op::At(i) => match self.index(*i, false) {
                Some(i) => Outcome::Value(self.values[i]),
                None => Outcome::OutOfRange,
            },
            Op::Front => self.values.first().copied().map_or(Outcome::Empty, Outcome::Value),
            Op::Back => self.values.last().copied().map_or(Outcome::Empty, Outcome::Value),
            Op::Clear => {
                self.values.clear();
                Outcome::Done
            }
            Op::Resize(n, fill) => {
                if let Ok(n) = usize::try_from(*n) {
                    self.reserve(n as i64);
                    self.values.resize(n, *fill);
                }
                Outcome::Done
            }
            Op::Reserve(n) => {
                self.reserve(*n);
                Outcome::Done
            }
            Op::Assign(values) => {
                self.reserve(values.len() as i64);
                self.values.clone_from(values);
                Outcome::Done
            }
        }
    }
}

/// Strategy over single operations, with indices and counts reaching a
/// little below zero and past typical lengths so both bounds are hit.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    let value = -1000i32..1000;
    prop_oneof![
        4 => value.clone().prop_map(Op::PushBack),
        2 => Just(Op::PopBack),
        2 => (-2i64..24, value.clone()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (-2i64..24).prop_map(Op::Erase),
        1 => (-2i64..24).prop_map(Op::At),
        1 => Just(Op::Front),
        1 => Just(Op::Back),
        1 => Just(Op::Clear),
        1 => (-2i64..32, value.clone()).prop_map(|(n, v)| Op::Resize(n, v)),
        1 => (-2i64..64).prop_map(Op::Reserve),
        1 => proptest::collection::vec(value, 0..12).prop_map(Op::Assign),
    ]
}

/// Strategy over operation sequences of up to `max_len` steps.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 0..max_len)
}
