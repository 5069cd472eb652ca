//! Construction options for [`GrowableArray`].
//!
//! An array is built from an ordered list of [`ArrayOption`]s. Each option,
//! when applied, fully determines size, capacity and contents, so the last
//! option that touches the array wins. Counts accept any primitive integer
//! and negative counts clamp to zero; construction never fails.
//!
//! ```
//! use growvec::options::{with_capacity, with_values};
//! use growvec::GrowableArray;
//!
//! let arr = GrowableArray::build([with_capacity(16), with_values([1, 2, 3])]);
//! assert_eq!(arr.len(), 3);
//! assert_eq!(arr.capacity(), 3);
//! ```

use crate::array::GrowableArray;
use crate::position::Position;

/// One step of the construction protocol.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayOption<T> {
    /// Empty, with exactly this many slots allocated.
    WithCapacity(usize),
    /// Exactly these values, capacity equal to their count.
    WithValues(Vec<T>),
    /// `n` copies of a default value, capacity `n`.
    WithSize(usize, T),
    /// `n` copies of a value, capacity `n`. Same effect as
    /// [`WithSize`](Self::WithSize).
    WithFill(usize, T),
    /// A copy of a slice, capacity equal to its length.
    FromSlice(Vec<T>),
}

impl<T: Clone> ArrayOption<T> {
    /// Replace `array`'s storage with the state this option describes.
    pub(crate) fn apply(self, array: &mut GrowableArray<T>) {
        *array = match self {
            Self::WithCapacity(capacity) => GrowableArray::with_exact_capacity(capacity),
            Self::WithValues(values) | Self::FromSlice(values) => GrowableArray::from(values),
            Self::WithSize(count, value) | Self::WithFill(count, value) => {
                let mut filled = GrowableArray::with_exact_capacity(count);
                filled.resize(count, value);
                filled
            }
        };
    }
}

/// Empty array with `capacity` slots. Negative capacity clamps to zero.
pub fn with_capacity<T>(capacity: impl Position) -> ArrayOption<T> {
    ArrayOption::WithCapacity(capacity.clamped())
}

/// Array holding `values` in order.
pub fn with_values<T>(values: impl IntoIterator<Item = T>) -> ArrayOption<T> {
    ArrayOption::WithValues(values.into_iter().collect())
}

/// Array of `size` copies of `default`. Negative size clamps to zero.
pub fn with_size<T>(size: impl Position, default: T) -> ArrayOption<T> {
    ArrayOption::WithSize(size.clamped(), default)
}

/// Array of `count` copies of `value`. Negative count clamps to zero.
pub fn with_fill<T>(count: impl Position, value: T) -> ArrayOption<T> {
    ArrayOption::WithFill(count.clamped(), value)
}

/// Array holding a copy of `slice`.
pub fn from_slice<T: Clone>(slice: &[T]) -> ArrayOption<T> {
    ArrayOption::FromSlice(slice.to_vec())
}

/// Chainable form of the construction protocol.
///
/// Records options in call order and applies them in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ArrayBuilder<T> {
    options: Vec<ArrayOption<T>>,
}

impl<T> ArrayBuilder<T> {
    /// An empty builder. Building it yields an empty array.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Append an already constructed option.
    pub fn option(mut self, option: ArrayOption<T>) -> Self {
        self.options.push(option);
        self
    }

    /// See [`with_capacity`].
    pub fn capacity(self, capacity: impl Position) -> Self {
        self.option(with_capacity(capacity))
    }

    /// See [`with_values`].
    pub fn values(self, values: impl IntoIterator<Item = T>) -> Self {
        self.option(with_values(values))
    }

    /// See [`with_size`].
    pub fn size(self, size: impl Position, default: T) -> Self {
        self.option(with_size(size, default))
    }

    /// See [`with_fill`].
    pub fn fill(self, count: impl Position, value: T) -> Self {
        self.option(with_fill(count, value))
    }

    /// See [`from_slice`].
    pub fn slice(self, slice: &[T]) -> Self
    where
        T: Clone,
    {
        self.option(from_slice(slice))
    }

    /// Apply the recorded options in order.
    pub fn build(self) -> GrowableArray<T>
    where
        T: Clone,
    {
        GrowableArray::build(self.options)
    }
}

impl<T> Default for ArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a `GrowableArray<i64>`.
pub fn new_int(options: impl IntoIterator<Item = ArrayOption<i64>>) -> GrowableArray<i64> {
    GrowableArray::build(options)
}

/// Build a `GrowableArray<String>`.
pub fn new_string(options: impl IntoIterator<Item = ArrayOption<String>>) -> GrowableArray<String> {
    GrowableArray::build(options)
}

/// Build a `GrowableArray<f64>`.
pub fn new_float(options: impl IntoIterator<Item = ArrayOption<f64>>) -> GrowableArray<f64> {
    GrowableArray::build(options)
}
