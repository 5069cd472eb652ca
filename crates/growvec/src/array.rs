//! The [`GrowableArray`] container.
//!
//! Storage is a [`RawBuffer`] whose slot count is the capacity and whose
//! initialised prefix is the logical contents. Every capacity increase goes
//! through [`GrowableArray::reserve`]; automatic growth follows the doubling
//! rule in [`GrowableArray::next_capacity`].

use std::hash::{Hash, Hasher};
use std::ops::Range;

use log::trace;

use crate::error::ArrayError;
use crate::options::{ArrayBuilder, ArrayOption};
use crate::position::Position;
use crate::raw::RawBuffer;

/// A contiguous, index-addressable, resizable sequence.
///
/// Tracks logical size and allocated capacity separately:
///
/// - `0 <= len() <= capacity()` at all times.
/// - Only elements in `[0, len())` are observable.
/// - Capacity only grows, through [`reserve`](Self::reserve). It is never
///   released by mutation; [`clear`](Self::clear) keeps it for reuse.
///
/// Positional operations return [`ArrayError`] rather than panicking, and
/// leave the array unchanged when they fail.
pub struct GrowableArray<T> {
    pub(crate) buf: RawBuffer<T>,
}

impl<T> GrowableArray<T> {
    /// Capacity chosen when growing an array that has none.
    pub const INITIAL_GROWTH: usize = 1;

    /// Multiplier applied to a non-zero capacity on automatic growth.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create an empty array with zero capacity. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: RawBuffer::with_capacity(0),
        }
    }

    /// Build an array by applying `options` in order.
    ///
    /// Every option fully determines size, capacity and contents, so a later
    /// option replaces whatever an earlier one set up: `[with_capacity(8),
    /// with_values([1, 2])]` yields size 2 and capacity 2, not capacity 8.
    /// With no options the result is empty with zero capacity.
    ///
    /// ```
    /// use growvec::{options, GrowableArray};
    ///
    /// let arr = GrowableArray::build([options::with_fill(3, 'x')]);
    /// assert_eq!(arr.as_slice(), &['x', 'x', 'x']);
    /// ```
    pub fn build<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ArrayOption<T>>,
        T: Clone,
    {
        let mut array = Self::new();
        for option in options {
            option.apply(&mut array);
        }
        array
    }

    /// Start a chainable [`ArrayBuilder`].
    pub fn builder() -> ArrayBuilder<T> {
        ArrayBuilder::new()
    }

    /// Create an empty array with exactly `capacity` slots allocated.
    pub(crate) fn with_exact_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
        }
    }

    // ── Introspection ──────────────────────────────────────────────

    /// Number of elements present.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Number of slots allocated.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First index of the occupied range. Always `0`.
    #[inline]
    pub fn begin(&self) -> usize {
        0
    }

    /// One past the last occupied index. Equal to [`len`](Self::len).
    #[inline]
    pub fn end(&self) -> usize {
        self.len()
    }

    /// The occupied index range `begin()..end()`.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.begin()..self.end()
    }

    // ── Capacity ───────────────────────────────────────────────────

    /// The capacity automatic growth would move to from the current one.
    ///
    /// `0 -> 1`, otherwise doubles. Saturates at `usize::MAX`.
    #[inline]
    pub fn next_capacity(&self) -> usize {
        match self.capacity() {
            0 => Self::INITIAL_GROWTH,
            capacity => capacity.saturating_mul(Self::GROWTH_FACTOR),
        }
    }

    /// Grow capacity to exactly `capacity` slots if it is currently smaller.
    ///
    /// Existing elements keep their order. A request at or below the current
    /// capacity, including a negative one, does nothing.
    pub fn reserve(&mut self, capacity: impl Position) {
        let requested = capacity.clamped();
        if requested <= self.capacity() {
            return;
        }
        trace!(
            "reallocating {} -> {} slots, moving {} elements",
            self.capacity(),
            requested,
            self.len()
        );
        self.buf.relocate(requested);
    }

    fn grow(&mut self) {
        let next = self.next_capacity();
        self.reserve(next);
    }

    /// Append into a slot known to be vacant.
    fn push_within_capacity(&mut self, value: T) {
        if self.buf.push_within_capacity(value).is_err() {
            capacity_overflow();
        }
    }

    fn out_of_range(&self, index: impl Position) -> ArrayError {
        ArrayError::IndexOutOfRange {
            index: index.signed(),
            len: self.len(),
        }
    }

    // ── Element access ─────────────────────────────────────────────

    /// The element at `index`.
    ///
    /// Fails with [`ArrayError::IndexOutOfRange`] unless `0 <= index < len()`.
    pub fn at(&self, index: impl Position) -> Result<&T, ArrayError> {
        index
            .to_index()
            .and_then(|i| self.as_slice().get(i))
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Mutable access to the element at `index`, with the same bound as [`at`](Self::at).
    pub fn at_mut(&mut self, index: impl Position) -> Result<&mut T, ArrayError> {
        let err = self.out_of_range(index);
        index
            .to_index()
            .and_then(|i| self.as_mut_slice().get_mut(i))
            .ok_or(err)
    }

    /// The element at `index`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: impl Position) -> Option<&T> {
        self.at(index).ok()
    }

    /// Mutable form of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, index: impl Position) -> Option<&mut T> {
        self.at_mut(index).ok()
    }

    /// The first element, or [`ArrayError::ContainerEmpty`].
    pub fn front(&self) -> Result<&T, ArrayError> {
        self.as_slice().first().ok_or(ArrayError::ContainerEmpty)
    }

    /// The last element, or [`ArrayError::ContainerEmpty`].
    pub fn back(&self) -> Result<&T, ArrayError> {
        self.as_slice().last().ok_or(ArrayError::ContainerEmpty)
    }

    /// Mutable form of [`front`](Self::front).
    pub fn front_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ArrayError::ContainerEmpty)
    }

    /// Mutable form of [`back`](Self::back).
    pub fn back_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ArrayError::ContainerEmpty)
    }

    /// Read-only view of the occupied range. Never exposes spare capacity.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Mutable view of the occupied range.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Append `value`, growing first if the array is full.
    ///
    /// # Panics
    ///
    /// Panics only if capacity would exceed `usize::MAX`.
    pub fn push_back(&mut self, value: T) {
        if self.len() == self.capacity() {
            self.grow();
        }
        self.push_within_capacity(value);
    }

    /// Remove and return the last element. Capacity is unchanged.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        self.buf.pop().ok_or(ArrayError::ContainerEmpty)
    }

    /// Insert `value` at `index`, shifting `[index, len())` one slot right.
    ///
    /// Valid for `0 <= index <= len()`; inserting at `len()` appends.
    pub fn insert(&mut self, index: impl Position, value: T) -> Result<(), ArrayError> {
        let len = self.len();
        let at = index
            .to_index()
            .filter(|&i| i <= len)
            .ok_or_else(|| self.out_of_range(index))?;

        if len == self.capacity() {
            self.grow();
        }
        self.push_within_capacity(value);

        // Walk the new value down from `len` to `at`, highest index first.
        let slots = self.as_mut_slice();
        for i in (at + 1..=len).rev() {
            slots.swap(i, i - 1);
        }
        Ok(())
    }

    /// Remove and return the element at `index`, shifting `(index, len())`
    /// one slot left.
    ///
    /// Valid for `0 <= index < len()`.
    pub fn erase(&mut self, index: impl Position) -> Result<T, ArrayError> {
        let len = self.len();
        let at = index
            .to_index()
            .filter(|&i| i < len)
            .ok_or_else(|| self.out_of_range(index))?;

        let slots = self.as_mut_slice();
        for i in at..len - 1 {
            slots.swap(i, i + 1);
        }
        self.buf.pop().ok_or(ArrayError::ContainerEmpty)
    }

    /// Drop every element. Capacity is retained.
    pub fn clear(&mut self) {
        self.buf.truncate(0);
    }

    /// Set the size to `new_size`.
    ///
    /// Growing fills the new slots with clones of `fill`, reserving exactly
    /// `new_size` slots first if needed. Shrinking drops the tail. A negative
    /// `new_size` does nothing.
    pub fn resize(&mut self, new_size: impl Position, fill: T)
    where
        T: Clone,
    {
        let Some(new_len) = new_size.to_index() else {
            return;
        };
        if new_len <= self.len() {
            self.buf.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        while self.len() < new_len {
            self.push_within_capacity(fill.clone());
        }
    }

    /// Replace the contents with `values`.
    ///
    /// Existing capacity is reused when it can hold every value; otherwise
    /// exactly `values.len()` slots are reserved.
    pub fn assign<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let values = values.into_iter();
        self.clear();
        self.reserve(values.len());
        for value in values {
            self.push_back(value);
        }
    }

    /// Exchange storage, size and capacity with `other`. No element moves.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.buf, &mut other.buf);
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("growvec: capacity overflow");
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_exact_capacity(self.len());
        for value in self {
            copy.push_within_capacity(value.clone());
        }
        copy
    }
}

impl<T, U> PartialEq<GrowableArray<U>> for GrowableArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowableArray<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T, U> PartialEq<[U]> for GrowableArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowableArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<Vec<U>> for GrowableArray<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        let mut array = Self::with_exact_capacity(values.len());
        for value in values {
            array.push_within_capacity(value);
        }
        array
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self::with_exact_capacity(N);
        for value in values {
            array.push_within_capacity(value);
        }
        array
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::with_exact_capacity(values.len());
        for value in values {
            array.push_within_capacity(value.clone());
        }
        array
    }
}
