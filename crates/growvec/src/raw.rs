//! Low-level storage for [`GrowableArray`](crate::GrowableArray).
//!
//! [`RawBuffer`] owns a boxed slice of `MaybeUninit<T>` slots whose length is
//! the capacity, plus a count of initialised slots. Slots `[0, len)` are
//! always initialised and slots `[len, capacity)` never are. This is the only
//! module in the crate allowed to contain `unsafe`; every block relies on that
//! prefix invariant and carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::mem::{self, MaybeUninit};
use std::ptr;
use std::slice;

/// Fixed-capacity slot storage with an initialised prefix.
pub(crate) struct RawBuffer<T> {
    slots: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> RawBuffer<T> {
    /// Allocate `capacity` vacant slots.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Box::new_uninit_slice(capacity),
            len: 0,
        }
    }

    /// Number of initialised slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The initialised prefix.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots[..len] are initialised and MaybeUninit<T> has the
        // same layout as T.
        unsafe { slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    /// The initialised prefix, mutably.
    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; the exclusive borrow of `self` covers
        // the whole prefix.
        unsafe { slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Write `value` into the first vacant slot.
    ///
    /// Returns the value back if the buffer is full.
    #[inline]
    pub(crate) fn push_within_capacity(&mut self, value: T) -> Result<(), T> {
        match self.slots.get_mut(self.len) {
            Some(slot) => {
                slot.write(value);
                self.len += 1;
                Ok(())
            }
            None => Err(value),
        }
    }

    /// Move the last initialised value out, leaving its slot vacant.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.len = self.len.checked_sub(1)?;
        // SAFETY: the slot at the old `len - 1` was initialised and is now
        // outside the prefix, so it will not be read or dropped again.
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    /// Drop every initialised value at or beyond `new_len`.
    ///
    /// No-op if `new_len >= len`.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let tail = self.len - new_len;
        // Shorten first: a panicking destructor leaks instead of double-dropping.
        self.len = new_len;
        // SAFETY: slots[new_len..new_len + tail] were initialised and are now
        // outside the prefix.
        unsafe {
            let start = self.slots.as_mut_ptr().add(new_len).cast::<T>();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, tail));
        }
    }

    /// Move the initialised prefix into a fresh buffer of `capacity` slots.
    ///
    /// Exactly `len` values are moved, in order. `capacity` must be at least
    /// `len`; the old allocation is released on return.
    pub(crate) fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut fresh = Self::with_capacity(capacity);
        for (dst, src) in fresh.slots.iter_mut().zip(&mut self.slots[..self.len]) {
            mem::swap(dst, src);
        }
        fresh.len = mem::take(&mut self.len);
        *self = fresh;
    }

    /// Consume the buffer into a front/back draining cursor.
    pub(crate) fn into_drain(mut self) -> RawDrain<T> {
        let back = mem::take(&mut self.len);
        let slots = mem::take(&mut self.slots);
        RawDrain {
            slots,
            front: 0,
            back,
        }
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.truncate(0);
    }
}

/// Owning cursor over the initialised slots of a consumed [`RawBuffer`].
///
/// Slots `[front, back)` are initialised; everything else has been moved
/// out or was never written.
pub(crate) struct RawDrain<T> {
    slots: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> RawDrain<T> {
    /// Number of values not yet yielded.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.back - self.front
    }

    /// The values not yet yielded.
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: slots[front..back] are initialised.
        unsafe {
            slice::from_raw_parts(
                self.slots.as_ptr().add(self.front).cast::<T>(),
                self.remaining(),
            )
        }
    }

    /// Move out the value at the front.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        // SAFETY: `index` was inside [front, back) and has just left it.
        Some(unsafe { self.slots[index].assume_init_read() })
    }

    /// Move out the value at the back.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: the old `back - 1` was inside [front, back) and has just left it.
        Some(unsafe { self.slots[self.back].assume_init_read() })
    }
}

impl<T> Drop for RawDrain<T> {
    fn drop(&mut self) {
        let remaining = self.remaining();
        let front = self.front;
        self.front = self.back;
        // SAFETY: slots[front..front + remaining] are the initialised values
        // never yielded; the cursor is closed first so they drop once.
        unsafe {
            let start = self.slots.as_mut_ptr().add(front).cast::<T>();
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(start, remaining));
        }
    }
}
