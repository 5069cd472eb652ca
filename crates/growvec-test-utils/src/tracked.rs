//! Elements that count how many of their kind are alive.
//!
//! A [`LiveCounter`] hands out [`Tracked`] values; cloning one increments the
//! count and dropping one decrements it. After a container is dropped the
//! count must return to whatever the test still holds, otherwise an element
//! leaked or was dropped twice.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared live/created tallies for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub struct LiveCounter {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl LiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` in a tracked element.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.live.set(self.live.get() + 1);
        self.created.set(self.created.get() + 1);
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Number of tracked values ever created, clones included.
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

/// A value whose construction, clones and drops are tallied.
pub struct Tracked<T> {
    value: T,
    counter: LiveCounter,
}

impl<T> Tracked<T> {
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let live = self.counter.live.get();
        assert!(live > 0, "tracked value dropped more times than created");
        self.counter.live.set(live - 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({:?})", self.value)
    }
}
