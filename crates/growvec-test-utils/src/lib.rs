//! Test utilities and reference models for growvec development.
//!
//! - [`tracked`]: an element type that counts live instances, for checking
//!   that every element is dropped exactly once.
//! - [`model`]: an operation vocabulary, a `Vec`-backed reference model, and
//!   proptest strategies for driving both side by side.
//! - [`assert_invariants`]: size/capacity checks to run after every step.
//!
//! Use from integration tests and benches only: unit tests inside `growvec`
//! would see a second copy of the crate's types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod tracked;

use growvec::GrowableArray;

pub use model::{Op, Outcome};
pub use tracked::{LiveCounter, Tracked};

/// Assert the structural invariants that must hold after any public call.
///
/// - size never exceeds capacity;
/// - the occupied view, the iterator and `begin()..end()` agree on length;
/// - every index below `len()` is readable and `len()` itself is not.
pub fn assert_invariants<T>(array: &GrowableArray<T>) {
    let len = array.len();
    assert!(
        len <= array.capacity(),
        "size {len} exceeds capacity {}",
        array.capacity()
    );
    assert_eq!(array.as_slice().len(), len);
    assert_eq!(array.iter().len(), len);
    assert_eq!(array.indices(), 0..len);
    assert_eq!(array.is_empty(), len == 0);
    for i in 0..len {
        assert!(array.at(i).is_ok(), "index {i} below len {len} unreadable");
    }
    assert!(array.at(len).is_err(), "index {len} readable at len {len}");
}
