//! A growable array with explicit size/capacity bookkeeping.
//!
//! [`GrowableArray`] is a contiguous, index-addressable sequence that tracks
//! its logical size separately from its allocated capacity. Growth is
//! amortised doubling (`0 -> 1 -> 2 -> 4 -> ...`), insert and erase shift
//! elements in place, and every positional operation is bounds-checked and
//! reports an [`ArrayError`] instead of panicking.
//!
//! # Architecture
//!
//! ```text
//! GrowableArray<T>
//! ├── options   (ArrayOption list / ArrayBuilder → initial state)
//! ├── array     (growth, reserve, access, push/pop/insert/erase/resize)
//! ├── iter      (Iter, IterMut, IntoIter over [0, len))
//! ├── display   (Display / Debug of the occupied range)
//! └── raw       (RawBuffer: MaybeUninit slots + initialised prefix)
//! ```
//!
//! # Example
//!
//! ```
//! use growvec::{ArrayError, GrowableArray};
//!
//! let mut arr = GrowableArray::new();
//! arr.push_back(10);
//! arr.push_back(20);
//! arr.insert(1, 15)?;
//! assert_eq!(arr.to_string(), "GrowableArray[10 15 20]");
//! assert_eq!(arr.at(3), Err(ArrayError::IndexOutOfRange { index: 3, len: 3 }));
//! # Ok::<(), ArrayError>(())
//! ```
//!
//! The array is single-owner: it provides no internal synchronisation.
//! Wrap it in a lock to share it between threads.
//!
//! Reallocations are reported at `trace` level through the [`log`] facade.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
mod display;
pub mod error;
pub mod iter;
pub mod options;
pub mod position;
mod raw;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use error::ArrayError;
pub use iter::{IntoIter, Iter, IterMut};
pub use options::{ArrayBuilder, ArrayOption};
pub use position::Position;
