//! Text rendering of [`GrowableArray`].
//!
//! `Display` prints the occupied elements in index order separated by single
//! spaces inside `GrowableArray[...]`; an empty array prints
//! `GrowableArray[]`. Spare capacity is never rendered.

use std::fmt;

use crate::array::GrowableArray;

impl<T: fmt::Display> fmt::Display for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GrowableArray[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
