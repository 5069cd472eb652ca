//! Integer arguments accepted as indices and counts.
//!
//! Positional operations take any primitive integer so that a negative
//! index can be reported as [`ArrayError::IndexOutOfRange`](crate::ArrayError)
//! instead of being unrepresentable, and so that a negative count can be
//! clamped to zero.

/// A primitive integer usable as an index or element count.
///
/// Implemented for every built-in signed and unsigned integer type up to
/// 64 bits plus `isize`/`usize`.
pub trait Position: Copy {
    /// The value widened to `i128`, preserving sign.
    fn signed(self) -> i128;

    /// The value as a `usize`, or `None` if it is negative or does not fit.
    fn to_index(self) -> Option<usize> {
        usize::try_from(self.signed()).ok()
    }

    /// The value as a count: negative values clamp to zero.
    fn clamped(self) -> usize {
        let value = self.signed();
        if value < 0 {
            0
        } else {
            usize::try_from(value).unwrap_or(usize::MAX)
        }
    }
}

macro_rules! impl_position {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Position for $ty {
                #[inline]
                fn signed(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_position!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
