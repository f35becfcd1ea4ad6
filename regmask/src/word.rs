use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::PrimInt;

use crate::sealed::Sealed;

/// Register word types.
///
/// There is one type implementing `RegisterWord` for each of the four
/// unsigned widths peripheral registers come in: [`u8`], [`u16`], [`u32`] and
/// [`u64`]. Signed types are deliberately excluded; shift semantics on them
/// are ambiguous for field arithmetic.
pub trait RegisterWord:
    Copy + Debug + Display + Hash + Eq + Ord + PrimInt + Sealed
{
    /// The bit width of this word type.
    const BITS: u32;

    /// The word with every bit clear.
    const ZERO: Self;

    /// The word with every bit set.
    const ALL: Self;

    /// Returns the word with the `width` least significant bits set.
    ///
    /// Widths of [`BITS`](Self::BITS) or more saturate to [`ALL`](Self::ALL)
    /// without evaluating a full-width shift.
    fn ones(width: u32) -> Self;
}

macro_rules! impl_register_word {
    ($($ty:ident),*) => {$(
        impl Sealed for $ty {}

        impl RegisterWord for $ty {
            const BITS: u32 = <$ty>::BITS;

            const ZERO: Self = 0;

            const ALL: Self = <$ty>::MAX;

            #[inline(always)]
            fn ones(width: u32) -> Self {
                if width >= Self::BITS {
                    Self::ALL
                } else {
                    (1 << width) - 1
                }
            }
        }
    )*};
}
impl_register_word!(u8, u16, u32, u64);
