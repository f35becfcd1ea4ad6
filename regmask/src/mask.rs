use core::fmt::{self, Display, Formatter};
use core::ops::RangeInclusive;

use crate::word::RegisterWord;
use crate::InvalidBitRange;

/// A contiguous bit range within a register word.
///
/// A mask is described by the index of its lowest bit and its width in bits,
/// taken straight from a hardware datasheet. Construction validates that the
/// range fits the word; a constructed mask is immutable and freely shareable,
/// including as a `const` item built with the [`bitmask!`](crate::bitmask)
/// macro or the per-width `const` constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitMask<W: RegisterWord> {
    offset: u32,
    width: u32,
    bits: W,
}

impl<W: RegisterWord> BitMask<W> {
    /// The index of the lowest bit covered by this mask.
    #[inline(always)]
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    /// The number of bits covered by this mask.
    ///
    /// Always at least 1 and at most `W::BITS`.
    #[inline(always)]
    #[must_use]
    pub const fn width(self) -> u32 {
        self.width
    }

    /// The field mask: a word with exactly the covered bits set.
    #[inline(always)]
    #[must_use]
    pub const fn field_mask(self) -> W {
        self.bits
    }

    /// Checks whether two masks cover any bit in common.
    #[inline]
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.bits & other.bits != W::ZERO
    }

    /// Creates a mask from a field position given as `offset` and `width`.
    ///
    /// This is the runtime-checked constructor for masks that are not
    /// compile-time constants. Fails with [`InvalidBitRange`] when `width` is
    /// zero or the range extends past the most significant bit of `W`.
    pub fn try_new(offset: u32, width: u32) -> Result<Self, InvalidBitRange> {
        if width == 0 {
            return Err(InvalidBitRange(()));
        }
        match offset.checked_add(width) {
            Some(end) if end <= W::BITS => Ok(Self {
                offset,
                width,
                bits: W::ones(width) << offset as usize,
            }),
            _ => Err(InvalidBitRange(())),
        }
    }
}

impl<W: RegisterWord> TryFrom<RangeInclusive<u32>> for BitMask<W> {
    type Error = InvalidBitRange;

    /// Creates a mask from an inclusive bit range, lowest bit first.
    fn try_from(range: RangeInclusive<u32>) -> Result<Self, InvalidBitRange> {
        let (low, high) = (*range.start(), *range.end());
        // `high` is checked before the width computation; `high - low + 1`
        // cannot overflow for any in-range pair.
        if low > high || high >= W::BITS {
            return Err(InvalidBitRange(()));
        }
        Self::try_new(low, high - low + 1)
    }
}

impl<W: RegisterWord> Display for BitMask<W> {
    /// Renders the covered range in datasheet order, `[high:low]`.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}:{}]", self.offset + self.width - 1, self.offset)
    }
}

macro_rules! impl_const_masks {
    ($($ty:ident),*) => {$(
        impl BitMask<$ty> {
            #[doc = concat!(
                "Creates a mask covering the single bit `offset` of a `",
                stringify!($ty), "`.",
            )]
            ///
            /// Returns `None` when `offset` names a bit the word does not
            /// have. Usable in `const` contexts.
            #[inline(always)]
            #[must_use]
            pub const fn single(offset: u32) -> Option<Self> {
                if offset < <$ty>::BITS {
                    Some(Self {
                        offset,
                        width: 1,
                        bits: 1 << offset,
                    })
                } else {
                    None
                }
            }

            #[doc = concat!(
                "Creates a mask covering bits `low` through `high` inclusive ",
                "of a `", stringify!($ty), "`.",
            )]
            ///
            /// Returns `None` when `low > high` or `high` names a bit the
            /// word does not have. Usable in `const` contexts.
            #[inline(always)]
            #[must_use]
            pub const fn span(low: u32, high: u32) -> Option<Self> {
                if low > high || high >= <$ty>::BITS {
                    return None;
                }
                let width = high - low + 1;
                let bits = if width == <$ty>::BITS {
                    <$ty>::MAX
                } else {
                    ((1 << width) - 1) << low
                };
                Some(Self {
                    offset: low,
                    width,
                    bits,
                })
            }

            /// Reads the field under this mask out of `source`.
            ///
            /// The result is right-aligned and zero-extended. This is pure
            /// shift-and-mask arithmetic with no checks beyond what
            /// construction already validated; a full-width mask returns
            /// `source` unchanged.
            #[inline(always)]
            #[must_use]
            pub const fn extract(self, source: $ty) -> $ty {
                (source & self.bits) >> self.offset
            }
        }
    )*};
}
impl_const_masks!(u8, u16, u32, u64);
