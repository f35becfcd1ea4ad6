use crate::mask::BitMask;
use crate::word::RegisterWord;

/// A pure accumulator for composing register values.
///
/// The builder is ephemeral: seed it, chain field operations, and take the
/// finished word with [`finish`](Self::finish). It owns nothing and touches
/// no storage, and every operation is `const`, so register configuration
/// constants can be computed entirely at compile time.
///
/// Operations apply in the order chained. Where masks overlap, the later
/// operation wins on the overlapping bits, whether it is an `insert`, `set`
/// or `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueBuilder<W: RegisterWord> {
    bits: W,
}

macro_rules! impl_value_builder {
    ($($ty:ident),*) => {$(
        impl ValueBuilder<$ty> {
            /// Creates a builder over an all-zero accumulator.
            #[inline(always)]
            #[must_use]
            pub const fn zero() -> Self {
                Self { bits: 0 }
            }

            /// Creates a builder seeded with `value`.
            #[inline(always)]
            #[must_use]
            pub const fn new(value: $ty) -> Self {
                Self { bits: value }
            }

            /// Replaces the field under `mask` with `value`.
            ///
            /// `value` is silently truncated to the mask width; excess high
            /// bits are discarded. This never fails.
            #[inline(always)]
            #[must_use]
            pub const fn insert(self, mask: BitMask<$ty>, value: $ty) -> Self {
                let aligned = (value << mask.offset()) & mask.field_mask();
                Self {
                    bits: (self.bits & !mask.field_mask()) | aligned,
                }
            }

            /// Forces every bit of the field under `mask` to 1.
            #[inline(always)]
            #[must_use]
            pub const fn set(self, mask: BitMask<$ty>) -> Self {
                Self {
                    bits: self.bits | mask.field_mask(),
                }
            }

            /// Forces every bit of the field under `mask` to 0.
            ///
            /// Bits outside the mask are untouched.
            #[inline(always)]
            #[must_use]
            pub const fn clear(self, mask: BitMask<$ty>) -> Self {
                Self {
                    bits: self.bits & !mask.field_mask(),
                }
            }

            /// Consumes the builder, yielding the accumulated word.
            #[inline(always)]
            #[must_use]
            pub const fn finish(self) -> $ty {
                self.bits
            }
        }
    )*};
}
impl_value_builder!(u8, u16, u32, u64);
