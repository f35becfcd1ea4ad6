#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

use core::fmt::{self, Display, Formatter};

pub mod prelude;

mod mask;
mod scope;
mod value;
mod word;

pub use crate::mask::BitMask;
pub use crate::scope::{ModifyScope, RegisterStorage};
pub use crate::value::ValueBuilder;
pub use crate::word::RegisterWord;

mod sealed {
    pub trait Sealed {}
}

/// The error type returned when constructing a mask from an invalid bit
/// range.
#[derive(Debug)]
pub struct InvalidBitRange(pub(crate) ());

impl Display for InvalidBitRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "bit range does not fit the register word")
    }
}

/// Constructs a [`BitMask`] constant, failing at compile time when the range
/// is invalid.
///
/// `bitmask!(word; offset)` builds a single-bit mask and
/// `bitmask!(word; low, high)` builds an inclusive range, with the same
/// meaning as the per-width `const` constructors `single` and `span` on
/// [`BitMask`]. Both forms require constant operands; masks known only at
/// runtime go through [`BitMask::try_new`] instead.
///
/// # Examples
///
/// ```
/// use regmask::{bitmask, BitMask};
///
/// const ENABLE: BitMask<u32> = bitmask!(u32; 0);
/// const BAUD: BitMask<u32> = bitmask!(u32; 4, 11);
/// assert_eq!(BAUD.extract(0x0000_0FF0), 0xFF);
/// ```
///
/// ```compile_fail
/// // Bit 8 does not exist in a `u8`.
/// regmask::bitmask!(u8; 8);
/// ```
///
/// ```compile_fail
/// // The range runs high to low.
/// regmask::bitmask!(u32; 11, 4);
/// ```
#[macro_export]
macro_rules! bitmask {
    ($word:ty; $offset:expr) => {{
        const MASK: $crate::BitMask<$word> = match $crate::BitMask::<$word>::single($offset) {
            ::core::option::Option::Some(mask) => mask,
            ::core::option::Option::None => panic!("bit offset outside the register word"),
        };
        MASK
    }};
    ($word:ty; $low:expr, $high:expr) => {{
        const MASK: $crate::BitMask<$word> = match $crate::BitMask::<$word>::span($low, $high) {
            ::core::option::Option::Some(mask) => mask,
            ::core::option::Option::None => panic!("bit range outside the register word"),
        };
        MASK
    }};
}
