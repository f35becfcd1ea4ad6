//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{
    bitmask, BitMask, InvalidBitRange, ModifyScope, RegisterStorage, RegisterWord, ValueBuilder,
};
