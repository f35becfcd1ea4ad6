//! Memory-mapped register blocks for the `regmask` toolkit.

#![no_std]

mod macros;
mod register;

pub use crate::register::MmioRegister;

// Re-exported for macro access via `$crate`.
#[doc(hidden)]
pub use regmask;

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}
