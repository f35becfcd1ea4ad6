use core::ptr;

use regmask::{RegisterStorage, RegisterWord};

/// A memory-mapped register cell.
///
/// Wraps a raw pointer to one register word; all accesses are volatile.
/// Usually obtained through an [`mmio_device!`](crate::mmio_device) block,
/// but can be created directly over a known address.
pub struct MmioRegister<W: RegisterWord> {
    ptr: *mut W,
}

impl<W: RegisterWord> MmioRegister<W> {
    /// Creates a register cell over `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for volatile reads and writes of a `W` for the
    /// cell's lifetime, and nothing else may access the register while a
    /// [`ModifyScope`](regmask::ModifyScope) is open over the cell.
    pub const unsafe fn from_ptr(ptr: *mut W) -> Self {
        Self { ptr }
    }
}

impl<W: RegisterWord> RegisterStorage for MmioRegister<W> {
    type Word = W;

    #[inline(always)]
    fn read(&self) -> W {
        unsafe { ptr::read_volatile(self.ptr) }
    }

    #[inline(always)]
    fn write(&mut self, value: W) {
        unsafe { ptr::write_volatile(self.ptr, value) }
    }
}
