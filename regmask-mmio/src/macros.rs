/// Defines an MMIO device: a `#[repr(C)]` register block layout and a typed
/// handle with per-register accessors.
///
/// Registers marked `ro` get a `read_X` accessor, `wo` a `write_X` accessor,
/// and `rw` both plus a `modify_X` accessor that opens a
/// [`ModifyScope`](regmask::ModifyScope) over the register and commits it
/// with a single volatile write when the closure returns. Registers listed
/// without an access specifier only pad the layout; name them with a leading
/// underscore.
///
/// The block's total size is checked against `size` at compile time. The
/// handle is constructed over a base address at runtime, so a device can be
/// instantiated over test memory as easily as over hardware.
///
/// # Examples
///
/// ```
/// use regmask::bitmask;
/// use regmask_mmio::mmio_device;
///
/// mmio_device! {
///     doc_name: "UART",
///     struct_name: Uart,
///     size: 0x8,
///     regs: {
///         data: u32 = rw,
///         status: u32 = ro,
///     },
/// }
///
/// let mut memory = [0u32; 2];
/// let mut uart = unsafe { Uart::from_base(memory.as_mut_ptr() as *mut ()) };
/// uart.modify_data(|scope| {
///     scope.insert(bitmask!(u32; 0, 7), 0x41);
/// });
/// assert_eq!(memory[0], 0x41);
/// ```
#[macro_export]
macro_rules! mmio_device {
    // Top-level matcher.
    (
        doc_name: $doc_name:literal,
        struct_name: $struct_name:ident,
        size: $size:literal,
        regs: {
            $(
                $reg_name:ident:
                $reg_type:ty
                $(= $reg_access:tt)?
            ),*
            $(,)?
        },
    ) => {
        $crate::__private::paste! {
            #[allow(dead_code)]
            #[repr(C)]
            struct [<$struct_name Block>] {
                $($reg_name: $reg_type,)*
            }

            const _: () = assert!(
                ::core::mem::size_of::<[<$struct_name Block>]>() == $size,
            );

            #[doc = concat!("Represents access to the ", $doc_name, " MMIO device.")]
            pub struct $struct_name {
                block: *mut [<$struct_name Block>],
            }

            impl $struct_name {
                /// Creates a handle to the device's register block at `base`.
                ///
                /// # Safety
                ///
                /// `base` must point to the device's register block and stay
                /// valid for the handle's lifetime, and no other handle to
                /// the same device may be in use.
                pub const unsafe fn from_base(base: *mut ()) -> Self {
                    Self {
                        block: base as *mut [<$struct_name Block>],
                    }
                }

                $(
                    $crate::mmio_device! { @reg_accessors $reg_name ($reg_type) $($reg_access)? }
                )*
            }
        }
    };

    // Dispatch on access specifiers.
    (@reg_accessors $name:ident ($type:ty)) => {};
    (@reg_accessors $name:ident ($type:ty) ro) => {
        $crate::mmio_device! { @read $name $type }
    };
    (@reg_accessors $name:ident ($type:ty) wo) => {
        $crate::mmio_device! { @write $name $type }
    };
    (@reg_accessors $name:ident ($type:ty) rw) => {
        $crate::mmio_device! { @read $name $type }
        $crate::mmio_device! { @write $name $type }
        $crate::mmio_device! { @modify $name $type }
    };

    // Read implementation.
    (@read $name:ident $type:ty) => {
        $crate::__private::paste! {
            pub fn [<read_ $name>](&self) -> $type {
                unsafe {
                    ::core::ptr::read_volatile(
                        ::core::ptr::addr_of!((*self.block).$name),
                    )
                }
            }
        }
    };

    // Write implementation.
    (@write $name:ident $type:ty) => {
        $crate::__private::paste! {
            pub fn [<write_ $name>](&mut self, value: $type) {
                unsafe {
                    ::core::ptr::write_volatile(
                        ::core::ptr::addr_of_mut!((*self.block).$name),
                        value,
                    );
                }
            }
        }
    };

    // Modify implementation: one volatile read at bind time, one volatile
    // write when the scope closes.
    (@modify $name:ident $type:ty) => {
        $crate::__private::paste! {
            pub fn [<modify_ $name>](
                &mut self,
                f: impl ::core::ops::FnOnce(
                    &mut $crate::regmask::ModifyScope<'_, $crate::MmioRegister<$type>>,
                ),
            ) {
                let mut reg = unsafe {
                    $crate::MmioRegister::from_ptr(
                        ::core::ptr::addr_of_mut!((*self.block).$name),
                    )
                };
                let mut scope = $crate::regmask::ModifyScope::bind(&mut reg);
                f(&mut scope);
            }
        }
    };
}
