use crate::mask::BitMask;
use crate::word::RegisterWord;

/// Caller-supplied register storage.
///
/// The toolkit never discovers or allocates registers; callers bind a
/// [`ModifyScope`] to whatever storage they own. The four plain word types
/// implement this trait as ordinary in-memory registers, and memory-mapped
/// storage plugs in behind it (see the `regmask-mmio` crate). If the
/// underlying access can itself fail, surfacing that failure is the storage
/// implementation's concern, not this component's.
pub trait RegisterStorage {
    /// The word type held by this storage.
    type Word: RegisterWord;

    /// Reads the current word.
    fn read(&self) -> Self::Word;

    /// Writes a whole word.
    fn write(&mut self, value: Self::Word);
}

macro_rules! impl_storage_for_primitives {
    ($($ty:ty),*) => {$(
        impl RegisterStorage for $ty {
            type Word = $ty;

            #[inline(always)]
            fn read(&self) -> $ty {
                *self
            }

            #[inline(always)]
            fn write(&mut self, value: $ty) {
                *self = value;
            }
        }
    )*};
}
impl_storage_for_primitives!(u8, u16, u32, u64);

/// A scoped read-modify-write over one register.
///
/// Binding reads the register exactly once into a shadow copy. Mutations
/// apply to the shadow only, so intermediate states never reach the register;
/// this matters for registers with write-triggered side effects or fields
/// that must change together. When the scope ends, on any exit path
/// (including unwinding), the shadow is written back exactly once. A scope
/// with no mutations still performs the one idempotent write-back.
///
/// The scope holds the storage mutably for its whole lifetime, so it cannot
/// be copied and no second scope can be opened over the same storage. It does
/// not serialize access across execution contexts; callers supply that where
/// they need it.
pub struct ModifyScope<'r, R: RegisterStorage> {
    storage: &'r mut R,
    shadow: R::Word,
}

impl<'r, R: RegisterStorage> ModifyScope<'r, R> {
    /// Binds to `storage`, reading its value once into the shadow copy.
    #[must_use]
    pub fn bind(storage: &'r mut R) -> Self {
        let shadow = storage.read();
        Self { storage, shadow }
    }

    /// Replaces the field under `mask` in the shadow copy.
    ///
    /// `value` is silently truncated to the mask width, as in
    /// [`ValueBuilder::insert`](crate::ValueBuilder::insert).
    #[inline]
    pub fn insert(&mut self, mask: BitMask<R::Word>, value: R::Word) -> &mut Self {
        let aligned = (value << mask.offset() as usize) & mask.field_mask();
        self.shadow = (self.shadow & !mask.field_mask()) | aligned;
        self
    }

    /// Forces every bit of the field under `mask` to 1 in the shadow copy.
    #[inline]
    pub fn set(&mut self, mask: BitMask<R::Word>) -> &mut Self {
        self.shadow = self.shadow | mask.field_mask();
        self
    }

    /// Forces every bit of the field under `mask` to 0 in the shadow copy.
    #[inline]
    pub fn clear(&mut self, mask: BitMask<R::Word>) -> &mut Self {
        self.shadow = self.shadow & !mask.field_mask();
        self
    }

    /// Reads the field under `mask` out of the shadow copy.
    ///
    /// This does not touch the register; it sees the batched mutations made
    /// so far.
    #[inline]
    #[must_use]
    pub fn extract(&self, mask: BitMask<R::Word>) -> R::Word {
        (self.shadow & mask.field_mask()) >> mask.offset() as usize
    }

    /// Commits early, consuming the scope.
    ///
    /// Dropping the scope performs the same single write-back; this method
    /// only ends the scope where doing so explicitly reads better than a
    /// bare `drop`. Further mutation through the consumed scope is
    /// impossible.
    #[inline]
    pub fn commit(self) {}
}

impl<R: RegisterStorage> Drop for ModifyScope<'_, R> {
    fn drop(&mut self) {
        self.storage.write(self.shadow);
    }
}
