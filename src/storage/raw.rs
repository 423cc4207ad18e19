//! `RawStorage`: an uninitialized slot sized and aligned for exactly one `T`.
//!
//! The slot never knows whether it holds a live value. Whoever owns it keeps
//! that bookkeeping (a length, a link slot, a read/write index) and decides
//! when to construct in place and when to destroy.

use core::fmt;
use core::mem::MaybeUninit;

/// Storage for at most one `T`, with the size and alignment of `T`.
#[repr(transparent)]
pub struct RawStorage<T> {
    slot: MaybeUninit<T>,
}

impl<T> RawStorage<T> {
    /// Creates an empty slot.
    #[inline(always)]
    pub const fn uninit() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
        }
    }

    const UNINIT: Self = Self::uninit();

    /// Creates an array of `N` empty slots without touching their bytes.
    #[inline(always)]
    pub const fn uninit_array<const N: usize>() -> [Self; N] {
        [Self::UNINIT; N]
    }

    /// Constructs `value` in place and returns a reference to it.
    ///
    /// A value already living in the slot is overwritten without being dropped.
    #[inline(always)]
    pub fn write(&mut self, value: T) -> &mut T {
        self.slot.write(value)
    }

    /// Raw pointer to the slot.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slot.as_ptr()
    }

    /// Mutable raw pointer to the slot.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot.as_mut_ptr()
    }

    /// # Safety
    /// The slot must hold a live `T`.
    #[inline(always)]
    pub unsafe fn assume_init_ref(&self) -> &T {
        self.slot.assume_init_ref()
    }

    /// # Safety
    /// The slot must hold a live `T`.
    #[inline(always)]
    pub unsafe fn assume_init_mut(&mut self) -> &mut T {
        self.slot.assume_init_mut()
    }

    /// Moves the value out. The slot is logically empty afterwards.
    ///
    /// # Safety
    /// The slot must hold a live `T`, and the caller must stop treating it as live.
    #[inline(always)]
    pub unsafe fn assume_init_read(&self) -> T {
        self.slot.assume_init_read()
    }

    /// Drops the value in place. The slot is logically empty afterwards.
    ///
    /// # Safety
    /// The slot must hold a live `T`, and the caller must stop treating it as live.
    #[inline(always)]
    pub unsafe fn assume_init_drop(&mut self) {
        self.slot.assume_init_drop();
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("size", &core::mem::size_of::<T>())
            .field("align", &core::mem::align_of::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::{align_of, size_of};
    use std::rc::Rc;

    #[test]
    fn test_layout_matches_payload() {
        assert_eq!(size_of::<RawStorage<u64>>(), size_of::<u64>());
        assert_eq!(align_of::<RawStorage<u64>>(), align_of::<u64>());
        assert_eq!(size_of::<RawStorage<[u8; 3]>>(), 3);
        assert_eq!(align_of::<RawStorage<u16>>(), 2);
    }

    #[test]
    fn test_construct_read_back() {
        let mut slot = RawStorage::uninit();
        *slot.write(41u32) += 1;
        // SAFETY: written above.
        unsafe {
            assert_eq!(*slot.assume_init_ref(), 42);
            assert_eq!(slot.assume_init_read(), 42);
        }
    }

    #[test]
    fn test_explicit_drop() {
        let shared = Rc::new(());
        let mut slot = RawStorage::uninit();
        slot.write(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);

        // SAFETY: written above, not used afterwards.
        unsafe { slot.assume_init_drop() };
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_uninit_array() {
        let mut slots: [RawStorage<u8>; 4] = RawStorage::uninit_array();
        for (i, slot) in slots.iter_mut().enumerate() {
            slot.write(i as u8);
        }
        // SAFETY: every slot was written.
        let sum: u8 = slots.iter().map(|s| unsafe { *s.assume_init_ref() }).sum();
        assert_eq!(sum, 6);
    }
}
