//! `RingBuffer`: a fixed-capacity circular buffer of plain values.
//!
//! Bulk `write`/`read` copy at most two contiguous chunks (tail of the array,
//! then its head) and report how many elements were actually moved. A short
//! count is the only signal for a full or empty buffer; nothing is dropped
//! silently and nothing panics.
//!
//! `begin == end` is ambiguous between empty and full. The `wrap` flag settles
//! it: set by a write that closes the gap, cleared by any read.
//!
//! Performance Characteristics:
//! - `write`/`read`: O(n) in the transfer size, two `memcpy`s at most
//! - `occupied`/`free`: O(1)
//! - Memory: `N` inline slots plus three words, no allocation

use crate::error::CapacityError;
use crate::storage::RawStorage;
use crate::trace::{capacity_event, partial_transfer};
use core::fmt;
use core::ptr;

/// A circular buffer holding up to `N` values of `T`.
///
/// Single-writer/single-reader use is assumed; the buffer performs no
/// synchronization of its own.
#[repr(C)]
pub struct RingBuffer<T: Copy, const N: usize> {
    slots: [RawStorage<T>; N],
    /// Index of the oldest element.
    begin: usize,
    /// Index one past the newest element.
    end: usize,
    /// Distinguishes full from empty when `begin == end`.
    wrap: bool,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    const NON_ZERO: () = assert!(N > 0, "RingBuffer capacity must be non-zero");

    /// Creates an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self {
            slots: RawStorage::uninit_array(),
            begin: 0,
            end: 0,
            wrap: false,
        }
    }

    /// Total number of slots.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of elements waiting to be read.
    #[inline]
    pub const fn occupied(&self) -> usize {
        if self.end == self.begin {
            if self.wrap {
                N
            } else {
                0
            }
        } else if self.end > self.begin {
            self.end - self.begin
        } else {
            N + self.end - self.begin
        }
    }

    /// Number of elements that can be written before the buffer is full.
    #[inline]
    pub const fn free(&self) -> usize {
        N - self.occupied()
    }

    /// Returns `true` if there is nothing to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    /// Returns `true` if no slot is free.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.wrap
    }

    /// Copies as much of `src` as fits and returns the number of elements written.
    pub fn write(&mut self, src: &[T]) -> usize {
        let n = src.len().min(self.free());
        if n < src.len() {
            partial_transfer!("write", src.len(), n);
        }
        if n == 0 {
            return 0;
        }

        let first = n.min(N - self.end);
        // SAFETY: `end + first <= N` and `first <= src.len()`; `T: Copy` so
        // overwriting stale slots needs no drop. Source and destination are
        // distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                src.as_ptr(),
                self.slots.as_mut_ptr().add(self.end).cast::<T>(),
                first,
            );
        }
        self.end = (self.end + first) % N;

        if first < n {
            let second = n - first;
            // SAFETY: the first chunk ran to the end of the array, so `end == 0`
            // and `second <= free - first < N`.
            unsafe {
                ptr::copy_nonoverlapping(
                    src.as_ptr().add(first),
                    self.slots.as_mut_ptr().add(self.end).cast::<T>(),
                    second,
                );
            }
            self.end = (self.end + second) % N;
        }

        if self.begin == self.end {
            self.wrap = true;
        }
        n
    }

    /// Copies up to `dst.len()` of the oldest elements out and returns how many were read.
    pub fn read(&mut self, dst: &mut [T]) -> usize {
        let n = dst.len().min(self.occupied());
        if n < dst.len() {
            partial_transfer!("read", dst.len(), n);
        }
        if n == 0 {
            return 0;
        }
        self.wrap = false;

        let first = n.min(N - self.begin);
        // SAFETY: the `first` slots starting at `begin` are occupied, hence initialized.
        unsafe {
            ptr::copy_nonoverlapping(
                self.slots.as_ptr().add(self.begin).cast::<T>(),
                dst.as_mut_ptr(),
                first,
            );
        }
        self.begin = (self.begin + first) % N;

        if first < n {
            let second = n - first;
            // SAFETY: occupancy wrapped past the end of the array, so the
            // remaining `second` elements start at index 0.
            unsafe {
                ptr::copy_nonoverlapping(
                    self.slots.as_ptr().add(self.begin).cast::<T>(),
                    dst.as_mut_ptr().add(first),
                    second,
                );
            }
            self.begin = (self.begin + second) % N;
        }
        n
    }

    /// Writes all of `src` or nothing.
    ///
    /// # Errors
    /// Returns the requested length when fewer than `src.len()` slots are free.
    pub fn write_all(&mut self, src: &[T]) -> Result<(), CapacityError<usize>> {
        if src.len() > self.free() {
            capacity_event!("RingBuffer", N);
            return Err(CapacityError::new(src.len()));
        }
        self.write(src);
        Ok(())
    }

    /// Fills all of `dst` or reads nothing.
    ///
    /// # Errors
    /// Returns the requested length when fewer than `dst.len()` elements are stored.
    pub fn read_exact(&mut self, dst: &mut [T]) -> Result<(), CapacityError<usize>> {
        if dst.len() > self.occupied() {
            return Err(CapacityError::new(dst.len()));
        }
        self.read(dst);
        Ok(())
    }

    /// Appends a single element.
    ///
    /// # Errors
    /// Hands `value` back when the buffer is full.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            capacity_event!("RingBuffer", N);
            return Err(CapacityError::new(value));
        }
        self.slots[self.end].write(value);
        self.end = (self.end + 1) % N;
        if self.begin == self.end {
            self.wrap = true;
        }
        Ok(())
    }

    /// Removes the oldest element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: non-empty, so the slot at `begin` is occupied.
        let value = unsafe { self.slots[self.begin].assume_init_read() };
        self.begin = (self.begin + 1) % N;
        self.wrap = false;
        Some(value)
    }

    /// The oldest element, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: non-empty, so the slot at `begin` is occupied.
        Some(unsafe { self.slots[self.begin].assume_init_ref() })
    }

    /// Iterates over the stored elements, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        (0..self.occupied()).map(move |i| {
            // SAFETY: `i < occupied`, so the slot is inside the occupied window.
            unsafe { self.slots[(self.begin + i) % N].assume_init_ref() }
        })
    }

    /// Discards every stored element.
    #[inline]
    pub fn clear(&mut self) {
        self.begin = 0;
        self.end = 0;
        self.wrap = false;
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> Clone for RingBuffer<T, N> {
    fn clone(&self) -> Self {
        // SAFETY: every field is plain data and `T: Copy`, so a bitwise copy
        // duplicates the buffer, stale slots included.
        unsafe { ptr::read(self) }
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
