//! Iterators over a `StaticList`.
//!
//! Each iterator walks from both ends and stops when the two meet, tracked by a
//! remaining count. Once exhausted it keeps returning `None`.

use super::pool::{LinkSlot, NodeId, NodePool};
use super::StaticList;
use crate::storage::RawStorage;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Shared iterator over a `StaticList`.
pub struct Iter<'a, T, const N: usize> {
    pool: &'a NodePool<T, N>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    pub(super) fn new(
        pool: &'a NodePool<T, N>,
        front: Option<usize>,
        back: Option<usize>,
        remaining: usize,
    ) -> Self {
        Self {
            pool,
            front,
            back,
            remaining,
        }
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let (_, next) = self.pool.links(idx)?;
        self.front = next;
        self.remaining -= 1;
        self.pool.get(NodeId(idx))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let (prev, _) = self.pool.links(idx)?;
        self.back = prev;
        self.remaining -= 1;
        self.pool.get(NodeId(idx))
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Iter<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for Iter<'a, T, N> {}

impl<'a, T, const N: usize> Clone for Iter<'a, T, N> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Mutable iterator over a `StaticList`.
pub struct IterMut<'a, T, const N: usize> {
    links: &'a [LinkSlot; N],
    values: *mut RawStorage<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<'a, T, const N: usize> IterMut<'a, T, N> {
    pub(super) fn new(
        pool: &'a mut NodePool<T, N>,
        front: Option<usize>,
        back: Option<usize>,
        remaining: usize,
    ) -> Self {
        let (links, values) = pool.split_mut();
        Self {
            links,
            values,
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }

    /// # Safety
    /// `idx` must be a live node not yet yielded by this iterator.
    unsafe fn value(&mut self, idx: usize) -> &'a mut T {
        (*self.values.add(idx)).assume_init_mut()
    }
}

impl<'a, T, const N: usize> Iterator for IterMut<'a, T, N> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let LinkSlot::Live { next, .. } = self.links[idx] else {
            return None;
        };
        self.front = next;
        self.remaining -= 1;
        // SAFETY: the node is live and the remaining count guarantees the front
        // and back walks never yield the same node twice.
        Some(unsafe { self.value(idx) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for IterMut<'a, T, N> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let LinkSlot::Live { prev, .. } = self.links[idx] else {
            return None;
        };
        self.back = prev;
        self.remaining -= 1;
        // SAFETY: see `next`.
        Some(unsafe { self.value(idx) })
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for IterMut<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for IterMut<'a, T, N> {}

// SAFETY: `IterMut` behaves like `&'a mut [T]`.
unsafe impl<'a, T: Send, const N: usize> Send for IterMut<'a, T, N> {}
unsafe impl<'a, T: Sync, const N: usize> Sync for IterMut<'a, T, N> {}

/// Owning iterator, popping from the front (or the back with `.rev()`).
pub struct IntoIter<T, const N: usize> {
    list: StaticList<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    pub(super) fn new(list: StaticList<T, N>) -> Self {
        Self { list }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
