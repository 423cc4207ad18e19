//! `StaticList`: a doubly linked list whose nodes live in a fixed array.
//!
//! Nodes come from a [`NodePool`] embedded in the list, so no allocation ever
//! happens. Every node is on exactly one chain: the pool's free chain or this
//! list's live chain. Unlinking a node and returning it to the free chain is
//! always one operation.
//!
//! Insertions on a full list do not silently vanish: they return a
//! [`CapacityError`] holding the value that did not fit.
//!
//! Performance Characteristics:
//! - push/pop at either end, insert before a node, erase a node: O(1)
//! - iteration: O(n), forward along `next`, backward along `prev`
//! - Memory: `N` link slots plus `N` payload slots, inline

mod cursor;
mod iter;
pub mod pool;


pub use cursor::CursorMut;
pub use iter::{IntoIter, Iter, IterMut};
pub use pool::{NodeId, NodePool};

use crate::error::CapacityError;
use crate::trace::capacity_event;
use core::fmt;

/// A doubly linked list of at most `N` elements, stored inline.
///
/// The list can be moved (links are indices, not addresses) but not cloned.
pub struct StaticList<T, const N: usize> {
    pool: NodePool<T, N>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T, const N: usize> StaticList<T, N> {
    /// Creates an empty list with all `N` nodes on the free chain.
    pub const fn new() -> Self {
        Self {
            pool: NodePool::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every node is in use.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of elements.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Links the live, detached node `idx` in front of `at`, or at the tail for `None`.
    fn link_before(&mut self, idx: usize, at: Option<usize>) {
        let prev = match at {
            Some(at) => self.pool.links(at).and_then(|(prev, _)| prev),
            None => self.tail,
        };

        self.pool.set_prev(idx, prev);
        self.pool.set_next(idx, at);

        match prev {
            Some(p) => self.pool.set_next(p, Some(idx)),
            None => self.head = Some(idx),
        }
        match at {
            Some(n) => self.pool.set_prev(n, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.len += 1;
    }

    /// Splices `idx` out of the live chain and hands its value back through the free chain.
    fn unlink(&mut self, idx: usize) -> Option<T> {
        let (prev, next) = self.pool.links(idx)?;

        match prev {
            Some(p) => self.pool.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.pool.set_prev(n, prev),
            None => self.tail = prev,
        }

        self.len -= 1;
        self.pool.release(NodeId(idx))
    }

    #[track_caller]
    fn live_index(&self, pos: Option<NodeId>) -> Option<usize> {
        pos.map(|id| {
            assert!(self.pool.is_live(id), "NodeId {} is not in the list", id.0);
            id.0
        })
    }

    /// Inserts `value` before `pos`, or at the back when `pos` is `None` (the end position).
    ///
    /// # Errors
    /// Hands `value` back when the list is full; the list is left unchanged.
    ///
    /// # Panics
    /// Panics if `pos` names a node that is not in the list.
    #[track_caller]
    pub fn insert(&mut self, pos: Option<NodeId>, value: T) -> Result<NodeId, CapacityError<T>> {
        let at = self.live_index(pos);
        let id = self.pool.acquire(value).map_err(|err| {
            capacity_event!("StaticList", N);
            err
        })?;
        self.link_before(id.0, at);
        Ok(id)
    }

    /// Inserts `value` directly before the node `at`.
    ///
    /// # Errors
    /// Hands `value` back when the list is full.
    ///
    /// # Panics
    /// Panics if `at` is not in the list.
    #[track_caller]
    pub fn insert_before(&mut self, at: NodeId, value: T) -> Result<NodeId, CapacityError<T>> {
        self.insert(Some(at), value)
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    /// Hands `value` back when the list is full.
    pub fn push_back(&mut self, value: T) -> Result<NodeId, CapacityError<T>> {
        self.insert(None, value)
    }

    /// Prepends `value` at the front.
    ///
    /// # Errors
    /// Hands `value` back when the list is full.
    pub fn push_front(&mut self, value: T) -> Result<NodeId, CapacityError<T>> {
        self.insert(self.head.map(NodeId), value)
    }

    /// Constructs an element in place before `pos` (or at the back for `None`).
    ///
    /// `make` only runs when a free node is available. Returns `None` when the
    /// list is full.
    ///
    /// # Panics
    /// Panics if `pos` names a node that is not in the list.
    #[track_caller]
    pub fn emplace<F>(&mut self, pos: Option<NodeId>, make: F) -> Option<NodeId>
    where
        F: FnOnce() -> T,
    {
        let at = self.live_index(pos);
        let Some(id) = self.pool.acquire_with(make) else {
            capacity_event!("StaticList", N);
            return None;
        };
        self.link_before(id.0, at);
        Some(id)
    }

    /// Constructs an element in place at the back. See [`emplace`](Self::emplace).
    pub fn emplace_back<F>(&mut self, make: F) -> Option<NodeId>
    where
        F: FnOnce() -> T,
    {
        self.emplace(None, make)
    }

    /// Removes the node `id` and returns its value.
    ///
    /// Returns `None` if `id` is not in the list.
    pub fn erase(&mut self, id: NodeId) -> Option<T> {
        self.unlink(id.0)
    }

    /// Removes the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    /// Removes the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Reference to the first element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.pool.get(NodeId(self.head?))
    }

    /// Reference to the last element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.pool.get(NodeId(self.tail?))
    }

    /// Mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.pool.get_mut(NodeId(self.head?))
    }

    /// Mutable reference to the last element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.pool.get_mut(NodeId(self.tail?))
    }

    /// Reference to the element stored in node `id`.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.pool.get(id)
    }

    /// Mutable reference to the element stored in node `id`.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.pool.get_mut(id)
    }

    /// Handle of the first node.
    #[inline]
    pub fn first_id(&self) -> Option<NodeId> {
        self.head.map(NodeId)
    }

    /// Handle of the last node.
    #[inline]
    pub fn last_id(&self) -> Option<NodeId> {
        self.tail.map(NodeId)
    }

    /// Handle of the node after `id`.
    #[inline]
    pub fn next_id(&self, id: NodeId) -> Option<NodeId> {
        self.pool.links(id.0)?.1.map(NodeId)
    }

    /// Handle of the node before `id`.
    #[inline]
    pub fn prev_id(&self, id: NodeId) -> Option<NodeId> {
        self.pool.links(id.0)?.0.map(NodeId)
    }

    /// Removes every element, returning all nodes to the free chain.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cur = self.head;
        while let Some(idx) = cur {
            cur = self.pool.links(idx).and_then(|(_, next)| next);
            let drop_it = self.pool.get(NodeId(idx)).is_some_and(|v| !keep(v));
            if drop_it {
                self.unlink(idx);
            }
        }
    }

    /// Returns `true` if the list holds an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Front-to-back iterator. Call `.rev()` for back-to-front.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(&self.pool, self.head, self.tail, self.len)
    }

    /// Front-to-back iterator yielding mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T, N> {
        IterMut::new(&mut self.pool, self.head, self.tail, self.len)
    }

    /// Cursor positioned on the first element (or the end position if empty).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, N> {
        let at = self.head;
        CursorMut::new(self, at)
    }

    /// Cursor positioned on the last element (or the end position if empty).
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T, N> {
        let at = self.tail;
        CursorMut::new(self, at)
    }
}

impl<T, const N: usize> Default for StaticList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticList<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticList<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for StaticList<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a StaticList<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StaticList<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> IntoIterator for StaticList<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
