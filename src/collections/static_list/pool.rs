//! `NodePool`: `N` list nodes in one flat array with an internal free chain.
//!
//! Structure-of-arrays layout:
//! - `links`: one `LinkSlot` per node, either on the free chain (singly linked)
//!   or on the live chain (doubly linked). Links are indices, never addresses.
//! - `values`: one `RawStorage<T>` per node, initialized exactly while the
//!   matching link slot is `Live`.
//!
//! The pool never orders the live chain itself; the owning list does that
//! through `set_prev`/`set_next`.

use crate::error::CapacityError;
use crate::storage::RawStorage;
use core::fmt;

/// Stable handle to a node slot.
///
/// A handle stays valid until the node is erased. After that the slot may be
/// handed out again, so an old handle can refer to a newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the backing array.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A slot in the links array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkSlot {
    Live {
        prev: Option<usize>,
        next: Option<usize>,
    },
    /// Next free slot.
    Free(Option<usize>),
}

/// Fixed array of `N` nodes partitioned between a free chain and live nodes.
pub struct NodePool<T, const N: usize> {
    links: [LinkSlot; N],
    values: [RawStorage<T>; N],
    free_head: Option<usize>,
    free_len: usize,
}

impl<T, const N: usize> NodePool<T, N> {
    /// Creates a pool with every node chained into the free list in index order.
    pub const fn new() -> Self {
        let mut links = [LinkSlot::Free(None); N];
        let mut i = 0;
        while i + 1 < N {
            links[i] = LinkSlot::Free(Some(i + 1));
            i += 1;
        }
        Self {
            links,
            values: RawStorage::uninit_array(),
            free_head: if N > 0 { Some(0) } else { None },
            free_len: N,
        }
    }

    /// Total number of nodes.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of nodes on the free chain.
    #[inline(always)]
    pub const fn free_len(&self) -> usize {
        self.free_len
    }

    /// Number of nodes holding a value.
    #[inline(always)]
    pub const fn live_len(&self) -> usize {
        N - self.free_len
    }

    /// Returns `true` if `id` names a node that currently holds a value.
    #[inline]
    pub fn is_live(&self, id: NodeId) -> bool {
        matches!(self.links.get(id.0), Some(LinkSlot::Live { .. }))
    }

    /// Takes the head of the free chain and constructs `value` in it.
    ///
    /// The node comes back unlinked (`prev` and `next` are `None`).
    ///
    /// # Errors
    /// Hands `value` back when the free chain is empty.
    pub fn acquire(&mut self, value: T) -> Result<NodeId, CapacityError<T>> {
        let Some(idx) = self.free_head else {
            return Err(CapacityError::new(value));
        };
        self.take_free(idx);
        self.values[idx].write(value);
        Ok(NodeId(idx))
    }

    /// Like [`acquire`](Self::acquire), but only runs `make` once a node is known to be free.
    pub fn acquire_with<F>(&mut self, make: F) -> Option<NodeId>
    where
        F: FnOnce() -> T,
    {
        let idx = self.free_head?;
        let value = make();
        self.take_free(idx);
        self.values[idx].write(value);
        Some(NodeId(idx))
    }

    fn take_free(&mut self, idx: usize) {
        let next_free = match self.links[idx] {
            LinkSlot::Free(next) => next,
            LinkSlot::Live { .. } => panic!("Corrupted free chain: head points to a live node"),
        };
        self.links[idx] = LinkSlot::Live {
            prev: None,
            next: None,
        };
        self.free_head = next_free;
        self.free_len -= 1;
    }

    /// Moves the value out of a live node and pushes the node onto the free chain.
    ///
    /// The caller must have unlinked the node from its live neighbours first.
    /// Returns `None` if `id` is not live.
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        if !self.is_live(id) {
            return None;
        }
        // SAFETY: the slot is live, so its value is initialized; it is marked
        // free right below and never read again until rewritten.
        let value = unsafe { self.values[id.0].assume_init_read() };
        self.links[id.0] = LinkSlot::Free(self.free_head);
        self.free_head = Some(id.0);
        self.free_len += 1;
        Some(value)
    }

    /// `(prev, next)` of a live node.
    #[inline]
    pub(crate) fn links(&self, idx: usize) -> Option<(Option<usize>, Option<usize>)> {
        match self.links.get(idx) {
            Some(LinkSlot::Live { prev, next }) => Some((*prev, *next)),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Live { prev, .. } = &mut self.links[idx] {
            *prev = to;
        }
    }

    #[inline]
    pub(crate) fn set_next(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Live { next, .. } = &mut self.links[idx] {
            *next = to;
        }
    }

    /// Shared reference to the value of a live node.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if !self.is_live(id) {
            return None;
        }
        // SAFETY: live slot, value initialized.
        Some(unsafe { self.values[id.0].assume_init_ref() })
    }

    /// Mutable reference to the value of a live node.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if !self.is_live(id) {
            return None;
        }
        // SAFETY: live slot, value initialized.
        Some(unsafe { self.values[id.0].assume_init_mut() })
    }

    /// Splits the pool into its link array and a raw pointer to the values.
    ///
    /// Used by `IterMut` to hand out disjoint `&mut T` while walking the links.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&[LinkSlot; N], *mut RawStorage<T>) {
        (&self.links, self.values.as_mut_ptr())
    }
}

impl<T, const N: usize> Default for NodePool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for NodePool<T, N> {
    fn drop(&mut self) {
        if !core::mem::needs_drop::<T>() {
            return;
        }
        for (link, value) in self.links.iter().zip(self.values.iter_mut()) {
            if let LinkSlot::Live { .. } = link {
                // SAFETY: live slot, value initialized; the pool is going away.
                unsafe { value.assume_init_drop() };
            }
        }
    }
}

impl<T, const N: usize> fmt::Debug for NodePool<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePool")
            .field("capacity", &N)
            .field("free_len", &self.free_len)
            .field("free_head", &self.free_head)
            .finish()
    }
}
