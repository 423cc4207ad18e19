use super::pool::NodeId;
use super::StaticList;
use crate::error::CapacityError;

/// A cursor over a `StaticList` with editing operations.
///
/// Besides the elements, the cursor can rest on an "end" position that sits
/// after the last element and before the first. Moving past either end lands
/// there; moving again wraps around to the other end.
pub struct CursorMut<'a, T, const N: usize> {
    list: &'a mut StaticList<T, N>,
    current: Option<usize>,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    pub(super) fn new(list: &'a mut StaticList<T, N>, current: Option<usize>) -> Self {
        Self { list, current }
    }

    /// Handle of the element under the cursor, `None` at the end position.
    #[inline]
    pub fn id(&self) -> Option<NodeId> {
        self.current.map(NodeId)
    }

    /// Returns a mutable reference to the element under the cursor.
    #[inline]
    pub fn current(&mut self) -> Option<&mut T> {
        self.list.pool.get_mut(NodeId(self.current?))
    }

    /// Moves to the next element.
    pub fn move_next(&mut self) {
        self.current = match self.current {
            Some(idx) => self.list.pool.links(idx).and_then(|(_, next)| next),
            None => self.list.head,
        };
    }

    /// Moves to the previous element.
    pub fn move_prev(&mut self) {
        self.current = match self.current {
            Some(idx) => self.list.pool.links(idx).and_then(|(prev, _)| prev),
            None => self.list.tail,
        };
    }

    /// Peeks at the element after the cursor without moving.
    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = match self.current {
            Some(idx) => self.list.pool.links(idx)?.1,
            None => self.list.head,
        }?;
        self.list.pool.get_mut(NodeId(next))
    }

    /// Inserts `value` before the cursor. At the end position this appends.
    ///
    /// # Errors
    /// Hands `value` back when the list is full.
    pub fn insert_before(&mut self, value: T) -> Result<NodeId, CapacityError<T>> {
        self.list.insert(self.current.map(NodeId), value)
    }

    /// Removes the element under the cursor and moves to the one after it.
    ///
    /// Does nothing and returns `None` at the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        let idx = self.current?;
        let next = self.list.pool.links(idx).and_then(|(_, next)| next);
        let value = self.list.unlink(idx);
        self.current = next;
        value
    }
}
