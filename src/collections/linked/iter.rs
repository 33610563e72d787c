use core::{fmt, iter::FusedIterator};

use super::{
    DoublyLinkedList,
    node::{ArenaId, NodeArena, NodeId},
};
use crate::{collections::list::ContractIterator, error::AdtError};

/// Borrowing iterator following the `next` links from the head (and the `prev`
/// links from the tail when iterated backwards).
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline(always)]
    pub(crate) fn new(
        arena: &'a NodeArena<T>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.front?)?;
        self.front = node.next();
        self.remaining -= 1;
        Some(node.element())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.back?)?;
        self.back = node.prev();
        self.remaining -= 1;
        Some(node.element())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ContractIterator for Iter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.remaining != 0
    }
}

/// Live cursor over a [`DoublyLinkedList`] that does not borrow it.
///
/// The cursor remembers the node it will yield next and is advanced against the
/// list with [`try_next`](Self::try_next), so the list may be mutated between
/// steps. Each step reads the links as they are at that moment: elements appended
/// behind the cursor are seen, elements inserted before it are not. A cursor whose
/// pending node was removed is exhausted, and a cursor never resolves nodes of a
/// list other than the one that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    arena: ArenaId,
    next: Option<NodeId>,
}

impl Cursor {
    #[inline]
    pub(crate) fn new(arena: ArenaId, next: Option<NodeId>) -> Self {
        Self { arena, next }
    }

    #[inline]
    fn pending<T>(&self, list: &DoublyLinkedList<T>) -> Option<NodeId> {
        let id = self.next?;
        let owned = self.arena == list.arena.id() && list.arena.get(id).is_some();
        owned.then_some(id)
    }

    pub fn has_next<T>(&self, list: &DoublyLinkedList<T>) -> bool {
        self.pending(list).is_some()
    }

    pub fn try_next<'a, T>(&mut self, list: &'a DoublyLinkedList<T>) -> Result<&'a T, AdtError> {
        let Some(id) = self.pending(list) else {
            self.next = None;
            return Err(AdtError::IterationExhausted);
        };
        let node = &list.arena[id];
        self.next = node.next();
        Ok(node.element())
    }
}
