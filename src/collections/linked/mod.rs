pub mod iter;
pub(crate) mod node;

use std::{fmt, hash};

use crate::{
    collections::List,
    error::{AdtError, non_null},
    slice::{check_index, check_insert_index, fill_buffer},
};

pub use iter::{Cursor, Iter};
use node::{Node, NodeArena, NodeId};

/// Doubly linked list whose nodes live in an arena owned by the list.
///
/// Node handles never leave the list; callers only see elements. Index lookups
/// walk from whichever end is closer, so reaching any index takes at most
/// `len / 2` steps.
///
/// Unlike [`ArrayList`](super::ArrayList), iteration is live: [`Cursor`] follows the
/// links as they are when it advances, so it observes mutation made between steps.
pub struct DoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> AdtError {
        AdtError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    /// Makes `a` the predecessor of `b`; either side may be the list boundary.
    #[inline]
    fn link(&mut self, a: Option<NodeId>, b: Option<NodeId>) {
        if let Some(a) = a {
            self.arena[a].set_next(b);
        }
        if let Some(b) = b {
            self.arena[b].set_prev(a);
        }
    }

    /// Handle of the node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> Result<NodeId, AdtError> {
        let index = check_index(index, self.len)?;
        let broken = || self.out_of_range(index);
        if index < self.len / 2 {
            let mut current = self.head.ok_or_else(broken)?;
            for _ in 0..index {
                current = self.arena[current].next().ok_or_else(broken)?;
            }
            Ok(current)
        } else {
            let mut current = self.tail.ok_or_else(broken)?;
            for _ in index..self.len - 1 {
                current = self.arena[current].prev().ok_or_else(broken)?;
            }
            Ok(current)
        }
    }

    pub(crate) fn push_back_value(&mut self, element: T) {
        let id = self.arena.insert(Node::new(element, self.tail, None));
        match self.tail {
            Some(tail) => self.arena[tail].set_next(Some(id)),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Unlinks the node behind `id`, repairing exactly its two neighbours or the
    /// head/tail handles. The node's slot is released together with its links.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.arena.remove(id)?;
        let (prev, next) = (node.prev(), node.next());
        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else if self.head == Some(id) {
            self.head = next;
            self.link(None, next);
        } else if self.tail == Some(id) {
            self.tail = prev;
            self.link(prev, None);
        } else {
            self.link(prev, next);
        }
        self.len -= 1;
        debug_assert_eq!(self.arena.len(), self.len);
        Some(node.into_element())
    }

    /// Appends at the tail.
    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        let element = non_null(element, "element")?;
        self.push_back_value(element);
        Ok(())
    }

    pub fn insert(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        let element = non_null(element, "element")?;
        let index = check_insert_index(index, self.len)?;
        if index == self.len {
            self.push_back_value(element);
            return Ok(());
        }
        if index == 0 {
            let id = self.arena.insert(Node::new(element, None, self.head));
            self.link(Some(id), self.head);
            self.head = Some(id);
            self.len += 1;
            return Ok(());
        }
        let current = self.node_at(index)?;
        let prev = self.arena[current].prev();
        let id = self.arena.insert(Node::new(element, prev, Some(current)));
        self.link(prev, Some(id));
        self.link(Some(id), Some(current));
        self.len += 1;
        Ok(())
    }

    pub fn add_all<'a, L>(&mut self, other: impl Into<Option<&'a L>>) -> Result<bool, AdtError>
    where
        L: List<T> + 'a,
        T: Clone + 'a,
    {
        let other = non_null(other, "list")?;
        let mut changed = false;
        for element in other.iter() {
            self.push_back_value(element.clone());
            changed = true;
        }
        Ok(changed)
    }

    pub fn get(&self, index: usize) -> Result<&T, AdtError> {
        let id = self.node_at(index)?;
        Ok(self.arena[id].element())
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, AdtError> {
        let id = self.node_at(index)?;
        Ok(self.arena[id].element_mut())
    }

    pub fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<T, AdtError> {
        let element = non_null(element, "element")?;
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    pub fn remove(&mut self, index: usize) -> Result<T, AdtError> {
        let id = self.node_at(index)?;
        self.unlink(id).ok_or_else(|| self.out_of_range(index))
    }

    /// Removes the first element equal to `element`, scanning from the head.
    pub fn remove_item<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> Result<Option<T>, AdtError>
    where
        T: PartialEq + 'a,
    {
        let element = non_null(element, "element")?;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.arena[id];
            if node.element() == element {
                return Ok(self.unlink(id));
            }
            current = node.next();
        }
        Ok(None)
    }

    pub fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a,
    {
        let element = non_null(element, "element")?;
        Ok(self.position(element).is_some())
    }

    /// Index of the first element equal to `element`.
    pub fn position(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == element)
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(dropped = self.len, "linked list cleared");
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| self.arena[id].element())
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| self.arena[id].element())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.head, self.tail, self.len)
    }

    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn to_array_into(
        &self,
        buf: impl Into<Option<Vec<Option<T>>>>,
    ) -> Result<Vec<Option<T>>, AdtError>
    where
        T: Clone,
    {
        let buf = non_null(buf, "buffer")?;
        Ok(fill_buffer(buf, self.len, self.iter().cloned()))
    }

    /// Iterator over the current links, starting at the head.
    #[inline]
    pub fn iterator(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Detached cursor at the head. See [`Cursor`].
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.arena.id(), self.head)
    }
}

impl<T> List<T> for DoublyLinkedList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type ContractIter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear()
    }

    #[inline]
    fn add(&mut self, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        self.add(element)
    }

    #[inline]
    fn insert(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        self.insert(index, element)
    }

    #[inline]
    fn add_all<'a, L>(&mut self, other: impl Into<Option<&'a L>>) -> Result<bool, AdtError>
    where
        L: List<T> + 'a,
        T: Clone + 'a,
    {
        self.add_all(other)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, AdtError> {
        self.get(index)
    }

    #[inline]
    fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<T, AdtError> {
        self.set(index, element)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Result<T, AdtError> {
        self.remove(index)
    }

    #[inline]
    fn remove_item<'a>(&mut self, element: impl Into<Option<&'a T>>) -> Result<Option<T>, AdtError>
    where
        T: PartialEq + 'a,
    {
        self.remove_item(element)
    }

    #[inline]
    fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a,
    {
        self.contains(element)
    }

    #[inline]
    fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.to_array()
    }

    #[inline]
    fn to_array_into(
        &self,
        buf: impl Into<Option<Vec<Option<T>>>>,
    ) -> Result<Vec<Option<T>>, AdtError>
    where
        T: Clone,
    {
        self.to_array_into(buf)
    }

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline]
    fn iterator(&self) -> Self::ContractIter<'_>
    where
        T: Clone,
    {
        self.iterator()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: hash::Hash> hash::Hash for DoublyLinkedList<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| hash::Hash::hash(x, state));
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|x| self.push_back_value(x));
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
