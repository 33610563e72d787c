use std::{fmt, hash};

use crate::{
    collections::{
        ContractIterator, DoublyLinkedList,
        adapter::ContainerCommon,
        linked::{self, Cursor},
    },
    error::AdtError,
};

/// FIFO contract. Orders are front-to-rear everywhere: [`to_array`](Self::to_array),
/// [`iterator`](Self::iterator) and [`equals`](Self::equals).
pub trait QueueAdt<T>: ContainerCommon {
    type Iter<'a>: ContractIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// An empty queue of the same kind, independent from `self`.
    fn new_queue(&self) -> Self
    where
        Self: Sized;

    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError>;

    fn dequeue(&mut self) -> Result<T, AdtError>;

    fn peek(&self) -> Result<&T, AdtError>;

    fn dequeue_all(&mut self);

    fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a;

    /// 1-based distance from the front of the first equal element, `-1` if absent.
    fn search<'a>(&self, value: impl Into<Option<&'a T>>) -> isize
    where
        T: PartialEq + 'a;

    fn to_array(&self) -> Vec<T>
    where
        T: Clone;

    fn to_array_into(
        &self,
        buf: impl Into<Option<Vec<Option<T>>>>,
    ) -> Result<Vec<Option<T>>, AdtError>
    where
        T: Clone;

    fn iterator(&self) -> Self::Iter<'_>;

    /// Same size and pairwise equal elements from the front.
    fn equals<Q>(&self, other: &Q) -> bool
    where
        Q: QueueAdt<T>,
        T: PartialEq,
    {
        self.len() == other.len() && self.iterator().eq(other.iterator())
    }
}

/// Unbounded queue on top of a [`DoublyLinkedList`]; the front is the head node.
///
/// Iteration is the linked list's: [`Queue::cursor`] is live and sees elements
/// enqueued after it was taken.
pub struct Queue<T> {
    list: DoublyLinkedList<T>,
}

impl<T> Queue<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            list: DoublyLinkedList::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        false
    }

    /// Appends at the rear.
    #[inline]
    pub fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError> {
        self.list.add(value)
    }

    pub fn dequeue(&mut self) -> Result<T, AdtError> {
        if self.is_empty() {
            return Err(AdtError::EmptyCollection);
        }
        self.list.remove(0)
    }

    pub fn peek(&self) -> Result<&T, AdtError> {
        self.list.front().ok_or(AdtError::EmptyCollection)
    }

    #[inline]
    pub fn dequeue_all(&mut self) {
        self.list.clear();
    }

    #[inline]
    pub fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a,
    {
        self.list.contains(value)
    }

    pub fn search<'a>(&self, value: impl Into<Option<&'a T>>) -> isize
    where
        T: PartialEq + 'a,
    {
        value
            .into()
            .and_then(|value| self.list.position(value))
            .map_or(-1, |index| index as isize + 1)
    }

    /// Front-to-rear.
    #[inline]
    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_array()
    }

    #[inline]
    pub fn to_array_into(
        &self,
        buf: impl Into<Option<Vec<Option<T>>>>,
    ) -> Result<Vec<Option<T>>, AdtError>
    where
        T: Clone,
    {
        self.list.to_array_into(buf)
    }

    #[inline]
    pub fn iter(&self) -> linked::Iter<'_, T> {
        self.list.iter()
    }

    #[inline]
    pub fn iterator(&self) -> linked::Iter<'_, T> {
        self.list.iterator()
    }

    /// Detached front-to-rear cursor, advanced with [`QueueCursor::try_next`].
    #[inline]
    pub fn cursor(&self) -> QueueCursor {
        QueueCursor(self.list.cursor())
    }

    pub fn equals<Q>(&self, other: &Q) -> bool
    where
        Q: QueueAdt<T>,
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().eq(other.iterator())
    }

    #[inline]
    pub fn new_queue(&self) -> Self {
        Self::new()
    }
}

/// Live cursor over a [`Queue`]; see [`Cursor`] for what it observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueCursor(Cursor);

impl QueueCursor {
    #[inline]
    pub fn has_next<T>(&self, queue: &Queue<T>) -> bool {
        self.0.has_next(&queue.list)
    }

    #[inline]
    pub fn try_next<'a, T>(&mut self, queue: &'a Queue<T>) -> Result<&'a T, AdtError> {
        self.0.try_next(&queue.list)
    }
}

impl<T> ContainerCommon for Queue<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        usize::MAX
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.is_full()
    }
}

impl<T> QueueAdt<T> for Queue<T> {
    type Iter<'a>
        = linked::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn new_queue(&self) -> Self {
        self.new_queue()
    }

    #[inline]
    fn enqueue(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError> {
        self.enqueue(value)
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T, AdtError> {
        self.dequeue()
    }

    #[inline]
    fn peek(&self) -> Result<&T, AdtError> {
        self.peek()
    }

    #[inline]
    fn dequeue_all(&mut self) {
        self.dequeue_all()
    }

    #[inline]
    fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a,
    {
        self.contains(value)
    }

    #[inline]
    fn search<'a>(&self, value: impl Into<Option<&'a T>>) -> isize
    where
        T: PartialEq + 'a,
    {
        self.search(value)
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
    fn iterator(&self) -> Self::Iter<'_> {
        self.iterator()
    }

    #[inline]
    fn equals<Q>(&self, other: &Q) -> bool
    where
        Q: QueueAdt<T>,
        T: PartialEq,
    {
        self.equals(other)
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("list", &self.list).finish()
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: hash::Hash> hash::Hash for Queue<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.list, state);
    }
}

/// Enqueues in iteration order.
impl<T> Extend<T> for Queue<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = linked::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_fifo() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.enqueue(1), Ok(()));
        assert_eq!(queue.enqueue(2), Ok(()));
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.dequeue(), Ok(2));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(AdtError::EmptyCollection));
        assert_eq!(queue.peek(), Err(AdtError::EmptyCollection));
    }

    #[test]
    fn t_null_rejected() {
        let mut queue: Queue<_> = [1].into_iter().collect();
        assert_eq!(
            queue.enqueue(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            queue.contains(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            queue.to_array_into(None),
            Err(AdtError::NullArgument { what: "buffer" })
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn t_dequeue_all() {
        let mut queue: Queue<_> = (0..4).collect();
        queue.dequeue_all();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), Err(AdtError::EmptyCollection));
        assert_eq!(queue.dequeue(), Err(AdtError::EmptyCollection));
        queue.enqueue(9).unwrap();
        assert_eq!(queue.to_array(), [9]);
    }

    #[test]
    fn t_search() {
        let queue: Queue<_> = ["a", "b", "c", "b"].into_iter().collect();
        assert_eq!(queue.search(&"a"), 1);
        assert_eq!(queue.search(&"b"), 2);
        assert_eq!(queue.search(&"c"), 3);
        assert_eq!(queue.search(&"q"), -1);
        assert_eq!(queue.search(None), -1);
        assert_eq!(queue.contains(&"c"), Ok(true));
    }

    #[test]
    fn t_to_array() {
        let queue: Queue<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.to_array(), [1, 2, 3]);
        assert_eq!(
            queue.to_array_into(vec![Some(0); 4]),
            Ok(vec![Some(1), Some(2), Some(3), None])
        );
        assert_eq!(
            queue.to_array_into(vec![Some(0)]),
            Ok(vec![Some(1), Some(2), Some(3)])
        );
    }

    #[test]
    fn t_iterator() {
        let queue: Queue<_> = [1, 2].into_iter().collect();
        let mut it = queue.iterator();
        assert!(it.has_next());
        assert_eq!(it.try_next(), Ok(&1));
        assert_eq!(it.try_next(), Ok(&2));
        assert_eq!(it.try_next(), Err(AdtError::IterationExhausted));
    }

    #[test]
    fn t_cursor_sees_enqueue() {
        let mut queue: Queue<_> = [1].into_iter().collect();
        let mut cursor = queue.cursor();
        queue.enqueue(2).unwrap();
        assert_eq!(cursor.try_next(&queue), Ok(&1));
        queue.enqueue(3).unwrap();
        assert_eq!(cursor.try_next(&queue), Ok(&2));
        assert_eq!(queue.dequeue(), Ok(1));
        assert!(cursor.has_next(&queue));
        assert_eq!(cursor.try_next(&queue), Ok(&3));
        assert_eq!(cursor.try_next(&queue), Err(AdtError::IterationExhausted));
    }

    #[test]
    fn t_equals() {
        let mut a: Queue<i32> = Queue::new();
        let mut b: Queue<i32> = Queue::new();
        for x in [1, 2, 3] {
            a.enqueue(x).unwrap();
            b.enqueue(x).unwrap();
        }
        assert!(a.equals(&b));
        assert_eq!(a, b);

        let c: Queue<_> = [3, 2, 1].into_iter().collect();
        assert!(!a.equals(&c));
        b.dequeue().unwrap();
        assert!(!a.equals(&b));
    }

    #[test]
    fn t_new_queue() {
        let queue: Queue<_> = ["x"].into_iter().collect();
        let mut fresh = queue.new_queue();
        assert!(fresh.is_empty());
        fresh.enqueue("y").unwrap();
        assert_eq!(queue.to_array(), ["x"]);
        assert!(!queue.is_full());
        assert!(!ContainerCommon::is_full(&fresh));
    }

    fn drain_generic<Q: QueueAdt<char>>(queue: &mut Q) -> String {
        let mut out = String::new();
        while let Ok(c) = queue.dequeue() {
            out.push(c);
        }
        out
    }

    #[test]
    fn t_contract() {
        let mut queue: Queue<_> = "abc".chars().collect();
        assert!(QueueAdt::equals(&queue, &queue.clone()));
        assert_eq!(drain_generic(&mut queue), "abc");
        assert!(ContainerCommon::is_empty(&queue));
    }
}
