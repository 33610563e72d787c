use std::{fmt, hash, iter::FusedIterator};

use crate::{
    collections::{ArrayList, ContractIterator, adapter::ContainerCommon, array_list},
    error::{AdtError, non_null},
    slice::fill_buffer,
};

/// LIFO contract. Orders are top-to-bottom everywhere: [`to_array`](Self::to_array),
/// [`iterator`](Self::iterator) and [`equals`](Self::equals).
pub trait StackAdt<T>: ContainerCommon {
    type Iter<'a>: ContractIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// An empty stack of the same kind, independent from `self`.
    fn new_stack(&self) -> Self
    where
        Self: Sized;

    fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError>;

    fn pop(&mut self) -> Result<T, AdtError>;

    fn peek(&self) -> Result<&T, AdtError>;

    fn clear(&mut self);

    fn contains<'a>(&self, value: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a;

    /// 1-based distance from the top of the first equal element, `-1` if absent.
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

    /// Same size and pairwise equal elements from the top down.
    fn equals<S>(&self, other: &S) -> bool
    where
        S: StackAdt<T>,
        T: PartialEq,
    {
        self.len() == other.len() && self.iterator().eq(other.iterator())
    }
}

/// Unbounded stack on top of an [`ArrayList`]; the top is the last index.
pub struct Stack<T> {
    list: ArrayList<T>,
}

impl<T> Stack<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            list: ArrayList::new(),
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

    #[inline]
    pub fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError> {
        let value = non_null(value, "element")?;
        self.list.push_value(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, AdtError> {
        let top = self.len().checked_sub(1).ok_or(AdtError::EmptyCollection)?;
        self.list.remove(top)
    }

    pub fn peek(&self) -> Result<&T, AdtError> {
        self.list.last().ok_or(AdtError::EmptyCollection)
    }

    #[inline]
    pub fn clear(&mut self) {
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
        let Some(value) = value.into() else {
            return -1;
        };
        self.iter()
            .position(|x| x == value)
            .map_or(-1, |depth| depth as isize + 1)
    }

    /// Top-to-bottom.
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
        Ok(fill_buffer(buf, self.len(), self.iter().cloned()))
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.list.iter().rev(),
        }
    }

    /// Top-to-bottom over the stack as it is now.
    #[inline]
    pub fn iterator(&self) -> Iter<'_, T> {
        self.iter()
    }

    /// Detached top-to-bottom cursor. See [`StackCursor`].
    #[inline]
    pub fn cursor(&self) -> StackCursor {
        StackCursor {
            index: self.len().checked_sub(1),
        }
    }

    pub fn equals<S>(&self, other: &S) -> bool
    where
        S: StackAdt<T>,
        T: PartialEq,
    {
        self.len() == other.len() && self.iter().eq(other.iterator())
    }

    #[inline]
    pub fn new_stack(&self) -> Self {
        Self::new()
    }
}

impl<T> ContainerCommon for Stack<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.list.capacity()
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

impl<T> StackAdt<T> for Stack<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    #[inline]
    fn new_stack(&self) -> Self {
        self.new_stack()
    }

    #[inline]
    fn push(&mut self, value: impl Into<Option<T>>) -> Result<(), AdtError> {
        self.push(value)
    }

    #[inline]
    fn pop(&mut self) -> Result<T, AdtError> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Result<&T, AdtError> {
        self.peek()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear()
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
    fn equals<S>(&self, other: &S) -> bool
    where
        S: StackAdt<T>,
        T: PartialEq,
    {
        self.equals(other)
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Stack<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("list", &self.list).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: hash::Hash> hash::Hash for Stack<T> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&self.list, state);
    }
}

/// Pushes in iteration order, so the last element ends up on top.
impl<T> Extend<T> for Stack<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Top-to-bottom iterator over a [`Stack`].
pub struct Iter<'a, T> {
    inner: std::iter::Rev<array_list::Iter<'a, T>>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ContractIterator for Iter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.len() != 0
    }
}

/// Top-to-bottom cursor that does not borrow the [`Stack`].
///
/// It walks descending indices of the backing list and reads the stack as it is
/// at each step. Popping below the cursor's position makes the next step fail
/// with [`AdtError::IndexOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackCursor {
    index: Option<usize>,
}

impl StackCursor {
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index.is_some()
    }

    pub fn try_next<'a, T>(&mut self, stack: &'a Stack<T>) -> Result<&'a T, AdtError> {
        let index = self.index.ok_or(AdtError::IterationExhausted)?;
        let value = stack.list.get(index)?;
        self.index = index.checked_sub(1);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_push_pop() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.push(1), Ok(()));
        assert_eq!(stack.push(2), Ok(()));
        assert_eq!(stack.peek(), Ok(&2));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), Err(AdtError::EmptyCollection));
        assert_eq!(stack.peek(), Err(AdtError::EmptyCollection));
    }

    #[test]
    fn t_null_rejected() {
        let mut stack = Stack::from_iter([1]);
        assert_eq!(
            stack.push(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            stack.contains(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            stack.to_array_into(None),
            Err(AdtError::NullArgument { what: "buffer" })
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn t_cleared() {
        let mut stack: Stack<_> = (0..5).collect();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), Err(AdtError::EmptyCollection));
        assert_eq!(stack.pop(), Err(AdtError::EmptyCollection));
    }

    #[test]
    fn t_search() {
        let stack: Stack<_> = ["a", "b", "c"].into_iter().collect();
        assert_eq!(stack.search(&"c"), 1);
        assert_eq!(stack.search(&"b"), 2);
        assert_eq!(stack.search(&"a"), 3);
        assert_eq!(stack.search(&"x"), -1);
        assert_eq!(stack.search(None), -1);
        assert_eq!(stack.contains(&"a"), Ok(true));
        assert_eq!(stack.contains(&"x"), Ok(false));
    }

    #[test]
    fn t_search_first_from_top() {
        let stack: Stack<_> = [7, 8, 7, 9].into_iter().collect();
        assert_eq!(stack.search(&7), 2);
    }

    #[test]
    fn t_to_array() {
        let stack: Stack<_> = [1, 2, 3].into_iter().collect();
        assert_eq!(stack.to_array(), [3, 2, 1]);
        assert_eq!(
            stack.to_array_into(vec![Some(0); 5]),
            Ok(vec![Some(3), Some(2), Some(1), None, Some(0)])
        );
        assert_eq!(
            stack.to_array_into(vec![Some(0); 3]),
            Ok(vec![Some(3), Some(2), Some(1)])
        );
        assert_eq!(
            stack.to_array_into(vec![]),
            Ok(vec![Some(3), Some(2), Some(1)])
        );
    }

    #[test]
    fn t_iterator() {
        let stack: Stack<_> = [1, 2, 3].into_iter().collect();
        let mut it = stack.iterator();
        assert_eq!(it.try_next(), Ok(&3));
        assert_eq!(it.try_next(), Ok(&2));
        assert_eq!(it.try_next(), Ok(&1));
        assert!(!it.has_next());
        assert_eq!(it.try_next(), Err(AdtError::IterationExhausted));
    }

    #[test]
    fn t_cursor() {
        let mut stack: Stack<_> = [1, 2, 3].into_iter().collect();
        let mut cursor = stack.cursor();
        assert_eq!(cursor.try_next(&stack), Ok(&3));
        stack.push(4).unwrap();
        assert_eq!(cursor.try_next(&stack), Ok(&2));
        for _ in 0..4 {
            stack.pop().unwrap();
        }
        assert!(cursor.has_next());
        assert_eq!(
            cursor.try_next(&stack),
            Err(AdtError::IndexOutOfRange { index: 0, len: 0 })
        );

        let mut cursor = Stack::<i32>::new().cursor();
        assert_eq!(cursor.try_next(&stack), Err(AdtError::IterationExhausted));
    }

    #[test]
    fn t_equals() {
        let mut a: Stack<&str> = Stack::new();
        let mut b: Stack<&str> = Stack::new();
        for x in ["x", "y", "z"] {
            a.push(x).unwrap();
            b.push(x).unwrap();
        }
        assert!(a.equals(&b));
        assert_eq!(a, b);

        let c: Stack<_> = ["z", "y", "x"].into_iter().collect();
        assert!(!a.equals(&c));
        b.pop().unwrap();
        assert!(!a.equals(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn t_new_stack() {
        let stack: Stack<_> = [1, 2].into_iter().collect();
        let mut fresh = stack.new_stack();
        assert!(fresh.is_empty());
        fresh.push(3).unwrap();
        assert_eq!(stack.len(), 2);
        assert!(!stack.is_full());
    }

    fn drain_generic<S: StackAdt<i32>>(stack: &mut S) -> Vec<i32> {
        let mut out = Vec::new();
        while !stack.is_empty() {
            out.push(stack.pop().unwrap());
        }
        out
    }

    #[test]
    fn t_contract() {
        let mut stack: Stack<_> = (1..=4).collect();
        assert!(StackAdt::equals(&stack, &stack.clone()));
        assert_eq!(drain_generic(&mut stack), [4, 3, 2, 1]);
        assert!(!ContainerCommon::is_full(&stack));
    }
}
