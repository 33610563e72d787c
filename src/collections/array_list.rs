pub mod iter;

use std::{fmt, hash};

use crate::{
    collections::List,
    error::{AdtError, non_null},
    slice::{check_index, check_insert_index, fill_buffer},
};

pub use iter::{Iter, SnapshotIter};

/// Growable array list.
///
/// Slots `[0, len)` of the buffer hold the elements in order, slots `[len, capacity)`
/// are always `None`. The buffer is reallocated only when an insertion would not
/// fit and it never shrinks.
///
/// [`ArrayList::iterator`] returns a snapshot: mutating the list afterwards does not
/// change what an already obtained iterator yields.
pub struct ArrayList<T> {
    buf: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    pub const DEFAULT_CAPACITY: usize = 10;

    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Capacities below [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) are raised to it.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(Self::DEFAULT_CAPACITY);
        Self {
            buf: std::iter::repeat_with(|| None).take(capacity).collect(),
            len: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Makes room for at least `min_capacity` elements.
    ///
    /// The new capacity is `2 * capacity + 1`, or `min_capacity` if that is still
    /// not enough.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let capacity = self.capacity();
        if capacity >= min_capacity {
            return;
        }
        let new_capacity = capacity
            .saturating_mul(2)
            .saturating_add(1)
            .max(min_capacity);
        self.reallocate(new_capacity);
    }

    fn reallocate(&mut self, new_capacity: usize) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity,
            "array list buffer reallocated"
        );
        let mut buf = std::mem::take(&mut self.buf).into_vec();
        buf.resize_with(new_capacity, || None);
        self.buf = buf.into_boxed_slice();
    }

    #[inline]
    fn out_of_range(&self, index: usize) -> AdtError {
        AdtError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    #[inline]
    fn live_slots(&self) -> &[Option<T>] {
        &self.buf[..self.len]
    }

    pub(crate) fn push_value(&mut self, element: T) {
        self.ensure_capacity(self.len + 1);
        self.buf[self.len] = Some(element);
        self.len += 1;
    }

    pub fn add(&mut self, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        let element = non_null(element, "element")?;
        self.push_value(element);
        Ok(())
    }

    /// Shifts the elements at and after `index` one slot to the right.
    pub fn insert(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<(), AdtError> {
        let element = non_null(element, "element")?;
        let index = check_insert_index(index, self.len)?;
        self.ensure_capacity(self.len + 1);
        // slot `len` is free, rotating moves it to `index`
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = Some(element);
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
            self.push_value(element.clone());
            changed = true;
        }
        Ok(changed)
    }

    pub fn get(&self, index: usize) -> Result<&T, AdtError> {
        let index = check_index(index, self.len)?;
        self.buf[index]
            .as_ref()
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, AdtError> {
        let index = check_index(index, self.len)?;
        let len = self.len;
        self.buf[index]
            .as_mut()
            .ok_or(AdtError::IndexOutOfRange { index, len })
    }

    pub fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<T, AdtError> {
        let element = non_null(element, "element")?;
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element))
    }

    /// Shifts the trailing elements one slot to the left and clears the vacated slot.
    pub fn remove(&mut self, index: usize) -> Result<T, AdtError> {
        let index = check_index(index, self.len)?;
        let removed = self.buf[index].take();
        // the emptied slot travels to `len - 1`
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        removed.ok_or_else(|| self.out_of_range(index))
    }

    pub fn remove_item<'a>(
        &mut self,
        element: impl Into<Option<&'a T>>,
    ) -> Result<Option<T>, AdtError>
    where
        T: PartialEq + 'a,
    {
        let element = non_null(element, "element")?;
        match self.position(element) {
            Some(index) => self.remove(index).map(Some),
            None => Ok(None),
        }
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

    /// Drops every element, keeps the capacity.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(dropped = self.len, "array list cleared");
        self.buf[..self.len].iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.live_slots().first()?.as_ref()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.live_slots().last()?.as_ref()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live_slots().iter())
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

    /// Snapshot of the current elements in index order.
    #[inline]
    pub fn iterator(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter::new(self.to_array())
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    type ContractIter<'a>
        = SnapshotIter<T>
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

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: hash::Hash> hash::Hash for ArrayList<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| hash::Hash::hash(x, state));
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.ensure_capacity(self.len.saturating_add(iter.size_hint().0));
        iter.for_each(|x| self.push_value(x));
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        SnapshotIter::new(self.buf.into_vec().into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::list::ContractIterator;

    use super::*;

    #[test]
    fn t_new() {
        let list = ArrayList::<i32>::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), ArrayList::<i32>::DEFAULT_CAPACITY);
        assert_eq!(ArrayList::<i32>::with_capacity(3).capacity(), 10);
        assert_eq!(ArrayList::<i32>::with_capacity(32).capacity(), 32);
    }

    #[test]
    fn t_add_get() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.add(1), Ok(()));
        assert_eq!(list.add(2), Ok(()));
        assert_eq!(list.get(0), Ok(&1));
        assert_eq!(list.get(1), Ok(&2));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn t_insert() {
        let mut list = ArrayList::from([1, 3]);
        assert_eq!(list.insert(1, 2), Ok(()));
        assert_eq!(list.insert(0, 0), Ok(()));
        assert_eq!(list.insert(4, 4), Ok(()));
        assert_eq!(list.to_array(), [0, 1, 2, 3, 4]);
        assert_eq!(
            list.insert(6, 6),
            Err(AdtError::IndexOutOfRange { index: 6, len: 5 })
        );
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn t_insert_then_get() {
        for i in 0..=4 {
            let mut list = ArrayList::from([10, 11, 12, 13]);
            list.insert(i, 99).unwrap();
            assert_eq!(list.get(i), Ok(&99));
            assert_eq!(list.len(), 5);
        }
    }

    #[test]
    fn t_null_rejected() {
        let mut list = ArrayList::from([1, 2]);
        assert_eq!(
            list.add(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            list.insert(0, None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            list.set(0, None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            list.remove_item(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            list.contains(None),
            Err(AdtError::NullArgument { what: "element" })
        );
        assert_eq!(
            list.to_array_into(None),
            Err(AdtError::NullArgument { what: "buffer" })
        );
        assert_eq!(
            list.add_all(None::<&ArrayList<i32>>),
            Err(AdtError::NullArgument { what: "list" })
        );
        assert_eq!(list.to_array(), [1, 2]);
    }

    #[test]
    fn t_null_checked_before_index() {
        let mut list = ArrayList::<i32>::new();
        assert_eq!(
            list.insert(7, None),
            Err(AdtError::NullArgument { what: "element" })
        );
    }

    #[test]
    fn t_out_of_range() {
        let mut list = ArrayList::from(["a", "b", "c"]);
        let err = AdtError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(list.get(3), Err(err));
        assert_eq!(list.set(3, "d"), Err(err));
        assert_eq!(list.remove(3), Err(err));
        assert_eq!(
            list.get(usize::MAX),
            Err(AdtError::IndexOutOfRange {
                index: usize::MAX,
                len: 3,
            })
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn t_set() {
        let mut list = ArrayList::from(["a", "b"]);
        assert_eq!(list.set(1, "z"), Ok("b"));
        assert_eq!(list.to_array(), ["a", "z"]);
    }

    #[test]
    fn t_remove() {
        let mut list = ArrayList::from([1, 2, 3, 4]);
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Ok(&3));
        assert_eq!(list.remove(2), Ok(4));
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(0), Ok(3));
        assert!(list.is_empty());
        assert!(list.buf.iter().all(Option::is_none));
    }

    #[test]
    fn t_remove_item() {
        let mut list = ArrayList::from([1, 2, 3, 2]);
        assert_eq!(list.remove_item(&2), Ok(Some(2)));
        assert_eq!(list.to_array(), [1, 3, 2]);
        assert_eq!(list.remove_item(&7), Ok(None));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn t_contains() {
        let list = ArrayList::from([String::from("x"), String::from("y")]);
        assert_eq!(list.contains(&String::from("y")), Ok(true));
        assert_eq!(list.contains(&String::from("q")), Ok(false));
    }

    #[test]
    fn t_growth() {
        let mut list: ArrayList<i32> = ArrayList::new();
        for i in 0..10 {
            list.add(i).unwrap();
        }
        assert_eq!(list.capacity(), 10);
        list.add(10).unwrap();
        assert_eq!(list.capacity(), 21);
        list.ensure_capacity(100);
        assert_eq!(list.capacity(), 100);
        assert_eq!(list.to_array(), (0..=10).collect::<Vec<_>>());
        assert!(list.buf[list.len()..].iter().all(Option::is_none));
    }

    #[test]
    fn t_add_all() {
        let mut list = ArrayList::from([1, 2]);
        let other = ArrayList::from([3, 4, 5]);
        assert_eq!(list.add_all(&other), Ok(true));
        assert_eq!(list.to_array(), [1, 2, 3, 4, 5]);
        assert_eq!(list.add_all(&ArrayList::new()), Ok(false));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn t_to_array_into() {
        let list = ArrayList::from([1, 2]);
        let out = list.to_array_into(vec![Some(7); 4]).unwrap();
        assert_eq!(out, [Some(1), Some(2), None, Some(7)]);
        let out = list.to_array_into(vec![]).unwrap();
        assert_eq!(out, [Some(1), Some(2)]);
        let out = list.to_array_into(vec![Some(0), Some(0)]).unwrap();
        assert_eq!(out, [Some(1), Some(2)]);
    }

    #[test]
    fn t_clear() {
        let mut list: ArrayList<_> = (0..30).collect();
        let capacity = list.capacity();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), capacity);
        assert!(list.buf.iter().all(Option::is_none));
        assert_eq!(
            list.get(0),
            Err(AdtError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn t_snapshot_iterator() {
        let mut list = ArrayList::from([1, 2, 3]);
        let mut it = list.iterator();
        assert_eq!(it.try_next(), Ok(1));
        list.add(4).unwrap();
        list.remove(0).unwrap();
        list.set(0, 20).unwrap();
        assert!(it.has_next());
        assert_eq!(it.try_next(), Ok(2));
        assert_eq!(it.try_next(), Ok(3));
        assert!(!it.has_next());
        assert_eq!(it.try_next(), Err(AdtError::IterationExhausted));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn t_traits() {
        let a: ArrayList<_> = (1..=3).collect();
        let mut b = ArrayList::with_capacity(64);
        b.extend([1, 2, 3]);
        assert_eq!(a, b);
        assert_eq!(format!("{:?}", a), "[1, 2, 3]");
        assert_eq!(a.clone(), a);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(
            (&b).into_iter().rev().copied().collect::<Vec<_>>(),
            [3, 2, 1]
        );
        assert_eq!(b.first(), Some(&1));
        assert_eq!(b.last(), Some(&3));
    }
}
