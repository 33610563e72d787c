//! The list contract shared by [`ArrayList`](super::ArrayList) and
//! [`DoublyLinkedList`](super::DoublyLinkedList).
//!
//! Element arguments are "nullable": every operation taking an element, a list or a
//! buffer accepts anything convertible into an `Option`, so plain values work as
//! expected (`list.add(1)`) while `None` is rejected with
//! [`AdtError::NullArgument`] before the list is touched.
//!
//! Value lookups that miss are not errors: [`List::remove_item`] returns `Ok(None)`.

use crate::error::AdtError;

/// Iteration contract on top of [`Iterator`].
///
/// `Iterator::next` returns `None` at the end, `try_next` reports
/// [`AdtError::IterationExhausted`] instead.
pub trait ContractIterator: Iterator {
    fn has_next(&self) -> bool;

    #[inline]
    fn try_next(&mut self) -> Result<Self::Item, AdtError> {
        self.next().ok_or(AdtError::IterationExhausted)
    }
}

pub trait List<T> {
    /// Borrowing iterator in index order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// The iterator returned by [`List::iterator`]. Its isolation from later
    /// mutation is implementation defined: the array list hands out a snapshot,
    /// the linked list walks its live links.
    type ContractIter<'a>: ContractIterator
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);

    /// Appends `element`.
    fn add(&mut self, element: impl Into<Option<T>>) -> Result<(), AdtError>;

    /// Inserts `element` before the element at `index`; `index == len` appends.
    fn insert(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<(), AdtError>;

    /// Appends every element of `other` in its iteration order, returns whether
    /// anything was appended.
    fn add_all<'a, L>(&mut self, other: impl Into<Option<&'a L>>) -> Result<bool, AdtError>
    where
        L: List<T> + 'a,
        T: Clone + 'a;

    fn get(&self, index: usize) -> Result<&T, AdtError>;

    /// Replaces the element at `index`, returns the previous one.
    fn set(&mut self, index: usize, element: impl Into<Option<T>>) -> Result<T, AdtError>;

    fn remove(&mut self, index: usize) -> Result<T, AdtError>;

    /// Removes the first element equal to `element`.
    fn remove_item<'a>(&mut self, element: impl Into<Option<&'a T>>) -> Result<Option<T>, AdtError>
    where
        T: PartialEq + 'a;

    fn contains<'a>(&self, element: impl Into<Option<&'a T>>) -> Result<bool, AdtError>
    where
        T: PartialEq + 'a;

    fn to_array(&self) -> Vec<T>
    where
        T: Clone;

    /// Copies the elements into `buf` if it is large enough, otherwise into a new
    /// buffer of exactly `len` slots. A reused buffer that is strictly larger gets
    /// `None` right after the last element.
    fn to_array_into(
        &self,
        buf: impl Into<Option<Vec<Option<T>>>>,
    ) -> Result<Vec<Option<T>>, AdtError>
    where
        T: Clone;

    fn iter(&self) -> Self::Iter<'_>;

    fn iterator(&self) -> Self::ContractIter<'_>
    where
        T: Clone;
}
