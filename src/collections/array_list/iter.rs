use core::{fmt, iter::FusedIterator, slice};

use crate::collections::list::ContractIterator;

/// Borrowing iterator over the live slots of an [`ArrayList`](super::ArrayList).
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    #[inline(always)]
    pub(crate) fn new(slots: slice::Iter<'a, Option<T>>) -> Self {
        Self { slots }
    }
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
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
        self.slots.next()?.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ContractIterator for Iter<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.len() != 0
    }
}

/// Owning iterator over a copy of the elements taken when it was created.
pub struct SnapshotIter<T> {
    snapshot: std::vec::IntoIter<T>,
}

impl<T> SnapshotIter<T> {
    #[inline(always)]
    pub(crate) fn new(snapshot: Vec<T>) -> Self {
        Self {
            snapshot: snapshot.into_iter(),
        }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.snapshot.as_slice()
    }
}

impl<T: Clone> Clone for SnapshotIter<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SnapshotIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SnapshotIter")
            .field(&self.as_slice())
            .finish()
    }
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.snapshot.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.snapshot.size_hint()
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T> DoubleEndedIterator for SnapshotIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.snapshot.next_back()
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {
    #[inline]
    fn len(&self) -> usize {
        self.snapshot.len()
    }
}

impl<T> FusedIterator for SnapshotIter<T> {}

impl<T> ContractIterator for SnapshotIter<T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.len() != 0
    }
}
