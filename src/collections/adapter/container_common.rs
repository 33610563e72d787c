use crate::collections::{ArrayList, DoublyLinkedList};

pub trait ContainerCommon {
    fn len(&self) -> usize;

    fn capacity(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}

impl<T> ContainerCommon for ArrayList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    /// The buffer grows on demand.
    #[inline]
    fn is_full(&self) -> bool {
        false
    }
}

impl<T> ContainerCommon for DoublyLinkedList<T> {
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
        false
    }
}
