use std::{
    ops::{Index, IndexMut},
    sync::atomic::{self, AtomicU64},
};

/// Stable handle to a node inside one [`NodeArena`].
///
/// A handle outlives its node only as a stale value: once the node is released the
/// slot's generation moves on and the handle no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: usize,
    generation: u64,
}

/// Identity of an arena, so handles from one list are never resolved in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArenaId(u64);

impl ArenaId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// One element and the links to its neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    element: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(element: T, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self {
            element,
            prev,
            next,
        }
    }

    #[inline]
    pub(crate) fn element(&self) -> &T {
        &self.element
    }

    #[inline]
    pub(crate) fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    #[inline]
    pub(crate) fn into_element(self) -> T {
        self.element
    }

    #[inline]
    pub(crate) fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    #[inline]
    pub(crate) fn next(&self) -> Option<NodeId> {
        self.next
    }

    #[inline]
    pub(crate) fn set_prev(&mut self, prev: Option<NodeId>) {
        self.prev = prev;
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NodeId>) {
        self.next = next;
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied {
        generation: u64,
        node: Node<T>,
    },
    Vacant {
        generation: u64,
        next_free: Option<usize>,
    },
}

/// Slot storage for the nodes of one list. Released slots are chained into a free
/// list and reused by later insertions.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    id: ArenaId,
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            id: ArenaId::next(),
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> ArenaId {
        self.id
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        let Some(index) = self.free else {
            let index = self.slots.len();
            #[cfg(feature = "tracing")]
            tracing::trace!(index, "node slot allocated");
            self.slots.push(Slot::Occupied {
                generation: 0,
                node,
            });
            return NodeId {
                index,
                generation: 0,
            };
        };
        let slot = &mut self.slots[index];
        let (generation, next_free) = match *slot {
            Slot::Vacant {
                generation,
                next_free,
            } => (generation, next_free),
            Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(index, generation, "node slot reused");
        *slot = Slot::Occupied { generation, node };
        self.free = next_free;
        NodeId { index, generation }
    }

    /// Releases the node behind `id` and hands it back with its element and links.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        let slot = self.slots.get_mut(id.index)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == id.generation => {}
            _ => return None,
        }
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free,
        };
        let Slot::Occupied { node, .. } = std::mem::replace(slot, vacant) else {
            return None;
        };
        self.free = Some(id.index);
        self.len -= 1;
        #[cfg(feature = "tracing")]
        tracing::trace!(index = id.index, "node slot released");
        Some(node)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Releases every node. Generations keep counting, so handles taken before the
    /// clear stay stale.
    pub(crate) fn clear(&mut self) {
        let mut free = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match *slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free: free,
            };
            free = Some(index);
        }
        self.free = free;
        self.len = 0;
    }
}

impl<T: Clone> Clone for NodeArena<T> {
    fn clone(&self) -> Self {
        Self {
            id: ArenaId::next(),
            slots: self.slots.clone(),
            free: self.free,
            len: self.len,
        }
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?}"),
        }
    }
}
