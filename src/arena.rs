use alloc::vec::Vec;
use core::ops::Index;
use core::ops::IndexMut;
use core::panic;

use crate::Ptr;

#[cold]
#[inline(never)]
fn vacant_slot() -> ! {
    panic!("Attempted to access data of vacant slot");
}

/// One stored entry plus its position in the linked chain.
///
/// `prev`/`next` are non-owning handles used only for traversal; the arena
/// slot is the single owner of the key and value. The hash is cached so the
/// table can be resized without re-hashing keys.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) prev: Option<Ptr>,
    pub(crate) next: Option<Ptr>,
}

#[derive(Debug, Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<Ptr> },
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<Ptr>,
}

impl<K, V> Arena<K, V> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free_head: None,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    pub(crate) fn alloc(
        &mut self,
        key: K,
        value: V,
        hash: u64,
        prev: Option<Ptr>,
        next: Option<Ptr>,
    ) -> Ptr {
        let node = Node {
            hash,
            key,
            value,
            prev,
            next,
        };
        if let Some(ptr) = self.free_head {
            let slot =
                core::mem::replace(&mut self.slots[ptr.index()], Slot::Occupied(node));
            self.free_head = match slot {
                Slot::Vacant { next_free } => next_free,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            };
            ptr
        } else {
            let ptr = Ptr::from_index(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            ptr
        }
    }

    pub(crate) fn free(&mut self, ptr: Ptr) -> Node<K, V> {
        assert!(self.is_occupied(ptr), "Pointer to free must be occupied");
        let slot = core::mem::replace(
            &mut self.slots[ptr.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(ptr);

        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }

    pub(crate) fn get(&self, ptr: Ptr) -> Option<&Node<K, V>> {
        match self.slots.get(ptr.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, ptr: Ptr) -> Option<&mut Node<K, V>> {
        match self.slots.get_mut(ptr.index()) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub(crate) fn is_occupied(&self, ptr: Ptr) -> bool {
        matches!(
            self.slots.get(ptr.index()),
            Some(Slot::Occupied(_))
        )
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        // This may not shrink anything if the arena has vacant interior
        // slots. The nodes cannot be moved to compact the arena, since there
        // may be external Ptrs pointing to them.
        self.slots.shrink_to_fit();
    }
}

impl<K, V> Index<Ptr> for Arena<K, V> {
    type Output = Node<K, V>;

    fn index(&self, ptr: Ptr) -> &Self::Output {
        match &self.slots[ptr.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }
}

impl<K, V> IndexMut<Ptr> for Arena<K, V> {
    fn index_mut(&mut self, ptr: Ptr) -> &mut Self::Output {
        match &mut self.slots[ptr.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => vacant_slot(),
        }
    }
}
