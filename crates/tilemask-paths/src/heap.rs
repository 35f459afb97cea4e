//! Binary heap over items that track their own slot.
//!
//! [`IndexedHeap`] stores arena ids rather than items. The arena (a slice of
//! `T`) is passed to every operation, and each item records the slot it
//! currently occupies through [`HeapItem`]. Membership tests are O(1) and a
//! priority improvement is repaired in place with [`IndexedHeap::update_item`]
//! instead of pushing duplicate entries.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// An item that remembers its position inside an [`IndexedHeap`].
///
/// Only the heap writes the slot.
pub trait HeapItem {
    fn heap_slot(&self) -> usize;
    fn set_heap_slot(&mut self, slot: usize);
}

/// Ranking used by an [`IndexedHeap`].
///
/// `compare(a, b)` returns [`Ordering::Less`] when `a` should leave the heap
/// before `b`.
pub trait HeapOrder<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Fixed-capacity binary heap of arena ids.
#[derive(Debug, Clone)]
pub struct IndexedHeap<T, O> {
    items: Vec<usize>,
    capacity: usize,
    order: O,
    _item: PhantomData<fn(&T)>,
}

impl<T: HeapItem, O: HeapOrder<T>> IndexedHeap<T, O> {
    /// Create an empty heap able to hold `capacity` ids.
    pub fn new(capacity: usize, order: O) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            order,
            _item: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ids in heap order (slot 0 is the root).
    #[inline]
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// The best id without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.items.first().copied()
    }

    /// Drop every entry. Capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Insert `id` and restore heap order.
    ///
    /// # Panics
    ///
    /// Panics if the heap is full.
    pub fn add(&mut self, arena: &mut [T], id: usize) {
        assert!(
            self.items.len() < self.capacity,
            "indexed heap full (capacity {})",
            self.capacity
        );
        let slot = self.items.len();
        arena[id].set_heap_slot(slot);
        self.items.push(id);
        self.sift_up(arena, id);
    }

    /// Remove and return the best id, or `None` if the heap is empty.
    pub fn remove_best(&mut self, arena: &mut [T]) -> Option<usize> {
        let last = self.items.pop()?;
        if self.items.is_empty() {
            return Some(last);
        }
        let best = self.items[0];
        self.items[0] = last;
        arena[last].set_heap_slot(0);
        self.sift_down(arena, last);
        Some(best)
    }

    /// Restore heap order after `id`'s priority improved.
    ///
    /// Only moves the item toward the root; a worsened priority is not
    /// repaired.
    #[inline]
    pub fn update_item(&mut self, arena: &mut [T], id: usize) {
        self.sift_up(arena, id);
    }

    /// Whether `id` is currently queued. O(1).
    #[inline]
    pub fn contains(&self, arena: &[T], id: usize) -> bool {
        let slot = arena[id].heap_slot();
        self.items.get(slot) == Some(&id)
    }

    fn sift_up(&mut self, arena: &mut [T], id: usize) {
        let mut slot = arena[id].heap_slot();
        while slot > 0 {
            let parent_slot = (slot - 1) / 2;
            let parent = self.items[parent_slot];
            if self.order.compare(&arena[id], &arena[parent]) != Ordering::Less {
                break;
            }
            self.swap(arena, slot, parent_slot);
            slot = parent_slot;
        }
    }

    fn sift_down(&mut self, arena: &mut [T], id: usize) {
        let mut slot = arena[id].heap_slot();
        let count = self.items.len();
        loop {
            let left = slot * 2 + 1;
            if left >= count {
                return;
            }
            let right = left + 1;
            let mut child = left;
            // Ties go to the left child.
            if right < count
                && self
                    .order
                    .compare(&arena[self.items[right]], &arena[self.items[left]])
                    == Ordering::Less
            {
                child = right;
            }
            if self.order.compare(&arena[self.items[child]], &arena[id]) != Ordering::Less {
                return;
            }
            self.swap(arena, slot, child);
            slot = child;
        }
    }

    fn swap(&mut self, arena: &mut [T], a: usize, b: usize) {
        self.items.swap(a, b);
        arena[self.items[a]].set_heap_slot(a);
        arena[self.items[b]].set_heap_slot(b);
    }
}
