//! A binary min-heap with arbitrary-element removal.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

/// A binary min-heap over items `T`, ordered by a caller-supplied score
/// extractor.
///
/// Item identity (for [`remove`](Self::remove) and
/// [`contains`](Self::contains)) follows `T`'s `Eq`/`Hash`, which may be
/// coarser than full value equality — the search engine compares open-set
/// entries by node id only. A position map keeps `contains` O(1) and lets
/// `remove` re-heapify from the vacated slot in O(log n), which is what
/// stands in for a decrease-key primitive: callers remove the stale entry
/// and push the improved one.
///
/// Pushing an item that is already contained is a logic error; callers
/// must remove first.
pub struct MinHeap<T, K, S>
where
    T: Copy + Eq + Hash,
    K: Ord,
    S: Fn(&T) -> K,
{
    data: Vec<T>,
    pos: HashMap<T, usize>,
    score: S,
    _key: PhantomData<fn() -> K>,
}

impl<T, K, S> MinHeap<T, K, S>
where
    T: Copy + Eq + Hash,
    K: Ord,
    S: Fn(&T) -> K,
{
    /// Create an empty heap using `score` as the ordering key.
    pub fn new(score: S) -> Self {
        Self {
            data: Vec::new(),
            pos: HashMap::new(),
            score,
            _key: PhantomData,
        }
    }

    /// Number of items in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the heap holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether an item equal to `item` is in the heap. O(1).
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.pos.contains_key(item)
    }

    /// The minimum-scored item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Insert `item`, restoring heap order by sifting up. O(log n).
    pub fn push(&mut self, item: T) {
        debug_assert!(!self.contains(&item), "push of an item already in the heap");
        let idx = self.data.len();
        self.data.push(item);
        self.pos.insert(item, idx);
        self.sift_up(idx);
    }

    /// Remove and return the minimum-scored item. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap_entries(0, last);
        let item = self.data.pop()?;
        self.pos.remove(&item);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Remove the item equal to `item`, wherever it sits, re-heapifying
    /// from its slot. Returns the stored item, or `None` if absent.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let idx = self.pos.get(item).copied()?;
        let last = self.data.len() - 1;
        self.swap_entries(idx, last);
        let removed = self.data.pop()?;
        self.pos.remove(&removed);
        if idx < self.data.len() {
            // The swapped-in element may violate order in either direction.
            self.sift_down(idx);
            self.sift_up(idx);
        }
        Some(removed)
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.pos.insert(self.data[a], a);
        self.pos.insert(self.data[b], b);
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.score)(&self.data[idx]) < (self.score)(&self.data[parent]) {
                self.swap_entries(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < self.data.len()
                && (self.score)(&self.data[left]) < (self.score)(&self.data[smallest])
            {
                smallest = left;
            }
            if right < self.data.len()
                && (self.score)(&self.data[right]) < (self.score)(&self.data[smallest])
            {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }
}
