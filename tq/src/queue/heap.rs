//! Heap storage, index arithmetic and the two repair procedures

use tracing::{debug, trace};

use super::Schedulable;

fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

fn left(idx: usize) -> usize {
    2 * idx + 1
}

fn right(idx: usize) -> usize {
    2 * idx + 2
}

/// Min-priority queue over an array-encoded binary heap
///
/// Entries are owned by value. Callers refer to an enqueued entry by its
/// identity, so a priority can only change through [`decrease_key`] or
/// [`increase_key`], which restore the heap property before returning.
///
/// Identity lookup is a linear scan returning the first match in array
/// order. Inserting two entries with the same identity is allowed; key
/// adjustment then reaches whichever of them currently sits at the lower
/// index.
///
/// [`decrease_key`]: PriorityQueue::decrease_key
/// [`increase_key`]: PriorityQueue::increase_key
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` entries before
    /// reallocating. This is not a bound: the queue still grows past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of enqueued entries
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when nothing is enqueued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries in heap (array) order, not priority order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.heap.iter(),
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        debug!(len = self.heap.len(), "PriorityQueue::clear: called");
        self.heap.clear();
    }
}

impl<T: Schedulable> PriorityQueue<T> {
    /// The entry with the smallest priority, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// True if an entry with this identity is enqueued
    pub fn contains(&self, id: &T::Id) -> bool {
        self.find_index(id).is_some()
    }

    /// First enqueued entry with this identity
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.find_index(id).map(|idx| &self.heap[idx])
    }

    /// Add an entry and sift it up to its place
    pub fn insert(&mut self, entry: T) {
        debug!(len = self.heap.len(), "PriorityQueue::insert: called");
        self.heap.push(entry);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the entry with the smallest priority
    ///
    /// Returns `None` when the queue is empty.
    pub fn extract_min(&mut self) -> Option<T> {
        debug!(len = self.heap.len(), "PriorityQueue::extract_min: called");
        if self.heap.is_empty() {
            debug!("PriorityQueue::extract_min: queue is empty");
            return None;
        }
        let last_idx = self.heap.len() - 1;
        self.heap.swap(0, last_idx);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Lower the priority of the entry with identity `id`
    ///
    /// Returns `false` without touching the heap if no entry has that
    /// identity or if `new_priority` is not strictly below the current one.
    pub fn decrease_key(&mut self, id: &T::Id, new_priority: T::Priority) -> bool {
        debug!("PriorityQueue::decrease_key: called");
        let Some(idx) = self.find_index(id) else {
            debug!("PriorityQueue::decrease_key: identity not found");
            return false;
        };

        if new_priority >= self.heap[idx].priority() {
            debug!(idx, "PriorityQueue::decrease_key: new priority is not smaller, rejecting");
            return false;
        }

        self.heap[idx].set_priority(new_priority);
        self.sift_up(idx);
        true
    }

    /// Raise the priority of the entry with identity `id`
    ///
    /// Returns `false` without touching the heap if no entry has that
    /// identity or if `new_priority` is not strictly above the current one.
    pub fn increase_key(&mut self, id: &T::Id, new_priority: T::Priority) -> bool {
        debug!("PriorityQueue::increase_key: called");
        let Some(idx) = self.find_index(id) else {
            debug!("PriorityQueue::increase_key: identity not found");
            return false;
        };

        if new_priority <= self.heap[idx].priority() {
            debug!(idx, "PriorityQueue::increase_key: new priority is not larger, rejecting");
            return false;
        }

        self.heap[idx].set_priority(new_priority);
        self.sift_down(idx);
        true
    }

    /// Drain the queue in ascending priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    fn find_index(&self, id: &T::Id) -> Option<usize> {
        self.heap.iter().position(|entry| entry.id() == id)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let p = parent(idx);
            if self.heap[p].priority() > self.heap[idx].priority() {
                trace!(from = idx, to = p, "PriorityQueue::sift_up: swap");
                self.heap.swap(idx, p);
                idx = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let l = left(idx);
            let r = right(idx);
            let mut smallest = idx;

            if l < len && self.heap[l].priority() < self.heap[smallest].priority() {
                smallest = l;
            }
            if r < len && self.heap[r].priority() < self.heap[smallest].priority() {
                smallest = r;
            }

            if smallest == idx {
                break;
            }
            trace!(from = idx, to = smallest, "PriorityQueue::sift_down: swap");
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Schedulable> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: Schedulable> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a queue's entries in heap order
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
