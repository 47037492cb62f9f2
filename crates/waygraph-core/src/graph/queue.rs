//! Min-priority queue with decrease-key
//!
//! Indexed binary heap: every key's slot is tracked, so a queued key's
//! priority can be changed in place instead of pushing a duplicate.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Entry<K> {
    key: K,
    priority: f64,
}

/// Binary min-heap keyed by `K` with `f64` priorities.
///
/// Priorities are compared with [`f64::total_cmp`], so `+inf` sorts after
/// every finite value. Each key appears at most once.
#[derive(Debug, Clone)]
pub struct UpdatablePriorityQueue<K> {
    heap: Vec<Entry<K>>,
    slots: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> UpdatablePriorityQueue<K> {
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.slots.contains_key(key)
    }

    /// Current priority of `key`, if queued
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.slots.get(key).map(|&i| self.heap[i].priority)
    }

    /// Smallest entry without removing it
    pub fn peek(&self) -> Option<(&K, f64)> {
        self.heap.first().map(|e| (&e.key, e.priority))
    }

    /// Insert `key`, or set its priority if already queued (up or down).
    pub fn enqueue(&mut self, key: K, priority: f64) {
        if let Some(&slot) = self.slots.get(&key) {
            self.set_priority(slot, priority);
            return;
        }
        let slot = self.heap.len();
        self.slots.insert(key.clone(), slot);
        self.heap.push(Entry { key, priority });
        self.sift_up(slot);
    }

    /// Lower the priority of a queued key.
    ///
    /// Returns false, leaving the queue untouched, if `key` is not queued or
    /// `priority` is not lower than its current one.
    pub fn decrease_priority(&mut self, key: &K, priority: f64) -> bool {
        let Some(&slot) = self.slots.get(key) else {
            return false;
        };
        if priority.total_cmp(&self.heap[slot].priority) != Ordering::Less {
            return false;
        }
        self.heap[slot].priority = priority;
        self.sift_up(slot);
        true
    }

    /// Remove and return the entry with the smallest priority
    pub fn dequeue(&mut self) -> Option<(K, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.priority))
    }

    /// Remove `key` wherever it sits; returns its priority
    pub fn remove(&mut self, key: &K) -> Option<f64> {
        let slot = *self.slots.get(key)?;
        let last = self.heap.len() - 1;
        self.swap(slot, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.key);
        if slot < self.heap.len() {
            self.sift_down(slot);
            self.sift_up(slot);
        }
        Some(entry.priority)
    }

    fn set_priority(&mut self, slot: usize, priority: f64) {
        let old = std::mem::replace(&mut self.heap[slot].priority, priority);
        match priority.total_cmp(&old) {
            Ordering::Less => self.sift_up(slot),
            Ordering::Greater => self.sift_down(slot),
            Ordering::Equal => {}
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].priority.total_cmp(&self.heap[b].priority) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key.clone(), a);
        self.slots.insert(self.heap[b].key.clone(), b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

impl<K: Eq + Hash + Clone> Default for UpdatablePriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}
