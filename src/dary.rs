//! Indexed D-ary Min-Heap
//!
//! A priority queue over `N` key slots (`0..N`), each slot holding at most one
//! value. Values are kept in heap order using a configurable branching factor
//! `D >= 2`, while a second index layer maps every key slot to its current
//! heap position. That inverse map is what makes `contains` and `value_of`
//! O(1) and lets `delete`, `update`, `decrease` and `increase` address an
//! arbitrary key in O(log_D n).
//!
//! Storage is three fixed-size arrays allocated once at construction:
//! - `position[key]`: heap position of `key`, or absent
//! - `node[pos]`: key occupying heap position `pos`, or absent
//! - `values[key]`: value stored under `key`, or `None`
//!
//! # Time Complexity
//!
//! | Operation                  | Complexity        |
//! |----------------------------|-------------------|
//! | `insert`                   | O(log_D n)        |
//! | `peek_min_key/value`       | O(1)              |
//! | `poll_min_key/value`       | O(D log_D n)      |
//! | `delete`, `update`         | O(D log_D n)      |
//! | `decrease`                 | O(log_D n)        |
//! | `increase`                 | O(D log_D n)      |
//! | `contains`, `value_of`     | O(1)              |
//!
//! A larger degree makes the tree shallower, which speeds up `decrease` at the
//! cost of a wider child scan in `sink`. Graph searches that relax many edges
//! per poll benefit from `D` around `E / V`.
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::dary::MinIndexedDHeap;
//!
//! let mut heap = MinIndexedDHeap::new(4, 8).unwrap();
//! heap.insert(0, 10).unwrap();
//! heap.insert(1, 5).unwrap();
//! heap.insert(2, 7).unwrap();
//!
//! heap.decrease(0, 3).unwrap();
//! assert_eq!(heap.poll_min_key().unwrap(), 0);
//! assert_eq!(heap.poll_min_value().unwrap(), 5);
//! assert_eq!(heap.value_of(2).unwrap(), &7);
//! ```

use crate::traits::{HeapError, IndexedHeap, Result};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Marks an unused slot in the `position` and `node` layers
const ABSENT: usize = usize::MAX;

/// An indexed min-heap with configurable degree
///
/// Keys are caller-assigned integers in `0..capacity()`. The capacity is fixed
/// for the lifetime of the heap.
pub struct MinIndexedDHeap<T: Ord> {
    /// Number of occupied key slots
    size: usize,
    /// Branching factor
    degree: usize,
    /// First child position of every position
    child: Vec<usize>,
    /// Parent position of every position
    parent: Vec<usize>,
    /// Key slot -> heap position
    position: Vec<usize>,
    /// Heap position -> key slot
    node: Vec<usize>,
    /// Key slot -> value
    values: Vec<Option<T>>,
}

impl<T: Ord> MinIndexedDHeap<T> {
    /// Creates an empty heap
    ///
    /// The effective degree is `max(2, degree)` and the effective capacity is
    /// `max(degree + 1, max_size)`.
    ///
    /// # Errors
    /// `HeapError::InvalidArgument` if `max_size` is zero, or if `degree` is
    /// so large that the child positions of the last slot overflow `usize`.
    pub fn new(degree: usize, max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(HeapError::InvalidArgument("max_size must be positive"));
        }

        let degree = degree.max(2);
        let capacity = degree
            .checked_add(1)
            .map(|min_capacity| max_size.max(min_capacity))
            .ok_or(HeapError::InvalidArgument("degree too large"))?;
        // The child scan of any slot reaches at most `capacity * degree + 1`
        capacity
            .checked_mul(degree)
            .and_then(|last| last.checked_add(1))
            .ok_or(HeapError::InvalidArgument("degree too large"))?;

        let parent = (0..capacity)
            .map(|i| if i == 0 { 0 } else { (i - 1) / degree })
            .collect();
        let child = (0..capacity).map(|i| i * degree + 1).collect();

        Ok(Self {
            size: 0,
            degree,
            child,
            parent,
            position: vec![ABSENT; capacity],
            node: vec![ABSENT; capacity],
            values: (0..capacity).map(|_| None).collect(),
        })
    }

    /// Creates an empty binary heap
    ///
    /// # Errors
    /// `HeapError::InvalidArgument` if `max_size` is zero.
    pub fn binary(max_size: usize) -> Result<Self> {
        Self::new(2, max_size)
    }

    /// Returns the number of occupied key slots
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no key slot is occupied
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of key slots
    pub fn capacity(&self) -> usize {
        self.position.len()
    }

    /// Returns the branching factor
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns true if `key` holds a value
    ///
    /// # Errors
    /// `HeapError::OutOfRange` if `key >= capacity()`.
    pub fn contains(&self, key: usize) -> Result<bool> {
        self.check_bounds(key)?;
        Ok(self.position[key] != ABSENT)
    }

    /// Returns the key at the root
    pub fn peek_min_key(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(HeapError::Underflow);
        }
        Ok(self.node[0])
    }

    /// Returns the value at the root
    pub fn peek_min_value(&self) -> Result<&T> {
        let key = self.peek_min_key()?;
        self.values[key].as_ref().ok_or(HeapError::Underflow)
    }

    /// Removes the root and returns its key
    pub fn poll_min_key(&mut self) -> Result<usize> {
        let key = self.peek_min_key()?;
        self.delete(key)?;
        Ok(key)
    }

    /// Removes the root and returns its value
    pub fn poll_min_value(&mut self) -> Result<T> {
        let key = self.peek_min_key()?;
        self.delete(key)
    }

    /// Removes the root and returns both its key and value
    pub fn poll_min(&mut self) -> Result<(usize, T)> {
        let key = self.peek_min_key()?;
        let value = self.delete(key)?;
        Ok((key, value))
    }

    /// Returns the value stored under `key`
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::NotFound`.
    pub fn value_of(&self, key: usize) -> Result<&T> {
        self.check_bounds(key)?;
        self.values[key].as_ref().ok_or(HeapError::NotFound(key))
    }

    /// Stores `value` under an unoccupied `key`
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::DuplicateKey`.
    pub fn insert(&mut self, key: usize, value: T) -> Result<()> {
        if self.contains(key)? {
            return Err(HeapError::DuplicateKey(key));
        }

        let i = self.size;
        self.position[key] = i;
        self.node[i] = key;
        self.values[key] = Some(value);
        self.size += 1;
        self.swim(i);
        Ok(())
    }

    /// Removes `key` and returns its value
    ///
    /// The last node is moved into the vacated position, which may then be
    /// out of order in either direction, so both repairs run.
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::NotFound`.
    pub fn delete(&mut self, key: usize) -> Result<T> {
        let i = self.position_of(key)?;
        // The removed node ends up past `size`, where it is never compared
        let value = self.values[key].take().ok_or(HeapError::NotFound(key))?;

        self.size -= 1;
        let last = self.size;
        self.swap(i, last);
        if i < last {
            self.sink(i);
            self.swim(i);
        }

        self.position[key] = ABSENT;
        self.node[last] = ABSENT;
        Ok(value)
    }

    /// Replaces the value of `key` and returns the old one
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::NotFound`.
    pub fn update(&mut self, key: usize, value: T) -> Result<T> {
        let i = self.position_of(key)?;

        let old = match self.values[key].as_mut() {
            Some(slot) => std::mem::replace(slot, value),
            None => return Err(HeapError::NotFound(key)),
        };
        self.sink(i);
        self.swim(i);
        Ok(old)
    }

    /// Lowers the value of `key` to `value` if it is strictly smaller
    ///
    /// A value that is not an improvement is ignored and `Ok(false)` is
    /// returned.
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::NotFound`.
    pub fn decrease(&mut self, key: usize, value: T) -> Result<bool> {
        let i = self.position_of(key)?;

        let improves = matches!(&self.values[key], Some(current) if value < *current);
        if improves {
            self.values[key] = Some(value);
            self.swim(i);
        }
        Ok(improves)
    }

    /// Raises the value of `key` to `value` if it is strictly greater
    ///
    /// A value that is not greater is ignored and `Ok(false)` is returned.
    ///
    /// # Errors
    /// `HeapError::OutOfRange` or `HeapError::NotFound`.
    pub fn increase(&mut self, key: usize, value: T) -> Result<bool> {
        let i = self.position_of(key)?;

        let worsens = matches!(&self.values[key], Some(current) if *current < value);
        if worsens {
            self.values[key] = Some(value);
            self.sink(i);
        }
        Ok(worsens)
    }

    /// Empties every key slot, keeping the capacity
    pub fn clear(&mut self) {
        for p in 0..self.size {
            let key = self.node[p];
            self.position[key] = ABSENT;
            self.values[key] = None;
            self.node[p] = ABSENT;
        }
        self.size = 0;
    }

    /// Iterates over occupied keys in heap-position order
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.node[..self.size].iter().copied()
    }

    /// Iterates over `(key, value)` pairs in heap-position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.keys()
            .filter_map(move |key| self.values[key].as_ref().map(|value| (key, value)))
    }

    /// Checks that every occupied child is no smaller than its parent
    pub fn is_min_heap(&self) -> bool {
        self.is_empty() || self.is_min_heap_at(0)
    }

    /// Checks that `position` and `node` are inverse over the occupied range
    /// and that exactly the occupied keys hold values
    pub fn is_consistent(&self) -> bool {
        let inverse = (0..self.size).all(|p| {
            let key = self.node[p];
            key < self.capacity() && self.position[key] == p
        });
        let occupancy = (0..self.capacity()).all(|key| {
            let occupied = self.position[key] != ABSENT;
            occupied == self.values[key].is_some()
                && (!occupied || self.node[self.position[key]] == key)
        });
        let tail = self.node[self.size..].iter().all(|&k| k == ABSENT);
        inverse && occupancy && tail
    }

    fn is_min_heap_at(&self, i: usize) -> bool {
        let from = self.child[i];
        let to = self.size.min(from + self.degree);
        (from..to).all(|j| !self.less(j, i) && self.is_min_heap_at(j))
    }

    fn check_bounds(&self, key: usize) -> Result<()> {
        if key >= self.capacity() {
            return Err(HeapError::OutOfRange {
                key,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Heap position of an occupied key
    fn position_of(&self, key: usize) -> Result<usize> {
        self.check_bounds(key)?;
        match self.position[key] {
            ABSENT => Err(HeapError::NotFound(key)),
            i => Ok(i),
        }
    }

    /// Move node at position up to maintain heap property
    fn swim(&mut self, mut i: usize) {
        while i > 0 && self.less(i, self.parent[i]) {
            let parent = self.parent[i];
            self.swap(i, parent);
            i = parent;
        }
    }

    /// Move node at position down to maintain heap property
    fn sink(&mut self, mut i: usize) {
        while let Some(j) = self.min_child(i) {
            self.swap(i, j);
            i = j;
        }
    }

    /// Smallest of the up to `D` children of `i`, if it is smaller than `i`
    fn min_child(&self, i: usize) -> Option<usize> {
        let from = self.child[i];
        let to = self.size.min(from + self.degree);

        let mut best = i;
        for j in from..to {
            if self.less(j, best) {
                best = j;
            }
        }
        (best != i).then_some(best)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.position[self.node[j]] = i;
        self.position[self.node[i]] = j;
        self.node.swap(i, j);
    }

    /// Compares the values at two heap positions
    fn less(&self, i: usize, j: usize) -> bool {
        match (&self.values[self.node[i]], &self.values[self.node[j]]) {
            (Some(a), Some(b)) => a < b,
            _ => {
                debug_assert!(false, "heap position {} or {} holds no value", i, j);
                false
            }
        }
    }
}

impl<T: Ord> IndexedHeap<T> for MinIndexedDHeap<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.position.len()
    }

    fn contains(&self, key: usize) -> Result<bool> {
        MinIndexedDHeap::contains(self, key)
    }

    fn insert(&mut self, key: usize, value: T) -> Result<()> {
        MinIndexedDHeap::insert(self, key, value)
    }

    fn decrease(&mut self, key: usize, value: T) -> Result<bool> {
        MinIndexedDHeap::decrease(self, key, value)
    }

    fn peek_min(&self) -> Result<(usize, &T)> {
        let key = self.peek_min_key()?;
        Ok((key, self.peek_min_value()?))
    }

    fn poll_min(&mut self) -> Result<(usize, T)> {
        MinIndexedDHeap::poll_min(self)
    }

    fn value_of(&self, key: usize) -> Result<&T> {
        MinIndexedDHeap::value_of(self, key)
    }
}

impl<T: Ord> fmt::Debug for MinIndexedDHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinIndexedDHeap")
            .field("degree", &self.degree)
            .field("capacity", &self.capacity())
            .field("keys", &&self.node[..self.size])
            .finish()
    }
}

/// An indexed min-heap with the degree fixed at 2
///
/// Dereferences to [`MinIndexedDHeap`], so the full inherent API is
/// available; only construction differs.
pub struct MinIndexedBinaryHeap<T: Ord>(MinIndexedDHeap<T>);

impl<T: Ord> MinIndexedBinaryHeap<T> {
    /// Creates an empty binary heap with `max(3, max_size)` key slots
    ///
    /// # Errors
    /// `HeapError::InvalidArgument` if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        MinIndexedDHeap::binary(max_size).map(Self)
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> MinIndexedDHeap<T> {
        self.0
    }
}

impl<T: Ord> Deref for MinIndexedBinaryHeap<T> {
    type Target = MinIndexedDHeap<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for MinIndexedBinaryHeap<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> IndexedHeap<T> for MinIndexedBinaryHeap<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn capacity(&self) -> usize {
        self.0.capacity()
    }

    fn contains(&self, key: usize) -> Result<bool> {
        self.0.contains(key)
    }

    fn insert(&mut self, key: usize, value: T) -> Result<()> {
        self.0.insert(key, value)
    }

    fn decrease(&mut self, key: usize, value: T) -> Result<bool> {
        self.0.decrease(key, value)
    }

    fn peek_min(&self) -> Result<(usize, &T)> {
        IndexedHeap::peek_min(&self.0)
    }

    fn poll_min(&mut self) -> Result<(usize, T)> {
        self.0.poll_min()
    }

    fn value_of(&self, key: usize) -> Result<&T> {
        self.0.value_of(key)
    }
}

impl<T: Ord> fmt::Debug for MinIndexedBinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MinIndexedBinaryHeap").field(&self.0).finish()
    }
}
