//! Common traits for indexed heap data structures
//!
//! This module provides the error type shared by every heap operation and the
//! [`IndexedHeap`] trait that graph algorithms program against.
//!
//! An indexed heap differs from a plain priority queue in that every value is
//! stored under a caller-assigned *key slot* in `0..capacity`. The key is a
//! stable identity: it does not move when the heap reorders itself, which is
//! what allows `contains`, `value_of` and `decrease` to address a value
//! directly instead of searching for it.

use thiserror::Error;

/// Error type for heap operations
///
/// Every error is raised before the heap is mutated, so a failed call always
/// leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A constructor parameter was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The key lies outside `0..capacity`
    #[error("key index out of bounds; received {key}, capacity is {capacity}")]
    OutOfRange { key: usize, capacity: usize },
    /// The key slot is not occupied
    #[error("key index does not exist; received {0}")]
    NotFound(usize),
    /// `insert` addressed a key slot that is already occupied
    #[error("key index already exists; received {0}")]
    DuplicateKey(usize),
    /// A peek or poll was invoked on an empty heap
    #[error("priority queue underflow")]
    Underflow,
}

/// Result alias for heap operations
pub type Result<T> = std::result::Result<T, HeapError>;

/// Priority queue over a fixed range of key slots
///
/// This is the contract consumed by the shortest-path and spanning-tree
/// algorithms in this crate:
/// - `insert` the first time a key becomes reachable
/// - `decrease` when a strictly better value is found
/// - `poll_min` to finalize the best key
///
/// # Example
///
/// ```rust
/// use indexed_dary_heap::IndexedHeap;
/// use indexed_dary_heap::dary::MinIndexedDHeap;
///
/// let mut heap = MinIndexedDHeap::new(3, 10).unwrap();
/// heap.insert(4, 40).unwrap();
/// heap.insert(7, 70).unwrap();
/// assert!(heap.decrease(7, 5).unwrap());
/// assert_eq!(heap.poll_min().unwrap(), (7, 5));
/// ```
pub trait IndexedHeap<T: Ord> {
    /// Returns the number of occupied key slots
    fn len(&self) -> usize;

    /// Returns true if no key slot is occupied
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of key slots (`N`)
    fn capacity(&self) -> usize;

    /// Returns true if `key` currently holds a value
    ///
    /// # Errors
    /// `HeapError::OutOfRange` if `key` is not in `0..capacity`.
    fn contains(&self, key: usize) -> Result<bool>;

    /// Associates `value` with an unoccupied `key`
    ///
    /// # Errors
    /// `HeapError::DuplicateKey` if `key` is already occupied.
    fn insert(&mut self, key: usize, value: T) -> Result<()>;

    /// Lowers the value of `key` if `value` is strictly smaller
    ///
    /// Returns `Ok(false)` without touching the heap when `value` is not an
    /// improvement. This is the relaxation primitive of graph search.
    ///
    /// # Errors
    /// `HeapError::NotFound` if `key` is not occupied.
    fn decrease(&mut self, key: usize, value: T) -> Result<bool>;

    /// Returns the key and value at the root without removing them
    ///
    /// # Errors
    /// `HeapError::Underflow` if the heap is empty.
    fn peek_min(&self) -> Result<(usize, &T)>;

    /// Removes and returns the key and value at the root
    ///
    /// # Errors
    /// `HeapError::Underflow` if the heap is empty.
    fn poll_min(&mut self) -> Result<(usize, T)>;

    /// Returns the value stored under `key`
    ///
    /// # Errors
    /// `HeapError::NotFound` if `key` is not occupied.
    fn value_of(&self, key: usize) -> Result<&T>;
}
