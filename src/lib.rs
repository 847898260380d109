//! Indexed D-ary Min-Heap for Rust
//!
//! This crate provides an indexed priority queue: a min-heap over a fixed
//! range of caller-assigned key slots that also supports O(1) membership and
//! value lookup, and O(log n) removal or re-prioritization of any key. Those
//! are the two primitives graph searches need, "find the vertex with the best
//! tentative cost" and "improve a vertex's tentative cost in place".
//!
//! # Modules
//!
//! - [`dary`]: the heap itself, with configurable branching factor
//! - [`traits`]: the [`IndexedHeap`] contract and [`HeapError`]
//! - [`graph`]: adjacency-list graphs with generic edge costs
//! - [`pathfinding`]: Dijkstra's shortest path on the heap
//! - [`mst`]: eager Prim's minimum spanning tree on the heap
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::dary::MinIndexedDHeap;
//! use indexed_dary_heap::HeapError;
//!
//! let mut heap = MinIndexedDHeap::binary(5).unwrap();
//! heap.insert(0, 10).unwrap();
//! heap.insert(1, 5).unwrap();
//! heap.insert(2, 7).unwrap();
//! heap.decrease(0, 3).unwrap();
//!
//! assert_eq!(heap.poll_min(), Ok((0, 3)));
//! assert_eq!(heap.poll_min(), Ok((1, 5)));
//! assert_eq!(heap.insert(2, 1), Err(HeapError::DuplicateKey(2)));
//! ```

pub mod dary;
pub mod graph;
pub mod mst;
pub mod pathfinding;
pub mod traits;

// Re-export the main types for convenience
pub use dary::{MinIndexedBinaryHeap, MinIndexedDHeap};
pub use traits::{HeapError, IndexedHeap};
