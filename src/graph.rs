//! Adjacency-list graphs consumed by the search algorithms
//!
//! Vertices are dense integers in `0..vertex_count`, which is exactly the key
//! space of an indexed heap sized to the graph.

use crate::traits::HeapError;
use std::ops::Add;
use thiserror::Error;

/// Trait for types that can be used as edge costs.
///
/// This requires the type to be orderable, copyable, and support addition.
/// `Default` supplies the zero cost of the start vertex. Floating point
/// weights can be used through `ordered_float::OrderedFloat`.
///
/// Searches add costs along a path without checking for overflow, so every
/// path sum must fit in the type. For primitive integers an overflowing sum
/// panics in debug builds and wraps in release builds; pick a type wide
/// enough for `max edge cost * (V - 1)`.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// Error type for graph construction and search entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex id outside `0..vertex_count`
    #[error("invalid vertex {vertex}; graph has {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },
    /// The algorithm needs at least one vertex
    #[error("graph has no vertices")]
    Empty,
    /// The priority queue rejected an operation
    #[error(transparent)]
    Heap(#[from] HeapError),
}

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<C> {
    pub from: usize,
    pub to: usize,
    pub cost: C,
}

/// Adjacency list graph representation
#[derive(Debug, Clone)]
pub struct Graph<C> {
    /// Adjacency list: vertex -> outgoing edges
    adjacency: Vec<Vec<Edge<C>>>,
    edge_count: usize,
}

impl<C: Cost> Graph<C> {
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges; an undirected edge counts twice
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds a directed edge
    pub fn add_edge(&mut self, from: usize, to: usize, cost: C) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adjacency[from].push(Edge { from, to, cost });
        self.edge_count += 1;
        Ok(())
    }

    /// Adds an edge in both directions
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, cost: C) -> Result<(), GraphError> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.add_edge(a, b, cost)?;
        self.add_edge(b, a, cost)
    }

    /// Outgoing edges of `vertex`
    pub fn edges_from(&self, vertex: usize) -> Result<&[Edge<C>], GraphError> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.vertex_count() {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }

    /// Outgoing edges of a vertex already known to be in range
    pub(crate) fn neighbors(&self, vertex: usize) -> &[Edge<C>] {
        &self.adjacency[vertex]
    }
}
