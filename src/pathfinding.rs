//! Dijkstra's shortest path algorithm on an indexed D-ary heap
//!
//! The open set is a [`MinIndexedDHeap`] sized to the graph, keyed by vertex
//! id and holding each vertex's tentative distance. Because the heap can
//! address a vertex directly, an improved distance is applied in place with
//! `decrease` instead of pushing a duplicate entry, so the heap never holds
//! more than `V` entries and no stale entries have to be skipped.
//!
//! Edge costs must be non-negative for the results to be shortest paths, and
//! every path sum must fit in the cost type (see [`Cost`](crate::graph::Cost)).
//!
//! # Example
//!
//! ```rust
//! use indexed_dary_heap::graph::Graph;
//! use indexed_dary_heap::pathfinding::shortest_path;
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(0, 1, 5u32).unwrap();
//! graph.add_edge(0, 2, 1).unwrap();
//! graph.add_edge(2, 1, 2).unwrap();
//! graph.add_edge(1, 3, 1).unwrap();
//!
//! let (path, cost) = shortest_path(&graph, 0, 3).unwrap().unwrap();
//! assert_eq!(path, vec![0, 2, 1, 3]);
//! assert_eq!(cost, 4);
//! ```

use crate::dary::MinIndexedDHeap;
use crate::graph::{Cost, Graph, GraphError};
use crate::traits::IndexedHeap;

/// Heap degree used when none is configured: the average out-degree, at
/// least 2.
pub fn default_degree<C: Cost>(graph: &Graph<C>) -> usize {
    match graph.vertex_count() {
        0 => 2,
        v => (graph.edge_count() / v).max(2),
    }
}

/// Returns the shortest distance from `start` to `end`, or `None` if `end`
/// is unreachable.
///
/// # Errors
/// `GraphError::InvalidVertex` if either vertex is out of range.
pub fn dijkstra<C: Cost>(graph: &Graph<C>, start: usize, end: usize) -> Result<Option<C>, GraphError> {
    ShortestPathBuilder::new(graph).distance(start, end)
}

/// Returns the vertices of a shortest path from `start` to `end` (inclusive)
/// and its cost, or `None` if `end` is unreachable.
///
/// # Errors
/// `GraphError::InvalidVertex` if either vertex is out of range.
pub fn shortest_path<C: Cost>(
    graph: &Graph<C>,
    start: usize,
    end: usize,
) -> Result<Option<(Vec<usize>, C)>, GraphError> {
    ShortestPathBuilder::new(graph).path(start, end)
}

/// Returns the shortest distance from `start` to every vertex
///
/// # Errors
/// `GraphError::InvalidVertex` if `start` is out of range.
pub fn dijkstra_all<C: Cost>(graph: &Graph<C>, start: usize) -> Result<Vec<Option<C>>, GraphError> {
    ShortestPathBuilder::new(graph).distances(start)
}

/// Builder for shortest path queries with more configuration options.
///
/// Provides a fluent API for configuring and running searches.
pub struct ShortestPathBuilder<'g, C: Cost> {
    graph: &'g Graph<C>,
    degree: Option<usize>,
    max_cost: Option<C>,
}

impl<'g, C: Cost> ShortestPathBuilder<'g, C> {
    /// Creates a new builder over the given graph.
    pub fn new(graph: &'g Graph<C>) -> Self {
        ShortestPathBuilder {
            graph,
            degree: None,
            max_cost: None,
        }
    }

    /// Sets the branching factor of the heap.
    pub fn degree(mut self, degree: usize) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Sets the maximum distance to explore. Vertices farther away are
    /// reported as unreachable.
    pub fn max_cost(mut self, cost: C) -> Self {
        self.max_cost = Some(cost);
        self
    }

    /// Shortest distance from `start` to `end`
    pub fn distance(self, start: usize, end: usize) -> Result<Option<C>, GraphError> {
        self.graph.check_vertex(end)?;
        let search = self.run(start, Some(end))?;
        Ok(search.dist[end])
    }

    /// Shortest path from `start` to `end` and its cost
    pub fn path(self, start: usize, end: usize) -> Result<Option<(Vec<usize>, C)>, GraphError> {
        self.graph.check_vertex(end)?;
        let search = self.run(start, Some(end))?;
        Ok(search.dist[end].map(|cost| (search.reconstruct_path(end), cost)))
    }

    /// Shortest distance from `start` to every vertex
    pub fn distances(self, start: usize) -> Result<Vec<Option<C>>, GraphError> {
        Ok(self.run(start, None)?.dist)
    }

    fn run(self, start: usize, target: Option<usize>) -> Result<Search<C>, GraphError> {
        self.graph.check_vertex(start)?;

        let degree = self.degree.unwrap_or_else(|| default_degree(self.graph));
        let mut heap = MinIndexedDHeap::new(degree, self.graph.vertex_count())?;
        search(self.graph, &mut heap, start, target, self.max_cost)
    }
}

/// Distances and predecessors produced by one search.
struct Search<C> {
    dist: Vec<Option<C>>,
    prev: Vec<Option<usize>>,
}

impl<C> Search<C> {
    /// Reconstructs the path from the start to the given vertex.
    fn reconstruct_path(&self, end: usize) -> Vec<usize> {
        let mut path = vec![end];
        let mut current = end;

        while let Some(prev) = self.prev[current] {
            path.push(prev);
            current = prev;
        }

        path.reverse();
        path
    }
}

/// Internal search implementation.
///
/// Stops as soon as `target` is polled, since its distance is final at that
/// point. With a `max_cost`, tentative distances above it are never
/// recorded.
fn search<C, H>(
    graph: &Graph<C>,
    heap: &mut H,
    start: usize,
    target: Option<usize>,
    max_cost: Option<C>,
) -> Result<Search<C>, GraphError>
where
    C: Cost,
    H: IndexedHeap<C>,
{
    let n = graph.vertex_count();
    let mut dist: Vec<Option<C>> = vec![None; n];
    let mut prev = vec![None; n];
    let mut visited = vec![false; n];

    dist[start] = Some(C::default());
    heap.insert(start, C::default())?;

    while !heap.is_empty() {
        let (vertex, distance) = heap.poll_min()?;
        visited[vertex] = true;

        if target == Some(vertex) {
            break;
        }

        for edge in graph.neighbors(vertex) {
            if visited[edge.to] {
                continue;
            }

            let tentative = distance + edge.cost;
            if max_cost.is_some_and(|max| tentative > max) {
                continue;
            }

            if dist[edge.to].map_or(true, |current| tentative < current) {
                dist[edge.to] = Some(tentative);
                prev[edge.to] = Some(vertex);
                if heap.contains(edge.to)? {
                    heap.decrease(edge.to, tentative)?;
                } else {
                    heap.insert(edge.to, tentative)?;
                }
            }
        }
    }

    Ok(Search { dist, prev })
}
