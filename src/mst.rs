//! Eager Prim's minimum spanning tree
//!
//! The heap is keyed by vertex and holds, for every vertex on the frontier,
//! the cheapest known edge connecting it to the tree. A cheaper edge replaces
//! the stored one through `decrease`, so the frontier never exceeds `V`
//! entries. Runs in O(E log V).
//!
//! The graph is expected to be undirected, i.e. every edge added in both
//! directions. The tree cost is a running sum of edge costs and must fit in
//! the cost type.

use crate::dary::MinIndexedDHeap;
use crate::graph::{Cost, Edge, Graph, GraphError};
use crate::traits::IndexedHeap;
use std::cmp::Ordering;

/// A minimum spanning tree: its `V - 1` edges in the order they were chosen
/// and their total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<C> {
    pub edges: Vec<Edge<C>>,
    pub cost: C,
}

/// Frontier entry, ordered by edge cost only.
#[derive(Debug, Clone, Copy)]
struct Frontier<C>(Edge<C>);

impl<C: Ord> PartialEq for Frontier<C> {
    fn eq(&self, other: &Self) -> bool {
        self.0.cost == other.0.cost
    }
}

impl<C: Ord> Eq for Frontier<C> {}

impl<C: Ord> PartialOrd for Frontier<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for Frontier<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cost.cmp(&other.0.cost)
    }
}

/// Computes a minimum spanning tree grown from vertex 0.
///
/// Returns `Ok(None)` if the graph is disconnected.
///
/// # Errors
/// `GraphError::Empty` if the graph has no vertices.
///
/// # Example
///
/// ```rust
/// use indexed_dary_heap::graph::Graph;
/// use indexed_dary_heap::mst::eager_prims;
///
/// let mut graph = Graph::new(3);
/// graph.add_undirected_edge(0, 1, 3).unwrap();
/// graph.add_undirected_edge(1, 2, 1).unwrap();
/// graph.add_undirected_edge(0, 2, 2).unwrap();
///
/// let tree = eager_prims(&graph).unwrap().unwrap();
/// assert_eq!(tree.cost, 3);
/// assert_eq!(tree.edges.len(), 2);
/// ```
pub fn eager_prims<C: Cost>(graph: &Graph<C>) -> Result<Option<SpanningTree<C>>, GraphError> {
    let n = graph.vertex_count();
    if n == 0 {
        return Err(GraphError::Empty);
    }

    let tree_size = n - 1;
    let mut heap = MinIndexedDHeap::new(log2_ceil(n), n)?;
    let mut visited = vec![false; n];
    let mut edges = Vec::with_capacity(tree_size);
    let mut cost = C::default();

    relax_edges_at(graph, &mut heap, &mut visited, 0)?;

    while !heap.is_empty() && edges.len() != tree_size {
        let (vertex, Frontier(edge)) = heap.poll_min()?;
        edges.push(edge);
        cost = cost + edge.cost;
        relax_edges_at(graph, &mut heap, &mut visited, vertex)?;
    }

    if edges.len() == tree_size {
        Ok(Some(SpanningTree { edges, cost }))
    } else {
        Ok(None)
    }
}

/// Offers every edge leaving `vertex` to the frontier.
fn relax_edges_at<C, H>(
    graph: &Graph<C>,
    heap: &mut H,
    visited: &mut [bool],
    vertex: usize,
) -> Result<(), GraphError>
where
    C: Cost,
    H: IndexedHeap<Frontier<C>>,
{
    visited[vertex] = true;

    for edge in graph.neighbors(vertex) {
        if visited[edge.to] {
            continue;
        }

        if heap.contains(edge.to)? {
            heap.decrease(edge.to, Frontier(*edge))?;
        } else {
            heap.insert(edge.to, Frontier(*edge))?;
        }
    }

    Ok(())
}

/// `ceil(log2(n))` for `n >= 1`
fn log2_ceil(n: usize) -> usize {
    (usize::BITS - (n - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log2_ceil() {
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(2), 1);
        assert_eq!(log2_ceil(7), 3);
        assert_eq!(log2_ceil(8), 3);
        assert_eq!(log2_ceil(9), 4);
    }

    #[test]
    fn test_single_vertex() {
        let graph: Graph<u32> = Graph::new(1);
        let tree = eager_prims(&graph).unwrap().unwrap();
        assert!(tree.edges.is_empty());
        assert_eq!(tree.cost, 0);
    }

    #[test]
    fn test_empty_graph() {
        let graph: Graph<u32> = Graph::new(0);
        assert_eq!(eager_prims(&graph), Err(GraphError::Empty));
    }

    #[test]
    fn test_disconnected() {
        let mut graph = Graph::new(4);
        graph.add_undirected_edge(0, 1, 1u32).unwrap();
        graph.add_undirected_edge(2, 3, 1).unwrap();
        assert_eq!(eager_prims(&graph).unwrap(), None);
    }

    #[test]
    fn test_cheaper_edge_replaces_frontier_entry() {
        // 2 is first reached from 0 at cost 10, then from 1 at cost 1
        let mut graph = Graph::new(3);
        graph.add_undirected_edge(0, 1, 1u32).unwrap();
        graph.add_undirected_edge(0, 2, 10).unwrap();
        graph.add_undirected_edge(1, 2, 1).unwrap();

        let tree = eager_prims(&graph).unwrap().unwrap();
        assert_eq!(tree.cost, 2);
        assert_eq!(
            tree.edges,
            vec![
                Edge { from: 0, to: 1, cost: 1 },
                Edge { from: 1, to: 2, cost: 1 },
            ]
        );
    }
}
