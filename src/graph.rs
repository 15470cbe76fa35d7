//! Immutable graph view consumed by the labeling search.
//!
//! The engine only needs three things from a graph: its node count, its node
//! order (nodes are simply `0..n`), and its edge list. Everything else
//! (degrees, adjacency, topology checks) is derived. A [`Graph`] is validated
//! once at construction and never mutated during a search, so it can be
//! shared freely across workers without locking.

use std::collections::VecDeque;
use thiserror::Error;

/// Node identifier: an index into the graph's node order.
pub type NodeId = usize;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building a [`Graph`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge references a node outside `0..node_count`.
    #[error("edge ({u}, {v}) references a node outside 0..{node_count}")]
    InvalidEndpoint {
        /// First endpoint of the offending edge.
        u: NodeId,
        /// Second endpoint of the offending edge.
        v: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

// ============================================================================
// Graph
// ============================================================================

/// An immutable undirected graph given by a node count and an edge list.
///
/// Edges are unordered pairs stored in insertion order; the engine treats
/// `(u, v)` and `(v, u)` identically. No self-loop or multi-edge policy is
/// enforced here (a duplicated edge simply can never be labeled injectively,
/// and a self-loop combines a label with itself) — that is the caller's
/// responsibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<(NodeId, NodeId)>,
}

impl Graph {
    /// Builds a graph, validating that every edge endpoint is a real node.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEndpoint`] for the first edge that
    /// references a node outside `0..node_count`. Malformed input fails fast
    /// here, before any search begins.
    pub fn new(node_count: usize, edges: Vec<(NodeId, NodeId)>) -> Result<Self, GraphError> {
        for &(u, v) in &edges {
            if u >= node_count || v >= node_count {
                return Err(GraphError::InvalidEndpoint { u, v, node_count });
            }
        }
        Ok(Self { node_count, edges })
    }

    /// Builds a graph from edges already known to be in range.
    ///
    /// Used by the constructors in [`crate::construct`], which generate their
    /// edge lists and cannot produce out-of-range endpoints.
    pub(crate) fn from_parts(node_count: usize, edges: Vec<(NodeId, NodeId)>) -> Self {
        debug_assert!(edges.iter().all(|&(u, v)| u < node_count && v < node_count));
        Self { node_count, edges }
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// The nodes, in order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.node_count
    }

    /// True iff the graph is a tree (connected and acyclic).
    ///
    /// Uses the classic characterization: a graph on `n > 0` nodes with
    /// exactly `n - 1` edges is a tree iff it is connected. Connectivity is
    /// checked with a BFS from node 0. The empty graph is not a tree.
    ///
    /// This selects the candidate generation mode once per search; it is not
    /// hot-path code.
    pub fn is_tree(&self) -> bool {
        if self.node_count == 0 || self.edges.len() != self.node_count - 1 {
            return false;
        }

        let mut adjacency = vec![Vec::new(); self.node_count];
        for &(u, v) in &self.edges {
            adjacency[u].push(v);
            adjacency[v].push(u);
        }

        let mut seen = vec![false; self.node_count];
        let mut queue = VecDeque::with_capacity(self.node_count);
        seen[0] = true;
        queue.push_back(0);
        let mut visited = 1;

        while let Some(u) = queue.pop_front() {
            for &v in &adjacency[u] {
                if !seen[v] {
                    seen[v] = true;
                    visited += 1;
                    queue.push_back(v);
                }
            }
        }

        visited == self.node_count
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_graph_construction() {
        let g = Graph::new(3, vec![(0, 1), (1, 2)]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let err = Graph::new(3, vec![(0, 1), (1, 3)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEndpoint {
                u: 1,
                v: 3,
                node_count: 3
            }
        );
    }

    #[test]
    fn out_of_range_first_endpoint_is_rejected() {
        assert!(Graph::new(2, vec![(5, 0)]).is_err());
    }

    #[test]
    fn empty_graph_is_valid_but_not_a_tree() {
        let g = Graph::new(0, vec![]).unwrap();
        assert!(!g.is_tree());
    }

    #[test]
    fn single_node_is_a_tree() {
        let g = Graph::new(1, vec![]).unwrap();
        assert!(g.is_tree());
    }

    #[test]
    fn path_is_a_tree() {
        let g = Graph::new(4, vec![(0, 1), (1, 2), (2, 3)]).unwrap();
        assert!(g.is_tree());
    }

    #[test]
    fn cycle_is_not_a_tree() {
        let g = Graph::new(3, vec![(0, 1), (1, 2), (2, 0)]).unwrap();
        assert!(!g.is_tree());
    }

    #[test]
    fn disconnected_forest_is_not_a_tree() {
        // n - 1 edges but two components (one edge duplicated).
        let g = Graph::new(4, vec![(0, 1), (0, 1), (2, 3)]).unwrap();
        assert!(!g.is_tree());
    }

    #[test]
    fn two_isolated_nodes_are_not_a_tree() {
        let g = Graph::new(2, vec![]).unwrap();
        assert!(!g.is_tree());
    }

    #[test]
    fn star_is_a_tree() {
        let g = Graph::new(5, vec![(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
        assert!(g.is_tree());
    }
}
