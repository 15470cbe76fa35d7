//! Injectivity validation of induced edge labelings.
//!
//! The validator is the innermost loop of the whole engine: for one candidate
//! assignment it combines the endpoint labels of every edge and reports
//! whether any two edges collide. Pure, side-effect free, O(E) time and
//! O(E) auxiliary space per call.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::{Graph, NodeId};

/// True iff every edge's combined label is distinct from every other's.
///
/// Short-circuits on the first collision, so rejecting candidates (the
/// overwhelmingly common case) is usually cheaper than the full O(E) bound.
/// Any total combine function over the label domain is accepted; there are
/// no error conditions.
pub fn edge_injective<L, E, F>(graph: &Graph, assignment: &[L], combine: &F) -> bool
where
    F: Fn(&L, &L) -> E,
    E: Eq + Hash,
{
    debug_assert_eq!(assignment.len(), graph.node_count());

    let mut seen = HashSet::with_capacity(graph.edge_count());
    for &(u, v) in graph.edges() {
        if !seen.insert(combine(&assignment[u], &assignment[v])) {
            return false;
        }
    }
    true
}

/// The induced edge labeling: each edge paired with its combined label, in
/// edge order.
///
/// Derived on demand and never stored by the engine; this is the form a
/// presentation layer consumes to display a found labeling.
pub fn induced_edge_labels<L, E, F>(
    graph: &Graph,
    assignment: &[L],
    combine: &F,
) -> Vec<((NodeId, NodeId), E)>
where
    F: Fn(&L, &L) -> E,
{
    debug_assert_eq!(assignment.len(), graph.node_count());

    graph
        .edges()
        .iter()
        .map(|&(u, v)| ((u, v), combine(&assignment[u], &assignment[v])))
        .collect()
}
