//! Standard graph builders.
//!
//! Pure data supply for the search engine: none of these carry any search
//! logic, and the engine accepts any conforming [`Graph`] regardless of how
//! it was built. The shapes here are the ones that come up in the labeling
//! literature (cycles, paths, stars, balanced trees, windmills).

use crate::graph::{Graph, NodeId};

/// The cycle graph `C_n` on `n >= 3` nodes.
///
/// # Panics
/// Panics if `n < 3`; shorter "cycles" are degenerate.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 nodes, got {n}");
    let edges = (0..n).map(|i| (i, (i + 1) % n)).collect();
    Graph::from_parts(n, edges)
}

/// The path graph `P_n` on `n` nodes (`n - 1` edges).
pub fn path(n: usize) -> Graph {
    let edges = (1..n).map(|i| (i - 1, i)).collect();
    Graph::from_parts(n, edges)
}

/// The star `K_{1,leaves}`: node 0 joined to `leaves` outer nodes.
pub fn star(leaves: usize) -> Graph {
    let edges = (1..=leaves).map(|i| (0, i)).collect();
    Graph::from_parts(leaves + 1, edges)
}

/// The complete graph `K_n`.
pub fn complete(n: usize) -> Graph {
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    Graph::from_parts(n, edges)
}

/// The perfect `branching`-ary tree of the given height.
///
/// Height 0 is a single root. Node 0 is the root and children are numbered
/// breadth-first, so `balanced_tree(2, 3)` is the 15-node binary tree.
///
/// # Panics
/// Panics if `branching == 0`.
pub fn balanced_tree(branching: usize, height: u32) -> Graph {
    assert!(branching > 0, "branching factor must be positive");
    let total: usize = (0..=height).map(|d| branching.pow(d)).sum();

    let mut edges = Vec::with_capacity(total - 1);
    let mut next: NodeId = 1;
    let mut parent: NodeId = 0;
    while next < total {
        for _ in 0..branching {
            if next >= total {
                break;
            }
            edges.push((parent, next));
            next += 1;
        }
        parent += 1;
    }
    Graph::from_parts(total, edges)
}

/// The windmill graph `Wd(count, clique_size)`: `count` copies of the
/// complete graph on `clique_size` nodes, all sharing node 0.
///
/// `windmill(2, 4)` is the "K4 snake" — two K4 blades joined at the hub.
///
/// # Panics
/// Panics if `clique_size < 2`.
pub fn windmill(count: usize, clique_size: usize) -> Graph {
    assert!(clique_size >= 2, "windmill blades need at least 2 nodes");
    let per_blade = clique_size - 1;
    let total = 1 + count * per_blade;

    let mut edges = Vec::new();
    for blade in 0..count {
        let start = 1 + blade * per_blade;
        let members: Vec<NodeId> = std::iter::once(0)
            .chain(start..start + per_blade)
            .collect();
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                edges.push((members[i], members[j]));
            }
        }
    }
    Graph::from_parts(total, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_has_n_edges() {
        let g = cycle(7);
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.edge_count(), 7);
        assert!(!g.is_tree());
    }

    #[test]
    #[should_panic(expected = "at least 3 nodes")]
    fn degenerate_cycle_panics() {
        let _ = cycle(2);
    }

    #[test]
    fn path_is_a_tree() {
        let g = path(5);
        assert_eq!(g.edge_count(), 4);
        assert!(g.is_tree());
    }

    #[test]
    fn single_node_path() {
        let g = path(1);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_tree());
    }

    #[test]
    fn star_is_a_tree() {
        let g = star(6);
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.edge_count(), 6);
        assert!(g.is_tree());
    }

    #[test]
    fn complete_graph_edge_count() {
        let g = complete(5);
        assert_eq!(g.edge_count(), 10);
        assert!(!g.is_tree());
    }

    #[test]
    fn balanced_binary_tree_of_height_3() {
        let g = balanced_tree(2, 3);
        assert_eq!(g.node_count(), 15);
        assert_eq!(g.edge_count(), 14);
        assert!(g.is_tree());
    }

    #[test]
    fn balanced_tree_of_height_0_is_a_single_node() {
        let g = balanced_tree(3, 0);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn unary_balanced_tree_is_a_path() {
        let g = balanced_tree(1, 4);
        assert_eq!(g.node_count(), 5);
        assert!(g.is_tree());
    }

    #[test]
    fn windmill_two_k4_blades() {
        let g = windmill(2, 4);
        assert_eq!(g.node_count(), 7);
        // Each K4 blade contributes C(4, 2) = 6 edges.
        assert_eq!(g.edge_count(), 12);
        assert!(!g.is_tree());
    }

    #[test]
    fn windmill_of_triangles() {
        let g = windmill(3, 3);
        assert_eq!(g.node_count(), 7);
        assert_eq!(g.edge_count(), 9);
    }
}
