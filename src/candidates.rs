//! Lazy enumeration of the candidate assignment space.
//!
//! The generator never materializes the full space: it yields assignments one
//! at a time, in a deterministic order, and re-creating it from the same
//! inputs replays the identical sequence. That determinism is what makes the
//! striped work partition reproducible — every worker re-enumerates the same
//! sequence and keeps only its own positions.
//!
//! Two modes, selected once per search from the graph's topology:
//!
//! - **General mode**: all N-permutations of the label set — ordered
//!   arrangements of distinct labels, one per node.
//! - **Tree mode**: a tree on N nodes has N−1 edges, and the labeling
//!   families pair it with a label set of N−1 values, so exactly one label
//!   value must appear twice. Node 0 carries the forced repetition: for each
//!   choice of repeated label (the outer loop) and each (N−1)-permutation of
//!   the label set, the candidate is the repeated label followed by the
//!   permutation. Any value may be the one repeated.

use crate::graph::Graph;
use crate::labels::LabelSet;

/// One vertex-label assignment, in the graph's node order.
pub type Assignment<L> = Vec<L>;

// ============================================================================
// K-permutations
// ============================================================================

/// Lexicographic `k`-permutations of the indices `0..m`.
///
/// Emits the same sequence as the textbook cycle-counting permutation
/// algorithm: `[0, 1]`, `[0, 2]`, ..., `[1, 0]`, `[1, 2]`, ... for
/// `m = 3, k = 2`. Yields a single empty permutation when `k == 0` and
/// nothing at all when `k > m`.
#[derive(Clone, Debug)]
pub struct KPermutations {
    m: usize,
    k: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    started: bool,
    done: bool,
}

impl KPermutations {
    /// Enumerator of `k`-permutations drawn from `0..m`.
    pub fn new(m: usize, k: usize) -> Self {
        Self {
            m,
            k,
            indices: (0..m).collect(),
            cycles: (0..k).map(|i| m - i).collect(),
            started: false,
            done: k > m,
        }
    }
}

impl Iterator for KPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices[..self.k].to_vec());
        }

        let mut i = self.k;
        while i > 0 {
            i -= 1;
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                // Position i has cycled through every remaining index;
                // restore the tail to its rotated base order and carry left.
                self.indices[i..].rotate_left(1);
                self.cycles[i] = self.m - i;
            } else {
                self.indices.swap(i, self.m - self.cycles[i]);
                return Some(self.indices[..self.k].to_vec());
            }
        }

        self.done = true;
        None
    }
}

// ============================================================================
// Candidates
// ============================================================================

#[derive(Clone, Debug)]
enum Mode {
    General(KPermutations),
    Tree {
        // Permutation enumerator for the current repeat choice; restarted
        // from scratch each time `repeat` advances.
        perms: KPermutations,
        repeat: usize,
    },
}

/// The full candidate space for one graph and label set.
///
/// A lazy, finite, restartable iterator: two `Candidates` built from the
/// same inputs yield identical sequences. If the label set is too small for
/// the required assignment length the sequence is simply empty — immediate
/// exhaustion, never an error.
#[derive(Clone, Debug)]
pub struct Candidates<'a, L> {
    labels: &'a LabelSet<L>,
    mode: Mode,
}

impl<'a, L: Clone> Candidates<'a, L> {
    /// Builds the candidate sequence, selecting tree or general mode from
    /// the graph's topology.
    pub fn new(graph: &Graph, labels: &'a LabelSet<L>) -> Self {
        let n = graph.node_count();
        let mode = if graph.is_tree() {
            Mode::Tree {
                perms: KPermutations::new(labels.len(), n - 1),
                repeat: 0,
            }
        } else {
            Mode::General(KPermutations::new(labels.len(), n))
        };
        Self { labels, mode }
    }
}

impl<L: Clone> Iterator for Candidates<'_, L> {
    type Item = Assignment<L>;

    fn next(&mut self) -> Option<Assignment<L>> {
        let labels = self.labels;
        match &mut self.mode {
            Mode::General(perms) => perms
                .next()
                .map(|indices| indices.iter().map(|&i| labels[i].clone()).collect()),
            Mode::Tree { perms, repeat } => loop {
                if *repeat >= labels.len() {
                    return None;
                }
                if let Some(indices) = perms.next() {
                    let mut assignment = Assignment::with_capacity(indices.len() + 1);
                    assignment.push(labels[*repeat].clone());
                    assignment.extend(indices.iter().map(|&i| labels[i].clone()));
                    return Some(assignment);
                }
                *repeat += 1;
                let (m, k) = (perms.m, perms.k);
                *perms = KPermutations::new(m, k);
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
