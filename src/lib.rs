//! # Harmonious
//!
//! A parallel brute-force engine for graph labeling conjectures.
//!
//! Given a graph, a finite label set, and a binary combine rule, the engine
//! searches for a vertex labeling whose induced edge labels (the combine rule
//! applied to each edge's endpoint labels) are pairwise distinct. Graceful,
//! harmonious, gamma-harmonious, and pi-harmonious labelings are all instances
//! of this problem; they differ only in the label set and the combine rule,
//! and the engine is agnostic to which family it is testing.
//!
//! This crate provides:
//! - A lazy, deterministic candidate generator with a tree-specific
//!   repeated-label mode ([`candidates`]).
//! - An O(E) injectivity validator for induced edge labelings ([`validate`]).
//! - Chunked and striped work partitioning so the (potentially astronomical)
//!   candidate space is never materialized at once ([`partition`]).
//! - A racing, first-result-wins parallel coordinator with cancellation,
//!   timeouts, and crash isolation ([`search`]).
//!
//! ## Quick Start
//!
//! ```
//! use harmonious::prelude::*;
//!
//! // Graceful labeling of the 7-cycle with {0, ..., 7}.
//! let graph = construct::cycle(7);
//! let labels = labels::graceful_set(7);
//! let cfg = SearchConfig::default();
//!
//! match find_labeling(&graph, &labels, labels::absolute_difference, &cfg) {
//!     SearchOutcome::Found(assignment) => {
//!         assert!(edge_injective(&graph, &assignment, &labels::absolute_difference));
//!     }
//!     other => panic!("C7 is gracefully labelable, got {other:?}"),
//! }
//! ```
//!
//! ## Exhaustion
//!
//! Absence of a result is only ever concluded by exhausting the entire
//! candidate space. A label set too small for the graph is not an error; it
//! is an empty candidate space:
//!
//! ```
//! use harmonious::prelude::*;
//!
//! // A triangle needs 3 distinct labels; 2 are not enough.
//! let triangle = construct::cycle(3);
//! let labels = LabelSet::new([0u64, 1]);
//! let outcome = find_labeling(&triangle, &labels, labels::absolute_difference,
//!                             &SearchConfig::default());
//! assert_eq!(outcome, SearchOutcome::Exhausted);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: Immutable graph view with endpoint validation and tree detection.
//! - [`construct`]: Standard graph builders (cycles, trees, windmills, ...).
//! - [`labels`]: Label sets and the classic combine rules.
//! - [`candidates`]: Lazy enumeration of the candidate assignment space.
//! - [`partition`]: Disjoint, exhaustive chunking and striping of that space.
//! - [`validate`]: Injectivity checks and induced edge-label computation.
//! - [`search`]: The parallel search coordinator.
//!
//! ## Performance Notes
//!
//! - The workload is CPU-bound and embarrassingly parallel; worker count
//!   defaults to the machine's available parallelism.
//! - Within one worker, candidates are validated in the generator's
//!   deterministic order; *which* worker finds a labeling first is a race and
//!   is inherently nondeterministic across runs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::many_single_char_names)] // Mathematical variable names

pub mod candidates;
pub mod construct;
pub mod graph;
pub mod labels;
pub mod partition;
pub mod search;
pub mod validate;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::candidates::{Assignment, Candidates};
    pub use crate::construct;
    pub use crate::graph::{Graph, GraphError, NodeId};
    pub use crate::labels::{self, LabelSet};
    pub use crate::search::{
        find_labeling, find_labeling_sequential, CancelToken, PartitionStrategy, SearchConfig,
        SearchOutcome,
    };
    pub use crate::validate::{edge_injective, induced_edge_labels};
}
