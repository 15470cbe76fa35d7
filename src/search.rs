//! Parallel first-result-wins search coordinator.
//!
//! The coordinator owns a pool of workers racing over disjoint partitions of
//! the candidate space. Each worker validates its partition in generator
//! order; the first worker to validate a candidate commits it through a
//! single-assignment result slot and raises a shared stop flag, which every
//! other worker polls between candidates. If every partition is exhausted
//! with no commit, the search space is provably empty.
//!
//! Two drivers implement the same contract:
//!
//! - **Striped**: one scoped OS thread per worker, each re-enumerating the
//!   candidate sequence and keeping its own stripe. Worker reports travel
//!   over a channel so the coordinator can also honor caller cancellation
//!   and timeouts while workers are busy.
//! - **Chunked**: batches pulled from a single generator and mapped over a
//!   work-stealing pool with in-batch early exit; the cancellation check
//!   runs between batches.
//!
//! A worker that dies (a panic in a user-supplied combine function, say)
//! reports a distinct failure signal instead of hanging the coordinator; its
//! unsearched stripe is surfaced as an `Incomplete` outcome rather than
//! being passed off as genuine exhaustion.

use crossbeam::channel::{self, RecvTimeoutError};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::hash::Hash;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use crate::candidates::{Assignment, Candidates};
use crate::graph::Graph;
use crate::labels::LabelSet;
use crate::partition::{Chunked, Striped};
use crate::validate::edge_injective;

// ============================================================================
// Configuration
// ============================================================================

/// How long the striped coordinator sleeps between liveness checks while
/// waiting on worker reports. Bounds how stale a cancellation can go
/// unnoticed, not how fast workers stop (they poll the stop flag directly).
const COORDINATOR_POLL: Duration = Duration::from_millis(25);

/// How the candidate space is divided among workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PartitionStrategy {
    /// Fixed-size batches from one shared generator, mapped over a
    /// work-stealing pool.
    Chunked,
    /// Worker `i` of `W` independently enumerates positions `j mod W == i`.
    #[default]
    Striped,
}

/// Cooperative cancellation handle shared between the caller and a running
/// search.
///
/// Cloning is cheap and every clone observes the same flag. Cancelling is
/// idempotent and one-way.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, untripped token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of any search holding a clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of workers racing over the candidate space.
    pub workers: usize,
    /// Batch size for the chunked strategy; bounds peak memory.
    pub chunk_size: usize,
    /// Work partitioning strategy.
    pub strategy: PartitionStrategy,
    /// Optional wall-clock budget; exceeding it yields a `Cancelled`
    /// outcome, never a spurious `Exhausted`.
    pub timeout: Option<Duration>,
    /// Caller-held cancellation handle.
    pub cancel: CancelToken,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(4);
        Self {
            workers,
            chunk_size: 8192,
            strategy: PartitionStrategy::default(),
            timeout: None,
            cancel: CancelToken::new(),
        }
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// Terminal outcome of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<L> {
    /// A valid labeling was found. Which one is a race between workers;
    /// within a single worker, candidates are tried in generator order.
    Found(Assignment<L>),
    /// Every candidate in the space was validated and none succeeded.
    Exhausted,
    /// The caller cancelled the search or its timeout elapsed before the
    /// space was exhausted.
    Cancelled,
    /// One or more workers died before resolving their partitions, so
    /// exhaustion cannot be claimed. Re-invoke to retry.
    Incomplete {
        /// Number of workers whose partitions are unresolved.
        failed_workers: usize,
    },
}

impl<L> SearchOutcome<L> {
    /// The found assignment, if any.
    pub fn found(&self) -> Option<&Assignment<L>> {
        match self {
            Self::Found(assignment) => Some(assignment),
            _ => None,
        }
    }

    /// True iff the search proved the space empty of solutions.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// A worker's single terminal signal. The found assignment itself travels
/// through the shared result slot, not the channel, so the winning write is
/// the slot's at-most-once assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WorkerReport {
    /// This worker committed the winning assignment.
    Found,
    /// This worker validated every candidate in its stripe; none passed.
    ExhaustedLocal,
    /// This worker stopped early because the stop flag was raised.
    Stopped,
    /// This worker panicked; its stripe is unresolved.
    Failed,
}

// ============================================================================
// Public API
// ============================================================================

/// Searches for a vertex labeling of `graph` over `labels` whose induced
/// edge labels under `combine` are pairwise distinct.
///
/// Returns [`SearchOutcome::Found`] with one valid assignment (node order),
/// [`SearchOutcome::Exhausted`] if the whole space was searched without a
/// hit, [`SearchOutcome::Cancelled`] on caller cancellation or timeout, or
/// [`SearchOutcome::Incomplete`] if a worker crash left part of the space
/// unsearched.
///
/// The graph, label set, and combine function are shared read-only across
/// all workers; `combine` must be total over the label domain.
pub fn find_labeling<L, E, F>(
    graph: &Graph,
    labels: &LabelSet<L>,
    combine: F,
    cfg: &SearchConfig,
) -> SearchOutcome<L>
where
    L: Clone + Eq + Hash + Send + Sync,
    E: Eq + Hash,
    F: Fn(&L, &L) -> E + Sync,
{
    let workers = cfg.workers.max(1);
    debug!(
        "dispatching {workers} workers ({:?}) over {} nodes, {} edges, {} labels",
        cfg.strategy,
        graph.node_count(),
        graph.edge_count(),
        labels.len()
    );

    let outcome = match cfg.strategy {
        PartitionStrategy::Chunked => run_chunked(graph, labels, &combine, workers, cfg),
        PartitionStrategy::Striped => run_striped(graph, labels, &combine, workers, cfg),
    };

    match &outcome {
        SearchOutcome::Found(_) => info!("search finished: labeling found"),
        SearchOutcome::Exhausted => info!("search finished: candidate space exhausted"),
        SearchOutcome::Cancelled => info!("search finished: cancelled"),
        SearchOutcome::Incomplete { failed_workers } => {
            warn!("search finished: incomplete ({failed_workers} worker(s) failed)");
        }
    }
    outcome
}

/// Single-threaded reference search: first valid assignment in generator
/// order, or `None` after exhausting the space.
///
/// Deterministic, unlike the racing parallel drivers; used to cross-check
/// them and handy for tiny instances.
pub fn find_labeling_sequential<L, E, F>(
    graph: &Graph,
    labels: &LabelSet<L>,
    combine: F,
) -> Option<Assignment<L>>
where
    L: Clone + Eq + Hash,
    E: Eq + Hash,
    F: Fn(&L, &L) -> E,
{
    Candidates::new(graph, labels).find(|assignment| edge_injective(graph, assignment, &combine))
}

// ============================================================================
// Chunked driver
// ============================================================================

fn run_chunked<L, E, F>(
    graph: &Graph,
    labels: &LabelSet<L>,
    combine: &F,
    workers: usize,
    cfg: &SearchConfig,
) -> SearchOutcome<L>
where
    L: Clone + Eq + Hash + Send + Sync,
    E: Eq + Hash,
    F: Fn(&L, &L) -> E + Sync,
{
    let pool = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool,
        Err(e) => {
            warn!("failed to build worker pool: {e}");
            return SearchOutcome::Incomplete {
                failed_workers: workers,
            };
        }
    };

    let deadline = cfg.timeout.map(|t| Instant::now() + t);
    let mut chunks = Chunked::new(Candidates::new(graph, labels), cfg.chunk_size);

    loop {
        if cfg.cancel.is_cancelled() || deadline.is_some_and(|d| Instant::now() >= d) {
            return SearchOutcome::Cancelled;
        }

        let Some(chunk) = chunks.next() else {
            return SearchOutcome::Exhausted;
        };

        // find_any gives in-batch early exit; which hit wins inside a batch
        // is a race, consistent with the striped driver.
        let hit = panic::catch_unwind(AssertUnwindSafe(|| {
            pool.install(|| {
                chunk
                    .into_par_iter()
                    .find_any(|assignment| edge_injective(graph, assignment, combine))
            })
        }));

        match hit {
            Ok(Some(assignment)) => return SearchOutcome::Found(assignment),
            Ok(None) => {}
            Err(_) => {
                warn!("a worker panicked while validating a batch");
                return SearchOutcome::Incomplete { failed_workers: 1 };
            }
        }
    }
}

// ============================================================================
// Striped driver
// ============================================================================

fn run_striped<L, E, F>(
    graph: &Graph,
    labels: &LabelSet<L>,
    combine: &F,
    workers: usize,
    cfg: &SearchConfig,
) -> SearchOutcome<L>
where
    L: Clone + Eq + Hash + Send + Sync,
    E: Eq + Hash,
    F: Fn(&L, &L) -> E + Sync,
{
    let stop = AtomicBool::new(false);
    let slot: OnceLock<Assignment<L>> = OnceLock::new();
    let deadline = cfg.timeout.map(|t| Instant::now() + t);
    let (tx, rx) = channel::bounded::<(usize, WorkerReport)>(workers);

    let mut failed = 0usize;
    let mut exhausted = 0usize;
    let mut cancelled = false;

    std::thread::scope(|scope| {
        for worker_id in 0..workers {
            let tx = tx.clone();
            let stop = &stop;
            let slot = &slot;
            scope.spawn(move || {
                let report = panic::catch_unwind(AssertUnwindSafe(|| {
                    solve_worker(worker_id, workers, graph, labels, combine, stop, slot)
                }))
                .unwrap_or(WorkerReport::Failed);
                // The coordinator outlives every worker; a send can only
                // fail after it has already counted all reports.
                let _ = tx.send((worker_id, report));
            });
        }
        drop(tx);

        let mut outstanding = workers;
        while outstanding > 0 {
            if !cancelled
                && (cfg.cancel.is_cancelled() || deadline.is_some_and(|d| Instant::now() >= d))
            {
                cancelled = true;
                stop.store(true, Ordering::SeqCst);
            }

            match rx.recv_timeout(COORDINATOR_POLL) {
                Ok((worker_id, report)) => {
                    outstanding -= 1;
                    match report {
                        WorkerReport::Found => {
                            debug!("worker {worker_id} committed a labeling");
                            stop.store(true, Ordering::SeqCst);
                        }
                        WorkerReport::ExhaustedLocal => {
                            debug!("worker {worker_id} exhausted its stripe");
                            exhausted += 1;
                        }
                        WorkerReport::Stopped => {
                            debug!("worker {worker_id} stopped early");
                        }
                        WorkerReport::Failed => {
                            warn!("worker {worker_id} panicked; its stripe is unresolved");
                            failed += 1;
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    // Every sender gone without a report: those workers died
                    // without even reaching their catch handler.
                    failed += outstanding;
                    break;
                }
            }
        }
    });

    // The committed assignment is authoritative: a labeling that won the
    // slot beats a concurrent cancellation or a sibling's failure.
    if let Some(assignment) = slot.into_inner() {
        return SearchOutcome::Found(assignment);
    }
    if cancelled {
        return SearchOutcome::Cancelled;
    }
    if failed > 0 {
        return SearchOutcome::Incomplete {
            failed_workers: failed,
        };
    }
    debug_assert_eq!(exhausted, workers);
    SearchOutcome::Exhausted
}

/// One striped worker: validate every candidate in this worker's stripe,
/// commit the first hit, and report exactly one terminal signal.
fn solve_worker<L, E, F>(
    worker_id: usize,
    workers: usize,
    graph: &Graph,
    labels: &LabelSet<L>,
    combine: &F,
    stop: &AtomicBool,
    slot: &OnceLock<Assignment<L>>,
) -> WorkerReport
where
    L: Clone + Eq + Hash,
    E: Eq + Hash,
    F: Fn(&L, &L) -> E,
{
    let stripe = Striped::new(Candidates::new(graph, labels), worker_id, workers);

    for assignment in stripe {
        if stop.load(Ordering::Relaxed) {
            return WorkerReport::Stopped;
        }
        if edge_injective(graph, &assignment, combine) {
            // At-most-one-writer: the slot accepts exactly one assignment;
            // a loser of the race treats the outcome as an early stop.
            let won = slot.set(assignment).is_ok();
            stop.store(true, Ordering::SeqCst);
            return if won {
                WorkerReport::Found
            } else {
                WorkerReport::Stopped
            };
        }
    }

    WorkerReport::ExhaustedLocal
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::Candidates;
    use crate::construct;
    use crate::labels::{self, LabelSet};
    use crate::validate::edge_injective;

    fn config(workers: usize, strategy: PartitionStrategy) -> SearchConfig {
        SearchConfig {
            workers,
            chunk_size: 64,
            strategy,
            timeout: None,
            cancel: CancelToken::new(),
        }
    }

    const BOTH: [PartitionStrategy; 2] = [PartitionStrategy::Chunked, PartitionStrategy::Striped];

    #[test]
    fn graceful_c7_is_found_and_revalidates() {
        let graph = construct::cycle(7);
        let label_set = labels::graceful_set(7);

        for strategy in BOTH {
            let outcome = find_labeling(
                &graph,
                &label_set,
                labels::absolute_difference,
                &config(4, strategy),
            );
            let assignment = outcome.found().expect("C7 has a graceful labeling");
            assert_eq!(assignment.len(), 7);
            assert!(edge_injective(
                &graph,
                assignment,
                &labels::absolute_difference
            ));
            assert!(assignment.iter().all(|l| label_set.contains(l)));
        }
    }

    #[test]
    fn two_node_tree_with_repeated_label() {
        // A single edge is always injectively labeled, and tree mode must
        // permit the forced repetition with only 2 labels for 2 nodes.
        let graph = construct::path(2);
        let label_set = LabelSet::new([1u64, 2]);

        for strategy in BOTH {
            let outcome = find_labeling(&graph, &label_set, labels::sum_mod(2), &config(2, strategy));
            let assignment = outcome.found().expect("single edge must validate");
            assert_eq!(assignment.len(), 2);
        }
    }

    #[test]
    fn undersized_label_set_exhausts_without_error() {
        let graph = construct::cycle(3);
        let label_set = LabelSet::new([0u64, 1]);

        for strategy in BOTH {
            for workers in [1, 2, 5] {
                let outcome = find_labeling(
                    &graph,
                    &label_set,
                    labels::absolute_difference,
                    &config(workers, strategy),
                );
                assert_eq!(outcome, SearchOutcome::Exhausted);
            }
        }
    }

    #[test]
    fn exhaustion_is_idempotent_across_worker_counts_and_chunk_sizes() {
        // A triangle under absolute difference never validates: the largest
        // endpoint gap always equals the sum of the other two.
        let graph = construct::cycle(3);
        let label_set = LabelSet::new([0u64, 1, 2]);
        assert!(find_labeling_sequential(&graph, &label_set, labels::absolute_difference).is_none());

        for strategy in BOTH {
            for workers in 1..=4 {
                for chunk_size in [1, 3, 100] {
                    let cfg = SearchConfig {
                        workers,
                        chunk_size,
                        strategy,
                        timeout: None,
                        cancel: CancelToken::new(),
                    };
                    let outcome =
                        find_labeling(&graph, &label_set, labels::absolute_difference, &cfg);
                    assert_eq!(
                        outcome,
                        SearchOutcome::Exhausted,
                        "strategy {strategy:?}, workers {workers}, chunk {chunk_size}"
                    );
                }
            }
        }
    }

    #[test]
    fn parallel_agrees_with_sequential_reference() {
        // Sweep small instances; whenever the reference finds nothing, the
        // parallel drivers must exhaust, and whenever it finds something,
        // they must find something valid too.
        let cases = [
            (construct::cycle(4), labels::graceful_set(4)),
            (construct::cycle(5), labels::graceful_set(5)),
            (construct::path(4), labels::harmonious_set(3)),
            (construct::star(3), labels::harmonious_set(3)),
        ];

        for (graph, label_set) in cases {
            let reference = find_labeling_sequential(&graph, &label_set, labels::absolute_difference);
            for strategy in BOTH {
                let outcome = find_labeling(
                    &graph,
                    &label_set,
                    labels::absolute_difference,
                    &config(3, strategy),
                );
                match &reference {
                    Some(_) => {
                        let found = outcome.found().expect("reference found a labeling");
                        assert!(edge_injective(&graph, found, &labels::absolute_difference));
                    }
                    None => assert!(outcome.is_exhausted()),
                }
            }
        }
    }

    #[test]
    fn sequential_reference_is_deterministic() {
        let graph = construct::cycle(7);
        let label_set = labels::graceful_set(7);
        let a = find_labeling_sequential(&graph, &label_set, labels::absolute_difference);
        let b = find_labeling_sequential(&graph, &label_set, labels::absolute_difference);
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn gamma_harmonious_c8_over_z4xz2() {
        let graph = construct::cycle(8);
        let label_set = labels::gamma_set(&[4, 2]);
        let combine = labels::componentwise_sum(vec![4, 2]);

        let outcome = find_labeling(&graph, &label_set, &combine, &config(4, PartitionStrategy::Striped));
        let assignment = outcome.found().expect("C8 is gamma-harmonious over Z4 x Z2");
        assert!(edge_injective(&graph, assignment, &&combine));
    }

    #[test]
    fn pre_cancelled_token_short_circuits() {
        let graph = construct::cycle(6);
        let label_set = labels::graceful_set(6);

        for strategy in BOTH {
            let cfg = config(2, strategy);
            cfg.cancel.cancel();
            let outcome = find_labeling(&graph, &label_set, labels::absolute_difference, &cfg);
            assert_eq!(outcome, SearchOutcome::Cancelled);
        }
    }

    #[test]
    fn timeout_yields_cancelled_not_exhausted() {
        // A constant combine rule collides on every graph with 2+ edges, so
        // the space (P(11, 10) candidates) can only end in exhaustion — far
        // beyond this timeout.
        let graph = construct::cycle(10);
        let label_set = labels::graceful_set(10);
        let constant = |_: &u64, _: &u64| 0u64;

        for strategy in BOTH {
            let cfg = SearchConfig {
                workers: 2,
                chunk_size: 512,
                strategy,
                timeout: Some(Duration::from_millis(30)),
                cancel: CancelToken::new(),
            };
            let start = Instant::now();
            let outcome = find_labeling(&graph, &label_set, constant, &cfg);
            assert_eq!(outcome, SearchOutcome::Cancelled);
            assert!(
                start.elapsed() < Duration::from_secs(20),
                "cancellation must be prompt"
            );
        }
    }

    #[test]
    fn panicking_combine_surfaces_as_incomplete() {
        let graph = construct::cycle(3);
        let label_set = labels::graceful_set(3);
        let poisoned = |_: &u64, _: &u64| -> u64 { panic!("combine blew up") };

        for strategy in BOTH {
            let outcome = find_labeling(&graph, &label_set, poisoned, &config(2, strategy));
            match outcome {
                SearchOutcome::Incomplete { failed_workers } => assert!(failed_workers >= 1),
                other => panic!("expected Incomplete, got {other:?}"),
            }
        }
    }

    #[test]
    fn asymmetric_tree_with_repetition_on_node_zero_is_found() {
        // On this 6-node tree under multiplication mod 6, a valid labeling
        // exists with the duplicated label on node 0 (e.g. [1, 1, 0, 4, 2, 3]
        // induces edge labels 3, 1, 0, 4, 2). Tree-mode generation places the
        // forced repetition on node 0, so the search must reach it.
        let graph = Graph::new(6, vec![(5, 0), (0, 1), (1, 2), (1, 3), (3, 4)]).unwrap();
        let label_set = LabelSet::new([0u64, 1, 2, 3, 4]);

        let found = find_labeling_sequential(&graph, &label_set, labels::product_mod(6))
            .expect("a valid labeling exists for this tree");
        assert!(edge_injective(&graph, &found, &labels::product_mod(6)));
        // Six nodes share five labels, so node 0's label is the duplicate.
        assert!(found[1..].contains(&found[0]));

        for strategy in BOTH {
            let outcome =
                find_labeling(&graph, &label_set, labels::product_mod(6), &config(3, strategy));
            let assignment = outcome.found().unwrap_or_else(|| {
                panic!("expected Found under {strategy:?}");
            });
            assert!(edge_injective(&graph, assignment, &labels::product_mod(6)));
        }
    }

    #[test]
    fn found_beats_cancellation_when_committed_first() {
        // The combine rule trips the token on its very first evaluation, so
        // cancellation is pending while the winning candidate (a single edge
        // is always injective) is being validated and committed. The
        // committed result must win over the concurrent cancellation.
        let graph = construct::path(2);
        let label_set = LabelSet::new([1u64, 2]);

        for strategy in BOTH {
            let cfg = config(2, strategy);
            let cancel = cfg.cancel.clone();
            let combine = move |a: &u64, b: &u64| {
                cancel.cancel();
                a + b
            };
            let outcome = find_labeling(&graph, &label_set, combine, &cfg);
            assert!(cfg.cancel.is_cancelled());
            assert!(
                outcome.found().is_some(),
                "committed result must not be reported as Cancelled, got {outcome:?}"
            );
        }
    }

    #[test]
    fn partitions_of_the_candidate_space_are_exhaustive() {
        // The partitioner invariant over the real generator: flattening all
        // stripes (or chunks) and canonicalizing recovers the exact
        // candidate sequence, for every worker count.
        let graph = construct::path(4);
        let label_set = labels::graceful_set(4);
        let mut full: Vec<_> = Candidates::new(&graph, &label_set).collect();
        assert!(!full.is_empty());
        full.sort();

        for workers in 1..=6 {
            let mut union: Vec<_> = (0..workers)
                .flat_map(|w| Striped::new(Candidates::new(&graph, &label_set), w, workers))
                .collect();
            union.sort();
            assert_eq!(union, full, "stripes with {workers} workers");
        }

        for chunk_size in [1, 7, 64, 100_000] {
            let mut union: Vec<_> = Chunked::new(Candidates::new(&graph, &label_set), chunk_size)
                .flatten()
                .collect();
            union.sort();
            assert_eq!(union, full, "chunks of {chunk_size}");
        }
    }

    #[test]
    fn zero_workers_degrades_to_one() {
        let graph = construct::cycle(3);
        let label_set = LabelSet::new([0u64, 1]);
        let outcome = find_labeling(
            &graph,
            &label_set,
            labels::absolute_difference,
            &config(0, PartitionStrategy::Striped),
        );
        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn cancel_token_is_shared_across_clones() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn outcome_accessors() {
        let found: SearchOutcome<u64> = SearchOutcome::Found(vec![1, 2]);
        assert_eq!(found.found(), Some(&vec![1, 2]));
        assert!(!found.is_exhausted());

        let exhausted: SearchOutcome<u64> = SearchOutcome::Exhausted;
        assert!(exhausted.found().is_none());
        assert!(exhausted.is_exhausted());
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SearchConfig::default();
        assert!(cfg.workers > 0);
        assert!(cfg.chunk_size > 0);
        assert!(!cfg.cancel.is_cancelled());
    }
}
