use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use harmonious::prelude::*;

fn main() {
    env_logger::init();

    let mut cfg = SearchConfig::default();
    let mut case = String::from("graceful-c7");

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--case" => {
                case = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2)).clone();
                i += 2;
            }
            "--workers" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.workers = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--chunk-size" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.chunk_size = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                i += 2;
            }
            "--strategy" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                cfg.strategy = match v.as_str() {
                    "chunked" => PartitionStrategy::Chunked,
                    "striped" => PartitionStrategy::Striped,
                    _ => usage_and_exit(2),
                };
                i += 2;
            }
            "--timeout-secs" => {
                let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let secs: u64 = v.parse().unwrap_or_else(|_| usage_and_exit(2));
                cfg.timeout = Some(Duration::from_secs(secs));
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let code = match case.as_str() {
        // Graceful labeling of C7 with {0, ..., 7} under |a - b|.
        "graceful-c7" => run_case(
            "graceful labeling of C7 with {0..7}",
            &construct::cycle(7),
            &labels::graceful_set(7),
            labels::absolute_difference,
            &cfg,
        ),
        // Harmonious labeling of the height-3 binary tree with Z14.
        // Fair warning: the candidate space is 14! * 14 — bring a timeout.
        "harmonious-tree" => run_case(
            "harmonious labeling of the (2,3) balanced tree with {1..14}",
            &construct::balanced_tree(2, 3),
            &labels::harmonious_set(14),
            labels::sum_mod(14),
            &cfg,
        ),
        // Gamma-harmonious labeling of C8 with Z4 x Z2.
        "gamma-c8" => run_case(
            "gamma-harmonious labeling of C8 with Z4 x Z2",
            &construct::cycle(8),
            &labels::gamma_set(&[4, 2]),
            labels::componentwise_sum(vec![4, 2]),
            &cfg,
        ),
        // Pi-harmonious labeling of the K4 windmill with U(13).
        "pi-windmill" => run_case(
            "pi-harmonious labeling of Wd(2,4) with U(13)",
            &construct::windmill(2, 4),
            &labels::pi_set(13),
            labels::product_mod(13),
            &cfg,
        ),
        other => {
            eprintln!(
                "Unsupported --case {other}. Supported cases: graceful-c7, harmonious-tree, gamma-c8, pi-windmill."
            );
            2
        }
    };
    std::process::exit(code);
}

fn run_case<L, E, F>(
    description: &str,
    graph: &Graph,
    label_set: &LabelSet<L>,
    combine: F,
    cfg: &SearchConfig,
) -> i32
where
    L: Clone + Eq + Hash + Send + Sync + Debug,
    E: Eq + Hash + Debug,
    F: Fn(&L, &L) -> E + Sync,
{
    println!("--------------------------------------------------");
    println!("Labeling search: {description}");
    println!(
        "Nodes: {} | Edges: {} | Labels: {} | Workers: {} | Strategy: {:?}",
        graph.node_count(),
        graph.edge_count(),
        label_set.len(),
        cfg.workers.max(1),
        cfg.strategy,
    );
    println!("--------------------------------------------------");

    match find_labeling(graph, label_set, &combine, cfg) {
        SearchOutcome::Found(assignment) => {
            println!("Valid labeling found!");
            for (node, label) in graph.nodes().zip(&assignment) {
                println!("  node {node}: {label:?}");
            }
            println!("Induced edge labels:");
            for ((u, v), label) in induced_edge_labels(graph, &assignment, &combine) {
                println!("  ({u}, {v}): {label:?}");
            }
            0
        }
        SearchOutcome::Exhausted => {
            println!("No valid labeling exists: candidate space exhausted.");
            0
        }
        SearchOutcome::Cancelled => {
            println!("Search cancelled before the space was exhausted.");
            1
        }
        SearchOutcome::Incomplete { failed_workers } => {
            eprintln!("Search incomplete: {failed_workers} worker(s) failed; rerun to retry.");
            1
        }
    }
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  harmonious [--case NAME] [--workers N] [--chunk-size N] [--strategy chunked|striped] [--timeout-secs S]\n\nCases:\n  graceful-c7       Graceful labeling of C7 with {{0..7}} (default)\n  harmonious-tree   Harmonious labeling of the height-3 binary tree with Z14 (slow!)\n  gamma-c8          Gamma-harmonious labeling of C8 with Z4 x Z2\n  pi-windmill       Pi-harmonious labeling of the K4 windmill with U(13)\n\nOptions:\n  --workers N          Number of parallel workers (default: auto-detect)\n  --chunk-size N       Batch size for the chunked strategy (default: 8192)\n  --strategy S         Work partitioning: chunked or striped (default: striped)\n  --timeout-secs S     Give up (Cancelled) after S seconds\n"
    );
    std::process::exit(code)
}
