use eightpuzzle_solver::engine::Board;
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{solve_astar, SearchOutcome};
use tracing_subscriber::EnvFilter;

const NUM_SCRAMBLES: usize = 20;
const SCRAMBLE_STEPS: usize = 16;
const START_SEED: u64 = 0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!(
        "Benchmarking {} heuristics over {} scrambles of {} slides each...",
        Heuristic::ALL.len(),
        NUM_SCRAMBLES,
        SCRAMBLE_STEPS
    );

    // Per heuristic: (total nodes expanded, total solution depth).
    let mut totals: Vec<(Heuristic, u64, u64)> = Heuristic::ALL
        .iter()
        .map(|&heuristic| (heuristic, 0u64, 0u64))
        .collect();

    for index in 0..NUM_SCRAMBLES {
        let seed = START_SEED + index as u64;
        let board = match Board::scrambled(SCRAMBLE_STEPS, seed) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("Error: failed to scramble with seed {}: {}", seed, err);
                std::process::exit(1);
            }
        };

        println!("\nScramble {} (seed {})", index, seed);

        let mut depths = Vec::new();
        for entry in totals.iter_mut() {
            match solve_astar(&board, entry.0) {
                Ok(SearchOutcome::Solved {
                    path_cost,
                    nodes_expanded,
                    ..
                }) => {
                    println!(
                        "  {:<18} depth {:>2}, nodes expanded {:>6}",
                        entry.0, path_cost, nodes_expanded
                    );
                    entry.1 += nodes_expanded as u64;
                    entry.2 += path_cost as u64;
                    depths.push(path_cost);
                }
                Ok(SearchOutcome::Exhausted { .. }) => {
                    eprintln!(
                        "Error: {} exhausted the search space on a scrambled board (seed {})",
                        entry.0, seed
                    );
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("Error: search with {} aborted: {}", entry.0, err);
                    std::process::exit(1);
                }
            }
        }

        // Admissible heuristics must agree on the optimal depth.
        if depths.windows(2).any(|pair| pair[0] != pair[1]) {
            eprintln!(
                "Error: heuristics disagreed on the optimal depth for seed {}: {:?}",
                seed, depths
            );
            std::process::exit(1);
        }
    }

    println!("\n--- Averages over {} scrambles ---", NUM_SCRAMBLES);
    for (heuristic, total_expanded, total_depth) in &totals {
        println!(
            "{:<18} avg depth {:>5.2}, avg nodes expanded {:>9.2}",
            heuristic,
            *total_depth as f64 / NUM_SCRAMBLES as f64,
            *total_expanded as f64 / NUM_SCRAMBLES as f64
        );
    }
}
