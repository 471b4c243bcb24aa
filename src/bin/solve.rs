use clap::{Parser, ValueEnum};
use eightpuzzle_solver::engine::{Board, PuzzleError};
use eightpuzzle_solver::heuristics::Heuristic;
use eightpuzzle_solver::solver::{Search, SearchOutcome};
use eightpuzzle_solver::utils::board_from_str;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    /// Uniform cost search, h(n) = 0
    Uniform,
    /// Misplaced tile count
    Misplaced,
    /// Manhattan distance
    Manhattan,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Uniform => Heuristic::UniformCost,
            HeuristicArg::Misplaced => Heuristic::MisplacedTiles,
            HeuristicArg::Manhattan => Heuristic::ManhattanDistance,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic to drive the search with
    #[clap(short = 'H', long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Starting tiles in row-major order, e.g. "1 2 3 4 5 6 7 8 0"
    #[clap(long, conflicts_with = "scramble")]
    tiles: Option<String>,

    /// Scramble the goal board with this many random slides instead of --tiles
    #[clap(long)]
    scramble: Option<usize>,

    /// Seed for the scramble generator
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn starting_board(args: &Args) -> Result<Board, PuzzleError> {
    if let Some(steps) = args.scramble {
        Board::scrambled(steps, args.seed)
    } else if let Some(tiles) = &args.tiles {
        board_from_str(tiles)
    } else {
        Err(PuzzleError::InvalidConfiguration {
            reason: "no starting configuration given; use --tiles or --scramble".to_string(),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let heuristic = Heuristic::from(args.heuristic);

    let board = match starting_board(&args) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    println!("Initial state:\n{}\n", board);
    println!("Goal state:\n{}\n", Board::goal());
    println!("Searching with the {} heuristic...\n", heuristic);

    let start = Instant::now();
    let outcome = Search::new(board, heuristic).run();
    let elapsed = start.elapsed();

    match outcome {
        Ok(SearchOutcome::Solved {
            board,
            path_cost,
            nodes_expanded,
            max_frontier_size,
        }) => {
            println!("Puzzle solved!\n{}\n", board);
            println!("Solution depth: {}", path_cost);
            println!("Nodes expanded: {}", nodes_expanded);
            println!("Maximum frontier size: {}", max_frontier_size);
        }
        Ok(SearchOutcome::Exhausted {
            nodes_expanded,
            max_frontier_size,
        }) => {
            println!("Failed to find a solution: search space exhausted.");
            println!("Nodes expanded: {}", nodes_expanded);
            println!("Maximum frontier size: {}", max_frontier_size);
        }
        Err(err) => {
            eprintln!("Search aborted: {}", err);
            std::process::exit(1);
        }
    }
    println!("Time taken: {:.3?}", elapsed);
}
