//! A* search engine for the 8-puzzle.
//!
//! The engine owns a priority frontier ordered by f = g + h, an explored set
//! of already-expanded boards, and the diagnostic counters it reports back in
//! the outcome. One `Search` value drives exactly one run from its initial
//! configuration to `Solved` or `Exhausted`.
use crate::engine::{Board, PuzzleError};
use crate::heuristics::Heuristic;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// One entry on the frontier: a configuration plus the path cost that
/// reached it and the heuristic estimate computed for it.
///
/// Nodes are created once at expansion time and never mutated. The priority
/// f = g + h is derived on demand rather than stored, so the two components
/// can never drift apart.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SearchNode {
    board: Board,
    /// g: number of slides from the start to this configuration.
    cost: u32,
    /// h: estimated slides remaining, per the active heuristic.
    estimate: u32,
    /// Monotonic insertion counter, used only to break priority ties.
    seq: u64,
}

impl SearchNode {
    fn priority(&self) -> u32 {
        self.cost + self.estimate
    }
}

// `BinaryHeap` is a max-heap, so the comparison is inverted to pop the
// lowest f first. Equal-f nodes pop in insertion order, which makes every
// run reproducible without any hidden randomness.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority()
            .cmp(&self.priority())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Terminal result of one search run.
///
/// `Exhausted` is a defined negative outcome, not an error: the frontier
/// drained without reaching the goal, which is how an unsolvable start is
/// discovered (permutation parity puts half of all configurations out of
/// reach, and the engine deliberately does not pre-check for that).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal configuration was removed from the frontier.
    Solved {
        /// The goal board, echoed back for display.
        board: Board,
        /// Length of the optimal slide sequence.
        path_cost: u32,
        /// Nodes popped and expanded; the final goal pop is not counted.
        nodes_expanded: usize,
        /// High-water mark of the frontier, including the initial push.
        max_frontier_size: usize,
    },
    /// The frontier emptied without reaching the goal.
    Exhausted {
        nodes_expanded: usize,
        max_frontier_size: usize,
    },
}

/// A single A* run over the puzzle's state space.
///
/// Constructing the engine computes the initial node (g = 0, h from the
/// selected heuristic) and seeds the frontier with it; `run` then drives the
/// loop to completion. The frontier and both membership sets are owned
/// exclusively by this value, so independent searches cannot interfere.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::heuristics::Heuristic;
/// use eightpuzzle_solver::solver::{Search, SearchOutcome};
///
/// let search = Search::from_flat(&[1, 2, 3, 4, 5, 6, 7, 0, 8], Heuristic::ManhattanDistance).unwrap();
/// match search.run().unwrap() {
///     SearchOutcome::Solved { path_cost, .. } => assert_eq!(path_cost, 1),
///     SearchOutcome::Exhausted { .. } => unreachable!("one slide from the goal"),
/// }
/// ```
pub struct Search {
    goal: Board,
    heuristic: Heuristic,
    frontier: BinaryHeap<SearchNode>,
    /// Boards currently sitting on the frontier.
    queued: HashSet<Board>,
    /// Boards already expanded.
    explored: HashSet<Board>,
    next_seq: u64,
    nodes_expanded: usize,
    max_frontier_size: usize,
}

impl Search {
    /// Creates an engine for `initial` using the given heuristic.
    ///
    /// `initial` is already a validated `Board`, so this cannot fail; use
    /// `from_flat` to construct directly from untrusted tiles.
    pub fn new(initial: Board, heuristic: Heuristic) -> Self {
        let mut search = Search {
            goal: Board::goal(),
            heuristic,
            frontier: BinaryHeap::new(),
            queued: HashSet::new(),
            explored: HashSet::new(),
            next_seq: 0,
            nodes_expanded: 0,
            max_frontier_size: 0,
        };

        let estimate = heuristic.estimate(&initial);
        search.push(SearchNode {
            board: initial,
            cost: 0,
            estimate,
            seq: 0,
        });
        search
    }

    /// Creates an engine from the wire format (nine row-major labels).
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidConfiguration` for anything that is not
    /// a 0-8 permutation; the search loop is never entered in that case.
    pub fn from_flat(tiles: &[u8], heuristic: Heuristic) -> Result<Self, PuzzleError> {
        Ok(Search::new(Board::from_flat(tiles)?, heuristic))
    }

    /// Runs the search to completion.
    ///
    /// Repeatedly removes the minimum-priority node, tests it against the
    /// goal, and otherwise expands it. A successor already expanded or
    /// already queued is discarded, which both bounds memory and guarantees
    /// termination on the puzzle's cyclic state graph.
    ///
    /// # Errors
    /// The only error that can surface here is
    /// `PuzzleError::InvariantViolation`, which aborts the run rather than
    /// returning a corrupted result.
    pub fn run(mut self) -> Result<SearchOutcome, PuzzleError> {
        tracing::info!(heuristic = %self.heuristic, "starting search");

        while let Some(current) = self.frontier.pop() {
            self.queued.remove(&current.board);

            if current.board == self.goal {
                tracing::info!(
                    path_cost = current.cost,
                    nodes_expanded = self.nodes_expanded,
                    max_frontier_size = self.max_frontier_size,
                    "goal reached"
                );
                return Ok(SearchOutcome::Solved {
                    board: current.board,
                    path_cost: current.cost,
                    nodes_expanded: self.nodes_expanded,
                    max_frontier_size: self.max_frontier_size,
                });
            }

            tracing::debug!(g = current.cost, h = current.estimate, "expanding node");
            self.explored.insert(current.board.clone());
            self.nodes_expanded += 1;

            for successor in current.board.legal_moves()? {
                if self.explored.contains(&successor) || self.queued.contains(&successor) {
                    continue;
                }
                let estimate = self.heuristic.estimate(&successor);
                self.next_seq += 1;
                let seq = self.next_seq;
                self.push(SearchNode {
                    board: successor,
                    cost: current.cost + 1,
                    estimate,
                    seq,
                });
            }
        }

        tracing::info!(
            nodes_expanded = self.nodes_expanded,
            max_frontier_size = self.max_frontier_size,
            "frontier exhausted without reaching the goal"
        );
        Ok(SearchOutcome::Exhausted {
            nodes_expanded: self.nodes_expanded,
            max_frontier_size: self.max_frontier_size,
        })
    }

    fn push(&mut self, node: SearchNode) {
        self.queued.insert(node.board.clone());
        self.frontier.push(node);
        if self.frontier.len() > self.max_frontier_size {
            self.max_frontier_size = self.frontier.len();
        }
    }
}

/// Solves `initial` with the given heuristic in one call.
pub fn solve_astar(initial: &Board, heuristic: Heuristic) -> Result<SearchOutcome, PuzzleError> {
    Search::new(initial.clone(), heuristic).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_solved_board() {
        let outcome = solve_astar(&Board::goal(), Heuristic::ManhattanDistance).unwrap();
        match outcome {
            SearchOutcome::Solved {
                path_cost,
                nodes_expanded,
                max_frontier_size,
                ..
            } => {
                assert_eq!(path_cost, 0);
                assert_eq!(nodes_expanded, 0, "the goal pops before anything expands");
                assert_eq!(max_frontier_size, 1);
            }
            SearchOutcome::Exhausted { .. } => panic!("the goal board must be solved"),
        }
    }

    #[test]
    fn test_single_slide_solution() {
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        for heuristic in Heuristic::ALL {
            match solve_astar(&board, heuristic).unwrap() {
                SearchOutcome::Solved {
                    path_cost,
                    board: final_board,
                    ..
                } => {
                    assert_eq!(path_cost, 1, "{} must find the one-slide solution", heuristic);
                    assert_eq!(final_board, Board::goal());
                }
                SearchOutcome::Exhausted { .. } => {
                    panic!("{} failed a trivially solvable board", heuristic)
                }
            }
        }
    }

    #[test]
    fn test_two_slide_solution() {
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        let outcome = solve_astar(&board, Heuristic::MisplacedTiles).unwrap();
        assert!(
            matches!(outcome, SearchOutcome::Solved { path_cost: 2, .. }),
            "expected a depth-2 solution, got {:?}",
            outcome
        );
    }

    #[test]
    fn test_invalid_tiles_rejected_before_searching() {
        let result = Search::from_flat(&[1, 1, 2, 3, 4, 5, 6, 7, 8], Heuristic::UniformCost);
        assert!(matches!(
            result,
            Err(PuzzleError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_path_cost_is_heuristic_independent() {
        // All three heuristics are admissible, so they must agree on the
        // optimal depth even though they expand different node counts.
        let board = Board::scrambled(20, 3).unwrap();
        let mut costs = Vec::new();
        for heuristic in Heuristic::ALL {
            match solve_astar(&board, heuristic).unwrap() {
                SearchOutcome::Solved { path_cost, .. } => costs.push(path_cost),
                SearchOutcome::Exhausted { .. } => {
                    panic!("{} exhausted on a reachable scramble", heuristic)
                }
            }
        }
        assert_eq!(costs[0], costs[1]);
        assert_eq!(costs[1], costs[2]);
    }

    #[test]
    fn test_tighter_heuristics_expand_no_more_nodes() {
        let board = Board::scrambled(24, 11).unwrap();
        let expanded: Vec<usize> = Heuristic::ALL
            .iter()
            .map(|&heuristic| match solve_astar(&board, heuristic).unwrap() {
                SearchOutcome::Solved { nodes_expanded, .. } => nodes_expanded,
                SearchOutcome::Exhausted { .. } => panic!("scramble must stay solvable"),
            })
            .collect();
        // ALL is ordered weakest to strongest.
        assert!(
            expanded[2] <= expanded[1],
            "Manhattan expanded {} nodes, Misplaced Tile {}",
            expanded[2],
            expanded[1]
        );
        assert!(
            expanded[1] <= expanded[0],
            "Misplaced Tile expanded {} nodes, Uniform Cost {}",
            expanded[1],
            expanded[0]
        );
    }

    #[test]
    fn test_scrambles_solved_within_generator_length() {
        let steps = 14;
        for seed in 0..6u64 {
            let board = Board::scrambled(steps, seed).unwrap();
            for heuristic in Heuristic::ALL {
                match solve_astar(&board, heuristic).unwrap() {
                    SearchOutcome::Solved { path_cost, .. } => {
                        assert!(
                            path_cost as usize <= steps,
                            "seed {}: {} reported depth {} for a {}-slide scramble",
                            seed,
                            heuristic,
                            path_cost,
                            steps
                        );
                    }
                    SearchOutcome::Exhausted { .. } => {
                        panic!("seed {}: scrambles are reachable by construction", seed)
                    }
                }
            }
        }
    }

    #[test]
    fn test_odd_permutation_exhausts_search() {
        // One adjacent pair swapped away from the goal is an odd
        // permutation, which no sequence of slides can undo.
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        match solve_astar(&board, Heuristic::ManhattanDistance).unwrap() {
            SearchOutcome::Solved { path_cost, .. } => {
                panic!("odd permutation reported solved at depth {}", path_cost)
            }
            SearchOutcome::Exhausted {
                nodes_expanded,
                max_frontier_size,
            } => {
                // Exactly half of the 9! permutations are reachable, and
                // every one of them gets expanded exactly once.
                assert_eq!(nodes_expanded, 181_440);
                assert!(max_frontier_size <= 181_440);
            }
        }
    }
}
