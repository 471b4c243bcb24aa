//! Heuristic strategies for the A* solver.
//!
//! Each strategy is a pure function of a `Board` that estimates how many
//! slides remain to the goal. All three are admissible (they never
//! overestimate) and consistent, which is what lets the solver guarantee
//! optimal solutions; substituting an inadmissible estimate here would
//! silently forfeit that guarantee.
use crate::engine::{Board, GRID_SIZE};
use std::fmt;

/// The selectable heuristic strategies.
///
/// The choice is passed explicitly into the search engine constructor, so
/// repeated runs with different heuristics never interfere with each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Always estimates 0, degrading A* to uniform-cost search.
    UniformCost,
    /// Counts the non-blank tiles that sit away from their goal cell.
    MisplacedTiles,
    /// Sums each non-blank tile's row and column distance to its goal cell.
    ManhattanDistance,
}

impl Heuristic {
    /// Every strategy, ordered weakest to strongest.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::UniformCost,
        Heuristic::MisplacedTiles,
        Heuristic::ManhattanDistance,
    ];

    /// Estimates the remaining slide count from `board` to the goal.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::engine::Board;
    /// use eightpuzzle_solver::heuristics::Heuristic;
    ///
    /// let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
    /// assert_eq!(Heuristic::UniformCost.estimate(&board), 0);
    /// assert_eq!(Heuristic::MisplacedTiles.estimate(&board), 2);
    /// assert_eq!(Heuristic::ManhattanDistance.estimate(&board), 2);
    /// ```
    pub fn estimate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::UniformCost => 0,
            Heuristic::MisplacedTiles => misplaced_tiles(board),
            Heuristic::ManhattanDistance => manhattan_distance(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::UniformCost => "Uniform Cost",
            Heuristic::MisplacedTiles => "Misplaced Tile",
            Heuristic::ManhattanDistance => "Manhattan Distance",
        };
        f.pad(name)
    }
}

/// Returns the goal cell of a non-blank label: label `L` belongs at row
/// `(L-1)/3`, column `(L-1)%3`.
pub fn goal_position(label: u8) -> (usize, usize) {
    debug_assert!((1..=8).contains(&label), "blank has no goal cell here");
    (
        ((label - 1) / GRID_SIZE as u8) as usize,
        ((label - 1) % GRID_SIZE as u8) as usize,
    )
}

/// Counts the non-blank labels whose current cell differs from their goal
/// cell. The blank is excluded, so the count ranges 0 through 8.
pub fn misplaced_tiles(board: &Board) -> u32 {
    let mut count = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let label = board.get(r, c);
            if label != 0 && goal_position(label) != (r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Sums `|current_row - goal_row| + |current_col - goal_col|` over the eight
/// non-blank labels.
pub fn manhattan_distance(board: &Board) -> u32 {
    let mut distance = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            let label = board.get(r, c);
            if label != 0 {
                let (goal_r, goal_c) = goal_position(label);
                distance += (r as isize - goal_r as isize).unsigned_abs() as u32;
                distance += (c as isize - goal_c as isize).unsigned_abs() as u32;
            }
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_position_table() {
        assert_eq!(goal_position(1), (0, 0));
        assert_eq!(goal_position(3), (0, 2));
        assert_eq!(goal_position(5), (1, 1));
        assert_eq!(goal_position(8), (2, 1));
    }

    #[test]
    fn test_all_heuristics_are_zero_at_goal() {
        let goal = Board::goal();
        for heuristic in Heuristic::ALL {
            assert_eq!(
                heuristic.estimate(&goal),
                0,
                "{} must estimate 0 at the goal",
                heuristic
            );
        }
    }

    #[test]
    fn test_uniform_cost_is_always_zero() {
        let board = Board::from_flat(&[8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        assert_eq!(Heuristic::UniformCost.estimate(&board), 0);
    }

    #[test]
    fn test_misplaced_tiles_counts_swapped_pair() {
        // 7 and 8 exchanged: exactly two tiles off their goal cells.
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        assert_eq!(misplaced_tiles(&board), 2);
    }

    #[test]
    fn test_misplaced_tiles_ignores_blank() {
        // The blank sits in the center and only tile 5 is displaced.
        let board = Board::from_flat(&[1, 2, 3, 4, 0, 6, 7, 8, 5]).unwrap();
        assert_eq!(misplaced_tiles(&board), 1);
    }

    #[test]
    fn test_manhattan_distance_sums_tile_offsets() {
        // 7 and 8 are each one cell from home.
        let board = Board::from_flat(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        assert_eq!(manhattan_distance(&board), 2);

        // Tile 5 is two cells from (1, 1); the blank contributes nothing.
        let board = Board::from_flat(&[1, 2, 3, 4, 0, 6, 7, 8, 5]).unwrap();
        assert_eq!(manhattan_distance(&board), 2);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let board = Board::from_flat(&[8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        assert!(
            manhattan_distance(&board) >= misplaced_tiles(&board),
            "each displaced tile is at least one slide from home"
        );
    }
}
