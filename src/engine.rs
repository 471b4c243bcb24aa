//! Core board model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: Represents one arrangement of the nine tiles on the 3x3 grid
//!   and includes methods for tile location, successor generation, and
//!   seeded scrambling.
//! - `Direction`: The four orthogonal directions the blank can move in.
//! - `PuzzleError`: Errors raised at the construction boundary or when an
//!   internal invariant breaks.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use thiserror::Error;

/// Defines the side length of the puzzle grid. The grid is always square.
pub const GRID_SIZE: usize = 3;

/// Total number of cells on the grid, and equally the number of tile labels
/// (1 through 8 plus the blank, written as 0).
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Errors surfaced by the board model and the search engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The supplied tiles are not a permutation of 0-8 on a 3x3 grid.
    /// Raised at construction or parse time, never during a search.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A label could not be located on a board believed valid. This signals
    /// a programming defect in the board model, not a user condition, and
    /// aborts the search run that observes it.
    #[error("invariant violation: label {label} is missing from the board")]
    InvariantViolation { label: u8 },
}

/// The four orthogonal directions the blank can move in.
///
/// `ALL` lists them in the fixed expansion order (up, right, down, left),
/// which keeps successor generation and therefore whole search runs
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the (row, column) delta this direction applies to the blank.
    /// Row 0 is the top of the grid.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Returns the direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.pad(s)
    }
}

/// Represents one configuration of the puzzle as a 3x3 grid of tile labels.
///
/// Labels run 0 through 8 with 0 denoting the blank, and a valid board holds
/// exactly one of each. A `Board` is an immutable value: every transformation
/// copies the grid and returns a new instance, so a board referenced from the
/// frontier or the explored set can never change underneath the search.
///
/// # Examples
/// ```
/// use eightpuzzle_solver::engine::Board;
/// let goal = Board::goal();
/// assert_eq!(goal.to_flat(), [1, 2, 3, 4, 5, 6, 7, 8, 0]);
/// assert_eq!(goal.locate(0).unwrap(), (2, 2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Returns the goal configuration: labels 1 through 8 in row-major order
    /// followed by the blank in the bottom-right corner.
    pub fn goal() -> Self {
        let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut label = 1u8;
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                *cell = label % TILE_COUNT as u8;
                label += 1;
            }
        }
        Board { grid }
    }

    /// Builds a board from its wire format: a row-major flat sequence of the
    /// nine tile labels.
    ///
    /// # Arguments
    /// * `tiles`: Row-major labels, e.g. `[1, 2, 3, 4, 5, 6, 7, 8, 0]`.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidConfiguration` if the slice is not
    /// exactly nine labels, contains a label outside 0-8, or repeats a
    /// label. A board that fails here never reaches the search loop.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::engine::Board;
    /// let board = Board::from_flat(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(board.get(1, 1), 0);
    /// assert!(Board::from_flat(&[1, 2, 3]).is_err());
    /// assert!(Board::from_flat(&[1, 2, 3, 4, 5, 6, 7, 8, 8]).is_err());
    /// ```
    pub fn from_flat(tiles: &[u8]) -> Result<Self, PuzzleError> {
        if tiles.len() != TILE_COUNT {
            return Err(PuzzleError::InvalidConfiguration {
                reason: format!("expected {} tiles, found {}", TILE_COUNT, tiles.len()),
            });
        }

        let mut seen = [false; TILE_COUNT];
        for &label in tiles {
            if label as usize >= TILE_COUNT {
                return Err(PuzzleError::InvalidConfiguration {
                    reason: format!("tile label {} is outside 0-{}", label, TILE_COUNT - 1),
                });
            }
            if seen[label as usize] {
                return Err(PuzzleError::InvalidConfiguration {
                    reason: format!("tile label {} appears more than once", label),
                });
            }
            seen[label as usize] = true;
        }

        let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
        for (index, &label) in tiles.iter().enumerate() {
            grid[index / GRID_SIZE][index % GRID_SIZE] = label;
        }
        Ok(Board { grid })
    }

    /// Returns the board's wire format: the nine labels in row-major order.
    pub fn to_flat(&self) -> [u8; TILE_COUNT] {
        let mut flat = [0u8; TILE_COUNT];
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &label) in row.iter().enumerate() {
                flat[r * GRID_SIZE + c] = label;
            }
        }
        flat
    }

    /// Returns the label at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the grid (`0 <= r, c < GRID_SIZE`).
    pub fn get(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the unique position of `label` on the grid as (row, column).
    ///
    /// # Errors
    /// Returns `PuzzleError::InvariantViolation` if the label is absent. On a
    /// validated board this cannot happen; observing it means the permutation
    /// invariant has been broken by a defect.
    pub fn locate(&self, label: u8) -> Result<(usize, usize), PuzzleError> {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.grid[r][c] == label {
                    return Ok((r, c));
                }
            }
        }
        Err(PuzzleError::InvariantViolation { label })
    }

    /// Moves the blank one cell in `direction`, returning the resulting
    /// board, or `Ok(None)` when the target cell lies off the grid.
    ///
    /// The slide is a pure value transform: the grid is copied and the blank
    /// is swapped with the neighboring tile.
    pub fn slide(&self, direction: Direction) -> Result<Option<Board>, PuzzleError> {
        let (r, c) = self.locate(0)?;
        let (dr, dc) = direction.offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;

        if nr >= 0 && nr < GRID_SIZE as isize && nc >= 0 && nc < GRID_SIZE as isize {
            Ok(Some(self.swapped((r, c), (nr as usize, nc as usize))))
        } else {
            Ok(None)
        }
    }

    /// Generates every configuration reachable from this one by a single
    /// legal slide, in the fixed direction order up, right, down, left.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, a centered
    /// blank 4.
    ///
    /// # Errors
    /// Propagates `PuzzleError::InvariantViolation` if the blank cannot be
    /// located.
    ///
    /// # Examples
    /// ```
    /// use eightpuzzle_solver::engine::Board;
    /// let centered = Board::from_flat(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(centered.legal_moves().unwrap().len(), 4);
    /// assert_eq!(Board::goal().legal_moves().unwrap().len(), 2);
    /// ```
    pub fn legal_moves(&self) -> Result<Vec<Board>, PuzzleError> {
        let (r, c) = self.locate(0)?;
        let mut successors = Vec::with_capacity(4);

        for direction in Direction::ALL {
            let (dr, dc) = direction.offset();
            let nr = r as isize + dr;
            let nc = c as isize + dc;

            if nr >= 0 && nr < GRID_SIZE as isize && nc >= 0 && nc < GRID_SIZE as isize {
                successors.push(self.swapped((r, c), (nr as usize, nc as usize)));
            }
        }

        Ok(successors)
    }

    /// Builds a board by applying `steps` random legal slides to the goal
    /// configuration.
    ///
    /// The walk is driven by a `SmallRng` seeded with the provided value, so
    /// the same seed always produces the same scramble and runs can be
    /// reproduced exactly. Every board produced this way is reachable, and
    /// its optimal solution depth is at most `steps`.
    ///
    /// # Arguments
    /// * `steps`: Number of random slides to apply.
    /// * `seed`: Seed for the random number generator.
    pub fn scrambled(steps: usize, seed: u64) -> Result<Board, PuzzleError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::goal();

        for _ in 0..steps {
            let mut moves = board.legal_moves()?;
            let choice = rng.gen_range(0..moves.len());
            board = moves.swap_remove(choice);
        }

        Ok(board)
    }

    // Copy the grid and exchange the labels at `a` and `b`. Both positions
    // must be on the grid.
    fn swapped(&self, a: (usize, usize), b: (usize, usize)) -> Board {
        let mut grid = self.grid;
        let held = grid[a.0][a.1];
        grid[a.0][a.1] = grid[b.0][b.1];
        grid[b.0][b.1] = held;
        Board { grid }
    }
}

impl fmt::Display for Board {
    /// Formats the board as three space-separated rows, the blank as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &label) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if label == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", label)?;
                }
            }
        }
        Ok(())
    }
}
