//! # 8-Puzzle A* Solver Library
//!
//! This library provides the board model for the 3x3 sliding tile puzzle
//! and an A* solver with three interchangeable heuristics (uniform cost,
//! misplaced tile count, Manhattan distance).
//!
//! It is used by two binaries:
//! - `solve`: Takes a starting configuration (or a seeded scramble) and a
//!   heuristic choice, then outputs the solution depth and search counters.
//! - `heuristic_benchmark`: Runs every heuristic over a batch of seeded
//!   scrambles and reports average nodes expanded per heuristic.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), slide directions
//!   (`Direction`), configuration validation, and successor generation.
//! - `solver`: Provides the `Search` engine and the `solve_astar` function
//!   for finding shortest slide sequences to the goal configuration.
//! - `heuristics`: Defines the selectable heuristic strategies and their
//!   estimate functions.
//! - `utils`: Provides utility functions, such as parsing a board from its
//!   flat integer wire format.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g., `eightpuzzle_solver::solver::solve_astar()`. This keeps the top-level
// library namespace cleaner.
