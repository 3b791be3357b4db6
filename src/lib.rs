//! # Dungeon Solver Library
//!
//! This library provides the rules of a single-player dungeon puzzle and a
//! branch-and-bound Depth First Search (DFS) solver that finds the cheapest
//! sequence of attacks clearing every monster from the board.
//!
//! It is used by two binaries:
//! - `dungeon_solver`: Reads a dungeon file, searches for the optimal
//!   solution and prints it step by step.
//! - `dungeon_generator`: Prints seeded random dungeons in the input format.
//!
//! ## Modules
//! - `engine`: Cells, positions, directions, the `Grid` and the reachability explorer.
//! - `weapons`: The four weapon rules and the combat resolver (damage and knock-back).
//! - `heuristics`: Remaining monster health and the admissible cost lower bound.
//! - `solver`: The search itself, its limits, statistics and progress events.
//! - `report`: Text rendering of a solution history.
//! - `utils`: Parsing dungeons from text or files, and random dungeon generation.
//! - `error`: Error types.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod report;
pub mod solver;
pub mod utils;
pub mod weapons;

use crate::engine::Dungeon;
use crate::solver::{solve_dfs, SearchLimits, SearchNode};

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Every node from the initial placement to the cleared board.
    pub history: Vec<SearchNode>,
    /// Total cost of all attacks.
    pub cost: u32,
}

impl Solution {
    /// Number of attacks performed.
    pub fn steps(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Action labels of every attack, in order.
    pub fn action_labels(&self) -> Vec<String> {
        self.history
            .iter()
            .skip(1)
            .map(|node| node.action.to_string())
            .collect()
    }
}

/// Solves a dungeon to optimality with no budget.
///
/// Returns `None` if some monster can never be killed.
pub fn solve(dungeon: &Dungeon) -> Option<Solution> {
    solve_dfs(dungeon, &SearchLimits::default()).best
}
