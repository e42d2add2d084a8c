//! Digits Puzzle Solver
//!
//! This library enumerates every way to combine a multiset of positive
//! integers into a target value using the four basic arithmetic operations
//! under countdown rules, and rates each solution's complexity.

pub mod arithmetic;
pub mod config;
pub mod puzzle;
pub mod search;
pub mod utils;

pub use config::Settings;
pub use puzzle::{DigitProblem, Solution};

use anyhow::Result;

/// Main entry point for solving digits puzzles
pub fn solve_puzzle(settings: Settings) -> Result<Vec<Solution>> {
    let mut problem = DigitProblem::new(settings)?;
    problem.solve()
}
