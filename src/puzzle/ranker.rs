//! Complexity rating for solved puzzles
//!
//! A heuristic difficulty score, not an optimality measure. Multiplication
//! and division weigh twice what addition and subtraction do; the weighted
//! sum exponentiates the step count, and the result is normalized against
//! the worst case for the puzzle's input count. Lower means simpler.

use crate::arithmetic::Step;
use thiserror::Error;

/// Weight of a multiply or divide step
const HARD_OP_WEIGHT: u32 = 2;
/// Weight of an add or subtract step
const EASY_OP_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("complexity rating is undefined for a puzzle of {0} input(s)")]
    InvalidInputCount(usize),
}

/// Sum of per-step weights for an operation history
pub fn operation_complexity(steps: &[Step]) -> u32 {
    steps
        .iter()
        .map(|step| {
            if step.op.is_hard() {
                HARD_OP_WEIGHT
            } else {
                EASY_OP_WEIGHT
            }
        })
        .sum()
}

/// Rate the difficulty of an operation history, normalized for the number
/// of inputs the puzzle started with
///
/// The raw score is `log10(step_count ^ operation_complexity) * 10`,
/// divided by the same expression evaluated at the theoretical maximum for
/// `input_count` inputs (`input_count - 1` steps, all hard). The quotient
/// is scaled to a 0-10-ish range and truncated, not rounded, to one
/// decimal place, so `3.27` rates as `3.2`.
///
/// Zero- and one-step histories rate `0.0` (their log term vanishes).
/// Fewer than two inputs is a hard error rather than a NaN.
pub fn complexity_rating(steps: &[Step], input_count: usize) -> Result<f64, RankError> {
    if input_count <= 1 {
        return Err(RankError::InvalidInputCount(input_count));
    }

    if steps.is_empty() {
        return Ok(0.0);
    }

    let base_complexity = (steps.len() as f64).powi(operation_complexity(steps) as i32);
    let adjusted_complexity = base_complexity.log10() * 10.0;

    if adjusted_complexity == 0.0 {
        return Ok(0.0);
    }

    let max_steps = (input_count - 1) as f64;
    let max_reference = max_steps.powi(2 * (input_count as i32 - 1)).log10() * 10.0;
    if max_reference == 0.0 {
        // Only reachable for a two-input puzzle rated against a multi-step
        // history, which no real search can produce.
        return Err(RankError::InvalidInputCount(input_count));
    }

    Ok(((adjusted_complexity / max_reference) * 100.0).floor() / 10.0)
}
