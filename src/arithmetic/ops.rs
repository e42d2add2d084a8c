//! Operation steps and the rules for combining two numbers
//!
//! Countdown-style rules: subtraction never goes negative, division must be
//! exact, and multiplying or dividing by 1 is suppressed as redundant.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One of the four binary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Whether this operation counts as "hard" for complexity rating
    pub fn is_hard(self) -> bool {
        matches!(self, Op::Mul | Op::Div)
    }

    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single reduction step: two numbers combined into one
///
/// Operand order matches the textual convention of the puzzle output:
/// smaller operand first for `+` and `*`, larger first for `-` and `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub lhs: u64,
    pub op: Op,
    pub rhs: u64,
    pub result: u64,
}

impl Step {
    pub fn new(lhs: u64, op: Op, rhs: u64, result: u64) -> Self {
        Self { lhs, op, rhs, result }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

impl std::str::FromStr for Step {
    type Err = ParseStepError;

    /// Parse the textual form `"a <op> b = c"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseStepError(s.to_string());

        let parts: Vec<&str> = s.split_whitespace().collect();
        let [lhs, op, rhs, eq, result] = parts.as_slice() else {
            return Err(bad());
        };
        if *eq != "=" {
            return Err(bad());
        }

        let op = match *op {
            "+" => Op::Add,
            "-" => Op::Sub,
            "*" => Op::Mul,
            "/" => Op::Div,
            _ => return Err(bad()),
        };

        Ok(Step::new(
            lhs.parse().map_err(|_| bad())?,
            op,
            rhs.parse().map_err(|_| bad())?,
            result.parse().map_err(|_| bad())?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse operation step from '{0}'")]
pub struct ParseStepError(String);

/// Error produced when replaying a step against a working multiset
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("operand {0} is not available in the working numbers")]
    MissingOperand(u64),
    #[error("step '{0}' is arithmetically inconsistent")]
    Inconsistent(String),
    #[error("step '{0}' violates puzzle rules")]
    RuleViolation(String),
}

/// Enumerate every legal combination of two values
///
/// The enumeration order (add, mul, sub, div for unequal operands; add,
/// mul, div for equal ones) is stable so downstream output is
/// deterministic. Multiplication is skipped whenever either operand is 1,
/// and unequal-operand division requires an exact quotient with a divisor
/// greater than 1. Equal operands always divide to 1, including the
/// degenerate `1 / 1 = 1` case. A sum or product that does not fit in
/// `u64` is skipped rather than offered as a wrapped candidate.
pub fn candidate_steps(i: u64, j: u64) -> Vec<Step> {
    let mut steps = Vec::with_capacity(4);

    if i == j {
        if let Some(sum) = i.checked_add(j) {
            steps.push(Step::new(i, Op::Add, j, sum));
        }
        if i > 1 {
            if let Some(product) = i.checked_mul(j) {
                steps.push(Step::new(i, Op::Mul, j, product));
            }
        }
        steps.push(Step::new(i, Op::Div, j, 1));
        return steps;
    }

    let lo = i.min(j);
    let hi = i.max(j);

    if let Some(sum) = lo.checked_add(hi) {
        steps.push(Step::new(lo, Op::Add, hi, sum));
    }
    if lo > 1 {
        if let Some(product) = lo.checked_mul(hi) {
            steps.push(Step::new(lo, Op::Mul, hi, product));
        }
    }
    steps.push(Step::new(hi, Op::Sub, lo, hi - lo));
    if lo > 1 && hi % lo == 0 {
        steps.push(Step::new(hi, Op::Div, lo, hi / lo));
    }

    steps
}

impl Step {
    /// Check that the step's stated result matches its operands
    pub fn is_consistent(&self) -> bool {
        match self.op {
            Op::Add => self.lhs.checked_add(self.rhs) == Some(self.result),
            Op::Mul => self.lhs.checked_mul(self.rhs) == Some(self.result),
            Op::Sub => self.lhs.checked_sub(self.rhs) == Some(self.result),
            Op::Div => {
                self.rhs != 0 && self.lhs % self.rhs == 0 && self.lhs / self.rhs == self.result
            }
        }
    }

    /// Replay this step against a working multiset of numbers
    ///
    /// Consumes one occurrence of each operand and appends the result,
    /// returning the new multiset. Fails if an operand is unavailable or
    /// the step breaks a puzzle rule.
    pub fn apply(&self, numbers: &[u64]) -> Result<Vec<u64>, ReplayError> {
        if !self.is_consistent() {
            return Err(ReplayError::Inconsistent(self.to_string()));
        }
        let redundant = match self.op {
            Op::Mul => self.lhs == 1 || self.rhs == 1,
            Op::Div => self.rhs == 1 && self.lhs != self.rhs,
            _ => false,
        };
        if redundant {
            return Err(ReplayError::RuleViolation(self.to_string()));
        }

        let mut working = numbers.to_vec();
        for operand in [self.lhs, self.rhs] {
            match working.iter().position(|&n| n == operand) {
                Some(idx) => {
                    working.remove(idx);
                }
                None => return Err(ReplayError::MissingOperand(operand)),
            }
        }
        working.push(self.result);
        Ok(working)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_formatting() {
        let step = Step::new(2, Op::Mul, 5, 10);
        assert_eq!(step.to_string(), "2 * 5 = 10");

        let step = Step::new(7, Op::Sub, 3, 4);
        assert_eq!(step.to_string(), "7 - 3 = 4");
    }

    #[test]
    fn test_step_parsing_round_trip() {
        let step = Step::new(12, Op::Div, 3, 4);
        assert_eq!(step.to_string().parse::<Step>().unwrap(), step);

        assert!("2 + 3".parse::<Step>().is_err());
        assert!("2 ^ 3 = 8".parse::<Step>().is_err());
        assert!("two + 3 = 5".parse::<Step>().is_err());
    }

    #[test]
    fn test_candidates_unequal() {
        let steps = candidate_steps(3, 6);
        assert_eq!(
            steps,
            vec![
                Step::new(3, Op::Add, 6, 9),
                Step::new(3, Op::Mul, 6, 18),
                Step::new(6, Op::Sub, 3, 3),
                Step::new(6, Op::Div, 3, 2),
            ]
        );
    }

    #[test]
    fn test_candidates_order_independent_of_argument_order() {
        assert_eq!(candidate_steps(6, 3), candidate_steps(3, 6));
    }

    #[test]
    fn test_candidates_suppress_multiply_by_one() {
        let steps = candidate_steps(1, 7);
        assert!(steps.iter().all(|s| s.op != Op::Mul));
        assert!(steps.iter().all(|s| s.op != Op::Div));
        assert_eq!(steps[0], Step::new(1, Op::Add, 7, 8));
        assert_eq!(steps[1], Step::new(7, Op::Sub, 1, 6));
    }

    #[test]
    fn test_candidates_inexact_division_skipped() {
        let steps = candidate_steps(3, 7);
        assert!(steps.iter().all(|s| s.op != Op::Div));
    }

    #[test]
    fn test_candidates_equal_operands() {
        let steps = candidate_steps(4, 4);
        assert_eq!(
            steps,
            vec![
                Step::new(4, Op::Add, 4, 8),
                Step::new(4, Op::Mul, 4, 16),
                Step::new(4, Op::Div, 4, 1),
            ]
        );
    }

    #[test]
    fn test_candidates_equal_ones() {
        // Equal operands always divide, even 1 / 1.
        let steps = candidate_steps(1, 1);
        assert_eq!(
            steps,
            vec![Step::new(1, Op::Add, 1, 2), Step::new(1, Op::Div, 1, 1)]
        );
    }

    #[test]
    fn test_candidates_skip_overflowing_results() {
        // The product would exceed u64; the sum still fits. No candidate
        // may wrap.
        let steps = candidate_steps(u64::MAX / 2, 3);
        assert!(steps.iter().all(|s| s.op != Op::Mul));
        assert!(steps.contains(&Step::new(3, Op::Add, u64::MAX / 2, u64::MAX / 2 + 3)));
        assert!(steps.iter().all(Step::is_consistent));

        // Both sum and product overflow for equal maximal operands,
        // leaving only the division candidate.
        let steps = candidate_steps(u64::MAX, u64::MAX);
        assert_eq!(steps, vec![Step::new(u64::MAX, Op::Div, u64::MAX, 1)]);
    }

    #[test]
    fn test_subtraction_never_negative() {
        for (i, j) in [(2, 9), (9, 2), (5, 5)] {
            for step in candidate_steps(i, j) {
                if step.op == Op::Sub {
                    assert!(step.lhs >= step.rhs);
                }
            }
        }
    }

    #[test]
    fn test_apply_consumes_operands() {
        let step = Step::new(2, Op::Mul, 5, 10);
        let next = step.apply(&[2, 3, 5]).unwrap();
        assert_eq!(next, vec![3, 10]);
    }

    #[test]
    fn test_apply_duplicate_operands() {
        let step = Step::new(4, Op::Add, 4, 8);
        let next = step.apply(&[4, 4, 7]).unwrap();
        assert_eq!(next, vec![7, 8]);
    }

    #[test]
    fn test_apply_missing_operand() {
        let step = Step::new(2, Op::Add, 9, 11);
        assert_eq!(
            step.apply(&[2, 3, 5]),
            Err(ReplayError::MissingOperand(9))
        );
    }

    #[test]
    fn test_apply_rejects_inconsistent_step() {
        let step = Step::new(2, Op::Add, 5, 11);
        assert!(matches!(
            step.apply(&[2, 5]),
            Err(ReplayError::Inconsistent(_))
        ));
    }
}
