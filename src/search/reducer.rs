//! Depth-first reduction search
//!
//! Repeatedly replaces two numbers in the working multiset with one derived
//! value until the objective appears or the multiset runs dry. Every branch
//! owns its own copy of the numbers and history, so sibling branches never
//! share state. No memoization: sub-multisets reachable through different
//! operation orders are re-explored, which is what produces the full,
//! non-deduplicated solution space. That makes the search cost roughly
//! factorial in the input count; puzzles of 6-8 numbers stay tractable.

use crate::arithmetic::{candidate_steps, Step};
use itertools::Itertools;
use rayon::prelude::*;

/// Outcome of reducing one search node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction {
    /// Every operation history found below this node (possibly none)
    Solved(Vec<Vec<Step>>),
    /// Single number left and it is not the objective
    Exhausted,
}

impl Reduction {
    /// All histories found, flattening `Exhausted` to none
    pub fn into_histories(self) -> Vec<Vec<Step>> {
        match self {
            Reduction::Solved(histories) => histories,
            Reduction::Exhausted => Vec::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Reduction::Exhausted)
    }
}

/// Reduce a working multiset toward the objective, collecting every
/// operation history that reaches it
///
/// The objective-membership check runs before any combination, so a puzzle
/// whose objective is already among the numbers resolves to a single empty
/// history without consuming anything.
pub fn reduce(objective: u64, numbers: &[u64], history: &[Step]) -> Reduction {
    if numbers.contains(&objective) {
        return Reduction::Solved(vec![history.to_vec()]);
    }

    if numbers.len() == 1 {
        return Reduction::Exhausted;
    }

    let mut found = Vec::new();
    for (n, o, step) in branches(numbers) {
        let child = child_numbers(numbers, n, o, step.result);
        let mut child_history = history.to_vec();
        child_history.push(step);

        if let Reduction::Solved(histories) = reduce(objective, &child, &child_history) {
            found.extend(histories);
        }
    }

    Reduction::Solved(found)
}

/// Parallel variant of [`reduce`]
///
/// Fans the top-level branches out across the rayon thread pool; each
/// branch runs the serial search below it. Branches are independent, so the
/// merged result carries exactly the same histories as the serial search,
/// though not necessarily in the same order. Callers deduplicate and sort
/// afterward, so the difference is invisible.
pub fn reduce_parallel(objective: u64, numbers: &[u64]) -> Reduction {
    if numbers.contains(&objective) {
        return Reduction::Solved(vec![Vec::new()]);
    }

    if numbers.len() == 1 {
        return Reduction::Exhausted;
    }

    let found: Vec<Vec<Step>> = branches(numbers)
        .into_par_iter()
        .flat_map(|(n, o, step)| {
            let child = child_numbers(numbers, n, o, step.result);
            reduce(objective, &child, &[step]).into_histories()
        })
        .collect();

    Reduction::Solved(found)
}

/// Every (position pair, candidate step) branch leaving this node
///
/// Each unordered position pair is visited once; candidate generation
/// orders operands by value, so pair order does not matter.
fn branches(numbers: &[u64]) -> Vec<(usize, usize, Step)> {
    numbers
        .iter()
        .copied()
        .enumerate()
        .tuple_combinations()
        .flat_map(|((n, i), (o, j))| {
            candidate_steps(i, j).into_iter().map(move |step| (n, o, step))
        })
        .collect()
}

/// Rebuild the multiset with positions `n` and `o` replaced by `result`
fn child_numbers(numbers: &[u64], n: usize, o: usize, result: u64) -> Vec<u64> {
    debug_assert!(n < o);
    let mut child = numbers.to_vec();
    // Higher index first so the lower one does not shift.
    child.remove(o);
    child.remove(n);
    child.push(result);
    child
}
