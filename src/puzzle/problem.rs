//! Digits puzzle problem definition

use crate::config::Settings;
use crate::puzzle::ranker::complexity_rating;
use crate::search::{reduce, reduce_parallel, Reduction};
use super::{Solution, SolutionValidator};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::time::Instant;

/// A digits puzzle: an objective, a multiset of inputs, and the settings
/// that control how it is solved
pub struct DigitProblem {
    settings: Settings,
    validator: SolutionValidator,
}

impl DigitProblem {
    /// Create a new problem from settings
    pub fn new(settings: Settings) -> Result<Self> {
        settings
            .validate()
            .context("puzzle configuration is invalid")?;

        let validator = SolutionValidator::new(
            settings.puzzle.objective,
            settings.puzzle.inputs.clone(),
        );

        Ok(Self { settings, validator })
    }

    /// Solve the puzzle and return every distinct solution, simplest first
    ///
    /// Runs the reduction search, deduplicates the raw histories by their
    /// canonical string form (the brute-force search reaches the same
    /// derivation through many branch orders), rates each survivor, drops
    /// any that fail replay validation, and sorts by rating ascending.
    pub fn solve(&mut self) -> Result<Vec<Solution>> {
        let objective = self.settings.puzzle.objective;
        let inputs = self.settings.puzzle.inputs.clone();
        let input_count = inputs.len();

        let start_time = Instant::now();
        let reduction = if self.settings.solver.parallel {
            reduce_parallel(objective, &inputs)
        } else {
            reduce(objective, &inputs, &[])
        };
        let solve_time = start_time.elapsed();

        let histories = match reduction {
            Reduction::Solved(histories) => histories,
            Reduction::Exhausted => Vec::new(),
        };

        // Deduplicate by canonical form, keeping first occurrence.
        let mut seen = HashSet::new();
        let mut distinct = Vec::new();
        for history in histories {
            let canonical = super::solution::canonical_form(&history);
            if seen.insert(canonical) {
                distinct.push(history);
            }
        }

        let mut solutions = Vec::with_capacity(distinct.len());
        for history in distinct {
            let rating = complexity_rating(&history, input_count)
                .context("failed to rate solution complexity")?;
            let solution = Solution::new(
                history,
                objective,
                inputs.clone(),
                rating,
                solve_time,
            );

            let validation = self.validator.validate(&solution.history);
            if validation.is_valid {
                solutions.push(solution);
            } else {
                // Should never happen for histories the search produced.
                eprintln!(
                    "discarding solution '{}': {}",
                    solution.canonical(),
                    validation
                        .error_message
                        .unwrap_or_else(|| "unknown validation failure".to_string())
                );
            }
        }

        solutions.sort_by(|a, b| {
            a.metadata
                .rating
                .total_cmp(&b.metadata.rating)
                .then_with(|| a.metadata.canonical.cmp(&b.metadata.canonical))
        });

        let max = self.settings.solver.max_solutions;
        if max > 0 && solutions.len() > max {
            solutions.truncate(max);
        }

        Ok(solutions)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rough upper bound on the search, for reporting before a solve
    pub fn estimate_search_space(&self) -> SearchEstimate {
        let input_count = self.settings.puzzle.inputs.len();

        // Each level pairs k numbers ((k choose 2) pairs, at most 4
        // candidates each) and recurses with k - 1. Saturates rather than
        // overflows for absurd input counts.
        let mut upper_bound_nodes: u64 = 1;
        let mut k = input_count as u64;
        while k >= 2 {
            let level = (k * (k - 1) / 2).saturating_mul(4);
            upper_bound_nodes = upper_bound_nodes.saturating_mul(level);
            k -= 1;
        }

        let effort = if input_count <= 5 {
            SearchEffort::Low
        } else if input_count <= 7 {
            SearchEffort::Medium
        } else {
            SearchEffort::High
        };

        SearchEstimate {
            input_count,
            upper_bound_nodes,
            effort,
        }
    }
}

/// Pre-solve estimate of search cost
#[derive(Debug, Clone)]
pub struct SearchEstimate {
    pub input_count: usize,
    /// Upper bound on explored nodes, ignoring early objective hits
    pub upper_bound_nodes: u64,
    pub effort: SearchEffort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEffort {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for SearchEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Estimate:")?;
        writeln!(f, "  Inputs: {}", self.input_count)?;
        writeln!(f, "  Node upper bound: {}", self.upper_bound_nodes)?;
        write!(f, "  Effort: {:?}", self.effort)
    }
}
