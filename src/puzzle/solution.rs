//! Solution representation for digits puzzles

use crate::arithmetic::Step;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One distinct way of reaching the objective
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Ordered operation steps, earliest first
    pub history: Vec<Step>,
    /// The objective this history reaches
    pub objective: u64,
    /// The original puzzle inputs
    pub inputs: Vec<u64>,
    /// Time taken by the search that produced this solution
    #[serde(skip)]
    pub solve_time: Duration,
    pub metadata: SolutionMetadata,
}

/// Derived facts about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Short identifier derived from the canonical form
    pub id: String,
    /// Comma-joined rendering of the history, used for deduplication
    pub canonical: String,
    pub step_count: usize,
    /// Number of multiply/divide steps
    pub hard_op_count: usize,
    /// Normalized complexity rating, lower is simpler
    pub rating: f64,
}

impl Solution {
    /// Build a solution from a completed history
    ///
    /// The rating is computed by the caller (it depends on the original
    /// input count and can fail for degenerate puzzles) and recorded here.
    pub fn new(
        history: Vec<Step>,
        objective: u64,
        inputs: Vec<u64>,
        rating: f64,
        solve_time: Duration,
    ) -> Self {
        let metadata = SolutionMetadata::analyze(&history, rating);
        Self {
            history,
            objective,
            inputs,
            solve_time,
            metadata,
        }
    }

    /// Canonical comma-joined form of the history
    pub fn canonical(&self) -> &str {
        &self.metadata.canonical
    }

    pub fn step_count(&self) -> usize {
        self.history.len()
    }

    /// Whether this is the trivial solution (objective was already among
    /// the inputs)
    pub fn is_trivial(&self) -> bool {
        self.history.is_empty()
    }

    /// Two solutions are equivalent when their canonical forms match
    pub fn is_equivalent_to(&self, other: &Solution) -> bool {
        self.metadata.canonical == other.metadata.canonical
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_trivial() {
            write!(
                f,
                "{} is already among the inputs (rating {:.1})",
                self.objective, self.metadata.rating
            )
        } else {
            write!(f, "{} (rating {:.1})", self.metadata.canonical, self.metadata.rating)
        }
    }
}

impl SolutionMetadata {
    /// Analyze a history and derive its metadata
    pub fn analyze(history: &[Step], rating: f64) -> Self {
        let canonical = canonical_form(history);
        let id = Self::generate_id(&canonical);
        let hard_op_count = history.iter().filter(|s| s.op.is_hard()).count();

        Self {
            id,
            canonical,
            step_count: history.len(),
            hard_op_count,
            rating,
        }
    }

    /// Short hash identifier from the canonical string
    fn generate_id(canonical: &str) -> String {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        canonical.hash(&mut hasher);
        format!("sol_{:x}", hasher.finish())
    }
}

/// Join a history into its canonical comma-separated string
pub fn canonical_form(history: &[Step]) -> String {
    history
        .iter()
        .map(Step::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Op;

    fn sample_history() -> Vec<Step> {
        vec![
            Step::new(2, Op::Add, 3, 5),
            Step::new(5, Op::Mul, 5, 25),
        ]
    }

    #[test]
    fn test_canonical_form() {
        assert_eq!(canonical_form(&sample_history()), "2 + 3 = 5, 5 * 5 = 25");
        assert_eq!(canonical_form(&[]), "");
    }

    #[test]
    fn test_metadata_analysis() {
        let solution = Solution::new(
            sample_history(),
            25,
            vec![2, 3, 5],
            3.1,
            Duration::from_millis(10),
        );

        assert_eq!(solution.step_count(), 2);
        assert_eq!(solution.metadata.hard_op_count, 1);
        assert!(!solution.metadata.id.is_empty());
        assert!(!solution.is_trivial());
    }

    #[test]
    fn test_equivalence_by_canonical_form() {
        let a = Solution::new(sample_history(), 25, vec![2, 3, 5], 3.1, Duration::ZERO);
        let b = Solution::new(sample_history(), 25, vec![2, 3, 5], 3.1, Duration::from_secs(1));
        assert!(a.is_equivalent_to(&b));
    }

    #[test]
    fn test_json_round_trip() {
        let solution = Solution::new(sample_history(), 25, vec![2, 3, 5], 3.1, Duration::ZERO);
        let json = solution.to_json().unwrap();
        let restored = Solution::from_json(&json).unwrap();

        assert_eq!(restored.history, solution.history);
        assert_eq!(restored.metadata.canonical, solution.metadata.canonical);
        assert_eq!(restored.objective, 25);
    }

    #[test]
    fn test_trivial_solution_display() {
        let solution = Solution::new(Vec::new(), 5, vec![5], 0.0, Duration::ZERO);
        assert!(solution.is_trivial());
        assert!(solution.to_string().contains("already among the inputs"));
    }
}
