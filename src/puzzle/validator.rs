//! Solution validation by replaying operation histories

use crate::arithmetic::Step;

/// Replays operation histories against the original inputs to confirm
/// they actually reach the objective under the puzzle rules
pub struct SolutionValidator {
    objective: u64,
    inputs: Vec<u64>,
}

/// Result of validating one operation history
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Working multiset after each applied step, starting with the inputs
    pub reduction_trace: Vec<Vec<u64>>,
    pub error_message: Option<String>,
    pub details: ValidationDetails,
}

/// Detailed validation information
#[derive(Debug, Clone, Default)]
pub struct ValidationDetails {
    pub steps_applied: usize,
    pub objective_reached: bool,
    /// Steps that broke a rule or could not be applied
    pub violations: Vec<String>,
}

impl SolutionValidator {
    pub fn new(objective: u64, inputs: Vec<u64>) -> Self {
        Self { objective, inputs }
    }

    /// Replay a history from the original inputs
    ///
    /// Each step must find both operands in the working multiset, obey the
    /// arithmetic it states, and respect the puzzle rules. The history is
    /// valid when every step applies cleanly and the objective is present
    /// afterward. Histories need not consume every input; the objective
    /// may appear while other numbers are still unused.
    pub fn validate(&self, history: &[Step]) -> ValidationResult {
        let mut working = self.inputs.clone();
        let mut trace = vec![working.clone()];
        let mut violations = Vec::new();
        let mut steps_applied = 0;

        for step in history {
            match step.apply(&working) {
                Ok(next) => {
                    working = next;
                    trace.push(working.clone());
                    steps_applied += 1;
                }
                Err(e) => {
                    violations.push(format!("step '{}': {}", step, e));
                    break;
                }
            }
        }

        let all_steps_applied = steps_applied == history.len();
        let objective_reached = all_steps_applied && working.contains(&self.objective);
        let is_valid = objective_reached && violations.is_empty();

        let error_message = if !all_steps_applied {
            violations.first().cloned()
        } else if !objective_reached {
            Some(format!(
                "history ends without reaching {} (working numbers: {:?})",
                self.objective, working
            ))
        } else {
            None
        };

        ValidationResult {
            is_valid,
            reduction_trace: trace,
            error_message,
            details: ValidationDetails {
                steps_applied,
                objective_reached,
                violations,
            },
        }
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Validation: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )?;
        writeln!(f, "  Steps applied: {}", self.details.steps_applied)?;
        writeln!(f, "  Objective reached: {}", self.details.objective_reached)?;
        if let Some(ref msg) = self.error_message {
            writeln!(f, "  Error: {}", msg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::Op;

    #[test]
    fn test_valid_history() {
        let validator = SolutionValidator::new(10, vec![2, 3, 5]);
        let history = vec![Step::new(2, Op::Mul, 5, 10)];

        let result = validator.validate(&history);
        assert!(result.is_valid);
        assert_eq!(result.reduction_trace, vec![vec![2, 3, 5], vec![3, 10]]);
    }

    #[test]
    fn test_trivial_history_with_objective_present() {
        let validator = SolutionValidator::new(5, vec![5, 9]);
        let result = validator.validate(&[]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_history_that_misses_objective() {
        let validator = SolutionValidator::new(10, vec![2, 3, 5]);
        let history = vec![Step::new(2, Op::Add, 3, 5)];

        let result = validator.validate(&history);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("without reaching 10"));
    }

    #[test]
    fn test_history_with_unavailable_operand() {
        let validator = SolutionValidator::new(10, vec![2, 3, 5]);
        let history = vec![Step::new(4, Op::Add, 6, 10)];

        let result = validator.validate(&history);
        assert!(!result.is_valid);
        assert_eq!(result.details.steps_applied, 0);
        assert!(!result.details.violations.is_empty());
    }

    #[test]
    fn test_operand_cannot_be_used_twice() {
        // The single 5 cannot feed both sides of the multiplication.
        let validator = SolutionValidator::new(25, vec![5, 2]);
        let history = vec![Step::new(5, Op::Mul, 5, 25)];

        let result = validator.validate(&history);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_redundant_multiply_rejected() {
        let validator = SolutionValidator::new(7, vec![1, 7]);
        let history = vec![Step::new(1, Op::Mul, 7, 7)];

        let result = validator.validate(&history);
        assert!(!result.is_valid);
        assert!(!result.details.violations.is_empty());
    }
}
