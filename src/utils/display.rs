//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::puzzle::Solution;
use anyhow::Result;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution {} ===\n", solution.metadata.id));
        output.push_str(&format!("Complexity: {:.1}\n", solution.metadata.rating));
        output.push_str(&format!(
            "Steps: {} ({} hard)\n",
            solution.metadata.step_count, solution.metadata.hard_op_count
        ));
        output.push_str(&format!(
            "Inputs: {:?}, objective: {}\n",
            solution.inputs, solution.objective
        ));
        output.push('\n');

        if solution.is_trivial() {
            output.push_str("Objective is already among the inputs; no operations needed.\n");
        } else {
            for (i, step) in solution.history.iter().enumerate() {
                output.push_str(&format!("{:2}. {}\n", i + 1, step));
            }
        }

        output
    }

    /// Format multiple solutions as a table with ID, complexity and the
    /// canonical solution string, in the order given
    pub fn format_solution_table(solutions: &[Solution]) -> String {
        let solution_width = solutions
            .iter()
            .map(|s| s.canonical().len())
            .max()
            .unwrap_or(0)
            .max("Solution".len());

        let mut output = String::new();
        output.push_str(&format!(
            "{:>4} | {:>10} | {:<width$}\n",
            "ID",
            "Complexity",
            "Solution",
            width = solution_width
        ));
        output.push_str(&format!(
            "{}-|-{}-|-{}\n",
            "-".repeat(4),
            "-".repeat(10),
            "-".repeat(solution_width)
        ));

        for (i, solution) in solutions.iter().enumerate() {
            let rendered = if solution.is_trivial() {
                "(objective among inputs)"
            } else {
                solution.canonical()
            };
            output.push_str(&format!(
                "{:>4} | {:>10.1} | {:<width$}\n",
                i + 1,
                solution.metadata.rating,
                rendered,
                width = solution_width
            ));
        }

        output
    }

    /// One-line summary of a solve run
    pub fn format_summary(solutions: &[Solution], elapsed_secs: f64) -> String {
        format!(
            "Found {} solution(s) in {:.3}s",
            solutions.len(),
            elapsed_secs
        )
    }

    /// Save solutions to files based on output format
    pub fn save_solutions<P: AsRef<Path>>(
        solutions: &[Solution],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.txt", i + 1));
                    std::fs::write(filepath, Self::format_solution(solution))?;
                }

                let table_path = output_dir.join("solutions_table.txt");
                std::fs::write(table_path, Self::format_solution_table(solutions))?;
            }
            OutputFormat::Json => {
                for (i, solution) in solutions.iter().enumerate() {
                    let filepath = output_dir.join(format!("solution_{:03}.json", i + 1));
                    solution.save_to_file(filepath)?;
                }

                let summary_path = output_dir.join("solutions_summary.json");
                let summaries: Vec<_> = solutions.iter().map(|s| &s.metadata).collect();
                let summary_json = serde_json::to_string_pretty(&summaries)?;
                std::fs::write(summary_path, summary_json)?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::{Op, Step};
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample_solutions() -> Vec<Solution> {
        vec![
            Solution::new(
                vec![Step::new(2, Op::Mul, 5, 10)],
                10,
                vec![2, 3, 5],
                0.0,
                Duration::ZERO,
            ),
            Solution::new(
                vec![Step::new(2, Op::Add, 3, 5), Step::new(5, Op::Add, 5, 10)],
                10,
                vec![2, 3, 5],
                5.0,
                Duration::ZERO,
            ),
        ]
    }

    #[test]
    fn test_table_contains_headers_and_rows() {
        let table = SolutionFormatter::format_solution_table(&sample_solutions());

        assert!(table.contains("ID"));
        assert!(table.contains("Complexity"));
        assert!(table.contains("Solution"));
        assert!(table.contains("2 * 5 = 10"));
        assert!(table.contains("2 + 3 = 5, 5 + 5 = 10"));
    }

    #[test]
    fn test_single_solution_block() {
        let solutions = sample_solutions();
        let block = SolutionFormatter::format_solution(&solutions[1]);

        assert!(block.contains("Complexity: 5.0"));
        assert!(block.contains(" 1. 2 + 3 = 5"));
        assert!(block.contains(" 2. 5 + 5 = 10"));
    }

    #[test]
    fn test_save_solutions_text_and_json() {
        let solutions = sample_solutions();

        let dir = tempdir().unwrap();
        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Text).unwrap();
        assert!(dir.path().join("solution_001.txt").exists());
        assert!(dir.path().join("solutions_table.txt").exists());

        let dir = tempdir().unwrap();
        SolutionFormatter::save_solutions(&solutions, dir.path(), OutputFormat::Json).unwrap();
        assert!(dir.path().join("solution_002.json").exists());
        assert!(dir.path().join("solutions_summary.json").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));
    }
}
