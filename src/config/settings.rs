//! Configuration settings for the digits puzzle solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Target the search must reach
    pub objective: u64,
    /// Available numbers, each usable at most once
    pub inputs: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Fan top-level branches out across the rayon thread pool
    pub parallel: bool,
    /// Keep at most this many solutions after ranking; 0 keeps all
    pub max_solutions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the full solution table instead of just the optimal one
    pub show_all: bool,
    /// Write solutions to the output directory after solving
    pub save_solutions: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                objective: 120,
                inputs: vec![2, 3, 4, 5],
            },
            solver: SolverConfig {
                parallel: false,
                max_solutions: 0,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_all: false,
                save_solutions: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    ///
    /// Inputs must be strictly positive: the reduction rules assume every
    /// working number stays positive, and the complexity rating is
    /// undefined below two inputs.
    pub fn validate(&self) -> Result<()> {
        if self.puzzle.objective == 0 {
            anyhow::bail!("Objective must be a positive integer");
        }

        if self.puzzle.inputs.len() < 2 {
            anyhow::bail!(
                "At least two inputs are required, got {}",
                self.puzzle.inputs.len()
            );
        }

        if self.puzzle.inputs.contains(&0) {
            anyhow::bail!("Inputs must be positive integers");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(objective) = cli_overrides.objective {
            self.puzzle.objective = objective;
        }
        if let Some(ref inputs) = cli_overrides.inputs {
            self.puzzle.inputs = inputs.clone();
        }
        if cli_overrides.show_all {
            self.output.show_all = true;
        }
        if cli_overrides.parallel {
            self.solver.parallel = true;
        }
        if let Some(max_solutions) = cli_overrides.max_solutions {
            self.solver.max_solutions = max_solutions;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.save_solutions = true;
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub objective: Option<u64>,
    pub inputs: Option<Vec<u64>>,
    pub show_all: bool,
    pub parallel: bool,
    pub max_solutions: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_input() {
        let mut settings = Settings::default();
        settings.puzzle.inputs = vec![2, 0, 5];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_single_input() {
        let mut settings = Settings::default();
        settings.puzzle.inputs = vec![5];
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_objective() {
        let mut settings = Settings::default();
        settings.puzzle.objective = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.puzzle.objective = 348;
        settings.puzzle.inputs = vec![2, 3, 5, 10, 25];
        settings.solver.parallel = true;

        settings.to_file(&path).unwrap();
        let loaded = Settings::from_file(&path).unwrap();

        assert_eq!(loaded.puzzle.objective, 348);
        assert_eq!(loaded.puzzle.inputs, vec![2, 3, 5, 10, 25]);
        assert!(loaded.solver.parallel);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            objective: Some(66),
            inputs: Some(vec![1, 2, 3, 4, 5, 10]),
            show_all: true,
            parallel: false,
            max_solutions: Some(20),
            output_dir: None,
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.puzzle.objective, 66);
        assert_eq!(settings.puzzle.inputs.len(), 6);
        assert!(settings.output.show_all);
        assert!(!settings.solver.parallel);
        assert_eq!(settings.solver.max_solutions, 20);
    }
}
