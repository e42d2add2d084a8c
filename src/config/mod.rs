//! Configuration management for the digits puzzle solver

pub mod settings;

pub use settings::{
    CliOverrides, OutputConfig, OutputFormat, PuzzleConfig, Settings, SolverConfig,
};
