//! Arithmetic operation rules for the digits puzzle

pub mod ops;

pub use ops::{candidate_steps, Op, ParseStepError, ReplayError, Step};
