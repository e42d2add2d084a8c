//! Recursive reduction engine for the digits puzzle

pub mod reducer;

pub use reducer::{reduce, reduce_parallel, Reduction};
