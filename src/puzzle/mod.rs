//! Digits puzzle definition, solutions, ranking and validation

pub mod problem;
pub mod ranker;
pub mod solution;
pub mod validator;

pub use problem::DigitProblem;
pub use ranker::{complexity_rating, RankError};
pub use solution::Solution;
pub use validator::SolutionValidator;
