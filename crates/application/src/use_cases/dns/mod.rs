pub mod evaluate_query;

pub use evaluate_query::{EvaluateQueryUseCase, QueryVerdict};
