pub mod crowding;
pub mod dominance;
pub mod error;
pub mod evaluator;
pub mod evolution;
pub mod operators;
pub mod population;
pub mod problem;
pub mod ranking;
pub mod replacement;
pub mod reproduction;
pub mod rng;
pub mod solution;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evaluator::{EvaluationCounter, Evaluator, ParallelEvaluator, SequentialEvaluator};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel};
pub use operators::{CrossoverOperator, MutationOperator, SelectionOperator};
pub use population::Population;
pub use problem::{Bounds, Problem};
pub use ranking::Ranking;
pub use rng::RandomNumberGenerator;
pub use solution::Solution;
