//! # Evaluators
//!
//! An evaluator fills the objective values and constraint violation of a batch of solutions
//! through the [`Problem`] and bumps an [`EvaluationCounter`] once per evaluated solution.
//! When `evaluate` returns `Ok`, every solution of the batch is fully evaluated; a single
//! failure fails the whole batch.
//!
//! [`SequentialEvaluator`] evaluates in order on the calling thread. [`ParallelEvaluator`]
//! spreads batches at or above its threshold over the rayon thread pool.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::{
    error::{GeneticError, Result},
    problem::Problem,
    solution::{Encoding, Solution},
};

/// Number of solutions evaluated so far. Safe to bump from several threads.
#[derive(Debug, Default)]
pub struct EvaluationCounter {
    count: AtomicUsize,
}

impl EvaluationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Evaluates batches of solutions against a problem.
pub trait Evaluator: Debug + Send + Sync {
    fn evaluate<V, P>(
        &self,
        solutions: &mut [Solution<V>],
        problem: &P,
        counter: &EvaluationCounter,
    ) -> Result<()>
    where
        V: Encoding,
        P: Problem<V>;
}

/// Evaluates one solution: objectives, then constraints, then checks the result.
pub fn evaluate_solution<V, P>(
    solution: &mut Solution<V>,
    problem: &P,
    counter: &EvaluationCounter,
) -> Result<()>
where
    V: Encoding,
    P: Problem<V>,
{
    problem.evaluate(solution)?;
    problem.evaluate_constraints(solution)?;

    let expected = problem.number_of_objectives();
    if solution.number_of_objectives() != expected {
        return Err(GeneticError::Evaluation(format!(
            "Expected {} objective values, found {}",
            expected,
            solution.number_of_objectives()
        )));
    }

    if let Some(value) = solution.objectives().iter().find(|v| !v.is_finite()) {
        return Err(GeneticError::Evaluation(format!(
            "Non-finite objective value encountered: {}",
            value
        )));
    }

    if !solution.constraint_violation().is_finite() {
        return Err(GeneticError::Evaluation(format!(
            "Non-finite constraint violation encountered: {}",
            solution.constraint_violation()
        )));
    }

    counter.increment();
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct SequentialEvaluator;

impl SequentialEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator for SequentialEvaluator {
    fn evaluate<V, P>(
        &self,
        solutions: &mut [Solution<V>],
        problem: &P,
        counter: &EvaluationCounter,
    ) -> Result<()>
    where
        V: Encoding,
        P: Problem<V>,
    {
        solutions
            .iter_mut()
            .try_for_each(|solution| evaluate_solution(solution, problem, counter))
    }
}

/// Evaluates batches in parallel once they reach `parallel_threshold` solutions.
#[derive(Debug, Clone)]
pub struct ParallelEvaluator {
    parallel_threshold: usize,
}

impl ParallelEvaluator {
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for ParallelEvaluator {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl Evaluator for ParallelEvaluator {
    fn evaluate<V, P>(
        &self,
        solutions: &mut [Solution<V>],
        problem: &P,
        counter: &EvaluationCounter,
    ) -> Result<()>
    where
        V: Encoding,
        P: Problem<V>,
    {
        if solutions.len() >= self.parallel_threshold {
            solutions
                .par_iter_mut()
                .try_for_each(|solution| evaluate_solution(solution, problem, counter))
        } else {
            SequentialEvaluator.evaluate(solutions, problem, counter)
        }
    }
}
