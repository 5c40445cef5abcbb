//! # Operators
//!
//! The three pluggable capabilities of the algorithm: selection, crossover and mutation.
//! Every operator draws its randomness from the `RandomNumberGenerator` passed in by the
//! caller, so one seeded stream drives a whole run.
//!
//! Stock implementations:
//!
//! - [`TournamentSelection`] and [`RandomSelection`] work for any encoding.
//! - [`SbxCrossover`] and [`PolynomialMutation`] work on real-coded `Vec<f64>` solutions.
pub mod polynomial;
pub mod sbx;
pub mod selection;

use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    population::Population,
    rng::RandomNumberGenerator,
    solution::{Encoding, Solution},
};

/// Picks one member of a population.
pub trait SelectionOperator<V: Encoding>: Debug + Send + Sync {
    /// Selects a single solution from `population`. Repeated calls may return the same member.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if `population` is empty.
    fn select<'a>(
        &self,
        population: &'a Population<V>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Solution<V>>;
}

/// Combines a fixed number of parents into offspring.
pub trait CrossoverOperator<V: Encoding>: Debug + Send + Sync {
    /// The exact number of parents `crossover` expects.
    fn number_of_parents(&self) -> usize;

    /// Produces offspring from `parents`. The number of offspring is operator-defined.
    ///
    /// ## Errors
    ///
    /// Returns `GeneticError::ParentCount` if `parents.len()` differs from
    /// [`CrossoverOperator::number_of_parents`].
    fn crossover(
        &self,
        parents: &[Solution<V>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<V>>>;
}

/// Perturbs a single solution in place.
pub trait MutationOperator<V: Encoding>: Debug + Send + Sync {
    fn mutate(&self, solution: &mut Solution<V>, rng: &mut RandomNumberGenerator) -> Result<()>;
}

/// Fails with `GeneticError::ParentCount` unless `found == expected`.
pub fn check_parent_count(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GeneticError::ParentCount { expected, found });
    }
    Ok(())
}

pub(crate) fn validate_probability(name: &str, probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, probability
        )));
    }
    Ok(())
}

pub(crate) fn validate_distribution_index(name: &str, index: f64) -> Result<()> {
    if !index.is_finite() || index < 0.0 {
        return Err(GeneticError::Configuration(format!(
            "{} must be finite and non-negative, got {}",
            name, index
        )));
    }
    Ok(())
}

pub use polynomial::PolynomialMutation;
pub use sbx::SbxCrossover;
pub use selection::{RandomSelection, TournamentSelection};
