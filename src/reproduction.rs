//! # Reproduction
//!
//! The generational reproduction pipeline. The mating pool is consumed in consecutive,
//! non-overlapping chunks of exactly `number_of_parents` members; every chunk goes through
//! one crossover call and every resulting offspring through one mutation call. Offspring are
//! collected in the order they were produced.
//!
//! The pool size must be a multiple of the crossover arity. This is checked before any
//! offspring is produced and reported as a configuration error.

use tracing::warn;

use crate::{
    error::{GeneticError, Result},
    operators::{CrossoverOperator, MutationOperator},
    population::Population,
    rng::RandomNumberGenerator,
    solution::Encoding,
};

/// Fails unless `pool_size` splits evenly into chunks of `number_of_parents`.
pub fn check_arity(pool_size: usize, number_of_parents: usize) -> Result<()> {
    if number_of_parents == 0 {
        return Err(GeneticError::Configuration(
            "Crossover parent arity must be at least 1".to_string(),
        ));
    }
    if pool_size % number_of_parents != 0 {
        warn!(pool_size, number_of_parents, "mating pool does not divide into parent chunks");
        return Err(GeneticError::Configuration(format!(
            "Wrong number of parents: the population size ({}) is not divisible by {}",
            pool_size, number_of_parents
        )));
    }
    Ok(())
}

/// Applies crossover chunk by chunk and mutation offspring by offspring.
pub fn reproduce<V, C, M>(
    mating_pool: &Population<V>,
    crossover: &C,
    mutation: &M,
    rng: &mut RandomNumberGenerator,
) -> Result<Population<V>>
where
    V: Encoding,
    C: CrossoverOperator<V> + ?Sized,
    M: MutationOperator<V> + ?Sized,
{
    let number_of_parents = crossover.number_of_parents();
    check_arity(mating_pool.len(), number_of_parents)?;

    let mut offspring_population = Population::with_capacity(mating_pool.len());

    for parents in mating_pool.as_slice().chunks_exact(number_of_parents) {
        let offspring = crossover.crossover(parents, rng)?;
        for mut child in offspring {
            mutation.mutate(&mut child, rng)?;
            offspring_population.push(child);
        }
    }

    Ok(offspring_population)
}
