//! # Schemes
//!
//! A `Scheme` decides how many parents a loop iteration selects and how they turn into
//! offspring. Ranking of the union and elitist replacement are shared by every scheme, so the
//! launcher runs a single loop and the two classic NSGA-II flavours are two schemes:
//!
//! - [`Generational`]: a mating pool as large as the population goes through the
//!   reproduction pipeline; one iteration produces a full offspring population.
//! - [`SteadyState`]: two parents, one crossover, only the first offspring is kept and
//!   mutated; one iteration produces exactly one offspring.

use std::fmt::Debug;

use crate::{
    error::{GeneticError, OptionExt, Result},
    operators::{CrossoverOperator, MutationOperator},
    population::Population,
    reproduction,
    rng::RandomNumberGenerator,
    solution::Encoding,
};

pub trait Scheme: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Number of selection calls per iteration.
    fn mating_pool_size(&self, population_size: usize) -> usize;

    /// Checks that the scheme can run with the given population size and crossover arity.
    fn validate(&self, population_size: usize, number_of_parents: usize) -> Result<()>;

    /// Turns a mating pool into offspring.
    fn reproduce<V, C, M>(
        &self,
        mating_pool: &Population<V>,
        crossover: &C,
        mutation: &M,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<V>>
    where
        V: Encoding,
        C: CrossoverOperator<V>,
        M: MutationOperator<V>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Generational;

impl Scheme for Generational {
    fn name(&self) -> &'static str {
        "generational"
    }

    fn mating_pool_size(&self, population_size: usize) -> usize {
        population_size
    }

    fn validate(&self, population_size: usize, number_of_parents: usize) -> Result<()> {
        reproduction::check_arity(population_size, number_of_parents)
    }

    fn reproduce<V, C, M>(
        &self,
        mating_pool: &Population<V>,
        crossover: &C,
        mutation: &M,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<V>>
    where
        V: Encoding,
        C: CrossoverOperator<V>,
        M: MutationOperator<V>,
    {
        reproduction::reproduce(mating_pool, crossover, mutation, rng)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyState;

impl SteadyState {
    const PARENTS: usize = 2;
}

impl Scheme for SteadyState {
    fn name(&self) -> &'static str {
        "steady-state"
    }

    fn mating_pool_size(&self, _population_size: usize) -> usize {
        Self::PARENTS
    }

    fn validate(&self, _population_size: usize, number_of_parents: usize) -> Result<()> {
        if number_of_parents != Self::PARENTS {
            return Err(GeneticError::Configuration(format!(
                "Steady-state evolution needs a crossover taking {} parents, got {}",
                Self::PARENTS,
                number_of_parents
            )));
        }
        Ok(())
    }

    fn reproduce<V, C, M>(
        &self,
        mating_pool: &Population<V>,
        crossover: &C,
        mutation: &M,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<V>>
    where
        V: Encoding,
        C: CrossoverOperator<V>,
        M: MutationOperator<V>,
    {
        let mut child = crossover
            .crossover(mating_pool.as_slice(), rng)?
            .into_iter()
            .next()
            .ok_or_else_genetic(|| {
                GeneticError::Other("Crossover produced no offspring".to_string())
            })?;

        mutation.mutate(&mut child, rng)?;

        let mut offspring = Population::with_capacity(1);
        offspring.push(child);
        Ok(offspring)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::check_parent_count;
    use crate::solution::Solution;

    #[derive(Debug)]
    struct Pairwise;

    impl CrossoverOperator<i32> for Pairwise {
        fn number_of_parents(&self) -> usize {
            2
        }

        fn crossover(
            &self,
            parents: &[Solution<i32>],
            _rng: &mut RandomNumberGenerator,
        ) -> Result<Vec<Solution<i32>>> {
            check_parent_count(2, parents.len())?;
            let a = *parents[0].variables();
            let b = *parents[1].variables();
            Ok(vec![parents[0].offspring(a + b), parents[1].offspring(a - b)])
        }
    }

    #[derive(Debug)]
    struct Negate;

    impl MutationOperator<i32> for Negate {
        fn mutate(
            &self,
            solution: &mut Solution<i32>,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<()> {
            let v = *solution.variables();
            *solution.variables_mut() = -v;
            Ok(())
        }
    }

    fn pool(values: &[i32]) -> Population<i32> {
        values.iter().map(|&v| Solution::new(v, 2)).collect()
    }

    #[test]
    fn test_steady_state_keeps_first_offspring_only() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let offspring = SteadyState
            .reproduce(&pool(&[3, 4]), &Pairwise, &Negate, &mut rng)
            .unwrap();

        assert_eq!(offspring.len(), 1);
        assert_eq!(*offspring[0].variables(), -7);
    }

    #[test]
    fn test_generational_uses_every_offspring() {
        let mut rng = RandomNumberGenerator::from_seed(0);
        let offspring = Generational
            .reproduce(&pool(&[3, 4, 5, 1]), &Pairwise, &Negate, &mut rng)
            .unwrap();

        let values: Vec<i32> = offspring.iter().map(|s| *s.variables()).collect();
        assert_eq!(values, vec![-7, 1, -6, -4]);
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(Generational.mating_pool_size(40), 40);
        assert_eq!(SteadyState.mating_pool_size(40), 2);
    }

    #[test]
    fn test_validation() {
        assert!(Generational.validate(100, 2).is_ok());
        assert!(Generational.validate(100, 3).is_err());
        assert!(SteadyState.validate(101, 2).is_ok());
        assert!(SteadyState.validate(100, 3).is_err());
    }
}
