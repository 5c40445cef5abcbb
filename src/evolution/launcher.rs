use std::marker::PhantomData;

use tracing::{debug, info, warn};

use super::{
    options::{EvolutionOptions, LogLevel},
    scheme::{Generational, Scheme, SteadyState},
};
use crate::{
    crowding::assign_crowding_distance,
    error::{GeneticError, Result},
    evaluator::{EvaluationCounter, Evaluator},
    operators::{CrossoverOperator, MutationOperator, SelectionOperator},
    population::Population,
    problem::Problem,
    ranking::Ranking,
    replacement,
    rng::RandomNumberGenerator,
    solution::Encoding,
};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<V> {
    /// The non-dominated members of the final population, with crowding distances assigned.
    pub front: Population<V>,
    /// Evaluations performed by the loop, i.e. the amount charged against the budget.
    pub evaluations: usize,
    /// All evaluations, including the initial population.
    pub total_evaluations: usize,
    /// Number of loop iterations (generations, or single-offspring steps).
    pub generations: usize,
}

/// State of the run handed to an observer after every completed iteration.
#[derive(Debug)]
pub struct GenerationReport<'a, V> {
    pub generation: usize,
    pub evaluations: usize,
    pub population: &'a Population<V>,
}

/// Runs the evolutionary loop for a problem with pluggable operators, evaluator and scheme.
///
/// The loop walks through these phases:
///
/// 1. validate the configuration (population size against crossover arity);
/// 2. create the initial population through the problem;
/// 3. evaluate it, then rank it and assign crowding distances;
/// 4. per iteration: select a mating pool, reproduce, evaluate the offspring, rank the union
///    of population and offspring and truncate it back to the population size;
/// 5. once the loop evaluations reach the budget, return front 0 of the final population.
///
/// The budget is only checked between iterations, so a started iteration always completes.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<V, P, S, C, M, E, Sch>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
    Sch: Scheme,
{
    problem: P,
    selection: S,
    crossover: C,
    mutation: M,
    evaluator: E,
    scheme: Sch,
    _marker: PhantomData<V>,
}

impl<V, P, S, C, M, E> EvolutionLauncher<V, P, S, C, M, E, Generational>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
{
    /// A launcher that replaces the whole population every generation.
    pub fn generational(problem: P, selection: S, crossover: C, mutation: M, evaluator: E) -> Self {
        Self::new(problem, selection, crossover, mutation, evaluator, Generational)
    }
}

impl<V, P, S, C, M, E> EvolutionLauncher<V, P, S, C, M, E, SteadyState>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
{
    /// A launcher that inserts one offspring per iteration.
    pub fn steady_state(problem: P, selection: S, crossover: C, mutation: M, evaluator: E) -> Self {
        Self::new(problem, selection, crossover, mutation, evaluator, SteadyState)
    }
}

impl<V, P, S, C, M, E, Sch> EvolutionLauncher<V, P, S, C, M, E, Sch>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
    Sch: Scheme,
{
    pub fn new(
        problem: P,
        selection: S,
        crossover: C,
        mutation: M,
        evaluator: E,
        scheme: Sch,
    ) -> Self {
        Self {
            problem,
            selection,
            crossover,
            mutation,
            evaluator,
            scheme,
            _marker: PhantomData,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn scheme(&self) -> &Sch {
        &self.scheme
    }

    /// Runs the algorithm to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the population size is not compatible with the crossover arity for this scheme
    /// - an operator rejects its input
    /// - any evaluation fails
    ///
    /// No partial result is returned when the run fails.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<V>> {
        self.evolve_with(options, rng, |_| {})
    }

    /// Like [`EvolutionLauncher::evolve`], calling `observer` after every iteration with the
    /// freshly truncated population.
    pub fn evolve_with<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionResult<V>>
    where
        F: FnMut(&GenerationReport<'_, V>),
    {
        let population_size = options.get_population_size();
        let log_level = options.get_log_level();

        if let Err(e) = self
            .scheme
            .validate(population_size, self.crossover.number_of_parents())
        {
            warn!(scheme = self.scheme.name(), error = %e, "invalid configuration");
            return Err(e);
        }

        let counter = EvaluationCounter::new();

        let mut population = self.create_initial_population(population_size, rng);
        self.evaluator
            .evaluate(population.as_mut_slice(), &self.problem, &counter)?;
        let initial_evaluations = counter.get();
        population = replacement::truncate(Ranking::new(population), population_size);

        if log_level != LogLevel::None {
            info!(
                scheme = self.scheme.name(),
                population_size,
                max_evaluations = options.get_max_evaluations(),
                "initial population evaluated"
            );
        }

        let mut generations = 0;
        while counter.get() - initial_evaluations < options.get_max_evaluations() {
            let mating_pool = self.select_mating_pool(&population, rng)?;
            let mut offspring =
                self.scheme
                    .reproduce(&mating_pool, &self.crossover, &self.mutation, rng)?;
            if offspring.is_empty() {
                return Err(GeneticError::Other(format!(
                    "Reproduction produced no offspring in generation {}",
                    generations
                )));
            }

            self.evaluator
                .evaluate(offspring.as_mut_slice(), &self.problem, &counter)?;
            if log_level == LogLevel::Verbose {
                debug!(
                    generation = generations,
                    mating_pool = mating_pool.len(),
                    offspring = offspring.len(),
                    "offspring evaluated"
                );
            }

            let ranking = Ranking::new(population.merge(offspring));
            if log_level == LogLevel::Verbose {
                debug!(generation = generations, fronts = ?ranking.front_sizes(), "ranked union");
            }

            population = replacement::truncate(ranking, population_size);
            if log_level == LogLevel::Verbose {
                let worst_rank = population.iter().map(|s| s.rank()).max().unwrap_or(0);
                debug!(generation = generations, worst_rank, "population replaced");
            }
            generations += 1;

            let evaluations = counter.get() - initial_evaluations;
            if log_level != LogLevel::None {
                let first_front = population.iter().filter(|s| s.rank() == 0).count();
                info!(generation = generations, evaluations, first_front, "generation completed");
            }

            observer(&GenerationReport {
                generation: generations,
                evaluations,
                population: &population,
            });
        }

        let mut front = Ranking::new(population).into_first_front();
        assign_crowding_distance(front.as_mut_slice());

        let total_evaluations = counter.get();
        if log_level != LogLevel::None {
            info!(
                generations,
                total_evaluations,
                front = front.len(),
                "evolution finished"
            );
        }

        Ok(EvolutionResult {
            front,
            evaluations: total_evaluations - initial_evaluations,
            total_evaluations,
            generations,
        })
    }

    /// Asks the problem for `size` new, unevaluated solutions.
    pub fn create_initial_population(
        &self,
        size: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Population<V> {
        (0..size)
            .map(|_| self.problem.create_solution(rng))
            .collect()
    }

    /// Fills a mating pool by repeated selection with replacement.
    pub fn select_mating_pool(
        &self,
        population: &Population<V>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population<V>> {
        (0..self.scheme.mating_pool_size(population.len()))
            .map(|_| self.selection.select(population, rng).cloned())
            .collect()
    }
}
