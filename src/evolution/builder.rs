use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    evaluator::Evaluator,
    operators::{CrossoverOperator, MutationOperator, SelectionOperator},
    problem::Problem,
    solution::Encoding,
};

use super::{scheme::Scheme, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] piece by piece.
///
/// Every component is mandatory; `build` reports the first missing one as a configuration
/// error.
pub struct EvolutionLauncherBuilder<V, P, S, C, M, E, Sch>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
    Sch: Scheme,
{
    problem: Option<P>,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    evaluator: Option<E>,
    scheme: Option<Sch>,
    _marker: PhantomData<V>,
}

impl<V, P, S, C, M, E, Sch> EvolutionLauncherBuilder<V, P, S, C, M, E, Sch>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
    Sch: Scheme,
{
    pub fn new() -> Self {
        Self {
            problem: None,
            selection: None,
            crossover: None,
            mutation: None,
            evaluator: None,
            scheme: None,
            _marker: PhantomData,
        }
    }

    pub fn with_problem(mut self, problem: P) -> Self {
        self.problem = Some(problem);
        self
    }

    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_crossover(mut self, crossover: C) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: M) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn with_evaluator(mut self, evaluator: E) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn with_scheme(mut self, scheme: Sch) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<V, P, S, C, M, E, Sch>> {
        let problem = self
            .problem
            .ok_or_else(|| GeneticError::Configuration("Problem not specified".to_string()))?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Selection operator not specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            GeneticError::Configuration("Crossover operator not specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            GeneticError::Configuration("Mutation operator not specified".to_string())
        })?;

        let evaluator = self
            .evaluator
            .ok_or_else(|| GeneticError::Configuration("Evaluator not specified".to_string()))?;

        let scheme = self
            .scheme
            .ok_or_else(|| GeneticError::Configuration("Scheme not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            problem, selection, crossover, mutation, evaluator, scheme,
        ))
    }
}

impl<V, P, S, C, M, E, Sch> Default for EvolutionLauncherBuilder<V, P, S, C, M, E, Sch>
where
    V: Encoding,
    P: Problem<V>,
    S: SelectionOperator<V>,
    C: CrossoverOperator<V>,
    M: MutationOperator<V>,
    E: Evaluator,
    Sch: Scheme,
{
    fn default() -> Self {
        Self::new()
    }
}
