//! # Polynomial Mutation
//!
//! Bounded polynomial mutation (Deb & Goyal, 1996) for real-coded solutions. Each variable
//! is perturbed independently with the configured probability; perturbed values are clamped
//! to the variable's bounds.

use super::{validate_distribution_index, validate_probability, MutationOperator};
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    problem::Bounds,
    rng::RandomNumberGenerator,
    solution::Solution,
};

#[derive(Debug, Clone)]
pub struct PolynomialMutation {
    probability: f64,
    distribution_index: f64,
    bounds: Bounds,
}

impl PolynomialMutation {
    /// Creates a polynomial mutation operator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `probability` is outside `[0, 1]` or the
    /// distribution index is negative or not finite.
    pub fn new(probability: f64, distribution_index: f64, bounds: Bounds) -> Result<Self> {
        validate_probability("Mutation probability", probability)?;
        validate_distribution_index("Mutation distribution index", distribution_index)?;

        Ok(Self {
            probability,
            distribution_index,
            bounds,
        })
    }

    /// Builds the operator from the mutation settings of `options`.
    ///
    /// An unset mutation probability defaults to `1 / number of variables`.
    pub fn from_options(options: &EvolutionOptions, bounds: Bounds) -> Result<Self> {
        let probability = options.resolve_mutation_probability(bounds.len());
        Self::new(probability, options.get_mutation_distribution_index(), bounds)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    fn perturb(&self, index: usize, y: f64, rng: &mut RandomNumberGenerator) -> f64 {
        let (yl, yu) = (self.bounds.lower(index), self.bounds.upper(index));
        if yl == yu {
            return yl;
        }

        let delta1 = (y - yl) / (yu - yl);
        let delta2 = (yu - y) / (yu - yl);
        let exponent = self.distribution_index + 1.0;
        let mut_pow = 1.0 / exponent;
        let u = rng.gen_probability();

        let deltaq = if u <= 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * u + (1.0 - 2.0 * u) * xy.powf(exponent);
            val.powf(mut_pow) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * xy.powf(exponent);
            1.0 - val.powf(mut_pow)
        };

        self.bounds.clamp(index, y + deltaq * (yu - yl))
    }
}

impl MutationOperator<Vec<f64>> for PolynomialMutation {
    fn mutate(
        &self,
        solution: &mut Solution<Vec<f64>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        let variables = solution.variables_mut();
        if variables.len() != self.bounds.len() {
            return Err(GeneticError::Configuration(format!(
                "Polynomial mutation expects {} variables, solution has {}",
                self.bounds.len(),
                variables.len()
            )));
        }

        for i in 0..variables.len() {
            if rng.gen_bool(self.probability) {
                variables[i] = self.perturb(i, variables[i], rng);
            }
        }

        Ok(())
    }
}
