//! # Simulated Binary Crossover
//!
//! SBX (Deb & Agrawal, 1995) for real-coded solutions: two parents produce two offspring
//! whose spread around the parents is controlled by the distribution index.

use super::{check_parent_count, validate_distribution_index, validate_probability, CrossoverOperator};
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    problem::Bounds,
    rng::RandomNumberGenerator,
    solution::Solution,
};

const EPS: f64 = 1.0e-14;

#[derive(Debug, Clone)]
pub struct SbxCrossover {
    probability: f64,
    distribution_index: f64,
    bounds: Bounds,
}

impl SbxCrossover {
    /// Creates an SBX operator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `probability` is outside `[0, 1]` or the
    /// distribution index is negative or not finite.
    pub fn new(probability: f64, distribution_index: f64, bounds: Bounds) -> Result<Self> {
        validate_probability("Crossover probability", probability)?;
        validate_distribution_index("Crossover distribution index", distribution_index)?;

        Ok(Self {
            probability,
            distribution_index,
            bounds,
        })
    }

    /// Builds the operator from the crossover settings of `options`.
    pub fn from_options(options: &EvolutionOptions, bounds: Bounds) -> Result<Self> {
        Self::new(
            options.get_crossover_probability(),
            options.get_crossover_distribution_index(),
            bounds,
        )
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn distribution_index(&self) -> f64 {
        self.distribution_index
    }

    fn spread_factor(&self, beta: f64, u: f64) -> f64 {
        let exponent = self.distribution_index + 1.0;
        let alpha = 2.0 - beta.powf(-exponent);
        if u <= 1.0 / alpha {
            (u * alpha).powf(1.0 / exponent)
        } else {
            (1.0 / (2.0 - u * alpha)).powf(1.0 / exponent)
        }
    }
}

impl CrossoverOperator<Vec<f64>> for SbxCrossover {
    fn number_of_parents(&self) -> usize {
        2
    }

    fn crossover(
        &self,
        parents: &[Solution<Vec<f64>>],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Solution<Vec<f64>>>> {
        check_parent_count(2, parents.len())?;

        let x1 = parents[0].variables();
        let x2 = parents[1].variables();
        if x1.len() != self.bounds.len() || x2.len() != self.bounds.len() {
            return Err(GeneticError::Configuration(format!(
                "SBX expects {} variables, parents have {} and {}",
                self.bounds.len(),
                x1.len(),
                x2.len()
            )));
        }

        let mut c1 = x1.clone();
        let mut c2 = x2.clone();

        if rng.gen_bool(self.probability) {
            for i in 0..c1.len() {
                if !rng.gen_bool(0.5) || (x1[i] - x2[i]).abs() <= EPS {
                    continue;
                }

                let (y1, y2) = if x1[i] < x2[i] {
                    (x1[i], x2[i])
                } else {
                    (x2[i], x1[i])
                };
                let (yl, yu) = (self.bounds.lower(i), self.bounds.upper(i));
                let u = rng.gen_probability();

                let beta = 1.0 + 2.0 * (y1 - yl) / (y2 - y1);
                let low = 0.5 * ((y1 + y2) - self.spread_factor(beta, u) * (y2 - y1));

                let beta = 1.0 + 2.0 * (yu - y2) / (y2 - y1);
                let high = 0.5 * ((y1 + y2) + self.spread_factor(beta, u) * (y2 - y1));

                let low = self.bounds.clamp(i, low);
                let high = self.bounds.clamp(i, high);

                if rng.gen_bool(0.5) {
                    c1[i] = high;
                    c2[i] = low;
                } else {
                    c1[i] = low;
                    c2[i] = high;
                }
            }
        }

        Ok(vec![parents[0].offspring(c1), parents[1].offspring(c2)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parents() -> Vec<Solution<Vec<f64>>> {
        vec![
            Solution::with_objectives(vec![0.2, 0.8, 0.5], vec![1.0, 2.0]),
            Solution::with_objectives(vec![0.6, 0.1, 0.5], vec![2.0, 1.0]),
        ]
    }

    #[test]
    fn test_offspring_stay_within_bounds() {
        let bounds = Bounds::uniform(3, 0.0, 1.0).unwrap();
        let sbx = SbxCrossover::new(1.0, 20.0, bounds).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(17);

        for _ in 0..100 {
            let offspring = sbx.crossover(&parents(), &mut rng).unwrap();
            assert_eq!(offspring.len(), 2);
            for child in &offspring {
                assert_eq!(child.variables().len(), 3);
                assert!(child.variables().iter().all(|v| (0.0..=1.0).contains(v)));
                assert_eq!(child.number_of_objectives(), 2);
            }
        }
    }

    #[test]
    fn test_zero_probability_copies_parents() {
        let bounds = Bounds::uniform(3, 0.0, 1.0).unwrap();
        let sbx = SbxCrossover::new(0.0, 20.0, bounds).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let offspring = sbx.crossover(&parents(), &mut rng).unwrap();
        assert_eq!(offspring[0].variables(), parents()[0].variables());
        assert_eq!(offspring[1].variables(), parents()[1].variables());
        assert_eq!(offspring[0].objectives(), &[0.0, 0.0]);
    }

    #[test]
    fn test_wrong_parent_count() {
        let bounds = Bounds::uniform(3, 0.0, 1.0).unwrap();
        let sbx = SbxCrossover::new(0.9, 20.0, bounds).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);

        let result = sbx.crossover(&parents()[..1], &mut rng);
        assert!(matches!(
            result,
            Err(GeneticError::ParentCount {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_invalid_configuration() {
        let bounds = Bounds::uniform(1, 0.0, 1.0).unwrap();
        assert!(SbxCrossover::new(1.5, 20.0, bounds.clone()).is_err());
        assert!(SbxCrossover::new(0.9, -2.0, bounds).is_err());
    }
}
