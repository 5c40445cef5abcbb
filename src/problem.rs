//! # Problem
//!
//! The `Problem` trait is the collaborator that knows how to create and evaluate candidate
//! solutions. The engine never inspects decision variables itself; it only asks the problem
//! for new solutions, objective values and constraint violations.
//!
//! ## Example
//!
//! ```rust
//! use paretoga::error::Result;
//! use paretoga::problem::Problem;
//! use paretoga::rng::RandomNumberGenerator;
//! use paretoga::solution::Solution;
//!
//! #[derive(Debug)]
//! struct Schaffer;
//!
//! impl Problem<Vec<f64>> for Schaffer {
//!     fn number_of_variables(&self) -> usize { 1 }
//!     fn number_of_objectives(&self) -> usize { 2 }
//!
//!     fn create_solution(&self, rng: &mut RandomNumberGenerator) -> Solution<Vec<f64>> {
//!         Solution::new(vec![rng.gen_range(-10.0, 10.0)], 2)
//!     }
//!
//!     fn evaluate(&self, solution: &mut Solution<Vec<f64>>) -> Result<()> {
//!         let x = solution.variables()[0];
//!         solution.set_objectives(vec![x * x, (x - 2.0) * (x - 2.0)]);
//!         Ok(())
//!     }
//! }
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut solution = Schaffer.create_solution(&mut rng);
//! Schaffer.evaluate(&mut solution).unwrap();
//! assert!(solution.objective(0) >= 0.0);
//! ```

use std::fmt::Debug;

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    solution::{Encoding, Solution},
};

/// A multi-objective problem over decision variables of type `V`.
///
/// Implementations must be `Send + Sync` so that a [`crate::evaluator::ParallelEvaluator`]
/// can evaluate several solutions at once.
pub trait Problem<V: Encoding>: Debug + Send + Sync {
    fn number_of_variables(&self) -> usize;

    fn number_of_objectives(&self) -> usize;

    fn number_of_constraints(&self) -> usize {
        0
    }

    /// Creates a new random solution. The solution is not evaluated.
    fn create_solution(&self, rng: &mut RandomNumberGenerator) -> Solution<V>;

    /// Fills the objective values of `solution`.
    fn evaluate(&self, solution: &mut Solution<V>) -> Result<()>;

    /// Fills the constraint violation of `solution`. Unconstrained problems keep the default.
    fn evaluate_constraints(&self, _solution: &mut Solution<V>) -> Result<()> {
        Ok(())
    }
}

/// Per-variable lower and upper limits of a real-coded problem.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl Bounds {
    /// Creates bounds from matching lower and upper limit vectors.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the vectors differ in length, are empty, contain
    /// non-finite values, or if any lower limit exceeds its upper limit.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.is_empty() || lower.len() != upper.len() {
            return Err(GeneticError::Configuration(format!(
                "Bounds need matching, non-empty limits (lower: {}, upper: {})",
                lower.len(),
                upper.len()
            )));
        }

        for (i, (lo, hi)) in lower.iter().zip(upper.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(GeneticError::InvalidNumericValue(format!(
                    "Bounds of variable {} must be finite",
                    i
                )));
            }
            if lo > hi {
                return Err(GeneticError::Configuration(format!(
                    "Lower bound {} exceeds upper bound {} for variable {}",
                    lo, hi, i
                )));
            }
        }

        Ok(Self { lower, upper })
    }

    /// The same `[lower, upper]` interval for each of `dimensions` variables.
    pub fn uniform(dimensions: usize, lower: f64, upper: f64) -> Result<Self> {
        Self::new(vec![lower; dimensions], vec![upper; dimensions])
    }

    pub fn len(&self) -> usize {
        self.lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    pub fn lower(&self, index: usize) -> f64 {
        self.lower[index]
    }

    pub fn upper(&self, index: usize) -> f64 {
        self.upper[index]
    }

    pub fn clamp(&self, index: usize, value: f64) -> f64 {
        value.clamp(self.lower[index], self.upper[index])
    }

    /// Draws a uniformly random point inside the bounds.
    pub fn sample(&self, rng: &mut RandomNumberGenerator) -> Vec<f64> {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .map(|(&lo, &hi)| rng.gen_range(lo, hi))
            .collect()
    }
}
