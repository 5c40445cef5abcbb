//! # Solution
//!
//! A `Solution` couples a decision-variable value with everything the algorithm learns about
//! it: the objective vector (minimized), the overall constraint violation, the dominance rank
//! of the front it was last placed in and its crowding distance inside that front.
//!
//! Rank and crowding distance are plain typed fields. They are overwritten in place by the
//! ranking and crowding steps every generation; a solution is never copied behind the caller's
//! back to update them.
//!
//! ## Example
//!
//! ```rust
//! use paretoga::solution::Solution;
//!
//! let mut solution = Solution::new(vec![0.5, 0.25], 2);
//! solution.set_objectives(vec![1.0, 2.0]);
//!
//! assert!(solution.is_feasible());
//! assert_eq!(solution.objective(1), 2.0);
//! ```

use std::fmt::Debug;

/// Bound for decision-variable types.
///
/// Any `Clone + Debug + Send + Sync` type qualifies, so evaluation can be spread across
/// threads and solutions can be duplicated explicitly when building a mating pool.
pub trait Encoding: Clone + Debug + Send + Sync {}

impl<T> Encoding for T where T: Clone + Debug + Send + Sync {}

/// A candidate solution of a multi-objective problem.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<V> {
    variables: V,
    objectives: Vec<f64>,
    constraint_violation: f64,
    violated_constraints: usize,
    rank: usize,
    crowding_distance: f64,
}

impl<V: Encoding> Solution<V> {
    /// Creates an unevaluated solution with `number_of_objectives` zeroed objective values.
    pub fn new(variables: V, number_of_objectives: usize) -> Self {
        Self {
            variables,
            objectives: vec![0.0; number_of_objectives],
            constraint_violation: 0.0,
            violated_constraints: 0,
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    /// Creates a solution whose objective values are already known.
    pub fn with_objectives(variables: V, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraint_violation: 0.0,
            violated_constraints: 0,
            rank: 0,
            crowding_distance: 0.0,
        }
    }

    /// Creates a fresh, unevaluated solution sized like `self` but holding `variables`.
    ///
    /// Crossover operators use this to build offspring from a parent.
    pub fn offspring(&self, variables: V) -> Self {
        Self::new(variables, self.objectives.len())
    }

    pub fn variables(&self) -> &V {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut V {
        &mut self.variables
    }

    pub fn into_variables(self) -> V {
        self.variables
    }

    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    pub fn objective(&self, index: usize) -> f64 {
        self.objectives[index]
    }

    pub fn number_of_objectives(&self) -> usize {
        self.objectives.len()
    }

    pub fn set_objective(&mut self, index: usize, value: f64) {
        self.objectives[index] = value;
    }

    pub fn set_objectives(&mut self, objectives: Vec<f64>) {
        self.objectives = objectives;
    }

    /// Overall constraint violation. Zero means feasible; larger is worse.
    pub fn constraint_violation(&self) -> f64 {
        self.constraint_violation
    }

    pub fn violated_constraints(&self) -> usize {
        self.violated_constraints
    }

    /// Records the constraint state of the solution.
    ///
    /// `violation` is the magnitude of the violation and is stored as an absolute value.
    pub fn set_constraint_violation(&mut self, violation: f64, violated_constraints: usize) {
        self.constraint_violation = violation.abs();
        self.violated_constraints = violated_constraints;
    }

    pub fn is_feasible(&self) -> bool {
        self.constraint_violation == 0.0
    }

    /// Index of the front this solution was placed in by the last ranking.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn set_rank(&mut self, rank: usize) {
        self.rank = rank;
    }

    pub fn crowding_distance(&self) -> f64 {
        self.crowding_distance
    }

    pub fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_solution_is_unevaluated() {
        let solution = Solution::new(vec![1.0, 2.0, 3.0], 2);
        assert_eq!(solution.objectives(), &[0.0, 0.0]);
        assert_eq!(solution.rank(), 0);
        assert_eq!(solution.crowding_distance(), 0.0);
        assert!(solution.is_feasible());
    }

    #[test]
    fn test_offspring_resets_metadata() {
        let mut parent = Solution::with_objectives(vec![1.0], vec![3.0, 4.0]);
        parent.set_rank(2);
        parent.set_crowding_distance(f64::INFINITY);

        let child = parent.offspring(vec![0.5]);
        assert_eq!(child.variables(), &vec![0.5]);
        assert_eq!(child.number_of_objectives(), 2);
        assert_eq!(child.rank(), 0);
        assert_eq!(child.crowding_distance(), 0.0);
    }

    #[test]
    fn test_constraint_violation_is_stored_as_magnitude() {
        let mut solution = Solution::new(0u8, 1);
        solution.set_constraint_violation(-2.5, 1);
        assert_eq!(solution.constraint_violation(), 2.5);
        assert_eq!(solution.violated_constraints(), 1);
        assert!(!solution.is_feasible());
    }
}
