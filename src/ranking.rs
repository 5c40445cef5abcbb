//! # Non-dominated Ranking
//!
//! Partitions a population into ordered Pareto fronts. Front 0 holds the members no other
//! member dominates; front `k` holds the members that are non-dominated once fronts
//! `0..k` are removed. Every input member lands in exactly one front and its `rank` field is
//! set to that front's index.
//!
//! The peeling is done with domination counters (Deb et al., 2002): one pass of pairwise
//! comparisons records, for every member, how many members dominate it and which members it
//! dominates. Removing a front then only decrements the counters of the members it dominates,
//! and those that reach zero form the next front.
//!
//! ## Example
//!
//! ```rust
//! use paretoga::population::Population;
//! use paretoga::ranking::Ranking;
//! use paretoga::solution::Solution;
//!
//! let population: Population<char> = vec![
//!     Solution::with_objectives('a', vec![1.0, 5.0]),
//!     Solution::with_objectives('b', vec![3.0, 3.0]),
//!     Solution::with_objectives('c', vec![4.0, 4.0]),
//! ]
//! .into();
//!
//! let ranking = Ranking::new(population);
//!
//! assert_eq!(ranking.number_of_fronts(), 2);
//! assert_eq!(ranking.front(0).map(|f| f.len()), Some(2));
//! assert_eq!(ranking.front(1).map(|f| f[0].variables()), Some(&'c'));
//! ```

use crate::{
    dominance::{self, Dominance},
    population::Population,
    solution::{Encoding, Solution},
};

/// A population split into ordered fronts.
#[derive(Debug, Clone)]
pub struct Ranking<V> {
    fronts: Vec<Population<V>>,
}

impl<V: Encoding> Ranking<V> {
    /// Ranks `population`, taking ownership of its members.
    pub fn new(population: Population<V>) -> Self {
        let solutions = population.into_vec();
        let front_indices = non_dominated_fronts(&solutions);

        let mut slots: Vec<Option<Solution<V>>> = solutions.into_iter().map(Some).collect();
        let mut fronts = Vec::with_capacity(front_indices.len());

        for (rank, indices) in front_indices.into_iter().enumerate() {
            let mut front = Population::with_capacity(indices.len());
            for index in indices {
                if let Some(mut solution) = slots[index].take() {
                    solution.set_rank(rank);
                    front.push(solution);
                }
            }
            fronts.push(front);
        }

        Self { fronts }
    }

    pub fn number_of_fronts(&self) -> usize {
        self.fronts.len()
    }

    pub fn front(&self, rank: usize) -> Option<&Population<V>> {
        self.fronts.get(rank)
    }

    pub fn front_mut(&mut self, rank: usize) -> Option<&mut Population<V>> {
        self.fronts.get_mut(rank)
    }

    pub fn fronts(&self) -> &[Population<V>] {
        &self.fronts
    }

    pub fn into_fronts(self) -> Vec<Population<V>> {
        self.fronts
    }

    /// Takes the non-dominated front out of the ranking; empty if the ranking is empty.
    pub fn into_first_front(self) -> Population<V> {
        self.fronts.into_iter().next().unwrap_or_default()
    }

    /// Total number of ranked members across all fronts.
    pub fn len(&self) -> usize {
        self.fronts.iter().map(Population::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }

    /// Sizes of the fronts in rank order.
    pub fn front_sizes(&self) -> Vec<usize> {
        self.fronts.iter().map(Population::len).collect()
    }
}

/// Computes the fronts of `solutions` as lists of indices, front 0 first.
///
/// Cost is `O(m * n^2)` comparisons for `n` solutions and `m` objectives.
pub fn non_dominated_fronts<V: Encoding>(solutions: &[Solution<V>]) -> Vec<Vec<usize>> {
    let n = solutions.len();
    if n == 0 {
        return Vec::new();
    }

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance::compare(&solutions[i], &solutions[j]) {
                Dominance::Dominates => {
                    dominated[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::DominatedBy => {
                    dominated[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::NonDominated => {}
            }
        }
    }

    let mut current: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();
    let mut fronts = Vec::new();

    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        fronts.push(current);
        current = next;
    }

    fronts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(objectives: &[[f64; 2]]) -> Population<usize> {
        objectives
            .iter()
            .enumerate()
            .map(|(id, o)| Solution::with_objectives(id, o.to_vec()))
            .collect()
    }

    fn ids(front: &Population<usize>) -> Vec<usize> {
        let mut ids: Vec<usize> = front.iter().map(|s| *s.variables()).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_empty_population_has_no_fronts() {
        let ranking = Ranking::new(Population::<usize>::new());
        assert!(ranking.is_empty());
        assert_eq!(ranking.len(), 0);
        assert!(ranking.into_first_front().is_empty());
    }

    #[test]
    fn test_chain_of_dominance() {
        let ranking = Ranking::new(population(&[[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]));

        assert_eq!(ranking.number_of_fronts(), 3);
        assert_eq!(ids(&ranking.fronts()[0]), vec![1]);
        assert_eq!(ids(&ranking.fronts()[1]), vec![2]);
        assert_eq!(ids(&ranking.fronts()[2]), vec![0]);
    }

    #[test]
    fn test_mixed_fronts_and_rank_fields() {
        let ranking = Ranking::new(population(&[
            [1.0, 5.0],
            [3.0, 3.0],
            [5.0, 1.0],
            [4.0, 4.0],
            [6.0, 6.0],
        ]));

        assert_eq!(ranking.front_sizes(), vec![3, 1, 1]);
        assert_eq!(ids(&ranking.fronts()[0]), vec![0, 1, 2]);
        assert_eq!(ids(&ranking.fronts()[1]), vec![3]);
        assert_eq!(ids(&ranking.fronts()[2]), vec![4]);

        for (rank, front) in ranking.fronts().iter().enumerate() {
            assert!(front.iter().all(|s| s.rank() == rank));
        }
    }

    #[test]
    fn test_duplicates_share_a_front() {
        let ranking = Ranking::new(population(&[[2.0, 2.0], [2.0, 2.0], [2.0, 2.0]]));
        assert_eq!(ranking.front_sizes(), vec![3]);
    }

    #[test]
    fn test_infeasible_members_rank_behind_feasible_ones() {
        let mut members = population(&[[0.0, 0.0], [5.0, 5.0]]);
        members[0].set_constraint_violation(1.0, 1);

        let ranking = Ranking::new(members);

        assert_eq!(ids(&ranking.fronts()[0]), vec![1]);
        assert_eq!(ids(&ranking.fronts()[1]), vec![0]);
    }

    #[test]
    fn test_front_indices_cover_input() {
        let members = population(&[[1.0, 2.0], [2.0, 1.0], [3.0, 3.0], [0.5, 4.0]]);
        let fronts = non_dominated_fronts(members.as_slice());

        let mut all: Vec<usize> = fronts.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }
}
