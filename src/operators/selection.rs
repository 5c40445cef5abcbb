use std::cmp::Ordering;

use super::SelectionOperator;
use crate::crowding::crowded_comparison;
use crate::error::{GeneticError, Result};
use crate::population::Population;
use crate::rng::RandomNumberGenerator;
use crate::solution::{Encoding, Solution};

/// Tournament selection under crowded comparison.
///
/// Draws `tournament_size` members uniformly with replacement and returns the best one:
/// the member with the lowest rank, and among equal ranks the one with the largest crowding
/// distance. Ties are broken by the first drawn participant.
///
/// The default tournament size of 2 is the binary tournament used by NSGA-II.
///
/// # Examples
///
/// ```
/// use paretoga::operators::{SelectionOperator, TournamentSelection};
/// use paretoga::population::Population;
/// use paretoga::rng::RandomNumberGenerator;
/// use paretoga::solution::Solution;
///
/// let mut best = Solution::with_objectives(1u32, vec![0.0, 0.0]);
/// best.set_rank(0);
/// let mut worst = Solution::with_objectives(2u32, vec![1.0, 1.0]);
/// worst.set_rank(1);
/// let population: Population<u32> = vec![best, worst].into();
///
/// // A tournament larger than the population almost surely sees the rank-0 member.
/// let selection = TournamentSelection::new(64).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let winner = selection.select(&population, &mut rng).unwrap();
/// assert_eq!(*winner.variables(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    /// Binary tournament.
    pub fn binary() -> Self {
        Self { tournament_size: 2 }
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament<V: Encoding>(
        &self,
        solutions: &[Solution<V>],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let mut best_idx = rng.gen_index(solutions.len());

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(solutions.len());
            if crowded_comparison(&solutions[idx], &solutions[best_idx]) == Ordering::Less {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::binary()
    }
}

impl<V: Encoding> SelectionOperator<V> for TournamentSelection {
    fn select<'a>(
        &self,
        population: &'a Population<V>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Solution<V>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let winner_idx = self.run_tournament(population.as_slice(), rng);
        Ok(&population[winner_idx])
    }
}

/// Uniform selection with replacement, ignoring rank and crowding distance.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RandomSelection;

impl<V: Encoding> SelectionOperator<V> for RandomSelection {
    fn select<'a>(
        &self,
        population: &'a Population<V>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Solution<V>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(&population[rng.gen_index(population.len())])
    }
}
