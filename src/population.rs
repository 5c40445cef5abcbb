//! # Population
//!
//! An ordered collection of [`Solution`]s. Order carries no meaning except right after
//! ranking or a crowding sort.

use std::ops::{Index, IndexMut};

use crate::solution::{Encoding, Solution};

#[derive(Debug, Clone, PartialEq)]
pub struct Population<V> {
    solutions: Vec<Solution<V>>,
}

impl<V: Encoding> Population<V> {
    pub fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            solutions: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, solution: Solution<V>) {
        self.solutions.push(solution);
    }

    pub fn clear(&mut self) {
        self.solutions.clear();
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution<V>> {
        self.solutions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution<V>> {
        self.solutions.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Solution<V>> {
        self.solutions.iter_mut()
    }

    pub fn as_slice(&self) -> &[Solution<V>] {
        &self.solutions
    }

    pub fn as_mut_slice(&mut self) -> &mut [Solution<V>] {
        &mut self.solutions
    }

    pub fn into_vec(self) -> Vec<Solution<V>> {
        self.solutions
    }

    /// Returns a new population holding copies of the members of `self` followed by those of
    /// `other`. Duplicates are kept.
    pub fn union(&self, other: &Population<V>) -> Population<V> {
        let mut solutions = Vec::with_capacity(self.len() + other.len());
        solutions.extend(self.solutions.iter().cloned());
        solutions.extend(other.solutions.iter().cloned());
        Population { solutions }
    }

    /// Consuming form of [`Population::union`], used by the loop to avoid copying.
    pub fn merge(mut self, other: Population<V>) -> Population<V> {
        self.solutions.extend(other.solutions);
        self
    }
}

impl<V: Encoding> Default for Population<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<Solution<V>>> for Population<V> {
    fn from(solutions: Vec<Solution<V>>) -> Self {
        Self { solutions }
    }
}

impl<V> FromIterator<Solution<V>> for Population<V> {
    fn from_iter<I: IntoIterator<Item = Solution<V>>>(iter: I) -> Self {
        Self {
            solutions: iter.into_iter().collect(),
        }
    }
}

impl<V> IntoIterator for Population<V> {
    type Item = Solution<V>;
    type IntoIter = std::vec::IntoIter<Solution<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Population<V> {
    type Item = &'a Solution<V>;
    type IntoIter = std::slice::Iter<'a, Solution<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl<V> Extend<Solution<V>> for Population<V> {
    fn extend<I: IntoIterator<Item = Solution<V>>>(&mut self, iter: I) {
        self.solutions.extend(iter);
    }
}

impl<V> Index<usize> for Population<V> {
    type Output = Solution<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.solutions[index]
    }
}

impl<V> IndexMut<usize> for Population<V> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.solutions[index]
    }
}
