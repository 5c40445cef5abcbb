//! # Error Types
//!
//! This module defines the error type shared by every stage of a multi-objective run.
//! Configuration problems (bad option values, a mating pool that cannot be split into
//! crossover chunks, a crossover fed the wrong number of parents) and evaluation failures
//! all abort the run; nothing is retried and no partial front is returned.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use paretoga::error::{GeneticError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(GeneticError::EmptyPopulation);
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use paretoga::error::{GeneticError, OptionExt};
//!
//! fn first_objective(objectives: &[f64]) -> paretoga::error::Result<f64> {
//!     objectives.first().copied().ok_or_else_genetic(|| {
//!         GeneticError::Evaluation("solution has no objective values".to_string())
//!     })
//! }
//!
//! assert_eq!(first_objective(&[1.5]).unwrap(), 1.5);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// An invalid configuration was provided. Fatal, never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A crossover operator received a parent slice of the wrong length.
    #[error("Wrong number of parents: expected {expected}, found {found}")]
    ParentCount { expected: usize, found: usize },

    /// The problem failed to evaluate a solution, or produced unusable objective values.
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// An operation required at least one solution.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// NaN or infinity where a finite value is required.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for multi-objective evolution.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to foreign errors.
///
/// ## Examples
///
/// ```rust
/// use paretoga::error::ResultExt;
///
/// fn parse_size(raw: &str) -> paretoga::error::Result<usize> {
///     raw.parse::<usize>().context("populationSize")
/// }
///
/// assert!(parse_size("abc").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T>` using `err_fn` to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
