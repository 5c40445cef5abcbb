//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of a multi-objective run:
//! population size, evaluation budget, archive size, variation operator probabilities and
//! distribution indices, logging level and the parallel evaluation threshold.
//!
//! Options are validated when they are built, so a launcher never starts with values it
//! cannot honour.
//!
//! ## Example
//!
//! ```rust
//! use paretoga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(40)
//!     .max_evaluations(4000)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_population_size(), 40);
//! assert_eq!(options.get_crossover_probability(), 0.9);
//! ```
//!
//! ## Flat key/value configuration
//!
//! `EvolutionOptions::from_properties` reads the same settings from a string map. Absent keys
//! keep their defaults; values that do not parse are configuration errors.
//!
//! | Key | Default |
//! |---|---|
//! | `populationSize` | 100 |
//! | `maxEvaluations` | 25000 |
//! | `archiveSize` | 100 |
//! | `crossoverProbability` | 0.9 |
//! | `crossoverDistributionIndex` | 20.0 |
//! | `mutationProbability` | 1 / number of variables |
//! | `mutationDistributionIndex` | 20.0 |
//! | `parallelThreshold` | 1000 |
//! | `logLevel` | `none` |

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::operators::{validate_distribution_index, validate_probability};

const DEFAULT_POPULATION_SIZE: usize = 100;
const DEFAULT_MAX_EVALUATIONS: usize = 25_000;
const DEFAULT_ARCHIVE_SIZE: usize = 100;
const DEFAULT_CROSSOVER_PROBABILITY: f64 = 0.9;
const DEFAULT_CROSSOVER_DISTRIBUTION_INDEX: f64 = 20.0;
const DEFAULT_MUTATION_DISTRIBUTION_INDEX: f64 = 20.0;
const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

impl FromStr for LogLevel {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(LogLevel::Verbose),
            "minimal" => Ok(LogLevel::Minimal),
            "none" => Ok(LogLevel::None),
            other => Err(GeneticError::Configuration(format!(
                "Unknown log level '{}'",
                other
            ))),
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    max_evaluations: usize,
    archive_size: usize,
    crossover_probability: f64,
    crossover_distribution_index: f64,
    /// `None` means one over the number of decision variables.
    mutation_probability: Option<f64>,
    mutation_distribution_index: f64,
    log_level: LogLevel,
    /// Minimum number of solutions to evaluate in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// Creates validated options with the given population size and evaluation budget and
    /// defaults for everything else.
    pub fn new(population_size: usize, max_evaluations: usize) -> Result<Self> {
        Self::builder()
            .population_size(population_size)
            .max_evaluations(max_evaluations)
            .build()
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Reads options from a flat key/value mapping. See the module documentation for keys.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present value cannot be parsed or the resulting
    /// options fail validation.
    pub fn from_properties(properties: &HashMap<String, String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(v) = parse_property(properties, "populationSize")? {
            builder = builder.population_size(v);
        }
        if let Some(v) = parse_property(properties, "maxEvaluations")? {
            builder = builder.max_evaluations(v);
        }
        if let Some(v) = parse_property(properties, "archiveSize")? {
            builder = builder.archive_size(v);
        }
        if let Some(v) = parse_property(properties, "crossoverProbability")? {
            builder = builder.crossover_probability(v);
        }
        if let Some(v) = parse_property(properties, "crossoverDistributionIndex")? {
            builder = builder.crossover_distribution_index(v);
        }
        if let Some(v) = parse_property(properties, "mutationProbability")? {
            builder = builder.mutation_probability(v);
        }
        if let Some(v) = parse_property(properties, "mutationDistributionIndex")? {
            builder = builder.mutation_distribution_index(v);
        }
        if let Some(v) = parse_property(properties, "parallelThreshold")? {
            builder = builder.parallel_threshold(v);
        }
        if let Some(v) = parse_property(properties, "logLevel")? {
            builder = builder.log_level(v);
        }

        builder.build()
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_evaluations(&self) -> usize {
        self.max_evaluations
    }

    pub fn get_archive_size(&self) -> usize {
        self.archive_size
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_crossover_distribution_index(&self) -> f64 {
        self.crossover_distribution_index
    }

    /// The configured mutation probability, if one was set explicitly.
    pub fn get_mutation_probability(&self) -> Option<f64> {
        self.mutation_probability
    }

    /// The mutation probability to use for a problem with `number_of_variables` variables.
    pub fn resolve_mutation_probability(&self, number_of_variables: usize) -> f64 {
        self.mutation_probability
            .unwrap_or_else(|| 1.0 / number_of_variables.max(1) as f64)
    }

    pub fn get_mutation_distribution_index(&self) -> f64 {
        self.mutation_distribution_index
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum number of solutions to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.max_evaluations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of evaluations cannot be zero".to_string(),
            ));
        }
        if self.archive_size == 0 {
            return Err(GeneticError::Configuration(
                "Archive size cannot be zero".to_string(),
            ));
        }

        validate_probability("Crossover probability", self.crossover_probability)?;
        if let Some(p) = self.mutation_probability {
            validate_probability("Mutation probability", p)?;
        }
        validate_distribution_index(
            "Crossover distribution index",
            self.crossover_distribution_index,
        )?;
        validate_distribution_index(
            "Mutation distribution index",
            self.mutation_distribution_index,
        )?;

        Ok(())
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
            archive_size: DEFAULT_ARCHIVE_SIZE,
            crossover_probability: DEFAULT_CROSSOVER_PROBABILITY,
            crossover_distribution_index: DEFAULT_CROSSOVER_DISTRIBUTION_INDEX,
            mutation_probability: None,
            mutation_distribution_index: DEFAULT_MUTATION_DISTRIBUTION_INDEX,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

fn parse_property<T>(properties: &HashMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
{
    match properties.get(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            GeneticError::Configuration(format!("Invalid value '{}' for property {}", raw, key))
        }),
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the defaults; `build` validates the result.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    max_evaluations: Option<usize>,
    archive_size: Option<usize>,
    crossover_probability: Option<f64>,
    crossover_distribution_index: Option<f64>,
    mutation_probability: Option<f64>,
    mutation_distribution_index: Option<f64>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn max_evaluations(mut self, value: usize) -> Self {
        self.max_evaluations = Some(value);
        self
    }

    pub fn archive_size(mut self, value: usize) -> Self {
        self.archive_size = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn crossover_distribution_index(mut self, value: f64) -> Self {
        self.crossover_distribution_index = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn mutation_distribution_index(mut self, value: f64) -> Self {
        self.mutation_distribution_index = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let options = EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            max_evaluations: self.max_evaluations.unwrap_or(defaults.max_evaluations),
            archive_size: self.archive_size.unwrap_or(defaults.archive_size),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            crossover_distribution_index: self
                .crossover_distribution_index
                .unwrap_or(defaults.crossover_distribution_index),
            mutation_probability: self.mutation_probability,
            mutation_distribution_index: self
                .mutation_distribution_index
                .unwrap_or(defaults.mutation_distribution_index),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self.parallel_threshold.unwrap_or(defaults.parallel_threshold),
        };

        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_max_evaluations(), 25_000);
        assert_eq!(options.get_archive_size(), 100);
        assert_eq!(options.get_crossover_probability(), 0.9);
        assert_eq!(options.get_crossover_distribution_index(), 20.0);
        assert_eq!(options.get_mutation_probability(), None);
        assert_eq!(options.resolve_mutation_probability(30), 1.0 / 30.0);
        assert_eq!(options.get_mutation_distribution_index(), 20.0);
        assert_eq!(options.get_log_level(), LogLevel::None);
    }

    #[test]
    fn test_builder_rejects_zero_population() {
        let result = EvolutionOptions::builder().population_size(0).build();
        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_builder_rejects_bad_probabilities() {
        assert!(EvolutionOptions::builder()
            .crossover_probability(1.2)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .mutation_probability(-0.1)
            .build()
            .is_err());
        assert!(EvolutionOptions::builder()
            .mutation_distribution_index(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn test_from_properties_overrides_and_defaults() {
        let options = EvolutionOptions::from_properties(&properties(&[
            ("populationSize", "4"),
            ("maxEvaluations", "20"),
            ("mutationProbability", "0.5"),
            ("logLevel", "Minimal"),
            ("somethingElse", "ignored"),
        ]))
        .unwrap();

        assert_eq!(options.get_population_size(), 4);
        assert_eq!(options.get_max_evaluations(), 20);
        assert_eq!(options.get_mutation_probability(), Some(0.5));
        assert_eq!(options.get_log_level(), LogLevel::Minimal);
        assert_eq!(options.get_archive_size(), 100);
        assert_eq!(options.get_crossover_probability(), 0.9);
    }

    #[test]
    fn test_from_properties_empty_is_default() {
        let options = EvolutionOptions::from_properties(&HashMap::new()).unwrap();
        assert_eq!(options, EvolutionOptions::default());
    }

    #[test]
    fn test_from_properties_rejects_unparsable_values() {
        let result = EvolutionOptions::from_properties(&properties(&[("populationSize", "many")]));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));

        let result = EvolutionOptions::from_properties(&properties(&[("logLevel", "loud")]));
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }
}
