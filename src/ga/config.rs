//! Evolver configuration.
//!
//! [`EvolverConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{EvolverError, Result};

/// Configuration for the [`Evolver`](super::Evolver).
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::EvolverConfig;
///
/// let config = EvolverConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::EvolverConfig;
///
/// let config = EvolverConfig::default()
///     .with_population_size(100)
///     .with_mutation_proportion(0.1)
///     .with_age_penalty(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even: crossover pairs every individual exactly once.
    pub population_size: usize,

    /// Number of generations. The run always executes exactly this many.
    pub generations: usize,

    /// Fraction of the population (and of the offspring) that receives an
    /// additive mutation each generation (0.0–1.0).
    pub mutation_proportion: f64,

    /// Fitness discount applied to the previous generation when it competes
    /// with its offspring for survival (0.0–1.0).
    pub age_penalty: f64,

    /// Upper bound on random draws per initial individual before giving up
    /// with [`EvolverError::NoFeasibleIndividual`].
    pub max_init_attempts: usize,

    /// Whether to score populations in parallel using rayon.
    ///
    /// Only effective when the crate is built with the `parallel` feature.
    /// Random draws stay on one sequential stream, so results do not change.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolverConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 500,
            mutation_proportion: 0.05,
            age_penalty: 0.1,
            max_init_attempts: 10_000,
            parallel: false,
            seed: None,
        }
    }
}

impl EvolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation proportion.
    pub fn with_mutation_proportion(mut self, proportion: f64) -> Self {
        self.mutation_proportion = proportion.clamp(0.0, 1.0);
        self
    }

    /// Sets the age penalty.
    pub fn with_age_penalty(mut self, penalty: f64) -> Self {
        self.age_penalty = penalty.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-individual bound on initialization attempts.
    pub fn with_max_init_attempts(mut self, attempts: usize) -> Self {
        self.max_init_attempts = attempts;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`EvolverError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(format!(
                "population_size must be even, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(invalid("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_proportion) {
            return Err(invalid("mutation_proportion must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.age_penalty) {
            return Err(invalid("age_penalty must be within [0, 1]"));
        }
        if self.max_init_attempts == 0 {
            return Err(invalid("max_init_attempts must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> EvolverError {
    EvolverError::InvalidConfig(msg.into())
}
