//! Evolutionary loop execution.
//!
//! [`Evolver`] orchestrates the complete run:
//! seeding → (selection → crossover → mutation → replacement) × generations
//! → best individual of the final population.

use super::config::EvolverConfig;
use super::initialization::random_population;
use super::operators::{cross_population, mutate_population, CROSSOVER_POINTS};
use super::replacement::next_generation;
use super::selection::roulette_select;
use super::types::{score_population, Chromosome, FitnessFn};
use crate::catalog::Catalog;
use crate::error::{EvolverError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Result of an evolver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolverResult {
    /// First individual of the final population.
    pub best: Chromosome,

    /// Raw (undiscounted) fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best raw fitness of the seed population, followed by the raw fitness
    /// of the front-runner after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the genetic algorithm.
///
/// An `Evolver` only holds its configuration, so any number of them can be
/// built and run side by side in one process.
///
/// # Usage
///
/// ```
/// use u_knapsack::catalog::{knapsack_fitness, Catalog, Item};
/// use u_knapsack::ga::{Evolver, EvolverConfig};
///
/// let catalog = Catalog::new(
///     vec![
///         Item::new(5.0, 1.0, 8.0),
///         Item::new(4.0, 2.0, 6.0),
///         Item::new(3.0, 3.0, 7.0),
///         Item::new(2.0, 1.0, 3.0),
///     ],
///     9.0,
///     5.0,
/// )
/// .unwrap();
///
/// let evolver = Evolver::new(EvolverConfig::default().with_generations(20).with_seed(1)).unwrap();
/// let result = evolver.run(&catalog, knapsack_fitness).unwrap();
/// assert!(catalog.pack(&result.best).fits(&catalog));
/// ```
#[derive(Debug, Clone)]
pub struct Evolver {
    config: EvolverConfig,
}

impl Evolver {
    /// Creates an evolver.
    ///
    /// # Errors
    /// [`EvolverError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: EvolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// Runs the GA with an RNG seeded from [`EvolverConfig::seed`].
    ///
    /// # Errors
    /// See [`run_with_rng`](Self::run_with_rng).
    pub fn run<F: FitnessFn>(&self, catalog: &Catalog, fitness: F) -> Result<EvolverResult> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(catalog, fitness, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// # Errors
    /// - [`EvolverError::ChromosomeTooShort`] if the catalog has fewer items
    ///   than crossover cut points
    /// - [`EvolverError::NoFeasibleIndividual`] if seeding cannot find a
    ///   chromosome with positive fitness
    /// - [`EvolverError::DegeneratePopulation`] if every individual of a
    ///   generation scores zero
    pub fn run_with_rng<F, R>(
        &self,
        catalog: &Catalog,
        fitness: F,
        rng: &mut R,
    ) -> Result<EvolverResult>
    where
        F: FitnessFn,
        R: Rng,
    {
        let config = &self.config;
        if catalog.len() < CROSSOVER_POINTS {
            return Err(EvolverError::ChromosomeTooShort {
                len: catalog.len(),
                min: CROSSOVER_POINTS,
            });
        }

        info!(
            items = catalog.len(),
            population_size = config.population_size,
            generations = config.generations,
            mutation_proportion = config.mutation_proportion,
            age_penalty = config.age_penalty,
            "evolver started"
        );

        // Seeding
        let mut population = random_population(
            config.population_size,
            catalog,
            &fitness,
            config.max_init_attempts,
            rng,
        )?;
        let mut scores = score_population(&population, catalog, &fitness, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(scores.iter().copied().fold(0.0, f64::max));

        // Evolving
        for generation in 1..=config.generations {
            let mating = roulette_select(&scores, config.population_size, rng)?;
            let pool: Vec<Chromosome> = mating.iter().map(|&i| population[i].clone()).collect();

            let mut children = cross_population(&pool, rng);

            mutate_population(&mut population, config.mutation_proportion, rng);
            mutate_population(&mut children, config.mutation_proportion, rng);

            population = next_generation(
                population,
                children,
                catalog,
                &fitness,
                config.age_penalty,
                config.population_size,
                config.parallel,
            );
            scores = score_population(&population, catalog, &fitness, config.parallel);

            fitness_history.push(scores[0]);
            debug!(generation, front_fitness = scores[0], "generation complete");
        }

        // Done
        let best_fitness = scores[0];
        let best = population.swap_remove(0);

        info!(
            best_fitness,
            selected = best.selected_count(),
            "evolver finished"
        );

        Ok(EvolverResult {
            best,
            best_fitness,
            generations: config.generations,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
