//! Genetic algorithm engine for binary knapsack chromosomes.
//!
//! The engine evolves fixed-length bit vectors ([`Chromosome`]) scored by a
//! caller-supplied [`FitnessFn`], where `0.0` marks an infeasible
//! individual.
//!
//! # Key Types
//!
//! - [`EvolverConfig`]: algorithm parameters (population size, generations,
//!   mutation share, age penalty)
//! - [`Evolver`]: executes the evolutionary loop
//! - [`EvolverResult`]: best individual and run statistics
//!
//! # Operators
//!
//! - [`initialization`]: rejection-sampled random seeding
//! - [`selection`]: fitness-proportional (roulette wheel) selection
//! - [`operators`]: three-point crossover and additive mutation
//! - [`replacement`]: age-penalized elitist merge of parents and offspring
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem", *J. Heuristics* 4(1), 63–86

mod config;
pub mod initialization;
pub mod operators;
pub mod replacement;
mod runner;
pub mod selection;
mod types;

pub use config::EvolverConfig;
pub use runner::{Evolver, EvolverResult};
pub use types::{Chromosome, FitnessFn};
