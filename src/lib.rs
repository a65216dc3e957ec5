//! Genetic-algorithm heuristic solver for the two-constraint knapsack problem.
//!
//! Given a [`Catalog`](catalog::Catalog) of items (weight, volume, value) and
//! two capacities, the [`Evolver`](ga::Evolver) searches for a subset of
//! items with maximal total value that respects both caps.
//!
//! - [`catalog`]: item catalog, packing summaries, and the standard
//!   knapsack fitness function.
//! - [`ga`]: the evolutionary engine. Binary chromosomes, roulette-wheel
//!   selection, three-point crossover, additive mutation, and
//!   age-penalized elitist replacement.
//!
//! # Example
//!
//! ```
//! use u_knapsack::catalog::{knapsack_fitness, Catalog, Item};
//! use u_knapsack::ga::{Evolver, EvolverConfig};
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Item::new(2.0, 1.0, 10.0),
//!         Item::new(3.0, 2.0, 15.0),
//!         Item::new(1.0, 1.0, 5.0),
//!     ],
//!     4.0,
//!     2.0,
//! )
//! .unwrap();
//!
//! let config = EvolverConfig::default()
//!     .with_population_size(20)
//!     .with_generations(30)
//!     .with_seed(7);
//! let result = Evolver::new(config).unwrap().run(&catalog, knapsack_fitness).unwrap();
//! assert!(result.best_fitness >= 15.0);
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem. File
//! parsing and report rendering are left to consumers.

pub mod catalog;
pub mod error;
pub mod ga;

pub use error::{CatalogError, EvolverError, Result};
