//! Random population seeding.
//!
//! Each initial individual is a uniformly random bit vector, redrawn until
//! the fitness function accepts it (fitness > 0). The redraw loop is bounded
//! so that catalogs with no reachable feasible subset fail instead of
//! spinning forever.

use super::types::{Chromosome, FitnessFn};
use crate::catalog::Catalog;
use crate::error::{EvolverError, Result};
use rand::Rng;
use tracing::trace;

/// Draws one feasible random individual.
///
/// Every gene is an independent fair coin flip. The chromosome is redrawn
/// while `fitness == 0`, at most `max_attempts` times in total.
///
/// # Errors
/// [`EvolverError::NoFeasibleIndividual`] if no draw was feasible.
pub fn random_individual<F, R>(
    gene_count: usize,
    catalog: &Catalog,
    fitness: &F,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Chromosome>
where
    F: FitnessFn + ?Sized,
    R: Rng,
{
    for attempt in 1..=max_attempts {
        let genes: Vec<bool> = (0..gene_count).map(|_| rng.random_bool(0.5)).collect();
        let candidate = Chromosome::from(genes);
        if fitness.fitness(&candidate, catalog) > 0.0 {
            if attempt > 1 {
                trace!(attempt, "feasible individual drawn");
            }
            return Ok(candidate);
        }
    }

    Err(EvolverError::NoFeasibleIndividual {
        attempts: max_attempts,
    })
}

/// Draws `size` independent feasible individuals.
///
/// # Errors
/// Propagates [`EvolverError::NoFeasibleIndividual`] from the first
/// individual that could not be drawn.
pub fn random_population<F, R>(
    size: usize,
    catalog: &Catalog,
    fitness: &F,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<Chromosome>>
where
    F: FitnessFn + ?Sized,
    R: Rng,
{
    (0..size)
        .map(|_| random_individual(catalog.len(), catalog, fitness, max_attempts, rng))
        .collect()
}
