//! Core types of the evolutionary engine.
//!
//! [`Chromosome`] is the fixed-length bit vector the engine evolves, and
//! [`FitnessFn`] is the contract between the engine and the caller-supplied
//! scoring rule.

use crate::catalog::Catalog;
use std::ops::Index;

/// A candidate solution: one gene per catalog item, `true` = item packed.
///
/// The length is fixed for the lifetime of a run and equals the catalog
/// size. Operators never change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Creates an all-zero chromosome of length `len` (nothing packed).
    pub fn new(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of genes set to `true`.
    pub fn selected_count(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Indices of genes set to `true`, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Returns `true` if every gene is set, i.e. additive mutation can no
    /// longer change this chromosome.
    pub fn is_saturated(&self) -> bool {
        self.genes.iter().all(|&g| g)
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(genes: Vec<bool>) -> Self {
        Self { genes }
    }
}

impl Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.genes[index]
    }
}

/// Caller-supplied fitness function.
///
/// Must be pure and return a non-negative value. `0.0` marks an infeasible
/// chromosome: it is never picked by roulette selection and sinks to the
/// bottom during replacement.
///
/// Implemented for every `Fn(&Chromosome, &Catalog) -> f64 + Sync`, so both
/// plain functions such as [`knapsack_fitness`](crate::catalog::knapsack_fitness)
/// and closures can be passed directly:
///
/// ```
/// use u_knapsack::catalog::Catalog;
/// use u_knapsack::ga::{Chromosome, FitnessFn};
///
/// let count = |c: &Chromosome, _: &Catalog| c.selected_count() as f64;
/// let catalog = Catalog::new(vec![], 0.0, 0.0).unwrap();
/// assert_eq!(count.fitness(&Chromosome::new(0), &catalog), 0.0);
/// ```
pub trait FitnessFn: Sync {
    fn fitness(&self, chromosome: &Chromosome, catalog: &Catalog) -> f64;
}

impl<F> FitnessFn for F
where
    F: Fn(&Chromosome, &Catalog) -> f64 + Sync,
{
    fn fitness(&self, chromosome: &Chromosome, catalog: &Catalog) -> f64 {
        self(chromosome, catalog)
    }
}

/// Scores every chromosome of `population`.
///
/// With the `parallel` feature and `parallel == true` the work is spread over
/// rayon's pool. Output order always matches input order, so results are
/// identical either way.
pub(crate) fn score_population<F: FitnessFn + ?Sized>(
    population: &[Chromosome],
    catalog: &Catalog,
    fitness: &F,
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if parallel {
            return population
                .par_iter()
                .map(|c| fitness.fitness(c, catalog))
                .collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population
        .iter()
        .map(|c| fitness.fitness(c, catalog))
        .collect()
}
