//! Error types.
//!
//! The engine fails fast on inputs that would otherwise make one of its
//! sampling loops run forever.

use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::catalog::Catalog).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("capacity `{name}` must be finite and non-negative, got {value}")]
    InvalidCapacity { name: &'static str, value: f64 },

    #[error("item #{index}: `{field}` must be finite and non-negative, got {value}")]
    InvalidItem {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// Errors raised by the evolutionary engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvolverError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("chromosome length {len} is too short for three-point crossover (need at least {min})")]
    ChromosomeTooShort { len: usize, min: usize },

    #[error("no feasible individual found after {attempts} attempts")]
    NoFeasibleIndividual { attempts: usize },

    #[error("total fitness of the population is zero, roulette wheel is empty")]
    DegeneratePopulation,
}

pub type Result<T> = std::result::Result<T, EvolverError>;
