//! Item catalog for the two-constraint knapsack problem.
//!
//! A [`Catalog`] is the read-only input of a run: an ordered list of
//! [`Item`]s plus weight and volume caps. Gene `i` of a
//! [`Chromosome`](crate::ga::Chromosome) decides whether item `i` is packed.
//!
//! [`knapsack_fitness`] is the standard fitness function: the total value of
//! the packed items, or `0.0` when either cap is exceeded.

mod types;

pub use types::{knapsack_fitness, Catalog, Item, Packing};
