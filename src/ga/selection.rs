//! Fitness-proportional (roulette wheel) parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{EvolverError, Result};
use rand::Rng;

/// Samples `n` indices with replacement, each with probability proportional
/// to its score.
///
/// # Algorithm
///
/// 1. Stable-sort `(index, score)` pairs ascending by score
/// 2. Build the cumulative share table; clamp its last entry to exactly `1.0`
///    so rounding can never leave a draw unmatched
/// 3. For each draw `r ∈ [0, 1)`, return the first index whose cumulative
///    share exceeds `r`
///
/// Zero scores have zero width on the wheel and are never returned.
///
/// # Complexity
/// O(m log m) to build the wheel, O(m) per draw, where m = `scores.len()`
///
/// # Errors
/// [`EvolverError::DegeneratePopulation`] if the scores do not sum to a
/// positive finite value (including an empty slice).
pub fn roulette_select<R: Rng>(scores: &[f64], n: usize, rng: &mut R) -> Result<Vec<usize>> {
    let total: f64 = scores.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(EvolverError::DegeneratePopulation);
    }

    let mut wheel: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    wheel.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut cumulative = 0.0;
    for slot in wheel.iter_mut() {
        cumulative += slot.1 / total;
        slot.1 = cumulative;
    }
    if let Some(last) = wheel.last_mut() {
        last.1 = 1.0;
    }

    let selected = (0..n)
        .map(|_| {
            let r: f64 = rng.random();
            wheel
                .iter()
                .find(|&&(_, p)| r < p)
                .map(|&(i, _)| i)
                .unwrap_or(wheel[wheel.len() - 1].0)
        })
        .collect();

    Ok(selected)
}
