//! Age-penalized elitist replacement.
//!
//! Parents and their offspring compete for the next generation. Parents are
//! scored at `fitness × (1 − age_penalty)`, children at full fitness; the
//! best `target_size` of the merged pool survive. A parent must therefore be
//! clearly better than a child to outlive it.

use super::types::{score_population, Chromosome, FitnessFn};
use crate::catalog::Catalog;

/// Builds the next population from `parents` and `children`.
///
/// Scores both groups with `fitness`, then delegates to [`survivors`].
pub fn next_generation<F: FitnessFn + ?Sized>(
    parents: Vec<Chromosome>,
    children: Vec<Chromosome>,
    catalog: &Catalog,
    fitness: &F,
    age_penalty: f64,
    target_size: usize,
    parallel: bool,
) -> Vec<Chromosome> {
    let parent_scores = score_population(&parents, catalog, fitness, parallel);
    let child_scores = score_population(&children, catalog, fitness, parallel);

    survivors(
        parent_scores.into_iter().zip(parents),
        child_scores.into_iter().zip(children),
        age_penalty,
        target_size,
    )
    .into_iter()
    .map(|(_, c)| c)
    .collect()
}

/// Merges scored parents and children and keeps the best `target_size`.
///
/// Parent scores are discounted by `age_penalty`. Parents come before
/// children in the merged pool and the sort is stable, so on equal scores a
/// parent ranks ahead of a child. Returned pairs carry the effective
/// (discounted) score, highest first.
pub fn survivors<T>(
    parents: impl IntoIterator<Item = (f64, T)>,
    children: impl IntoIterator<Item = (f64, T)>,
    age_penalty: f64,
    target_size: usize,
) -> Vec<(f64, T)> {
    let keep = 1.0 - age_penalty;
    let mut pool: Vec<(f64, T)> = parents
        .into_iter()
        .map(|(score, item)| (score * keep, item))
        .chain(children)
        .collect();

    pool.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    pool.truncate(target_size);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{knapsack_fitness, Item};

    #[test]
    fn test_age_penalty_example() {
        let parents = vec![(10.0, "p0"), (8.0, "p1"), (2.0, "p2")];
        let children = vec![(6.0, "c0"), (3.0, "c1")];

        let kept = survivors(parents, children, 0.5, 3);

        assert_eq!(kept, vec![(6.0, "c0"), (5.0, "p0"), (4.0, "p1")]);
    }

    #[test]
    fn test_zero_penalty_ties_favor_parents() {
        let kept = survivors(vec![(4.0, "p")], vec![(4.0, "c")], 0.0, 1);
        assert_eq!(kept, vec![(4.0, "p")]);
    }

    #[test]
    fn test_penalty_lets_child_overtake_parent() {
        // 10 × 0.9 = 9 < 9.5
        let kept = survivors(vec![(10.0, "p")], vec![(9.5, "c")], 0.1, 1);
        assert_eq!(kept[0].1, "c");
    }

    #[test]
    fn test_superior_parent_survives() {
        let kept = survivors(vec![(100.0, "p")], vec![(20.0, "c")], 0.1, 1);
        assert_eq!(kept[0].1, "p");
        assert!((kept[0].0 - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_target_larger_than_pool() {
        let kept = survivors(vec![(1.0, 'a')], vec![(2.0, 'b')], 0.1, 10);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_next_generation_drops_infeasible() {
        let catalog = Catalog::new(
            vec![
                Item::new(1.0, 1.0, 3.0),
                Item::new(1.0, 1.0, 4.0),
                Item::new(5.0, 1.0, 9.0),
            ],
            2.0,
            10.0,
        )
        .unwrap();

        let parents = vec![
            Chromosome::from(vec![true, false, false]), // 3 -> 2.7
            Chromosome::from(vec![false, false, true]), // overweight -> 0
        ];
        let children = vec![
            Chromosome::from(vec![true, true, false]), // 7
            Chromosome::from(vec![true, true, true]),  // overweight -> 0
        ];

        let next = next_generation(parents, children, &catalog, &knapsack_fitness, 0.1, 2, false);

        assert_eq!(
            next,
            vec![
                Chromosome::from(vec![true, true, false]),
                Chromosome::from(vec![true, false, false]),
            ]
        );
    }
}
