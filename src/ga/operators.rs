//! Binary-chromosome genetic operators.
//!
//! # Crossover
//!
//! - [`three_point_crossover`]: alternates parent segments across four spans
//! - [`cross_population`]: pairs every individual exactly once and crosses
//!   each pair
//!
//! # Mutation
//!
//! - [`mutate_one`]: packs one random item that is not packed yet
//! - [`mutate_population`]: applies [`mutate_one`] to a fixed share of
//!   distinct individuals
//!
//! Mutation is strictly additive. Combined with a fitness function that
//! zeroes overweight packings, this pushes the search towards dense but
//! feasible selections.
//!
//! # References
//!
//! - De Jong (1975), *An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems* (multi-point crossover)
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use super::types::Chromosome;
use rand::seq::index;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::warn;

/// Number of cut points used by [`three_point_crossover`].
pub const CROSSOVER_POINTS: usize = 3;

// ============================================================================
// Crossover operators
// ============================================================================

/// Three-point crossover.
///
/// Picks three distinct cut points `p0 < p1 < p2` uniformly from
/// `0..len` and builds
///
/// ```text
/// child1 = a[..p0] + b[p0..p1] + a[p1..p2] + b[p2..]
/// child2 = b[..p0] + a[p0..p1] + b[p1..p2] + a[p2..]
/// ```
///
/// Children are not checked for feasibility.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or fewer than
/// [`CROSSOVER_POINTS`] genes.
pub fn three_point_crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");
    assert!(
        n >= CROSSOVER_POINTS,
        "three-point crossover needs at least {CROSSOVER_POINTS} genes, got {n}"
    );

    let mut cuts = index::sample(rng, n, CROSSOVER_POINTS).into_vec();
    cuts.sort_unstable();

    (
        Chromosome::from(splice(a.genes(), b.genes(), &cuts)),
        Chromosome::from(splice(b.genes(), a.genes(), &cuts)),
    )
}

/// Builds a child that switches source parent at every cut point.
///
/// Gene `i` comes from `primary` when an even number of cuts are `<= i`,
/// otherwise from `secondary`.
fn splice(primary: &[bool], secondary: &[bool], cuts: &[usize]) -> Vec<bool> {
    let mut next_cut = 0;
    (0..primary.len())
        .map(|i| {
            while next_cut < cuts.len() && cuts[next_cut] <= i {
                next_cut += 1;
            }
            if next_cut % 2 == 0 {
                primary[i]
            } else {
                secondary[i]
            }
        })
        .collect()
}

/// Crosses every individual exactly once with a random partner.
///
/// Pairs are formed by shuffling the indices and taking them two at a time.
/// Each pair yields two children, so the output has the same size as the
/// input.
///
/// # Panics
/// Panics if `individuals` has odd length, or under the conditions of
/// [`three_point_crossover`].
pub fn cross_population<R: Rng>(individuals: &[Chromosome], rng: &mut R) -> Vec<Chromosome> {
    assert!(
        individuals.len() % 2 == 0,
        "crossover pairing needs an even number of individuals, got {}",
        individuals.len()
    );

    let mut order: Vec<usize> = (0..individuals.len()).collect();
    order.shuffle(rng);

    let mut children = Vec::with_capacity(individuals.len());
    for pair in order.chunks_exact(2) {
        let (c1, c2) = three_point_crossover(&individuals[pair[0]], &individuals[pair[1]], rng);
        children.push(c1);
        children.push(c2);
    }
    children
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Sets one uniformly chosen unset gene.
///
/// Returns `false`, leaving the chromosome untouched, if every gene is
/// already set.
///
/// # Complexity
/// O(n)
pub fn mutate_one<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) -> bool {
    let unset: Vec<usize> = chromosome
        .genes()
        .iter()
        .enumerate()
        .filter_map(|(i, &g)| (!g).then_some(i))
        .collect();

    match unset.choose(rng) {
        Some(&i) => {
            chromosome.genes_mut()[i] = true;
            true
        }
        None => false,
    }
}

/// Mutates a share of distinct individuals in place.
///
/// The number of individuals is `len × proportion` rounded half-to-even and
/// capped at `len`. Returns how many individuals actually changed
/// (saturated ones cannot).
pub fn mutate_population<R: Rng>(
    population: &mut [Chromosome],
    proportion: f64,
    rng: &mut R,
) -> usize {
    let len = population.len();
    let count = mutation_count(len, proportion);

    let mut changed = 0;
    for i in index::sample(rng, len, count) {
        if mutate_one(&mut population[i], rng) {
            changed += 1;
        } else {
            warn!(individual = i, "saturated individual cannot be mutated");
        }
    }
    changed
}

/// `len × proportion`, rounded half-to-even, within `0..=len`.
fn mutation_count(len: usize, proportion: f64) -> usize {
    let raw = (len as f64 * proportion).round_ties_even();
    if raw.is_nan() || raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn zeros(n: usize) -> Chromosome {
        Chromosome::new(n)
    }

    fn ones(n: usize) -> Chromosome {
        Chromosome::from(vec![true; n])
    }

    /// Number of positions where consecutive genes differ.
    fn switches(c: &Chromosome) -> usize {
        c.genes().windows(2).filter(|w| w[0] != w[1]).count()
    }

    // ---- Crossover ----

    #[test]
    fn test_splice_segments() {
        let a = [false; 8];
        let b = [true; 8];
        let child = splice(&a, &b, &[2, 4, 6]);
        assert_eq!(
            child,
            vec![false, false, true, true, false, false, true, true]
        );
        let child = splice(&b, &a, &[2, 4, 6]);
        assert_eq!(
            child,
            vec![true, true, false, false, true, true, false, false]
        );
    }

    #[test]
    fn test_splice_cut_at_zero() {
        let a = [false; 5];
        let b = [true; 5];
        // First span is empty: the child starts with the second parent.
        let child = splice(&a, &b, &[0, 1, 3]);
        assert_eq!(child, vec![true, false, false, true, true]);
    }

    #[test]
    fn test_crossover_children_alternate_four_spans() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = zeros(20);
        let b = ones(20);
        for _ in 0..200 {
            let (c1, c2) = three_point_crossover(&a, &b, &mut rng);
            assert_eq!(c1.len(), 20);
            assert_eq!(c2.len(), 20);
            assert!(switches(&c1) <= CROSSOVER_POINTS);
            // Distinct cut points: both parents always contribute.
            assert!(c1.selected_count() > 0 && c1.selected_count() < 20);
            for i in 0..20 {
                assert_ne!(c1[i], c2[i], "children must be complementary at {i}");
            }
        }
    }

    #[test]
    fn test_crossover_minimum_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let (c1, c2) = three_point_crossover(&zeros(3), &ones(3), &mut rng);
        // Cuts are exactly 0, 1, 2.
        assert_eq!(c1.genes(), &[true, false, true]);
        assert_eq!(c2.genes(), &[false, true, false]);
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        three_point_crossover(&zeros(4), &zeros(5), &mut rng);
    }

    #[test]
    #[should_panic(expected = "at least 3 genes")]
    fn test_crossover_too_short_panics() {
        let mut rng = StdRng::seed_from_u64(1);
        three_point_crossover(&zeros(2), &zeros(2), &mut rng);
    }

    #[test]
    fn test_cross_population_pairs_everyone() {
        let mut rng = StdRng::seed_from_u64(42);
        // Each individual has a single distinct gene set; after crossing, the
        // multiset of set genes at every locus is preserved.
        let n = 10;
        let population: Vec<Chromosome> = (0..n)
            .map(|i| {
                let mut genes = vec![false; n];
                genes[i] = true;
                Chromosome::from(genes)
            })
            .collect();

        let children = cross_population(&population, &mut rng);
        assert_eq!(children.len(), n);
        for locus in 0..n {
            let set = children.iter().filter(|c| c[locus]).count();
            assert_eq!(set, 1, "locus {locus} must be inherited exactly once");
        }
    }

    #[test]
    fn test_cross_population_minimum_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let children = cross_population(&[zeros(4), ones(4)], &mut rng);
        assert_eq!(children.len(), 2);
    }

    #[test]
    #[should_panic(expected = "even number of individuals")]
    fn test_cross_population_odd_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        cross_population(&[zeros(4), zeros(4), zeros(4)], &mut rng);
    }

    proptest! {
        #[test]
        fn prop_crossover_inherits_from_parents(
            genes in proptest::collection::vec(any::<(bool, bool)>(), 3..64),
            seed in any::<u64>(),
        ) {
            let a = Chromosome::from(genes.iter().map(|g| g.0).collect::<Vec<_>>());
            let b = Chromosome::from(genes.iter().map(|g| g.1).collect::<Vec<_>>());
            let mut rng = StdRng::seed_from_u64(seed);

            let (c1, c2) = three_point_crossover(&a, &b, &mut rng);
            prop_assert_eq!(c1.len(), a.len());
            prop_assert_eq!(c2.len(), a.len());
            for i in 0..a.len() {
                let mut parents = [a[i], b[i]];
                let mut kids = [c1[i], c2[i]];
                parents.sort();
                kids.sort();
                prop_assert_eq!(parents, kids);
            }
        }
    }

    // ---- Mutation ----

    #[test]
    fn test_mutate_one_sets_exactly_one_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Chromosome::from(vec![true, false, false, true, false]);
        let before = c.clone();
        assert!(mutate_one(&mut c, &mut rng));
        assert_eq!(c.selected_count(), before.selected_count() + 1);
        for i in 0..c.len() {
            if before[i] {
                assert!(c[i], "mutation must never clear a gene");
            }
        }
    }

    #[test]
    fn test_mutate_one_saturated_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = ones(6);
        assert!(!mutate_one(&mut c, &mut rng));
        assert_eq!(c, ones(6));
    }

    #[test]
    fn test_mutate_one_last_free_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut c = Chromosome::from(vec![true, true, false, true]);
        assert!(mutate_one(&mut c, &mut rng));
        assert!(c.is_saturated());
    }

    #[test]
    fn test_mutation_count_rounding() {
        assert_eq!(mutation_count(200, 0.05), 10);
        assert_eq!(mutation_count(50, 0.05), 2); // 2.5 rounds to even
        assert_eq!(mutation_count(70, 0.05), 4); // 3.5 rounds to even
        assert_eq!(mutation_count(10, 0.0), 0);
        assert_eq!(mutation_count(10, 1.0), 10);
        assert_eq!(mutation_count(0, 0.5), 0);
    }

    #[test]
    fn test_mutate_population_touches_distinct_individuals() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = vec![zeros(10); 40];
        let changed = mutate_population(&mut population, 0.25, &mut rng);

        assert_eq!(changed, 10);
        let mutated: Vec<usize> = population.iter().map(|c| c.selected_count()).collect();
        assert_eq!(mutated.iter().filter(|&&k| k == 1).count(), 10);
        assert_eq!(mutated.iter().filter(|&&k| k == 0).count(), 30);
    }

    #[test]
    fn test_mutate_population_skips_saturated() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut population = vec![ones(5); 4];
        assert_eq!(mutate_population(&mut population, 1.0, &mut rng), 0);
        assert!(population.iter().all(|c| c.is_saturated()));
    }
}
