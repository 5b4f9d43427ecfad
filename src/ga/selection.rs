//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use rand::seq::index;
use rand::Rng;

/// Picks `size` distinct candidates uniformly at random and returns the
/// fittest of them.
///
/// Ties go to whichever tied candidate was sampled first. A `size` larger
/// than the population is reduced to the population size.
///
/// # Complexity
/// O(size) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<'a, R: Rng + ?Sized>(
    population: &'a [Candidate],
    size: usize,
    rng: &mut R,
) -> &'a Candidate {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = size.clamp(1, population.len());
    index::sample(rng, population.len(), k)
        .into_iter()
        .map(|i| &population[i])
        .min_by_key(|candidate| candidate.fitness)
        .expect("tournament samples at least one candidate")
}
