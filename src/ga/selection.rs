//! Parent selection strategies.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::seq::index;
use rand::Rng;

/// Default tournament size.
pub const TOURNAMENT_SIZE: usize = 4;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_league::ga::{Selection, TOURNAMENT_SIZE};
///
/// assert_eq!(Selection::default(), Selection::Tournament(TOURNAMENT_SIZE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Sample `k` distinct individuals uniformly and return the best.
    ///
    /// `k` is clamped to `1..=population.len()`.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear ranking over a worst-first ordering.
    ///
    /// The population is sorted by fitness descending and given ranks
    /// `1..=n` in that order; an individual is drawn with probability
    /// proportional to its rank. Under minimization the best individual
    /// sorts last and receives weight `n`.
    ///
    /// The maximization flag is not consulted: the ordering is always
    /// descending by raw fitness.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Ranking,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(TOURNAMENT_SIZE)
    }
}

impl Selection {
    /// Selects a parent and returns its index in `population`.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_index<I: Individual, R: Rng>(
        &self,
        population: &[I],
        maximization: bool,
        rng: &mut R,
    ) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, maximization, rng),
            Selection::Ranking => ranking(population, rng),
        }
    }

    /// Selects a parent and returns an independent copy of it.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(
        &self,
        population: &[I],
        maximization: bool,
        rng: &mut R,
    ) -> I {
        population[self.select_index(population, maximization, rng)].clone()
    }
}

/// Selects one individual from the population with the given strategy.
///
/// Free-function form of [`Selection::select`].
pub fn select<I: Individual, R: Rng>(
    population: &[I],
    strategy: Selection,
    maximization: bool,
    rng: &mut R,
) -> I {
    strategy.select(population, maximization, rng)
}

/// Tournament without replacement; ties go to the earlier sampled member.
fn tournament<I: Individual, R: Rng>(
    population: &[I],
    k: usize,
    maximization: bool,
    rng: &mut R,
) -> usize {
    let n = population.len();
    let k = k.clamp(1, n);

    let sample = index::sample(rng, n, k);
    let mut iter = sample.iter();
    let mut best = iter.next().unwrap_or(0);
    for idx in iter {
        let candidate = population[idx].fitness();
        let incumbent = population[best].fitness();
        let better = if maximization {
            candidate > incumbent
        } else {
            candidate < incumbent
        };
        if better {
            best = idx;
        }
    }
    best
}

/// Rank-proportional draw over a worst-first (descending) ordering.
fn ranking<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[b].fitness().compare(&population[a].fitness()));

    // weight of the i-th entry in `order` is i + 1
    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (i, &idx) in order.iter().enumerate() {
        cumulative += (i + 1) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1] // floating-point fallback
}
