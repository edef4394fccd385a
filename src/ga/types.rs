//! Core trait definitions for the GA framework.
//!
//! [`Individual`] and [`GaProblem`] are the capability contract between the
//! evolutionary loop and a concrete solution type. There is no inheritance:
//! a solution type only has to say how it is created, scored, recombined and
//! perturbed.

use rand::Rng;
use std::cmp::Ordering;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better unless a caller explicitly asks for
/// maximization.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;

    /// Total order used for sorting; incomparable values compare equal.
    fn compare(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution carrying its own fitness.
///
/// The runner calls [`GaProblem::evaluate`] and stores the result via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type.
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Operators are pure: they read their parents and return freshly owned
/// offspring, so a parent stays valid for reuse in the next pairing.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel when the `parallel` feature is enabled.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, structurally valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces offspring by recombining two parents.
    ///
    /// The default implementation clones both parents (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone(), parent2.clone()]
    }

    /// Returns a mutated copy of an individual.
    ///
    /// The default implementation returns an unchanged clone.
    fn mutate<R: Rng>(&self, individual: &Self::Individual, _rng: &mut R) -> Self::Individual {
        individual.clone()
    }
}
