//! Genetic Algorithm for league balancing.
//!
//! A small trait-based GA framework plus the league-specific operators that
//! plug into it. The operators are usable on their own; [`GaRunner`] is a
//! minimal driver for evolving a population end to end.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`LeagueProblem`]: [`GaProblem`] implementation over a player catalog
//! - [`LeagueOperators`]: Runtime-selectable crossover/mutation pair
//!
//! # Submodules
//!
//! - [`crossover`]: Single-point crossover with repair, position-set crossover
//! - [`mutation`]: Player swap, role shuffle, role left-shift
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod crossover;
pub mod mutation;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use crossover::{crossover, CrossoverStrategy};
pub use mutation::{mutate, MutationStrategy};
pub use operators::LeagueOperators;
pub use problem::{LeagueProblem, LeagueSolution};
pub use runner::{GaResult, GaRunner};
pub use selection::{select, Selection, TOURNAMENT_SIZE};
pub use types::{Fitness, GaProblem, Individual};
