//! League GA problem definition.
//!
//! Binds the league operators to the generic [`GaProblem`] contract so the
//! [`GaRunner`](super::GaRunner) can evolve leagues.

use super::operators::LeagueOperators;
use super::types::{Fitness, GaProblem, Individual};
use crate::catalog::PlayerCatalog;
use crate::error::Result;
use crate::fitness::evaluate_fitness;
use crate::initializer::initialize;
use crate::league::{League, TEAM_COUNT};
use rand::Rng;

/// A league together with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSolution {
    /// The candidate league.
    pub league: League,
    /// Cached fitness; [`f64::worst`](Fitness::worst) until evaluated.
    pub fitness: f64,
}

impl LeagueSolution {
    /// Wraps an unevaluated league.
    pub fn new(league: League) -> Self {
        Self {
            league,
            fitness: f64::worst(),
        }
    }

    /// Wraps a league and scores it against the catalog.
    pub fn evaluated(league: League, catalog: &PlayerCatalog) -> Self {
        let fitness = evaluate_fitness(&league, catalog);
        Self { league, fitness }
    }
}

impl Individual for LeagueSolution {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// GA problem for balancing a league over a fixed catalog.
///
/// # Example
/// ```
/// use u_league::catalog::{Player, PlayerCatalog};
/// use u_league::ga::{GaConfig, GaRunner, LeagueProblem};
/// use u_league::league::SLOT_SCHEMA;
///
/// let players = (0..35)
///     .map(|id| {
///         let position = SLOT_SCHEMA[id % 7];
///         Player::new(id, format!("P{id}"), position, 50.0 + id as f64, 100.0)
///     })
///     .collect();
/// let catalog = PlayerCatalog::new(players).unwrap();
///
/// let problem = LeagueProblem::new(&catalog).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(1);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(u_league::validate(&result.best.league, &catalog));
/// ```
#[derive(Debug, Clone)]
pub struct LeagueProblem<'a> {
    catalog: &'a PlayerCatalog,
    operators: LeagueOperators,
}

impl<'a> LeagueProblem<'a> {
    /// Creates a problem with the default operators.
    ///
    /// # Errors
    /// Fails if the catalog cannot fill exactly [`TEAM_COUNT`] teams.
    pub fn new(catalog: &'a PlayerCatalog) -> Result<Self> {
        catalog.check_formation(TEAM_COUNT)?;
        Ok(Self {
            catalog,
            operators: LeagueOperators::default(),
        })
    }

    /// Replaces the operator pair.
    ///
    /// # Errors
    /// [`LeagueError::InvalidConfiguration`](crate::LeagueError::InvalidConfiguration)
    /// if the operators are misconfigured.
    pub fn with_operators(mut self, operators: LeagueOperators) -> Result<Self> {
        operators.validate()?;
        self.operators = operators;
        Ok(self)
    }

    /// The catalog this problem draws from.
    pub fn catalog(&self) -> &PlayerCatalog {
        self.catalog
    }

    /// The configured operators.
    pub fn operators(&self) -> LeagueOperators {
        self.operators
    }
}

impl GaProblem for LeagueProblem<'_> {
    type Individual = LeagueSolution;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> LeagueSolution {
        let league = initialize(self.catalog, rng)
            .expect("catalog formation checked in LeagueProblem::new");
        LeagueSolution::new(league)
    }

    fn evaluate(&self, individual: &LeagueSolution) -> f64 {
        evaluate_fitness(&individual.league, self.catalog)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &LeagueSolution,
        parent2: &LeagueSolution,
        rng: &mut R,
    ) -> Vec<LeagueSolution> {
        match self
            .operators
            .crossover(&parent1.league, &parent2.league, self.catalog, rng)
        {
            Ok((a, b)) => vec![LeagueSolution::new(a), LeagueSolution::new(b)],
            Err(err) => {
                log::warn!("crossover failed, keeping parents: {err}");
                vec![parent1.clone(), parent2.clone()]
            }
        }
    }

    fn mutate<R: Rng>(&self, individual: &LeagueSolution, rng: &mut R) -> LeagueSolution {
        LeagueSolution::new(self.operators.mutate(&individual.league, rng))
    }
}
