//! Runtime-selectable genetic operators for leagues.
//!
//! [`LeagueOperators`] bundles one crossover and one mutation strategy so a
//! driver can switch operators through configuration without touching the
//! problem definition.
//!
//! ```
//! use u_league::ga::{CrossoverStrategy, LeagueOperators, MutationStrategy};
//!
//! let ops = LeagueOperators::default();
//! assert_eq!(ops.crossover, CrossoverStrategy::SinglePoint);
//! assert_eq!(ops.mutation, MutationStrategy::PlayerSwap);
//! ```

use super::crossover::{crossover, CrossoverStrategy};
use super::mutation::{mutate, MutationStrategy};
use crate::catalog::PlayerCatalog;
use crate::error::{LeagueError, Result};
use crate::league::League;
use rand::Rng;

/// Crossover and mutation strategy pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeagueOperators {
    /// Crossover strategy.
    pub crossover: CrossoverStrategy,
    /// Mutation strategy.
    pub mutation: MutationStrategy,
}

impl LeagueOperators {
    /// Creates an operator pair.
    pub fn new(crossover: CrossoverStrategy, mutation: MutationStrategy) -> Self {
        Self {
            crossover,
            mutation,
        }
    }

    /// Checks the strategies for contradictory settings.
    ///
    /// # Errors
    /// [`LeagueError::InvalidConfiguration`] if a position-set crossover
    /// names the same position twice.
    pub fn validate(&self) -> Result<()> {
        if let CrossoverStrategy::PositionSet {
            keep: Some([a, b]),
        } = self.crossover
        {
            if a == b {
                return Err(LeagueError::InvalidConfiguration(format!(
                    "position-set crossover keeps {a} twice"
                )));
            }
        }
        Ok(())
    }

    /// Performs crossover using the configured strategy.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &League,
        parent2: &League,
        catalog: &PlayerCatalog,
        rng: &mut R,
    ) -> Result<(League, League)> {
        crossover(parent1, parent2, catalog, self.crossover, rng)
    }

    /// Performs mutation using the configured strategy.
    pub fn mutate<R: Rng>(&self, parent: &League, rng: &mut R) -> League {
        mutate(parent, self.mutation, rng)
    }
}
