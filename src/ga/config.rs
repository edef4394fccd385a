//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{LeagueError, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_league::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_league::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_selection(Selection::Ranking)
///     .with_elite_ratio(0.1)
///     .with_mutation_rate(0.2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of leagues in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0).
    pub elite_ratio: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, clones of both parents are used.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Generations without improvement before stopping; 0 disables it.
    pub stagnation_limit: usize,

    /// Evaluate fitness with rayon. Only effective with the `parallel`
    /// feature.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            selection: Selection::default(),
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            stagnation_limit: 50,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites kept per generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`LeagueError::InvalidConfiguration`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        let invalid =
            |msg: &str| -> Result<()> { Err(LeagueError::InvalidConfiguration(msg.into())) };

        if self.population_size < 2 {
            return invalid("population_size must be at least 2");
        }
        if self.max_generations == 0 {
            return invalid("max_generations must be at least 1");
        }
        if self.elite_count() >= self.population_size {
            return invalid("elite_ratio too high: elites fill entire population");
        }
        if let Selection::Tournament(0) = self.selection {
            return invalid("tournament size must be at least 1");
        }
        Ok(())
    }
}
