//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//! Fitness is minimized throughout.

use super::config::GaConfig;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was terminated due to stagnation.
    pub stagnated: bool,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = LeagueProblem::new(&catalog)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// [`LeagueError::InvalidConfiguration`](crate::LeagueError::InvalidConfiguration)
    /// if `config` fails [`GaConfig::validate`].
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);
        log::info!(
            "GA start: population {}, max generations {}, seed {seed}",
            config.population_size,
            config.max_generations
        );

        // 1. Initialize and evaluate population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        // 2. Track best
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let elite_count = config.elite_count();
        let mut stagnation_counter = 0usize;
        let mut generations = 0usize;
        let mut stagnated = false;

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            population.sort_by(|a, b| a.fitness().compare(&b.fitness()));

            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = config.selection.select_index(&population, false, &mut rng);
                let p2 = config.selection.select_index(&population, false, &mut rng);

                let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1], &population[p2], &mut rng)
                } else {
                    vec![population[p1].clone(), population[p2].clone()]
                };

                for child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    let child = if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&child, &mut rng)
                    } else {
                        child
                    };
                    next_gen.push(child);
                }
            }

            // Elites keep their fitness
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);
            population = next_gen;
            generations = gen + 1;

            let gen_best = find_best(&population);
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            fitness_history.push(best.fitness().to_f64());
            log::debug!("generation {generations}: best {:?}", best.fitness());

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        log::info!(
            "GA finished after {generations} generations (stagnated: {stagnated}), best {:?}",
            best.fitness()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            stagnated,
            fitness_history,
        })
    }
}

#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| a.fitness().compare(&b.fitness()))
        .expect("population must not be empty")
}
