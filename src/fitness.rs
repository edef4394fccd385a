//! League fitness: skill balance under a salary cap.
//!
//! Fitness is minimized. A balanced league scores the population standard
//! deviation of its per-team mean skills; a league with any team over the
//! salary cap scores [`INFEASIBLE_FITNESS`] so selection pressure removes it.

use crate::catalog::PlayerCatalog;
use crate::league::{League, Team};

/// Maximum total salary per team.
pub const SALARY_CAP: f64 = 750.0;

/// Fitness assigned to leagues that break the salary cap.
pub const INFEASIBLE_FITNESS: f64 = 1e9;

/// Aggregate figures for one team.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeamStats {
    /// Sum of player salaries.
    pub total_salary: f64,
    /// Mean player skill.
    pub mean_skill: f64,
}

/// Computes salary total and mean skill for a team.
///
/// Returns `None` if the team is empty or holds an id unknown to the catalog.
pub fn team_stats(team: &Team, catalog: &PlayerCatalog) -> Option<TeamStats> {
    if team.is_empty() {
        return None;
    }
    let mut total_salary = 0.0;
    let mut total_skill = 0.0;
    for &id in team.players() {
        let player = catalog.get(id)?;
        total_salary += player.salary;
        total_skill += player.skill;
    }
    Some(TeamStats {
        total_salary,
        mean_skill: total_skill / team.len() as f64,
    })
}

/// Scores a league. Lower is better.
///
/// Teams are scanned in order; the first team over [`SALARY_CAP`] ends the
/// scan with [`INFEASIBLE_FITNESS`]. Otherwise the result is the population
/// standard deviation of the per-team mean skills.
///
/// ```
/// use u_league::catalog::{Player, PlayerCatalog, Position};
/// use u_league::fitness::evaluate_fitness;
/// use u_league::league::League;
///
/// let catalog = PlayerCatalog::new(vec![
///     Player::new(0, "a", Position::GK, 60.0, 100.0),
///     Player::new(1, "b", Position::GK, 60.0, 100.0),
/// ]).unwrap();
/// let league = League::from_ids(vec![vec![0], vec![1]]);
/// assert_eq!(evaluate_fitness(&league, &catalog), 0.0);
/// ```
pub fn evaluate_fitness(league: &League, catalog: &PlayerCatalog) -> f64 {
    let mut means = Vec::with_capacity(league.team_count());

    for (team_idx, team) in league.teams().iter().enumerate() {
        let Some(stats) = team_stats(team, catalog) else {
            log::warn!("team {team_idx} is empty or references unknown players");
            return INFEASIBLE_FITNESS;
        };
        if stats.total_salary > SALARY_CAP {
            return INFEASIBLE_FITNESS;
        }
        means.push(stats.mean_skill);
    }

    population_std_dev(&means)
}

/// Population (ddof = 0) standard deviation; 0.0 for an empty slice.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
