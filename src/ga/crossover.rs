//! League crossover operators.
//!
//! Both strategies take two parents by reference and return two freshly
//! owned offspring. Splicing whole teams breaks the bijection between
//! catalog and slots, so single-point crossover always runs [`repair`].
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap team tails at a random split, then repair
//! - [`position_set_crossover`]: keep two positions from one parent, the rest
//!   from the other

use crate::catalog::{PlayerCatalog, PlayerId, Position};
use crate::error::{LeagueError, Result};
use crate::league::{League, Team, SLOT_SCHEMA};
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

/// Crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverStrategy {
    /// Single split point along the team sequence, followed by repair.
    #[default]
    SinglePoint,
    /// Keep two positions verbatim from the primary parent.
    ///
    /// `None` picks two distinct positions at random per call.
    PositionSet {
        /// Positions copied from the primary parent.
        keep: Option<[Position; 2]>,
    },
}

/// Recombines two parents with the given strategy.
///
/// # Errors
/// [`LeagueError::InvalidConfiguration`] if a position-set crossover names
/// the same position twice.
///
/// # Panics
/// Panics if the parents have different team counts.
pub fn crossover<R: Rng>(
    parent1: &League,
    parent2: &League,
    catalog: &PlayerCatalog,
    strategy: CrossoverStrategy,
    rng: &mut R,
) -> Result<(League, League)> {
    match strategy {
        CrossoverStrategy::SinglePoint => {
            Ok(single_point_crossover(parent1, parent2, catalog, rng))
        }
        CrossoverStrategy::PositionSet { keep } => {
            position_set_crossover(parent1, parent2, catalog, keep, rng)
        }
    }
}

// ============================================================================
// Single-point crossover + repair
// ============================================================================

/// Single-point crossover on the team sequence, with repair.
///
/// A split `k` is drawn from `1..team_count`. Offspring A takes parent1's
/// teams before `k` and parent2's from `k` on; offspring B is the
/// complement. Each offspring is then repaired independently.
///
/// # Panics
/// Panics if the parents have different team counts.
pub fn single_point_crossover<R: Rng>(
    parent1: &League,
    parent2: &League,
    catalog: &PlayerCatalog,
    rng: &mut R,
) -> (League, League) {
    let n = parent1.team_count();
    assert_eq!(n, parent2.team_count(), "parents must have equal team count");
    if n < 2 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.random_range(1..n);
    log::debug!("single-point crossover at team index {point}");

    let splice = |head: &League, tail: &League| -> League {
        let teams: Vec<Team> = head.teams()[..point]
            .iter()
            .chain(tail.teams()[point..].iter())
            .cloned()
            .collect();
        League::new(teams)
    };

    let child1 = repair(splice(parent1, parent2), catalog, rng);
    let child2 = repair(splice(parent2, parent1), catalog, rng);
    (child1, child2)
}

/// Restores the bijection invariant after splicing.
///
/// Catalog players absent from the league are pooled by position and each
/// pool is shuffled. Slots are then walked team-major, slot-minor: the first
/// occurrence of an id stays, and every later occurrence (or an id unknown to
/// the catalog) is replaced by a player popped from the pool of the slot's
/// required position.
///
/// If that pool is empty the occupant is kept. This cannot happen when the
/// league's positions are slot-consistent, and otherwise shows up as a
/// validation failure rather than an error.
pub fn repair<R: Rng>(mut offspring: League, catalog: &PlayerCatalog, rng: &mut R) -> League {
    let present: HashSet<PlayerId> = offspring.player_ids().collect();

    let mut pools: [Vec<PlayerId>; 4] = Default::default();
    for &id in catalog.ids() {
        if present.contains(&id) {
            continue;
        }
        if let Some(position) = catalog.position_of(id) {
            pools[position.index()].push(id);
        }
    }
    for pool in &mut pools {
        pool.shuffle(rng);
    }

    let mut placed: HashSet<PlayerId> = HashSet::with_capacity(present.len());
    for (team_idx, team) in offspring.teams_mut().iter_mut().enumerate() {
        for (slot, occupant) in team.players_mut().iter_mut().enumerate() {
            let conflicting = placed.contains(&*occupant) || !catalog.contains(*occupant);
            if conflicting {
                match SLOT_SCHEMA
                    .get(slot)
                    .and_then(|position| pools[position.index()].pop())
                {
                    Some(replacement) => {
                        log::debug!(
                            "repair: team {team_idx} slot {slot}: {occupant} -> {replacement}"
                        );
                        *occupant = replacement;
                    }
                    None => {
                        log::debug!(
                            "repair: team {team_idx} slot {slot}: pool empty, keeping {occupant}"
                        );
                    }
                }
            }
            placed.insert(*occupant);
        }
    }

    offspring
}

// ============================================================================
// Position-set crossover
// ============================================================================

/// "Keep two positions" crossover.
///
/// For each team index, slots of the kept positions are copied from the
/// primary parent. The remaining slots take the first unused player of the
/// right position from the secondary parent's team at the same index, and
/// as a last resort the first unused player of that position in catalog
/// order. Offspring A uses parent1 as primary; offspring B swaps the roles.
///
/// With valid parents every position category comes wholly from one parent,
/// so both offspring are valid.
///
/// # Errors
/// [`LeagueError::InvalidConfiguration`] if `keep` names one position twice.
///
/// # Panics
/// Panics if the parents have different team counts.
pub fn position_set_crossover<R: Rng>(
    parent1: &League,
    parent2: &League,
    catalog: &PlayerCatalog,
    keep: Option<[Position; 2]>,
    rng: &mut R,
) -> Result<(League, League)> {
    assert_eq!(
        parent1.team_count(),
        parent2.team_count(),
        "parents must have equal team count"
    );

    let keep = match keep {
        Some([a, b]) if a == b => {
            return Err(LeagueError::InvalidConfiguration(format!(
                "position-set crossover needs two distinct positions, got {a} twice"
            )));
        }
        Some(keep) => keep,
        None => {
            let picks = index::sample(rng, Position::ALL.len(), 2);
            [Position::ALL[picks.index(0)], Position::ALL[picks.index(1)]]
        }
    };
    log::debug!("position-set crossover keeping {} and {}", keep[0], keep[1]);

    Ok((
        keep_positions_child(parent1, parent2, catalog, &keep),
        keep_positions_child(parent2, parent1, catalog, &keep),
    ))
}

/// Builds one position-set child from `primary` and `secondary`.
fn keep_positions_child(
    primary: &League,
    secondary: &League,
    catalog: &PlayerCatalog,
    keep: &[Position; 2],
) -> League {
    let teams = primary
        .teams()
        .iter()
        .zip(secondary.teams())
        .map(|(primary_team, secondary_team)| {
            let mut used: HashSet<PlayerId> = HashSet::new();
            let mut slots: Vec<Option<PlayerId>> = vec![None; SLOT_SCHEMA.len()];

            // 1. Kept positions from the primary parent
            for (slot, position) in SLOT_SCHEMA.iter().enumerate() {
                if !keep.contains(position) {
                    continue;
                }
                if let Some(id) = primary_team.get(slot) {
                    if used.insert(id) {
                        slots[slot] = Some(id);
                    }
                }
            }

            // 2. Remaining positions from the secondary parent's team
            for (slot, &position) in SLOT_SCHEMA.iter().enumerate() {
                if slots[slot].is_some() || keep.contains(&position) {
                    continue;
                }
                let found = secondary_team
                    .players()
                    .iter()
                    .copied()
                    .find(|id| catalog.position_of(*id) == Some(position) && !used.contains(id));
                if let Some(id) = found {
                    used.insert(id);
                    slots[slot] = Some(id);
                }
            }

            // 3. Anything still open from the catalog
            for (slot, &position) in SLOT_SCHEMA.iter().enumerate() {
                if slots[slot].is_some() {
                    continue;
                }
                let found = catalog
                    .ids_by_position(position)
                    .iter()
                    .copied()
                    .find(|id| !used.contains(id));
                if let Some(id) = found {
                    used.insert(id);
                    slots[slot] = Some(id);
                }
            }

            let players = slots
                .into_iter()
                .enumerate()
                .filter_map(|(slot, id)| id.or_else(|| primary_team.get(slot)))
                .collect();
            Team::new(players)
        })
        .collect();

    League::new(teams)
}

// ============================================================================
// Tests
// ============================================================================
