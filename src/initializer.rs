//! Random league construction.

use crate::catalog::{PlayerCatalog, PlayerId, Position};
use crate::error::{LeagueError, Result};
use crate::league::{role_slots, League, Team, TEAM_COUNT, TEAM_SIZE};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Builds a random league from the catalog.
///
/// Teams are filled one at a time. For each team the still-unassigned players
/// are bucketed by position and the required number per position is sampled
/// uniformly without replacement, so every id is used at most once.
///
/// If the catalog holds exactly the players for [`TEAM_COUNT`] teams the
/// result satisfies the bijection invariant by construction.
///
/// # Errors
/// [`LeagueError::InsufficientPlayers`] if a position bucket is short for the
/// team being built.
pub fn initialize<R: Rng>(catalog: &PlayerCatalog, rng: &mut R) -> Result<League> {
    let mut available: Vec<PlayerId> = catalog.ids().to_vec();
    available.shuffle(rng);

    let mut teams = Vec::with_capacity(TEAM_COUNT);
    for team_idx in 0..TEAM_COUNT {
        let mut buckets: [Vec<PlayerId>; 4] = Default::default();
        for &id in &available {
            if let Some(position) = catalog.position_of(id) {
                buckets[position.index()].push(id);
            }
        }

        for position in Position::ALL {
            let required = position.slots_per_team();
            let bucket = &buckets[position.index()];
            if bucket.len() < required {
                return Err(LeagueError::InsufficientPlayers {
                    team: team_idx,
                    position,
                    required,
                    available: bucket.len(),
                });
            }
        }

        let mut slots = vec![PlayerId::MAX; TEAM_SIZE];
        for position in Position::ALL {
            let bucket = &buckets[position.index()];
            let chosen = index::sample(rng, bucket.len(), position.slots_per_team());
            for (&slot, pick) in role_slots(position).iter().zip(chosen.iter()) {
                slots[slot] = bucket[pick];
            }
        }

        available.retain(|id| !slots.contains(id));
        teams.push(Team::new(slots));
    }

    log::debug!("initialized league with {} unassigned players left", available.len());
    Ok(League::new(teams))
}
