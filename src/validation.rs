//! Structural validation of leagues.
//!
//! Checks, in order, stopping at the first failing category:
//!
//! 1. The set of occupants equals the catalog's id set (no missing, no unknown ids)
//! 2. No id occupies more than one slot
//! 3. The league has [`TEAM_COUNT`] teams of [`TEAM_SIZE`] slots
//! 4. Every occupant plays the position its slot requires

use crate::catalog::{PlayerCatalog, PlayerId, Position};
use crate::league::{League, SLOT_SCHEMA, TEAM_COUNT, TEAM_SIZE};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// The first structural problem found in a league.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueViolation {
    /// Catalog players that occupy no slot.
    #[error("missing players: {0:?}")]
    MissingPlayers(Vec<PlayerId>),

    /// Occupants that are not in the catalog.
    #[error("unknown players found: {0:?}")]
    UnknownPlayers(Vec<PlayerId>),

    /// Players occupying more than one slot.
    #[error("duplicated players: {0:?}")]
    DuplicatePlayers(Vec<PlayerId>),

    /// Wrong number of teams.
    #[error("league has {actual} teams, expected {expected}")]
    WrongTeamCount {
        /// Required team count.
        expected: usize,
        /// Teams present.
        actual: usize,
    },

    /// A team with the wrong number of slots.
    #[error("team {team} has invalid size {actual}, expected {expected}")]
    WrongTeamSize {
        /// Team index.
        team: usize,
        /// Required slot count.
        expected: usize,
        /// Slots present.
        actual: usize,
    },

    /// A player sitting in a slot for another position.
    #[error("team {team}, player {player} in slot {slot} expected {expected}, got {actual}")]
    PositionMismatch {
        /// Team index.
        team: usize,
        /// Slot index within the team.
        slot: usize,
        /// The misplaced player.
        player: PlayerId,
        /// Position the slot requires.
        expected: Position,
        /// The player's catalog position.
        actual: Position,
    },
}

/// Returns the first violation found, or `Ok(())` for a valid league.
pub fn check_league(league: &League, catalog: &PlayerCatalog) -> Result<(), LeagueViolation> {
    let mut counts: HashMap<PlayerId, usize> = HashMap::new();
    for id in league.player_ids() {
        *counts.entry(id).or_insert(0) += 1;
    }

    let missing: Vec<PlayerId> = catalog
        .ids()
        .iter()
        .copied()
        .filter(|id| !counts.contains_key(id))
        .collect();
    let unknown: BTreeSet<PlayerId> = counts
        .keys()
        .copied()
        .filter(|&id| !catalog.contains(id))
        .collect();

    if !missing.is_empty() {
        if !unknown.is_empty() {
            log::warn!("unknown players found: {unknown:?}");
        }
        return Err(LeagueViolation::MissingPlayers(missing));
    }
    if !unknown.is_empty() {
        return Err(LeagueViolation::UnknownPlayers(unknown.into_iter().collect()));
    }

    let duplicates: BTreeSet<PlayerId> = counts
        .iter()
        .filter(|&(_, &c)| c > 1)
        .map(|(&id, _)| id)
        .collect();
    if !duplicates.is_empty() {
        return Err(LeagueViolation::DuplicatePlayers(
            duplicates.into_iter().collect(),
        ));
    }

    if league.team_count() != TEAM_COUNT {
        return Err(LeagueViolation::WrongTeamCount {
            expected: TEAM_COUNT,
            actual: league.team_count(),
        });
    }

    for (team_idx, team) in league.teams().iter().enumerate() {
        if team.len() != TEAM_SIZE {
            return Err(LeagueViolation::WrongTeamSize {
                team: team_idx,
                expected: TEAM_SIZE,
                actual: team.len(),
            });
        }
        for (slot, (&player, &expected)) in
            team.players().iter().zip(SLOT_SCHEMA.iter()).enumerate()
        {
            // Every occupant is known at this point.
            let Some(actual) = catalog.position_of(player) else {
                continue;
            };
            if actual != expected {
                return Err(LeagueViolation::PositionMismatch {
                    team: team_idx,
                    slot,
                    player,
                    expected,
                    actual,
                });
            }
        }
    }

    Ok(())
}

/// Returns `true` if the league is valid.
///
/// The reason for a failure is logged at `warn` level; it is not part of
/// the return value. Use [`check_league`] to inspect it programmatically.
pub fn validate(league: &League, catalog: &PlayerCatalog) -> bool {
    match check_league(league, catalog) {
        Ok(()) => {
            log::debug!("league is valid");
            true
        }
        Err(violation) => {
            log::warn!("invalid league: {violation}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;

    /// Team `t` gets GK `t`, DEF `5+2t..`, MID `15+2t..`, FWD `25+2t..`.
    fn ordered_league() -> League {
        League::from_ids(
            (0..5)
                .map(|t| {
                    vec![
                        t,
                        5 + 2 * t,
                        6 + 2 * t,
                        15 + 2 * t,
                        16 + 2 * t,
                        25 + 2 * t,
                        26 + 2 * t,
                    ]
                })
                .collect(),
        )
    }

    #[test]
    fn test_valid_league() {
        let catalog = sample_catalog();
        let league = ordered_league();
        assert_eq!(check_league(&league, &catalog), Ok(()));
        assert!(validate(&league, &catalog));
    }

    #[test]
    fn test_missing_player() {
        let catalog = sample_catalog();
        let mut league = ordered_league();
        // DEF 5 replaced by DEF 7: 5 missing, 7 duplicated.
        league.teams_mut()[0].players_mut()[1] = 7;
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::MissingPlayers(vec![5]))
        );
        assert!(!validate(&league, &catalog));
    }

    #[test]
    fn test_unknown_player() {
        let catalog = sample_catalog();
        let mut teams: Vec<Vec<PlayerId>> = ordered_league()
            .teams()
            .iter()
            .map(|t| t.players().to_vec())
            .collect();
        teams[4].push(99);
        let league = League::from_ids(teams);
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::UnknownPlayers(vec![99]))
        );
    }

    #[test]
    fn test_duplicate_player() {
        let catalog = sample_catalog();
        let mut teams: Vec<Vec<PlayerId>> = ordered_league()
            .teams()
            .iter()
            .map(|t| t.players().to_vec())
            .collect();
        teams[0].push(0);
        let league = League::from_ids(teams);
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::DuplicatePlayers(vec![0]))
        );
    }

    #[test]
    fn test_wrong_team_count() {
        let catalog = sample_catalog();
        let mut teams: Vec<Vec<PlayerId>> = ordered_league()
            .teams()
            .iter()
            .map(|t| t.players().to_vec())
            .collect();
        let last = teams.pop().unwrap();
        teams[0].extend(last);
        let league = League::from_ids(teams);
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::WrongTeamCount {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_wrong_team_size() {
        let catalog = sample_catalog();
        let mut teams: Vec<Vec<PlayerId>> = ordered_league()
            .teams()
            .iter()
            .map(|t| t.players().to_vec())
            .collect();
        let moved = teams[1].pop().unwrap();
        teams[2].push(moved);
        let league = League::from_ids(teams);
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::WrongTeamSize {
                team: 1,
                expected: 7,
                actual: 6
            })
        );
    }

    #[test]
    fn test_position_mismatch_reports_first() {
        let catalog = sample_catalog();
        let mut league = ordered_league();
        // Swap team 3's GK (3) with its first MID (21).
        league.teams_mut()[3].players_mut().swap(0, 3);
        assert_eq!(
            check_league(&league, &catalog),
            Err(LeagueViolation::PositionMismatch {
                team: 3,
                slot: 0,
                player: 21,
                expected: Position::GK,
                actual: Position::MID,
            })
        );
    }

    #[test]
    fn test_violation_messages() {
        let v = LeagueViolation::WrongTeamSize {
            team: 2,
            expected: 7,
            actual: 6,
        };
        assert_eq!(v.to_string(), "team 2 has invalid size 6, expected 7");
    }
}
