//! League representation.
//!
//! A [`League`] is one candidate solution: an ordered list of teams, each an
//! ordered list of player ids whose slot index fixes the required position
//! through [`SLOT_SCHEMA`].
//!
//! The type does not enforce the bijection or position invariants; operators
//! preserve them and [`crate::validation`] checks them.

use crate::catalog::{PlayerId, Position};
use std::fmt;

/// Number of teams in a league.
pub const TEAM_COUNT: usize = 5;

/// Number of slots in a team.
pub const TEAM_SIZE: usize = 7;

/// Required position for each slot index.
pub const SLOT_SCHEMA: [Position; TEAM_SIZE] = [
    Position::GK,
    Position::DEF,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::FWD,
    Position::FWD,
];

/// Slot indices occupied by a position (its role group).
///
/// GK → `[0]`, DEF → `[1, 2]`, MID → `[3, 4]`, FWD → `[5, 6]`.
pub fn role_slots(position: Position) -> &'static [usize] {
    match position {
        Position::GK => &[0],
        Position::DEF => &[1, 2],
        Position::MID => &[3, 4],
        Position::FWD => &[5, 6],
    }
}

/// One team: player ids by slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    players: Vec<PlayerId>,
}

impl Team {
    /// Creates a team from ids in slot order.
    pub fn new(players: Vec<PlayerId>) -> Self {
        Self { players }
    }

    /// Player ids in slot order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Mutable access to the slots.
    pub fn players_mut(&mut self) -> &mut [PlayerId] {
        &mut self.players
    }

    /// Occupant of a slot.
    pub fn get(&self, slot: usize) -> Option<PlayerId> {
        self.players.get(slot).copied()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the team has no slots.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<Vec<PlayerId>> for Team {
    fn from(players: Vec<PlayerId>) -> Self {
        Self::new(players)
    }
}

/// A candidate partition of the catalog into teams.
///
/// Cloning a league deep-copies every team, so offspring never alias their
/// parents.
///
/// ```
/// use u_league::league::League;
///
/// let league = League::from_ids(vec![vec![0, 1, 2], vec![3, 4, 5]]);
/// assert_eq!(league.team_count(), 2);
/// assert_eq!(league.player_ids().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct League {
    teams: Vec<Team>,
}

impl League {
    /// Creates a league from teams.
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    /// Creates a league from nested id lists.
    pub fn from_ids(teams: Vec<Vec<PlayerId>>) -> Self {
        Self::new(teams.into_iter().map(Team::new).collect())
    }

    /// Teams in order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Mutable access to the teams.
    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Every occupant, team-major then slot-minor.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.teams.iter().flat_map(|t| t.players().iter().copied())
    }

    /// Occupants of the given slots across all teams, in team order.
    ///
    /// Slots a team does not have are skipped.
    pub fn collect_slots(&self, slots: &[usize]) -> Vec<PlayerId> {
        self.slot_targets(slots)
            .into_iter()
            .map(|(t, s)| self.teams[t].players[s])
            .collect()
    }

    /// Writes `ids` back into the given slots, in the order produced by
    /// [`collect_slots`](Self::collect_slots).
    ///
    /// # Panics
    /// Panics if `ids` does not have one entry per slot that
    /// [`collect_slots`](Self::collect_slots) would return.
    pub fn write_slots(&mut self, slots: &[usize], ids: &[PlayerId]) {
        let targets = self.slot_targets(slots);
        assert_eq!(ids.len(), targets.len(), "slot write length mismatch");
        for ((t, s), &id) in targets.into_iter().zip(ids) {
            self.teams[t].players[s] = id;
        }
    }

    /// `(team, slot)` pairs for the slots each team actually has.
    fn slot_targets(&self, slots: &[usize]) -> Vec<(usize, usize)> {
        self.teams
            .iter()
            .enumerate()
            .flat_map(|(t, team)| {
                slots
                    .iter()
                    .copied()
                    .filter(move |&s| s < team.len())
                    .map(move |s| (t, s))
            })
            .collect()
    }

    /// Consumes the league, returning its teams.
    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, team) in self.teams.iter().enumerate() {
            writeln!(f, "team {i}: {:?}", team.players())?;
        }
        Ok(())
    }
}
