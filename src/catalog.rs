//! Player catalog.
//!
//! The catalog is the read-only player table every operator consults for
//! positions, skills and salaries. Operators never write to it; any
//! per-call bookkeeping (occurrence counts, team assignment) lives in local
//! maps.

use crate::error::{LeagueError, Result};
use crate::league::SLOT_SCHEMA;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Stable player identifier.
pub type PlayerId = usize;

/// Playing position of an athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    /// Goalkeeper.
    GK,
    /// Defender.
    DEF,
    /// Midfielder.
    MID,
    /// Forward.
    FWD,
}

impl Position {
    /// All positions in formation order.
    pub const ALL: [Position; 4] = [Position::GK, Position::DEF, Position::MID, Position::FWD];

    /// Index of this position within [`Position::ALL`].
    pub fn index(self) -> usize {
        match self {
            Position::GK => 0,
            Position::DEF => 1,
            Position::MID => 2,
            Position::FWD => 3,
        }
    }

    /// Short tag, e.g. `"GK"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }

    /// Number of slots this position occupies in one team.
    pub fn slots_per_team(self) -> usize {
        SLOT_SCHEMA.iter().filter(|&&p| p == self).count()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "GK" => Ok(Position::GK),
            "DEF" => Ok(Position::DEF),
            "MID" => Ok(Position::MID),
            "FWD" => Ok(Position::FWD),
            other => Err(LeagueError::InvalidConfiguration(format!(
                "unsupported position tag '{other}'"
            ))),
        }
    }
}

/// An athlete available for assignment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Playing position.
    pub position: Position,
    /// Skill rating.
    pub skill: f64,
    /// Salary (same unit as the salary cap).
    pub salary: f64,
}

impl Player {
    /// Creates a player.
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        position: Position,
        skill: f64,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            skill,
            salary,
        }
    }
}

/// Read-only table of all players.
///
/// # Examples
///
/// ```
/// use u_league::catalog::{PlayerCatalog, Position};
///
/// let catalog = PlayerCatalog::from_records(vec![
///     ("Silva".to_string(), Position::FWD, 80.0, 120.0),
///     ("Costa".to_string(), Position::GK, 75.0, 90.0),
/// ]);
/// // Goalkeepers are numbered first.
/// assert_eq!(catalog.position_of(0), Some(Position::GK));
/// assert_eq!(catalog.ids_by_position(Position::FWD), &[1]);
/// ```
#[derive(Debug, Clone)]
pub struct PlayerCatalog {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
    ids: Vec<PlayerId>,
    by_position: [Vec<PlayerId>; 4],
}

impl PlayerCatalog {
    /// Builds a catalog from players with explicit ids.
    ///
    /// Fails with [`LeagueError::InvalidConfiguration`] if two players share
    /// an id.
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let mut index = HashMap::with_capacity(players.len());
        let mut by_position: [Vec<PlayerId>; 4] = Default::default();

        for (i, player) in players.iter().enumerate() {
            if index.insert(player.id, i).is_some() {
                return Err(LeagueError::InvalidConfiguration(format!(
                    "duplicate player id {}",
                    player.id
                )));
            }
            by_position[player.position.index()].push(player.id);
        }

        let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        ids.sort_unstable();

        Ok(Self {
            players,
            index,
            ids,
            by_position,
        })
    }

    /// Builds a catalog from unnumbered `(name, position, skill, salary)`
    /// records.
    ///
    /// Records are stably sorted into formation order (GK, DEF, MID, FWD)
    /// and numbered `0..n` in that order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, Position, f64, f64)>,
    {
        let mut records: Vec<_> = records.into_iter().collect();
        records.sort_by_key(|r| r.1.index());

        let players = records
            .into_iter()
            .enumerate()
            .map(|(id, (name, position, skill, salary))| Player {
                id,
                name,
                position,
                skill,
                salary,
            })
            .collect();

        Self::new(players).expect("sequential ids are unique")
    }

    /// Looks up a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    /// Position of a player, if known.
    pub fn position_of(&self, id: PlayerId) -> Option<Position> {
        self.get(id).map(|p| p.position)
    }

    /// Returns `true` if the id belongs to a catalog player.
    pub fn contains(&self, id: PlayerId) -> bool {
        self.index.contains_key(&id)
    }

    /// All player ids, ascending.
    pub fn ids(&self) -> &[PlayerId] {
        &self.ids
    }

    /// Ids of all players at a position, in catalog order.
    pub fn ids_by_position(&self, position: Position) -> &[PlayerId] {
        &self.by_position[position.index()]
    }

    /// All players in catalog order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if the catalog has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Checks that the catalog fills exactly `team_count` teams.
    ///
    /// A short position bucket is [`LeagueError::InsufficientPlayers`]; a
    /// surplus is [`LeagueError::InvalidConfiguration`] because some player
    /// could never be assigned a slot.
    pub fn check_formation(&self, team_count: usize) -> Result<()> {
        for position in Position::ALL {
            let required = position.slots_per_team() * team_count;
            let available = self.ids_by_position(position).len();
            if available < required {
                let per_team = position.slots_per_team();
                return Err(LeagueError::InsufficientPlayers {
                    team: available / per_team,
                    position,
                    required: per_team,
                    available: available % per_team,
                });
            }
            if available > required {
                return Err(LeagueError::InvalidConfiguration(format!(
                    "{available} {position} players for {required} slots"
                )));
            }
        }
        Ok(())
    }
}

/// Test fixtures shared by unit tests across the crate.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// 35 players with ids 0..35: 5 GK, 10 DEF, 10 MID, 10 FWD.
    ///
    /// Salaries are 100 each, so every team totals 700 and stays under the cap.
    pub(crate) fn sample_catalog() -> PlayerCatalog {
        let players = (0..35)
            .map(|id| {
                let position = match id {
                    0..=4 => Position::GK,
                    5..=14 => Position::DEF,
                    15..=24 => Position::MID,
                    _ => Position::FWD,
                };
                let skill = 50.0 + ((id * 7) % 40) as f64;
                Player::new(id, format!("P{id}"), position, skill, 100.0)
            })
            .collect();
        PlayerCatalog::new(players).expect("fixture ids are unique")
    }
}
