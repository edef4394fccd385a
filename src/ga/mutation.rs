//! League mutation operators.
//!
//! Every operator reads one league and returns a mutated copy; the input is
//! never modified. All moves permute players within one role group, so the
//! bijection and slot-position invariants carry over from the input.
//!
//! # Mutation Operators
//!
//! - [`player_swap_mutation`]: swap one slot between two teams — O(1)
//! - [`role_shuffle_mutation`]: shuffle a whole role group across teams — O(teams)
//! - [`role_left_shift_mutation`]: rotate a role group across teams — O(teams)

use crate::catalog::Position;
use crate::league::{role_slots, League, SLOT_SCHEMA, TEAM_SIZE};
use rand::seq::{index, SliceRandom};
use rand::Rng;

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationStrategy {
    /// Swap the occupants of one slot index between two teams.
    #[default]
    PlayerSwap,
    /// Shuffle all occupants of one role group across teams.
    RoleShuffle,
    /// Cyclically rotate one role group left across teams.
    RoleLeftShift,
}

/// Returns a mutated copy of `parent` using the given strategy.
pub fn mutate<R: Rng>(parent: &League, strategy: MutationStrategy, rng: &mut R) -> League {
    match strategy {
        MutationStrategy::PlayerSwap => player_swap_mutation(parent, rng),
        MutationStrategy::RoleShuffle => role_shuffle_mutation(parent, rng),
        MutationStrategy::RoleLeftShift => role_left_shift_mutation(parent, rng),
    }
}

/// Swaps the players at one random slot index between two distinct teams.
///
/// The slot index fixes the position, so both players share it.
pub fn player_swap_mutation<R: Rng>(parent: &League, rng: &mut R) -> League {
    let mut mutated = parent.clone();
    let n = mutated.team_count();
    if n < 2 {
        return mutated;
    }

    let slot = rng.random_range(0..TEAM_SIZE);
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));

    let teams = mutated.teams_mut();
    let (Some(pa), Some(pb)) = (teams[a].get(slot), teams[b].get(slot)) else {
        return mutated;
    };
    log::debug!("swapping player {pa} (team {a}) with player {pb} (team {b}) at slot {slot}");
    teams[a].players_mut()[slot] = pb;
    teams[b].players_mut()[slot] = pa;

    mutated
}

/// Shuffles every occupant of a random role group across all teams.
///
/// The group is chosen by drawing a slot in `0..TEAM_SIZE` and taking its
/// position, so larger groups are proportionally more likely.
pub fn role_shuffle_mutation<R: Rng>(parent: &League, rng: &mut R) -> League {
    let mut mutated = parent.clone();
    let position = random_role(rng);
    let slots = role_slots(position);
    log::debug!("shuffling role {position} (slots {slots:?})");

    let mut pool = mutated.collect_slots(slots);
    pool.shuffle(rng);
    mutated.write_slots(slots, &pool);

    mutated
}

/// Rotates a random role group left by `1..team_count` places.
///
/// Occupants are read in team order, rotated, and written back in the same
/// order.
pub fn role_left_shift_mutation<R: Rng>(parent: &League, rng: &mut R) -> League {
    let mut mutated = parent.clone();
    let n = mutated.team_count();
    let position = random_role(rng);
    if n < 2 {
        return mutated;
    }
    let slots = role_slots(position);

    let mut pool = mutated.collect_slots(slots);
    if pool.is_empty() {
        return mutated;
    }
    let shift = rng.random_range(1..n) % pool.len();
    log::debug!("shifting role {position} (slots {slots:?}) left by {shift}");
    pool.rotate_left(shift);
    mutated.write_slots(slots, &pool);

    mutated
}

/// Picks a role group via a uniform slot draw.
fn random_role<R: Rng>(rng: &mut R) -> Position {
    SLOT_SCHEMA[rng.random_range(0..TEAM_SIZE)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_catalog;
    use crate::initializer::initialize;
    use crate::random::create_rng;
    use crate::validation::validate;
    use std::collections::BTreeSet;

    /// Five teams where team 2 lost its forwards.
    fn short_league() -> League {
        let mut teams: Vec<Vec<usize>> = (0..5)
            .map(|t| (0..7).map(|s| t * 7 + s).collect())
            .collect();
        teams[2].truncate(5);
        League::from_ids(teams)
    }

    /// `(team, slot)` pairs where the two leagues differ.
    fn diff(a: &League, b: &League) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (t, (ta, tb)) in a.teams().iter().zip(b.teams()).enumerate() {
            for (s, (pa, pb)) in ta.players().iter().zip(tb.players()).enumerate() {
                if pa != pb {
                    out.push((t, s));
                }
            }
        }
        out
    }

    #[test]
    fn test_player_swap_changes_two_slots() {
        let catalog = sample_catalog();
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let parent = initialize(&catalog, &mut rng).unwrap();
            let child = player_swap_mutation(&parent, &mut rng);

            let changed = diff(&parent, &child);
            assert_eq!(changed.len(), 2, "changed: {changed:?}");
            let ((t1, s1), (t2, s2)) = (changed[0], changed[1]);
            assert_ne!(t1, t2);
            assert_eq!(s1, s2);
            assert_eq!(child.teams()[t1].get(s1), parent.teams()[t2].get(s2));
            assert_eq!(child.teams()[t2].get(s2), parent.teams()[t1].get(s1));
            assert!(validate(&child, &catalog));
        }
    }

    #[test]
    fn test_role_shuffle_permutes_one_group() {
        let catalog = sample_catalog();
        let mut rng = create_rng(7);
        for _ in 0..100 {
            let parent = initialize(&catalog, &mut rng).unwrap();
            let child = role_shuffle_mutation(&parent, &mut rng);

            let changed_slots: BTreeSet<usize> =
                diff(&parent, &child).into_iter().map(|(_, s)| s).collect();
            let positions: BTreeSet<Position> =
                changed_slots.iter().map(|&s| SLOT_SCHEMA[s]).collect();
            assert!(positions.len() <= 1, "touched several roles: {positions:?}");

            for position in Position::ALL {
                let slots = role_slots(position);
                let before: BTreeSet<_> = parent.collect_slots(slots).into_iter().collect();
                let after: BTreeSet<_> = child.collect_slots(slots).into_iter().collect();
                assert_eq!(before, after);
            }
            assert!(validate(&child, &catalog));
        }
    }

    #[test]
    fn test_role_left_shift_is_rotation() {
        let catalog = sample_catalog();
        let mut rng = create_rng(13);
        for _ in 0..100 {
            let parent = initialize(&catalog, &mut rng).unwrap();
            let child = role_left_shift_mutation(&parent, &mut rng);

            let changed = diff(&parent, &child);
            assert!(!changed.is_empty(), "a shift of 1..5 always moves players");
            let position = SLOT_SCHEMA[changed[0].1];
            let slots = role_slots(position);

            let before = parent.collect_slots(slots);
            let after = child.collect_slots(slots);
            let rotated = (1..5).any(|k| {
                let mut expected = before.clone();
                expected.rotate_left(k);
                expected == after
            });
            assert!(rotated, "{before:?} -> {after:?} is not a left rotation by 1..5");

            for other in Position::ALL.into_iter().filter(|&p| p != position) {
                let s = role_slots(other);
                assert_eq!(parent.collect_slots(s), child.collect_slots(s));
            }
            assert!(validate(&child, &catalog));
        }
    }

    #[test]
    fn test_parent_untouched() {
        let catalog = sample_catalog();
        let mut rng = create_rng(3);
        let parent = initialize(&catalog, &mut rng).unwrap();
        let snapshot = parent.clone();
        for strategy in [
            MutationStrategy::PlayerSwap,
            MutationStrategy::RoleShuffle,
            MutationStrategy::RoleLeftShift,
        ] {
            let child = mutate(&parent, strategy, &mut rng);
            assert!(validate(&child, &catalog));
            assert_eq!(parent, snapshot);
        }
    }

    #[test]
    fn test_mutation_is_seed_deterministic() {
        let catalog = sample_catalog();
        let parent = initialize(&catalog, &mut create_rng(1)).unwrap();
        for strategy in [
            MutationStrategy::PlayerSwap,
            MutationStrategy::RoleShuffle,
            MutationStrategy::RoleLeftShift,
        ] {
            let a = mutate(&parent, strategy, &mut create_rng(99));
            let b = mutate(&parent, strategy, &mut create_rng(99));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_single_team_league_is_unchanged() {
        let league = League::from_ids(vec![vec![0, 1, 2, 3, 4, 5, 6]]);
        let mut rng = create_rng(5);
        assert_eq!(player_swap_mutation(&league, &mut rng), league);
        assert_eq!(role_left_shift_mutation(&league, &mut rng), league);
    }

    #[test]
    fn test_role_mutations_tolerate_short_team() {
        let parent = short_league();
        let mut rng = create_rng(21);
        for _ in 0..50 {
            for child in [
                role_shuffle_mutation(&parent, &mut rng),
                role_left_shift_mutation(&parent, &mut rng),
                player_swap_mutation(&parent, &mut rng),
            ] {
                assert_eq!(child.teams()[2].len(), 5);
                let mut before: Vec<_> = parent.player_ids().collect();
                let mut after: Vec<_> = child.player_ids().collect();
                before.sort_unstable();
                after.sort_unstable();
                assert_eq!(before, after);
            }
        }
    }
}
