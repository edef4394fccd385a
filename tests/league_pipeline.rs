//! End-to-end scenarios over a 35-player catalog.

use std::collections::HashSet;
use u_league::catalog::{Player, PlayerCatalog, Position};
use u_league::ga::{
    CrossoverStrategy, GaConfig, GaRunner, LeagueOperators, LeagueProblem, MutationStrategy,
    Selection,
};
use u_league::league::{TEAM_COUNT, TEAM_SIZE};
use u_league::random::create_rng;
use u_league::{evaluate_fitness, initialize, validate, INFEASIBLE_FITNESS};

/// 5 GK, 10 DEF, 10 MID, 10 FWD with ids 0..35, numbered in that order.
fn catalog() -> PlayerCatalog {
    let mut records = Vec::new();
    for i in 0..35usize {
        let position = match i {
            0..=4 => Position::GK,
            5..=14 => Position::DEF,
            15..=24 => Position::MID,
            _ => Position::FWD,
        };
        let skill = 55.0 + ((i * 11) % 35) as f64;
        let salary = 85.0 + ((i * 7) % 30) as f64;
        records.push((format!("Player {i}"), position, skill, salary));
    }
    PlayerCatalog::from_records(records)
}

#[test]
fn initializer_covers_every_player_once() {
    let catalog = catalog();
    let league = initialize(&catalog, &mut create_rng(2024)).unwrap();

    assert_eq!(league.team_count(), TEAM_COUNT);
    for team in league.teams() {
        assert_eq!(team.len(), TEAM_SIZE);
    }
    assert!(validate(&league, &catalog));

    let ids: Vec<_> = league.player_ids().collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), 35);
    assert_eq!(unique, (0..35).collect::<HashSet<_>>());
}

#[test]
fn catalog_records_are_numbered_by_position() {
    let catalog = catalog();
    assert_eq!(catalog.ids_by_position(Position::GK), &[0, 1, 2, 3, 4]);
    assert_eq!(catalog.ids_by_position(Position::FWD).len(), 10);
    assert_eq!(catalog.get(34).unwrap().name, "Player 34");
}

#[test]
fn ga_improves_on_random_leagues() {
    let catalog = catalog();
    let problem = LeagueProblem::new(&catalog)
        .unwrap()
        .with_operators(LeagueOperators::new(
            CrossoverStrategy::SinglePoint,
            MutationStrategy::RoleShuffle,
        ))
        .unwrap();
    let config = GaConfig::default()
        .with_population_size(40)
        .with_max_generations(60)
        .with_mutation_rate(0.4)
        .with_stagnation_limit(0)
        .with_seed(11);

    let result = GaRunner::run(&problem, &config).unwrap();

    assert!(validate(&result.best.league, &catalog));
    assert_eq!(
        result.best_fitness,
        evaluate_fitness(&result.best.league, &catalog)
    );
    let first = result.fitness_history[0];
    let last = *result.fitness_history.last().unwrap();
    assert!(last <= first);
}

#[test]
fn ga_with_position_set_and_ranking() {
    let catalog = catalog();
    let problem = LeagueProblem::new(&catalog)
        .unwrap()
        .with_operators(LeagueOperators::new(
            CrossoverStrategy::PositionSet {
                keep: Some([Position::GK, Position::FWD]),
            },
            MutationStrategy::RoleLeftShift,
        ))
        .unwrap();
    let config = GaConfig::default()
        .with_population_size(30)
        .with_max_generations(20)
        .with_selection(Selection::Ranking)
        .with_seed(5);

    let result = GaRunner::run(&problem, &config).unwrap();
    assert!(validate(&result.best.league, &catalog));
}

#[test]
fn over_cap_catalog_is_always_infeasible() {
    let players = (0..35)
        .map(|id| {
            let position = u_league::league::SLOT_SCHEMA[id % 7];
            Player::new(id, format!("P{id}"), position, 70.0, 200.0)
        })
        .collect();
    let catalog = PlayerCatalog::new(players).unwrap();
    let mut rng = create_rng(3);
    for _ in 0..10 {
        let league = initialize(&catalog, &mut rng).unwrap();
        assert_eq!(evaluate_fitness(&league, &catalog), INFEASIBLE_FITNESS);
    }
}
