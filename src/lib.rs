//! Genetic-algorithm league balancing.
//!
//! Partitions a fixed pool of players into five seven-player teams
//! (1 GK, 2 DEF, 2 MID, 2 FWD) whose average skills are as equal as
//! possible while every team stays under a salary cap.
//!
//! - **`catalog`**: Read-only player table — ids, positions, skills, salaries
//! - **`league`**: Candidate representation — teams of player ids by slot
//! - **`initializer`**: Random valid league construction
//! - **`fitness`**: Skill-balance score with salary-cap penalty
//! - **`validation`**: Bijection and slot-position checks
//! - **`ga`**: Crossover (with repair), mutation and selection operators,
//!   plus a minimal evolutionary loop
//!
//! Every operator takes its random generator explicitly, so a fixed seed
//! (see [`random::create_rng`]) reproduces a run exactly.
//!
//! # Quick start
//!
//! ```
//! use u_league::catalog::{Player, PlayerCatalog};
//! use u_league::league::SLOT_SCHEMA;
//! use u_league::random::create_rng;
//! use u_league::{evaluate_fitness, initialize, validate};
//!
//! let players = (0..35)
//!     .map(|id| Player::new(id, format!("P{id}"), SLOT_SCHEMA[id % 7], 60.0, 100.0))
//!     .collect();
//! let catalog = PlayerCatalog::new(players).unwrap();
//!
//! let league = initialize(&catalog, &mut create_rng(42)).unwrap();
//! assert!(validate(&league, &catalog));
//! assert_eq!(evaluate_fitness(&league, &catalog), 0.0);
//! ```

pub mod catalog;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod initializer;
pub mod league;
pub mod random;
pub mod validation;

pub use catalog::{Player, PlayerCatalog, PlayerId, Position};
pub use error::LeagueError;
pub use fitness::{evaluate_fitness, INFEASIBLE_FITNESS, SALARY_CAP};
pub use initializer::initialize;
pub use league::{League, Team};
pub use validation::{check_league, validate, LeagueViolation};
