//! Headless simulation.
//!
//! Plays complete games without a presentation layer, for balancing board
//! tables and for smoke-testing the engine over many random games.
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::Board;
//! use snakes_ladders::sim::{simulate_batch, SimConfig};
//!
//! let stats = simulate_batch(&Board::standard(), &SimConfig::new().with_games(20)).unwrap();
//! assert_eq!(stats.games, 20);
//! ```

pub mod runner;
pub mod stats;

pub use runner::{play_out, simulate_batch, SimConfig};
pub use stats::{BatchStats, GameRecord};
