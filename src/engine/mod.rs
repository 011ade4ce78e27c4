//! Game simulation.
//!
//! - `TurnResolver`: shows each strategy its view and validates the play
//! - `RoundEngine`: deals, runs turns, applies plays, passes hands, scores
//! - `SushiGame`: three rounds followed by pudding scoring

pub mod game;
pub mod resolver;
pub mod round;

pub use game::{GameOutcome, GameResult, SushiGame, SushiGameBuilder};
pub use resolver::{validate_play, TurnResolver};
pub use round::{apply_turn, score_round, RoundEngine};
