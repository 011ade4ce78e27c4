//! Player strategies.
//!
//! A strategy looks at a `GameView` and returns the card(s) it plays this
//! turn. Strategies are trait objects so a game can seat any mix of them.
//!
//! - `FirstCard`: always plays the first card in hand
//! - `RandomCard`: plays a uniformly random card from hand
//! - `StrategyRegistry`: name → factory map passed into game setup

pub mod builtin;
pub mod registry;

pub use builtin::{FirstCard, RandomCard};
pub use registry::{StrategyFactory, StrategyRegistry};

use crate::core::{GameView, Play};

/// Chooses plays for one seat.
///
/// ## Contract
///
/// - Return exactly one card, or two when holding chopsticks.
/// - Every returned card must be in `view.my_hand()`.
/// - Do not keep references into the view; it is discarded after the call.
///
/// Breaking the contract aborts the game with a `GameError`.
pub trait Strategy {
    /// Pick this turn's play.
    fn play_turn(&mut self, view: &GameView) -> Play;

    /// Name used in logs and results.
    fn name(&self) -> &str;
}
