//! Errors raised while setting up or simulating a game.
//!
//! Every variant is fatal to the game in progress: they signal a strategy
//! or setup contract violation, never a transient condition. Variants carry
//! enough context (player, attempted play, hand) to diagnose the failure
//! without replaying the game.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Errors produced by the dealer, the turn resolver and the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A strategy returned zero cards or more than two.
    #[error("{player} tried to play {} cards: {play:?}", .play.len())]
    InvalidPlayCount { player: PlayerId, play: Vec<Card> },

    /// A strategy returned two cards without holding chopsticks.
    #[error("{player} tried to play 2 cards without chopsticks: {play:?} with a hand of {hand:?}")]
    MissingChopsticks {
        player: PlayerId,
        play: Vec<Card>,
        hand: Vec<Card>,
    },

    /// A strategy returned a card its hand cannot supply.
    #[error("{player} tried to play {play:?} with a hand of {hand:?} ({card:?} is not available)")]
    IllegalCard {
        player: PlayerId,
        card: Card,
        play: Vec<Card>,
        hand: Vec<Card>,
    },

    /// The deck ran out before every hand could be dealt.
    #[error("deck has {available} cards but {needed} are required")]
    InsufficientCards { needed: usize, available: usize },

    /// Player count outside the supported 2-5 range.
    #[error("unsupported player count {0}, expected 2-5")]
    InvalidPlayerCount(usize),

    /// No strategy registered under the requested name.
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}
