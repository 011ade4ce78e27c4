//! Cards and the draw pile.
//!
//! - `Card`: the closed set of card kinds, plus the `Hidden` placeholder
//! - `Deck`: an ordered draw pile with value-semantics `draw`
//! - `deal` / `hand_size`: per-round hands sized by player count

pub mod card;
pub mod deck;

pub use card::{remove_cards, Card};
pub use deck::{
    deal, hand_size, shuffle_new_deck, Deck, DeckComposition, DeckProvider, FixedDeck, ShuffledDeck,
    MAX_PLAYERS, MIN_PLAYERS,
};
