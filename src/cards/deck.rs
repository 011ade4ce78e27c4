//! Deck composition, shuffling and dealing.
//!
//! The deck is a value: `draw` returns the drawn cards together with the
//! remaining deck instead of popping from a shared list.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{GameRng, PlayerMap};
use crate::error::GameError;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 5;

/// Cards dealt to each player at the start of a round.
///
/// Fails with `InvalidPlayerCount` outside 2-5 players.
pub fn hand_size(player_count: usize) -> Result<usize, GameError> {
    match player_count {
        2 => Ok(10),
        3 => Ok(9),
        4 => Ok(8),
        5 => Ok(7),
        n => Err(GameError::InvalidPlayerCount(n)),
    }
}

/// How many copies of each card kind go into a fresh deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    counts: Vec<(Card, usize)>,
}

impl Default for DeckComposition {
    /// The standard 108-card deck.
    fn default() -> Self {
        Self {
            counts: vec![
                (Card::Tempura, 14),
                (Card::Sashimi, 14),
                (Card::Dumpling, 14),
                (Card::Maki2, 12),
                (Card::Maki3, 8),
                (Card::Maki1, 6),
                (Card::Salmon, 10),
                (Card::Squid, 5),
                (Card::Egg, 5),
                (Card::Pudding, 10),
                (Card::Wasabi, 6),
                (Card::Chopsticks, 4),
            ],
        }
    }
}

impl DeckComposition {
    /// An empty composition, to be filled with `with`.
    #[must_use]
    pub fn empty() -> Self {
        Self { counts: Vec::new() }
    }

    /// Set the number of copies of `card`.
    ///
    /// Hidden placeholders are never part of a deck and are ignored.
    #[must_use]
    pub fn with(mut self, card: Card, count: usize) -> Self {
        if card.is_hidden() {
            return self;
        }
        match self.counts.iter_mut().find(|(c, _)| *c == card) {
            Some(entry) => entry.1 = count,
            None => self.counts.push((card, count)),
        }
        self
    }

    /// Copies of `card` in this composition.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == card)
            .map_or(0, |&(_, n)| n)
    }

    /// Total number of cards.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }

    /// Every card of the composition, unshuffled.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.counts
            .iter()
            .filter(|(card, _)| !card.is_hidden())
            .flat_map(|&(card, n)| std::iter::repeat(card).take(n))
            .collect()
    }
}

/// An ordered draw pile. Cards are drawn from the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A deck in exactly the given order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take `n` cards from the front.
    ///
    /// Returns the drawn cards and the remaining deck. Fails with
    /// `InsufficientCards` rather than drawing fewer than `n`.
    pub fn draw(mut self, n: usize) -> Result<(Vec<Card>, Deck), GameError> {
        if n > self.cards.len() {
            return Err(GameError::InsufficientCards {
                needed: n,
                available: self.cards.len(),
            });
        }
        let rest = self.cards.split_off(n);
        Ok((self.cards, Deck { cards: rest }))
    }
}

/// Build a freshly shuffled deck from `composition`.
///
/// Same composition and same RNG state give the same order.
#[must_use]
pub fn shuffle_new_deck(composition: &DeckComposition, rng: &mut GameRng) -> Deck {
    let mut cards = composition.cards();
    rng.shuffle(&mut cards);
    Deck::from_cards(cards)
}

/// Deal one hand per player, in seat order, from the front of the deck.
///
/// Checks the whole deal up front: either every player gets a full hand or
/// nothing is drawn and `InsufficientCards` is returned.
pub fn deal(deck: Deck, player_count: usize) -> Result<(PlayerMap<Vec<Card>>, Deck), GameError> {
    let size = hand_size(player_count)?;
    let needed = size * player_count;
    if deck.len() < needed {
        return Err(GameError::InsufficientCards {
            needed,
            available: deck.len(),
        });
    }

    let mut hands = Vec::with_capacity(player_count);
    let mut deck = deck;
    for _ in 0..player_count {
        let (hand, rest) = deck.draw(size)?;
        hands.push(hand);
        deck = rest;
    }
    Ok((PlayerMap::from_vec(hands), deck))
}

/// Source of a fresh deck for each game.
pub trait DeckProvider {
    /// A full deck in play order.
    fn shuffled_cards(&mut self) -> Deck;
}

/// Shuffles a composition with a seeded RNG.
#[derive(Clone, Debug)]
pub struct ShuffledDeck {
    composition: DeckComposition,
    rng: GameRng,
}

impl ShuffledDeck {
    #[must_use]
    pub fn new(composition: DeckComposition, rng: GameRng) -> Self {
        Self { composition, rng }
    }
}

impl DeckProvider for ShuffledDeck {
    fn shuffled_cards(&mut self) -> Deck {
        shuffle_new_deck(&self.composition, &mut self.rng)
    }
}

/// Always hands out the same scripted order.
#[derive(Clone, Debug)]
pub struct FixedDeck {
    cards: Vec<Card>,
}

impl FixedDeck {
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl DeckProvider for FixedDeck {
    fn shuffled_cards(&mut self) -> Deck {
        Deck::from_cards(self.cards.clone())
    }
}
