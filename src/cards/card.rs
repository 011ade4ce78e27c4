//! Card kinds.
//!
//! Cards are not unique instances: only the kind matters to the rules, so
//! hands and piles are multisets of `Card` values.

use serde::{Deserialize, Serialize};

/// A card kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Tempura,
    Sashimi,
    Dumpling,
    /// Maki roll showing one icon.
    Maki1,
    /// Maki roll showing two icons.
    Maki2,
    /// Maki roll showing three icons.
    Maki3,
    Salmon,
    Squid,
    Egg,
    Pudding,
    Wasabi,
    Chopsticks,
    /// Face-down placeholder. Only ever appears in a masked view.
    Hidden,
}

impl Card {
    /// Every playable kind, in declaration order. Excludes `Hidden`.
    pub const PLAYABLE: [Card; 12] = [
        Card::Tempura,
        Card::Sashimi,
        Card::Dumpling,
        Card::Maki1,
        Card::Maki2,
        Card::Maki3,
        Card::Salmon,
        Card::Squid,
        Card::Egg,
        Card::Pudding,
        Card::Wasabi,
        Card::Chopsticks,
    ];

    /// Number of maki icons printed on the card.
    #[must_use]
    pub const fn maki_icons(self) -> u32 {
        match self {
            Card::Maki1 => 1,
            Card::Maki2 => 2,
            Card::Maki3 => 3,
            _ => 0,
        }
    }

    /// Base value of a nigiri, `None` for anything else.
    #[must_use]
    pub const fn nigiri_value(self) -> Option<i32> {
        match self {
            Card::Egg => Some(1),
            Card::Salmon => Some(2),
            Card::Squid => Some(3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Card::Hidden)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::Tempura => "Tempura",
            Card::Sashimi => "Sashimi",
            Card::Dumpling => "Dumpling",
            Card::Maki1 => "Maki (1)",
            Card::Maki2 => "Maki (2)",
            Card::Maki3 => "Maki (3)",
            Card::Salmon => "Salmon Nigiri",
            Card::Squid => "Squid Nigiri",
            Card::Egg => "Egg Nigiri",
            Card::Pudding => "Pudding",
            Card::Wasabi => "Wasabi",
            Card::Chopsticks => "Chopsticks",
            Card::Hidden => "??",
        };
        f.write_str(name)
    }
}

/// Remove one copy of each card in `cards` from `hand`.
///
/// Quantity-aware: playing two Tempura needs two Tempura in hand. On
/// failure returns the first card that could not be removed and leaves
/// `hand` partially modified, so callers validate against a copy.
pub fn remove_cards(hand: &mut Vec<Card>, cards: &[Card]) -> Result<(), Card> {
    for &card in cards {
        match hand.iter().position(|&c| c == card) {
            Some(pos) => {
                hand.remove(pos);
            }
            None => return Err(card),
        }
    }
    Ok(())
}
