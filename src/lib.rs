//! # sushi-arena
//!
//! Simulates games of Sushi Go between automated strategies.
//!
//! ## Game flow
//!
//! Three rounds. Each round every player is dealt a hand sized by player
//! count. On each turn all players pick a card at once, reveal, then pass
//! the rest of their hand to the next seat. When hands run out the played
//! cards are scored and discarded. Pudding is tallied across the game and
//! scored once at the end.
//!
//! ## Design
//!
//! - **Simultaneous play**: every strategy sees a view of the same pre-turn
//!   state; plays are applied together, then hands pass in one step.
//! - **Hidden hands**: on a round's first turn, opponents' hands show only
//!   their size.
//! - **Deterministic**: a seed fixes the deck and every strategy's RNG.
//! - **Injected collaborators**: strategies, deck source and scoring rules
//!   are traits handed to `SushiGameBuilder`; there is no global registry.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, state and views
//! - `cards`: card kinds, deck composition, dealing
//! - `rules`: round and pudding scoring
//! - `strategy`: the `Strategy` trait, built-ins and the registry
//! - `engine`: turn resolver, round engine, game engine
//!
//! ## Example
//!
//! ```
//! use sushi_arena::{GameConfig, StrategyRegistry, SushiGameBuilder};
//!
//! let registry = StrategyRegistry::with_builtins();
//! let game = SushiGameBuilder::new(GameConfig::default().with_seed(7))
//!     .build_from_registry(&registry, &["first", "rand1", "rand1"])
//!     .unwrap();
//!
//! let outcome = game.play().unwrap();
//! assert_eq!(outcome.scores().len(), 3);
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, GameView, Play, PlayRecord, PlayerId, PlayerMap, ROUNDS};

pub use crate::cards::{Card, Deck, DeckComposition, DeckProvider, FixedDeck, ShuffledDeck};

pub use crate::engine::{GameOutcome, GameResult, RoundEngine, SushiGame, SushiGameBuilder, TurnResolver};

pub use crate::error::GameError;

pub use crate::rules::{Scorer, SushiGoScorer};

pub use crate::strategy::{FirstCard, RandomCard, Strategy, StrategyRegistry};
