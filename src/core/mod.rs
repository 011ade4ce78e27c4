//! Core engine types: players, RNG, configuration, state and views.

pub mod player;
pub mod rng;
pub mod config;
pub mod record;
pub mod state;
pub mod view;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, ROUNDS};
pub use record::{Play, PlayRecord};
pub use state::GameState;
pub use view::GameView;
