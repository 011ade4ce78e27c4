//! Strategy registry for name lookup.
//!
//! The `StrategyRegistry` maps names to factories. It is built by the caller
//! and passed explicitly into game setup; there is no process-wide registry.

use rustc_hash::FxHashMap;

use super::builtin::{FirstCard, RandomCard};
use super::Strategy;
use crate::core::GameRng;
use crate::error::GameError;

/// Builds a fresh strategy. Receives an RNG stream private to its seat.
pub type StrategyFactory = Box<dyn Fn(GameRng) -> Box<dyn Strategy>>;

/// Registry of strategy factories.
///
/// ## Example
///
/// ```
/// use sushi_arena::core::GameRng;
/// use sushi_arena::strategy::StrategyRegistry;
///
/// let registry = StrategyRegistry::with_builtins();
/// let strategy = registry.create("rand1", GameRng::new(1)).unwrap();
/// assert_eq!(strategy.name(), "rand1");
/// assert!(registry.create("nope", GameRng::new(1)).is_err());
/// ```
#[derive(Default)]
pub struct StrategyRegistry {
    factories: FxHashMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding `first` and `rand1`.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("first", |_| Box::new(FirstCard));
        registry.register("rand1", |rng| Box::new(RandomCard::new(rng)));
        registry
    }

    /// Register a factory under `name`.
    ///
    /// Panics if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(GameRng) -> Box<dyn Strategy> + 'static,
    ) {
        let name = name.into();
        if self.factories.contains_key(&name) {
            panic!("Strategy '{}' already registered", name);
        }
        self.factories.insert(name, Box::new(factory));
    }

    /// Build the strategy registered under `name`.
    pub fn create(&self, name: &str, rng: GameRng) -> Result<Box<dyn Strategy>, GameError> {
        self.factories
            .get(name)
            .map(|factory| factory(rng))
            .ok_or_else(|| GameError::UnknownStrategy(name.to_string()))
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("names", &self.names())
            .finish()
    }
}
