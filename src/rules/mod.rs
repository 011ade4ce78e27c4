//! Scoring rules.
//!
//! The engine never interprets card values directly: it hands played piles
//! and pudding counts to a `Scorer` and adds the returned deltas.

pub mod scoring;

pub use scoring::{Scorer, SushiGoScorer, MAKI_FIRST, MAKI_SECOND, PUDDING_BONUS, PUDDING_PENALTY};
