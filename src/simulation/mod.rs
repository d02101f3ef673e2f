//! Orderbook layering and scoring engine.
//!
//! Pure, synchronous computations only: a ladder snapshot and the layer
//! lists go in, a freshly built scored ladder comes out. No I/O, no shared
//! state, and identical inputs always produce identical output.

pub mod ladder;
pub mod layering;
pub mod metrics;
pub mod params;
pub mod rewards;
pub mod scoring;

pub use ladder::{insert, round_to_tick, sort_descending};
pub use layering::apply_layers;
pub use metrics::ladder_metrics;
pub use params::{EngineParams, RewardParams, ScoringParams};
pub use rewards::monthly_reward;
pub use scoring::{level_score, price_score};
