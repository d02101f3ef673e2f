use serde::{Deserialize, Serialize};

/// One entry in an order book ladder.
///
/// A ladder is kept sorted by price descending and carries at most one
/// mid-price marker: a zero-quantity pseudo-entry denoting the reference
/// price that level distances are measured from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: f64,
    pub quantity: f64,

    /// TOBE: the decay-weighted reward-eligibility metric for this level.
    /// Always 0 for the mid-price marker.
    #[serde(default)]
    pub score: f64,

    #[serde(default, rename = "isMidMarker")]
    pub is_mid_marker: bool,

    /// Set on entries inserted by the layering engine. Only used for
    /// downstream highlighting; no computation depends on it.
    #[serde(default, rename = "isSynthetic")]
    pub is_synthetic: bool,
}

impl PriceLevel {
    /// A real resting order from the feed.
    pub fn new(price: f64, quantity: f64) -> Self {
        Self {
            price,
            quantity,
            score: 0.0,
            is_mid_marker: false,
            is_synthetic: false,
        }
    }

    /// The mid-price pivot, not a real order.
    pub fn mid_marker(price: f64) -> Self {
        Self {
            price,
            quantity: 0.0,
            score: 0.0,
            is_mid_marker: true,
            is_synthetic: false,
        }
    }

    /// A level created by the layering engine.
    pub fn synthetic(price: f64, quantity: f64) -> Self {
        Self {
            price,
            quantity,
            score: 0.0,
            is_mid_marker: false,
            is_synthetic: true,
        }
    }
}
