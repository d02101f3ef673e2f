use serde::Serialize;

/// Summary figures derived from one ladder, relative to its marker mid.
#[derive(Clone, Debug, Serialize)]
pub struct LadderMetrics {
    pub spread: f64,
    pub spread_bps: f64,
    pub bid_depth: f64,
    pub ask_depth: f64,
    /// (bid_depth - ask_depth) / (bid_depth + ask_depth), in [-1, 1].
    pub imbalance: f64,
    /// Sum of TOBE over all non-marker levels.
    pub tobe_sum: f64,
    pub monthly_rewards: f64,
}
