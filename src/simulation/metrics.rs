use crate::domain::model::level::PriceLevel;
use crate::domain::model::metrics::LadderMetrics;
use crate::simulation::params::RewardParams;
use crate::simulation::rewards::monthly_reward;

/// Summary metrics for a scored ladder, measured against its marker mid.
///
/// Returns `None` for degenerate ladders: no marker, a non-positive mid, or
/// a side with no levels. The host is expected to show "n/a" rather than
/// fabricated figures in that case.
pub fn ladder_metrics(ladder: &[PriceLevel], rewards: &RewardParams) -> Option<LadderMetrics> {
    let mid = ladder
        .iter()
        .find(|level| level.is_mid_marker)
        .map(|level| level.price)?;
    if !(mid > 0.0) {
        return None;
    }

    let bids: Vec<&PriceLevel> = ladder
        .iter()
        .filter(|l| !l.is_mid_marker && l.price < mid)
        .collect();
    let asks: Vec<&PriceLevel> = ladder
        .iter()
        .filter(|l| !l.is_mid_marker && l.price > mid)
        .collect();
    if bids.is_empty() || asks.is_empty() {
        return None;
    }

    let best_bid = bids.iter().map(|l| l.price).fold(f64::MIN, f64::max);
    let best_ask = asks.iter().map(|l| l.price).fold(f64::MAX, f64::min);
    let spread = best_ask - best_bid;

    let bid_depth: f64 = bids.iter().map(|l| l.quantity).sum();
    let ask_depth: f64 = asks.iter().map(|l| l.quantity).sum();
    let depth = bid_depth + ask_depth;
    let imbalance = if depth > 0.0 {
        (bid_depth - ask_depth) / depth
    } else {
        0.0
    };

    let tobe_sum: f64 = ladder
        .iter()
        .filter(|l| !l.is_mid_marker)
        .map(|l| l.score)
        .sum();

    Some(LadderMetrics {
        spread,
        spread_bps: spread / mid * 10_000.0,
        bid_depth,
        ask_depth,
        imbalance,
        tobe_sum,
        monthly_rewards: monthly_reward(tobe_sum, rewards),
    })
}
