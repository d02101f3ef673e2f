//! Read-only terminal rendering of ladders and their summary metrics.

use crate::domain::model::level::PriceLevel;
use crate::domain::model::metrics::LadderMetrics;
use crate::simulation::metrics::ladder_metrics;
use crate::simulation::params::RewardParams;

/// Render a ladder as a fixed-width table with its TOBE sum, monthly
/// rewards figure and summary metrics. Marker rows are tagged `(mid)` and
/// engine-inserted rows `*`.
pub fn render_ladder(title: &str, ladder: &[PriceLevel], rewards: &RewardParams) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", title));
    out.push_str(&format!(
        "{:>14}  {:>10}  {:>12}\n",
        "Price", "Quantity", "TOBE"
    ));

    for level in ladder {
        if level.is_mid_marker {
            out.push_str(&format!("{:>14.3}  {:>10}  {:>12}  (mid)\n", level.price, "-", "-"));
        } else {
            let tag = if level.is_synthetic { "  *" } else { "" };
            out.push_str(&format!(
                "{:>14.3}  {:>10.4}  {:>12.6}{}\n",
                level.price, level.quantity, level.score, tag
            ));
        }
    }

    match ladder_metrics(ladder, rewards) {
        Some(metrics) => {
            out.push_str(&format!(
                "TOBE sum: {:.6} | Monthly rewards: {:.2}\n",
                metrics.tobe_sum, metrics.monthly_rewards
            ));
            out.push_str(&render_metrics(&metrics));
        }
        None => out.push_str("TOBE sum: n/a | Monthly rewards: n/a (degenerate book)\n"),
    }
    out
}

fn render_metrics(metrics: &LadderMetrics) -> String {
    format!(
        "Spread: {:.2} ({:.2} bps) | Bid depth: {:.3} | Ask depth: {:.3} | Imbalance: {:.2}%\n",
        metrics.spread,
        metrics.spread_bps,
        metrics.bid_depth,
        metrics.ask_depth,
        metrics.imbalance * 100.0
    )
}
