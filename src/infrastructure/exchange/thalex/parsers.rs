use log::warn;
use serde_json::Value;

use crate::domain::errors::SimulationError;
use crate::domain::model::level::PriceLevel;
use crate::infrastructure::exchange::thalex::models::BookResult;
use crate::simulation::ladder::sort_descending;

/// Turns raw book responses into ladder snapshots.
pub struct LadderParser;

impl LadderParser {
    /// Build a price-descending ladder from a book snapshot: the top
    /// `depth` levels per side with a zero-quantity mid-price marker at
    /// `(best_bid + best_ask) / 2` between them.
    ///
    /// A side with no decodable levels means no marker can be placed and
    /// the snapshot is rejected.
    pub fn ladder_from_book(
        book: &BookResult,
        depth: usize,
    ) -> Result<Vec<PriceLevel>, SimulationError> {
        let bids = Self::parse_side(&book.bids, depth);
        let asks = Self::parse_side(&book.asks, depth);

        if bids.is_empty() {
            return Err(SimulationError::EmptyBook("bid"));
        }
        if asks.is_empty() {
            return Err(SimulationError::EmptyBook("ask"));
        }

        let best_bid = bids[0].0;
        let best_ask = asks[0].0;
        let mid_price = (best_bid + best_ask) / 2.0;

        let mut ladder: Vec<PriceLevel> = Vec::with_capacity(bids.len() + asks.len() + 1);
        ladder.extend(bids.iter().map(|&(price, qty)| PriceLevel::new(price, qty)));
        ladder.push(PriceLevel::mid_marker(mid_price));
        ladder.extend(asks.iter().map(|&(price, qty)| PriceLevel::new(price, qty)));
        sort_descending(&mut ladder);

        Ok(ladder)
    }

    /// The fixed fallback snapshot used when the feed is unreachable.
    pub fn mock_ladder() -> Vec<PriceLevel> {
        vec![
            PriceLevel::new(50_000.0, 1.0),
            PriceLevel::new(49_900.0, 2.0),
            PriceLevel::new(49_800.0, 3.0),
            PriceLevel::new(49_700.0, 4.0),
            PriceLevel::new(49_600.0, 5.0),
            PriceLevel::mid_marker(49_550.0),
            PriceLevel::new(49_500.0, 1.0),
            PriceLevel::new(49_400.0, 2.0),
            PriceLevel::new(49_300.0, 3.0),
            PriceLevel::new(49_200.0, 4.0),
            PriceLevel::new(49_100.0, 5.0),
        ]
    }

    fn parse_side(raw_levels: &[Value], depth: usize) -> Vec<(f64, f64)> {
        raw_levels
            .iter()
            .take(depth)
            .filter_map(|raw| match Self::parse_level(raw) {
                Some(level) => Some(level),
                None => {
                    warn!("Skipping undecodable book level: {}", raw);
                    None
                }
            })
            .collect()
    }

    fn parse_level(raw: &Value) -> Option<(f64, f64)> {
        let entry = raw.as_array()?;
        let price = Self::number(entry.first()?)?;
        let quantity = Self::number(entry.get(1)?)?;
        Some((price, quantity))
    }

    // Gateway responses mix numeric and string-encoded numbers.
    fn number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
