use crate::domain::enums::Side;
use crate::domain::errors::SimulationError;
use crate::domain::model::layer::LayerSpec;
use crate::domain::model::level::PriceLevel;
use crate::simulation::ladder::{insert, round_to_tick, sort_descending};
use crate::simulation::params::EngineParams;
use crate::simulation::scoring::level_score;

/// Derive a new ladder from a feed snapshot plus the configured layers.
///
/// Every bid layer is expanded to `mid * (1 - spread_bps/10000)` and every
/// ask layer to `mid * (1 + spread_bps/10000)` (tick-rounded) against the
/// snapshot's marker mid, then merged into a copy of the ladder. Best
/// prices are rescanned over the merged book, the marker is repositioned
/// to the new mid, the whole ladder is re-sorted, and every non-marker
/// level gets a fresh TOBE score against the new mid.
///
/// The snapshot is read-only; repeated application of the same inputs
/// yields an identical result.
pub fn apply_layers(
    base_ladder: &[PriceLevel],
    bid_layers: &[LayerSpec],
    ask_layers: &[LayerSpec],
    params: &EngineParams,
) -> Result<Vec<PriceLevel>, SimulationError> {
    validate_ladder(base_ladder)?;
    validate_layers(bid_layers, "bid")?;
    validate_layers(ask_layers, "ask")?;

    let original_mid = base_ladder
        .iter()
        .find(|level| level.is_mid_marker)
        .map(|level| level.price)
        .unwrap_or(0.0);

    let mut ladder = base_ladder.to_vec();
    for layer in bid_layers {
        let price = round_to_tick(
            original_mid * (1.0 - layer.spread_bps / 10_000.0),
            params.tick_size,
        );
        ladder = insert(&ladder, price, layer.size, Side::Bid, params.tick_size);
    }
    for layer in ask_layers {
        let price = round_to_tick(
            original_mid * (1.0 + layer.spread_bps / 10_000.0),
            params.tick_size,
        );
        ladder = insert(&ladder, price, layer.size, Side::Ask, params.tick_size);
    }
    sort_descending(&mut ladder);

    if ladder.is_empty() {
        return Ok(ladder);
    }

    // Best prices by scan direction over the merged book; an exhausted side
    // scans to 0 and leaves the mid degenerate.
    let new_best_bid = ladder
        .iter()
        .find(|level| level.quantity > 0.0 && !level.is_mid_marker)
        .map(|level| level.price)
        .unwrap_or(0.0);
    let new_best_ask = ladder
        .iter()
        .rev()
        .find(|level| level.quantity > 0.0 && !level.is_mid_marker)
        .map(|level| level.price)
        .unwrap_or(0.0);
    let new_mid = (new_best_bid + new_best_ask) / 2.0;

    match ladder.iter_mut().find(|level| level.is_mid_marker) {
        Some(marker) => marker.price = new_mid,
        None => ladder.push(PriceLevel::mid_marker(new_mid)),
    }
    // Marker placement is a sort property, not an in-place position.
    sort_descending(&mut ladder);

    if ladder.iter().any(|level| !level.is_mid_marker) {
        if !new_mid.is_finite() || new_mid <= 0.0 {
            return Err(SimulationError::DegenerateMidPrice { mid: new_mid });
        }
        for level in ladder.iter_mut().filter(|level| !level.is_mid_marker) {
            let distance = (level.price - new_mid).abs();
            level.score = level_score(distance, level.quantity, new_mid, &params.scoring)?;
        }
    }

    Ok(ladder)
}

fn validate_ladder(ladder: &[PriceLevel]) -> Result<(), SimulationError> {
    let mut markers = 0;
    for level in ladder {
        if !level.price.is_finite() {
            return Err(SimulationError::InvalidInput(format!(
                "ladder level has non-finite price {}",
                level.price
            )));
        }
        if !level.quantity.is_finite() || level.quantity < 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "ladder level at {} has invalid quantity {}",
                level.price, level.quantity
            )));
        }
        if level.is_mid_marker {
            markers += 1;
        }
    }
    if markers > 1 {
        return Err(SimulationError::InvalidInput(format!(
            "ladder carries {} mid-price markers, at most one allowed",
            markers
        )));
    }
    Ok(())
}

fn validate_layers(layers: &[LayerSpec], side: &str) -> Result<(), SimulationError> {
    for (index, layer) in layers.iter().enumerate() {
        if !layer.size.is_finite() || layer.size < 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "{} layer {} has invalid size {}",
                side, index, layer.size
            )));
        }
        if !layer.spread_bps.is_finite() || layer.spread_bps < 0.0 {
            return Err(SimulationError::InvalidInput(format!(
                "{} layer {} has invalid spread {} bps",
                side, index, layer.spread_bps
            )));
        }
    }
    Ok(())
}
