use crate::domain::errors::SimulationError;
use crate::simulation::params::ScoringParams;

/// Price score at a given distance from mid: `decay_base ^ (distance / unit)`
/// where `unit = mid_price * typical_distance_fraction`.
///
/// 1.0 at zero distance, halved (by default) per basis point of mid-price.
/// A mid-price at or below zero is a precondition violation and fails
/// explicitly instead of producing NaN.
pub fn price_score(
    price_distance: f64,
    mid_price: f64,
    params: &ScoringParams,
) -> Result<f64, SimulationError> {
    if !price_distance.is_finite() || price_distance < 0.0 {
        return Err(SimulationError::InvalidInput(format!(
            "price distance must be finite and non-negative, got {}",
            price_distance
        )));
    }
    if !mid_price.is_finite() || mid_price <= 0.0 {
        return Err(SimulationError::DegenerateMidPrice { mid: mid_price });
    }

    let unit = mid_price * params.typical_distance_fraction;
    Ok(params.decay_base.powf(price_distance / unit))
}

/// A level's TOBE contribution: price score weighted by resting quantity.
pub fn level_score(
    price_distance: f64,
    quantity: f64,
    mid_price: f64,
    params: &ScoringParams,
) -> Result<f64, SimulationError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(SimulationError::InvalidInput(format!(
            "quantity must be finite and non-negative, got {}",
            quantity
        )));
    }
    Ok(price_score(price_distance, mid_price, params)? * quantity)
}
