use std::cmp::Ordering;

use crate::domain::enums::Side;
use crate::domain::model::level::PriceLevel;

/// Round a value to the nearest tick.
pub fn round_to_tick(value: f64, tick: f64) -> f64 {
    tick * (value / tick).round()
}

/// Integer price key at tick resolution. Two levels merge when their keys
/// match; raw float equality would miss nearly-identical computed prices.
fn price_key(price: f64, tick: f64) -> i64 {
    (price / tick).round() as i64
}

/// Insert a synthetic order into a price-descending ladder, returning a new
/// ladder. The input is never mutated.
///
/// If a non-marker level already rests at the same tick-rounded price, its
/// quantity grows by `size` and it is flagged synthetic. Otherwise a new
/// level lands at the position that keeps the ladder sorted: bids go before
/// the first lower-priced entry, asks before the first higher-priced entry,
/// and either side appends at the end when no such entry exists.
///
/// The mid-price marker is never a merge target; repositioning it and
/// recomputing scores belong to the layering pass.
pub fn insert(
    ladder: &[PriceLevel],
    price: f64,
    size: f64,
    side: Side,
    tick: f64,
) -> Vec<PriceLevel> {
    let mut next: Vec<PriceLevel> = ladder.to_vec();
    let key = price_key(price, tick);

    if let Some(existing) = next
        .iter_mut()
        .find(|level| !level.is_mid_marker && price_key(level.price, tick) == key)
    {
        existing.quantity += size;
        existing.is_synthetic = true;
        return next;
    }

    let position = next.iter().position(|level| match side {
        Side::Bid => level.price < price,
        Side::Ask => level.price > price,
    });

    let level = PriceLevel::synthetic(price, size);
    match position {
        Some(index) => next.insert(index, level),
        None => next.push(level),
    }
    next
}

/// Sort a ladder by price descending. Stable, so equal-priced entries keep
/// their relative order.
pub fn sort_descending(ladder: &mut [PriceLevel]) {
    ladder.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f64 = 0.001;

    fn sample_ladder() -> Vec<PriceLevel> {
        vec![
            PriceLevel::new(50_000.0, 1.0),
            PriceLevel::new(49_900.0, 2.0),
            PriceLevel::mid_marker(49_550.0),
            PriceLevel::new(49_500.0, 1.0),
            PriceLevel::new(49_400.0, 2.0),
        ]
    }

    fn assert_descending(ladder: &[PriceLevel]) {
        for pair in ladder.windows(2) {
            assert!(
                pair[0].price >= pair[1].price,
                "out of order: {} before {}",
                pair[0].price,
                pair[1].price
            );
        }
    }

    #[test]
    fn round_to_tick_snaps_to_resolution() {
        assert!((round_to_tick(49_545.0449, TICK) - 49_545.045).abs() < 1e-9);
        assert!((round_to_tick(123.456, 0.5) - 123.5).abs() < 1e-9);
        assert!((round_to_tick(123.2, 0.5) - 123.0).abs() < 1e-9);
    }

    #[test]
    fn bid_insert_lands_between_neighbors() {
        let ladder = sample_ladder();
        let next = insert(&ladder, 49_450.0, 0.4, Side::Bid, TICK);

        assert_eq!(next.len(), 6);
        assert_descending(&next);

        let added = next.iter().find(|l| l.price == 49_450.0).unwrap();
        assert!(added.is_synthetic);
        assert_eq!(added.quantity, 0.4);
        assert_eq!(added.score, 0.0);
    }

    #[test]
    fn ask_insert_lands_between_neighbors() {
        let ladder = sample_ladder();
        let next = insert(&ladder, 49_950.0, 0.4, Side::Ask, TICK);

        assert_eq!(next.len(), 6);
        assert_descending(&next);
        assert!(next.iter().any(|l| l.price == 49_950.0 && l.is_synthetic));
    }

    #[test]
    fn new_extreme_prices_keep_order() {
        let ladder = sample_ladder();

        let top = insert(&ladder, 50_100.0, 0.1, Side::Bid, TICK);
        assert_eq!(top[0].price, 50_100.0);
        assert_descending(&top);

        let bottom = insert(&ladder, 49_300.0, 0.1, Side::Ask, TICK);
        assert_eq!(bottom[bottom.len() - 1].price, 49_300.0);
        assert_descending(&bottom);
    }

    #[test]
    fn equal_price_merges_quantities_additively() {
        let ladder = sample_ladder();
        let once = insert(&ladder, 49_900.0, 0.4, Side::Bid, TICK);
        let twice = insert(&once, 49_900.0, 0.6, Side::Bid, TICK);

        let matches: Vec<_> = twice.iter().filter(|l| l.price == 49_900.0).collect();
        assert_eq!(matches.len(), 1);
        assert!((matches[0].quantity - 3.0).abs() < 1e-12);
        assert!(matches[0].is_synthetic);
        assert_eq!(twice.len(), ladder.len());
    }

    #[test]
    fn near_equal_prices_merge_at_tick_resolution() {
        let ladder = sample_ladder();
        let once = insert(&ladder, 49_545.0449, 0.4, Side::Bid, TICK);
        let twice = insert(&once, 49_545.0451, 0.4, Side::Bid, TICK);

        // Both round to the same tick, so they must land on one level.
        assert_eq!(twice.len(), ladder.len() + 1);
        let merged = twice
            .iter()
            .find(|l| (l.price - 49_545.045).abs() < 0.001)
            .unwrap();
        assert!((merged.quantity - 0.8).abs() < 1e-12);
    }

    #[test]
    fn marker_is_never_a_merge_target() {
        let ladder = sample_ladder();
        let next = insert(&ladder, 49_550.0, 0.4, Side::Bid, TICK);

        let marker = next.iter().find(|l| l.is_mid_marker).unwrap();
        assert_eq!(marker.quantity, 0.0);
        assert_eq!(next.len(), ladder.len() + 1);
    }

    #[test]
    fn input_ladder_is_untouched() {
        let ladder = sample_ladder();
        let snapshot = ladder.clone();
        let _ = insert(&ladder, 49_450.0, 0.4, Side::Bid, TICK);
        assert_eq!(ladder, snapshot);
    }
}
