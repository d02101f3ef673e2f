use crate::domain::constants::*;

/// Parameters for the decay scoring function. Defaults reproduce the
/// documented program behavior: halve the score per basis point of
/// distance from mid.
#[derive(Clone, Copy, Debug)]
pub struct ScoringParams {
    pub decay_base: f64,
    /// Typical distance unit as a fraction of mid-price.
    pub typical_distance_fraction: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            decay_base: TOBE_DECAY_BASE,
            typical_distance_fraction: TYPICAL_DISTANCE_FRACTION,
        }
    }
}

/// Parameters for the piecewise-linear reward ramp.
#[derive(Clone, Copy, Debug)]
pub struct RewardParams {
    pub min_threshold: f64,
    pub max_threshold: f64,
    pub max_rewards: f64,
}

impl Default for RewardParams {
    fn default() -> Self {
        Self {
            min_threshold: MIN_REWARD_THRESHOLD,
            max_threshold: MAX_REWARD_THRESHOLD,
            max_rewards: MAX_MONTHLY_REWARDS,
        }
    }
}

/// Parameters for a full layering pass. `tick_size` is the price
/// resolution that decides whether two levels merge.
#[derive(Clone, Copy, Debug)]
pub struct EngineParams {
    pub tick_size: f64,
    pub scoring: ScoringParams,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            tick_size: DEFAULT_TICK_SIZE,
            scoring: ScoringParams::default(),
        }
    }
}
