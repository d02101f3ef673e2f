// Default values for the MQP scoring and reward model. Callers that need
// different numbers pass explicit params instead of editing these.

/// A level's score is multiplied by this factor per typical distance unit
/// away from the mid-price.
pub const TOBE_DECAY_BASE: f64 = 0.5;

/// The typical distance unit as a fraction of mid-price: one basis point.
pub const TYPICAL_DISTANCE_FRACTION: f64 = 0.0001;

/// Aggregate TOBE at or below this earns nothing.
pub const MIN_REWARD_THRESHOLD: f64 = 0.5;

/// Aggregate TOBE at or above this earns the full cap.
pub const MAX_REWARD_THRESHOLD: f64 = 3.0;

/// Monthly rewards cap in USD.
pub const MAX_MONTHLY_REWARDS: f64 = 30_000.0;

/// Price resolution used for merge decisions on the ladder.
pub const DEFAULT_TICK_SIZE: f64 = 0.001;

/// Book levels taken per side from the feed snapshot.
pub const DEFAULT_BOOK_DEPTH: usize = 5;

/// Seconds between feed refreshes.
pub const DEFAULT_REFRESH_SECS: u64 = 5;
