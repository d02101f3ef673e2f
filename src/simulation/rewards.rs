use crate::simulation::params::RewardParams;

/// Monthly rewards for an aggregate TOBE score: zero below the lower
/// threshold, the cap at or above the upper threshold, linear in between.
pub fn monthly_reward(aggregate_score: f64, params: &RewardParams) -> f64 {
    if aggregate_score <= params.min_threshold {
        return 0.0;
    }
    if aggregate_score >= params.max_threshold {
        return params.max_rewards;
    }

    let reward_per_unit = params.max_rewards / (params.max_threshold - params.min_threshold);
    (aggregate_score - params.min_threshold) * reward_per_unit
}
