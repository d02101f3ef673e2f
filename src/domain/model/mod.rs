pub mod layer;
pub mod level;
pub mod metrics;
