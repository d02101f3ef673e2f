use thiserror::Error;

/// Failures the layering and scoring engine can report. All of them are
/// local validation failures; nothing in the engine is retryable.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Input shape rejected before any layer was applied.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A mid-price at or below zero reached the scoring function. Scoring
    /// against it would propagate NaN/infinity into the reward figure.
    #[error("degenerate mid-price {mid}: scores are undefined")]
    DegenerateMidPrice { mid: f64 },

    /// A feed snapshot arrived with one side of the book empty, so no
    /// mid-price marker can be placed.
    #[error("order book snapshot has no {0} levels")]
    EmptyBook(&'static str),
}
