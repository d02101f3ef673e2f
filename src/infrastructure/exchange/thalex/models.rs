// Models for Thalex public API responses
use serde::Deserialize;
use serde_json::Value;

/// Envelope of `public/book`. `result` is absent on API-level errors.
#[derive(Debug, Deserialize)]
pub struct BookResponse {
    pub result: Option<BookResult>,
}

/// One book snapshot. Levels arrive as `[price, quantity]` arrays; the
/// price shows up as a string on some gateway paths, so the raw values are
/// kept as JSON and decoded by the parser.
#[derive(Debug, Default, Deserialize)]
pub struct BookResult {
    #[serde(default)]
    pub bids: Vec<Value>,
    #[serde(default)]
    pub asks: Vec<Value>,
}
