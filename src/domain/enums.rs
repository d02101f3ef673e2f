use serde::{Deserialize, Serialize, Serializer};
use anyhow::{anyhow, Result};

/// Which half of the book a synthetic order belongs to. Controls the
/// insertion scan direction in the ladder, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

// Serialize as plain lowercase strings so persisted files stay readable.
impl Serialize for Side {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Side::Bid => serializer.serialize_str("bid"),
            Side::Ask => serializer.serialize_str("ask"),
        }
    }
}

impl Side {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "bid" => Ok(Side::Bid),
            "ask" => Ok(Side::Ask),
            _ => Err(anyhow!("Unknown side: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Bid => "bid",
            Side::Ask => "ask",
        }
    }
}
