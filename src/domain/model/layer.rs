use serde::{Deserialize, Serialize};

/// A user-specified synthetic order: a size resting at a basis-point
/// distance from the current mid-price. The layering engine expands it
/// into a concrete price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: f64,
    #[serde(rename = "spreadBps")]
    pub spread_bps: f64,
}

impl LayerSpec {
    pub fn new(size: f64, spread_bps: f64) -> Self {
        Self { size, spread_bps }
    }
}

/// The persisted pair of layer lists, one independent list per side.
/// Entries are not required to be sorted and may repeat a spread value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerBook {
    #[serde(default, rename = "bidLayers")]
    pub bid_layers: Vec<LayerSpec>,
    #[serde(default, rename = "askLayers")]
    pub ask_layers: Vec<LayerSpec>,
}

impl LayerBook {
    pub fn is_empty(&self) -> bool {
        self.bid_layers.is_empty() && self.ask_layers.is_empty()
    }
}
