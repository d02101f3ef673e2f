//! Opaque load/save of the user's layer configuration. The engine never
//! validates what lands here beyond well-formed numeric fields; it only
//! reads the lists.

use anyhow::{anyhow, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::domain::model::layer::LayerBook;

/// Load the persisted layer lists. A missing file is an empty
/// configuration, not an error.
pub fn load_layers<P: AsRef<Path>>(path: P) -> Result<LayerBook> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No layer file at {}, starting empty", path.display());
        return Ok(LayerBook::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read layer file '{}': {}", path.display(), e))?;
    let layers: LayerBook = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("Failed to parse layer file '{}': {}", path.display(), e))?;

    info!(
        "Loaded {} bid / {} ask layers from {}",
        layers.bid_layers.len(),
        layers.ask_layers.len(),
        path.display()
    );
    Ok(layers)
}

/// Write the layer lists as pretty JSON, keeping the wire field names.
pub fn save_layers<P: AsRef<Path>>(path: P, layers: &LayerBook) -> Result<()> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(layers)?;
    fs::write(path, raw)
        .map_err(|e| anyhow!("Failed to write layer file '{}': {}", path.display(), e))?;
    debug!("Saved layer configuration to {}", path.display());
    Ok(())
}
