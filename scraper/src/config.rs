//! Persistence of the last-used search parameters.

use anyhow::Context;
use common::SearchParameters;
use log::{debug, info};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "scrape_cfg.json";

/// Reads saved parameters; `None` when nothing has been saved yet.
pub fn load(path: &Path) -> anyhow::Result<Option<SearchParameters>> {
    if !path.exists() {
        return Ok(None);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let params = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse saved parameters in {:?}", path))?;

    Ok(Some(params))
}

pub fn save(path: &Path, params: &SearchParameters) -> anyhow::Result<()> {
    let json_output = serde_json::to_string_pretty(params)?;
    fs::write(path, json_output).with_context(|| format!("Failed to write {:?}", path))
}

/// Merges `requested` over whatever was saved at `path`, then writes the
/// result back so the next run starts from it.
pub fn resolve(path: &Path, requested: SearchParameters) -> anyhow::Result<SearchParameters> {
    let params = match load(path)? {
        Some(saved) => {
            debug!("Loaded saved parameters from {:?}: {:?}", path, saved);
            saved.merged_with(requested)
        }
        None => requested,
    };

    save(path, &params)?;
    info!("Saved search parameters to {:?}", path);

    Ok(params)
}
