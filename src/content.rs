//! Loads the showcase catalog (`conf/content.toml` by default).

use anyhow::{Context, Result};
use showcase_core::{Catalog, parse_catalog};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Reading content file {}", path.display()))?;
    let catalog =
        parse_catalog(&contents).with_context(|| format!("Parsing {}", path.display()))?;
    info!(
        path = %path.display(),
        videos = catalog.videos.len(),
        shorts = catalog.shorts.len(),
        "Loaded showcase content"
    );
    Ok(catalog)
}
