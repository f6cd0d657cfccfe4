//! Content catalog: the two item lists, cover overrides and copy.
//!
//! The catalog is read-only input. Each list is shared with its carousel as
//! an `Arc<[Item]>`.

use crate::carousel::CardLayout;
use crate::item::Item;
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    copyright: Option<String>,
    #[serde(default)]
    covers: HashMap<String, String>,
    #[serde(default)]
    videos: Vec<Item>,
    #[serde(default)]
    shorts: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub copyright: Option<String>,
    pub videos: Arc<[Item]>,
    pub shorts: Arc<[Item]>,
    covers: HashMap<String, String>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self {
            copyright: None,
            videos: Arc::from(Vec::new()),
            shorts: Arc::from(Vec::new()),
            covers: HashMap::new(),
        }
    }

    /// Still image for `id`, or the layout's placeholder when none is set.
    pub fn cover_url(&self, id: &str, layout: CardLayout) -> &str {
        self.covers
            .get(id)
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| layout.placeholder_cover())
    }
}

pub fn parse_catalog(contents: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(contents)?;
    check_ids("videos", &file.videos)?;
    check_ids("shorts", &file.shorts)?;
    Ok(Catalog {
        copyright: file.copyright,
        videos: file.videos.into(),
        shorts: file.shorts.into(),
        covers: file.covers,
    })
}

fn check_ids(list: &str, items: &[Item]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if item.id.trim().is_empty() {
            return Err(anyhow!("{list}: item '{}' has an empty id", item.title));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(anyhow!("{list}: duplicate item id '{}'", item.id));
        }
    }
    Ok(())
}
