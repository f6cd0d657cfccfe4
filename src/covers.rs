//! Cover image download and decoding.
//!
//! Covers are fetched once per item with a blocking client on a worker
//! thread, downscaled, and handed to the UI as raw RGBA. Any failure leaves
//! the card on its text placeholder.

use anyhow::{Context, Result, anyhow};
use image::GenericImageView;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest edge kept after downscaling.
pub const MAX_COVER_EDGE: u32 = 1280;
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct CoverImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

pub fn fetch_cover(url: &str) -> Result<CoverImage> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Building HTTP client")?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Requesting {url}"))?;
    if !response.status().is_success() {
        return Err(anyhow!("{url} returned {}", response.status()));
    }
    let bytes = response.bytes().context("Reading cover body")?;
    debug!(url, bytes = bytes.len(), "Downloaded cover");
    decode_cover(&bytes)
}

pub fn decode_cover(bytes: &[u8]) -> Result<CoverImage> {
    let decoded = image::load_from_memory(bytes).context("Decoding cover image")?;
    let (width, height) = decoded.dimensions();
    let decoded = if width > MAX_COVER_EDGE || height > MAX_COVER_EDGE {
        decoded.thumbnail(MAX_COVER_EDGE, MAX_COVER_EDGE)
    } else {
        decoded
    };
    let rgba = decoded.to_rgba8();
    Ok(CoverImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Run `fetch_cover` off the async executor; reqwest's blocking client
/// must not run on a runtime thread.
pub async fn fetch_cover_async(url: String) -> Option<CoverImage> {
    let joined = tokio::task::spawn_blocking(move || {
        fetch_cover(&url).map_err(|err| warn!(url, "Cover unavailable: {err:#}"))
    })
    .await;
    match joined {
        Ok(result) => result.ok(),
        Err(err) => {
            warn!("Cover worker failed: {err}");
            None
        }
    }
}
