//! Embed URL normalization for the hosted video player.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube(?:-nocookie)?\.com/(?:watch\?(?:[^#]*&)?v=|embed/|shorts/|live/)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .unwrap()
});

/// Extract the 11 character video id from any common YouTube URL shape.
pub fn video_id(url: &str) -> Option<&str> {
    RE_YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Player URL with the JS API enabled, which command messages require.
/// URLs that are not recognized pass through untouched.
pub fn embed_url(url: &str) -> String {
    match video_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{id}?enablejsapi=1"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ] {
            assert_eq!(video_id(url), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn builds_api_enabled_embed() {
        assert_eq!(
            embed_url("https://youtu.be/dQw4w9WgXcQ"),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?enablejsapi=1"
        );
    }

    #[test]
    fn unknown_urls_pass_through() {
        assert_eq!(
            embed_url("https://example.com/clip.mp4"),
            "https://example.com/clip.mp4"
        );
    }
}
