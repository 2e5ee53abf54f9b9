pub mod config;
pub mod error;
pub mod gateway;
pub mod output;
pub mod server;
pub mod youtube;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Languages tried, in order, when a request names none
pub const DEFAULT_LANGUAGES: &[&str] = &["de", "en"];

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// One caption track available for a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

static BARE_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("valid regex"));

// Tried in order; first capture wins.
static URL_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})")
            .expect("valid regex"),
        Regex::new(r"youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})").expect("valid regex"),
    ]
});

fn has_domain_marker(input: &str) -> bool {
    input.contains("youtube.com") || input.contains("youtu.be")
}

/// Extract video ID from a YouTube URL, or accept a bare 11-character ID.
///
/// Inputs that mention a YouTube domain are only ever matched against the URL
/// patterns; they never fall through to the bare-ID check.
pub fn extract_video_id(input: &str) -> Option<String> {
    if has_domain_marker(input) {
        return URL_PATTERNS
            .iter()
            .find_map(|re| re.captures(input))
            .map(|caps| caps[1].to_string());
    }

    BARE_ID.is_match(input).then(|| input.to_string())
}
