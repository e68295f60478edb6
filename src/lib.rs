pub mod config;
pub mod extract;
pub mod metadata;
pub mod output;
pub mod transcript;
pub mod youtube;

use serde::{Deserialize, Serialize};

/// A single timed transcript segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub text: String,
}

/// Everything known about a video: the metadata-lookup fields plus, when a
/// caption track could be fetched, the transcript fields. `video_id` is the
/// only guaranteed field; the rest are whatever the lookup returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub views: Option<u64>,
    pub publish_date: Option<String>,
    pub length: Option<f64>,
    pub author: Option<String>,
    pub channel_id: Option<String>,
    pub channel_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<Vec<Segment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript_text: Option<String>,
}

/// Extract the 11-character video ID from a YouTube URL or bare video ID.
///
/// URL rules are tried in a fixed order and the first capture wins; several
/// rules can match the same input, so the order is significant.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // Bare 11-character video ID
    if regex::Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap().is_match(input) {
        return Some(input.to_string());
    }

    let rules = [
        // watch URLs: ?v=ID or an /ID path segment (also covers youtu.be and shorts)
        r"(?:v=|/)([0-9A-Za-z_-]{11})",
        // embed URLs
        r"(?:embed/)([0-9A-Za-z_-]{11})",
        // youtu.be short URLs
        r"(?:youtu\.be/)([0-9A-Za-z_-]{11})",
    ];

    for rule in rules {
        if let Some(caps) = regex::Regex::new(rule).unwrap().captures(input) {
            return Some(caps[1].to_string());
        }
    }

    None
}
