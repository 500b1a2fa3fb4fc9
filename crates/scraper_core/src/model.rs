use std::fmt;

use serde::{Deserialize, Serialize};

/// Seconds the service waits between per-video fetches unless told otherwise.
pub const DEFAULT_DELAY_SECS: f64 = 3.0;
/// Cap on videos processed per scrape unless told otherwise.
pub const DEFAULT_MAX_VIDEOS: u32 = 50;

/// Store-assigned row identifier. The store may hand out integers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: RecordId,
    /// YouTube channel ID, unique within the store.
    pub channel_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub id: RecordId,
    /// Foreign key to [`Channel::channel_id`].
    pub channel_id: String,
    pub video_id: String,
    pub title: String,
    /// Newline-delimited transcript text.
    pub transcript: String,
}

/// Body of `POST /api/scrape-transcripts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub channel_url: String,
    pub delay: f64,
    pub max_videos: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookies_file: Option<String>,
}

impl ScrapeRequest {
    pub fn new(channel_url: impl Into<String>) -> Self {
        Self {
            channel_url: channel_url.into(),
            delay: DEFAULT_DELAY_SECS,
            max_videos: DEFAULT_MAX_VIDEOS,
            cookies_file: None,
        }
    }

    pub fn with_cookies_file(mut self, cookies_file: Option<String>) -> Self {
        self.cookies_file = cookies_file;
        self
    }
}

/// Success body of `POST /api/scrape-transcripts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub videos_processed: u32,
    pub channel_title: String,
    #[serde(default)]
    pub total_videos_found: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl ScrapeResult {
    pub fn new(videos_processed: u32, channel_title: impl Into<String>) -> Self {
        Self {
            videos_processed,
            channel_title: channel_title.into(),
            total_videos_found: None,
            message: None,
            output_dir: None,
        }
    }
}
