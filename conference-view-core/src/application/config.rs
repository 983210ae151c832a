use crate::domain::{ConfigError, MOBILE_BREAKPOINT_PX, URGENT_THRESHOLD_SECS};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOPIC_ENDPOINT: &str =
    "https://conversationai-questions.clapingo.com/reading/question";

pub const DEFAULT_TOPICS: [&str; 5] = [
    "Introduction",
    "Agenda Overview",
    "Keynote Speaker",
    "Breakout Sessions",
    "Q&A Session",
];

/// Entry of the background audio playlist handed to the SDK on connect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Parse a playlist given as a JSON array; blank input means no playlist
pub fn parse_playlist(raw: &str) -> Result<Vec<PlaylistItem>, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| ConfigError::InvalidPlaylist(e.to_string()))
}

/// Configuration for the main view and its overlays
#[derive(Debug, Clone, PartialEq)]
pub struct ConferenceConfig {
    /// GET endpoint returning `{success, question}`
    pub topic_endpoint: String,

    /// Topics shown before any question has loaded
    pub fallback_topics: Vec<String>,

    /// Registered with the SDK once the room is connected
    pub audio_playlist: Vec<PlaylistItem>,

    pub urgent_threshold_secs: u32,

    /// Countdown tick period in milliseconds
    pub tick_interval_ms: u32,

    pub mobile_breakpoint_px: u32,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            topic_endpoint: DEFAULT_TOPIC_ENDPOINT.to_string(),
            fallback_topics: DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect(),
            audio_playlist: Vec::new(),
            urgent_threshold_secs: URGENT_THRESHOLD_SECS,
            tick_interval_ms: 1000,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
        }
    }
}

impl ConferenceConfig {
    /// Read overrides from `CONFERENCE_TOPIC_URL` and
    /// `CONFERENCE_AUDIO_PLAYLIST` (JSON array)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("CONFERENCE_TOPIC_URL") {
            config.topic_endpoint = url;
        }
        if let Ok(raw) = std::env::var("CONFERENCE_AUDIO_PLAYLIST") {
            config.audio_playlist = parse_playlist(&raw)?;
        }

        Ok(config)
    }

    pub fn with_topic_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.topic_endpoint = endpoint.into();
        self
    }

    pub fn with_fallback_topics(mut self, topics: Vec<String>) -> Self {
        self.fallback_topics = topics;
        self
    }

    pub fn with_audio_playlist(mut self, playlist: Vec<PlaylistItem>) -> Self {
        self.audio_playlist = playlist;
        self
    }

    pub fn with_urgent_threshold(mut self, secs: u32) -> Self {
        self.urgent_threshold_secs = secs;
        self
    }

    pub fn with_tick_interval(mut self, ms: u32) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    pub fn with_mobile_breakpoint(mut self, px: u32) -> Self {
        self.mobile_breakpoint_px = px;
        self
    }
}
