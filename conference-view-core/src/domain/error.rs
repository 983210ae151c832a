/// Invalid or missing configuration supplied by the outer layer
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Session end time is not configured")]
    MissingEndTime,

    #[error("Session end time '{0}' is not in HH:MM format")]
    MalformedEndTime(String),

    #[error("Session end time '{0}' is out of range")]
    EndTimeOutOfRange(String),

    #[error("Invalid audio playlist: {0}")]
    InvalidPlaylist(String),
}

/// Failure while refreshing the discussion topic
///
/// Never shown to the user; the poller keeps its previous topic.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum TopicError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Topic endpoint answered with status {0}")]
    Status(u16),

    #[error("Malformed topic payload: {0}")]
    Parse(String),

    #[error("Topic endpoint reported failure")]
    Rejected,
}

impl From<serde_json::Error> for TopicError {
    fn from(e: serde_json::Error) -> Self {
        TopicError::Parse(e.to_string())
    }
}
