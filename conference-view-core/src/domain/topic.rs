use crate::domain::TopicError;
use serde::{Deserialize, Serialize};

/// Shown in place of the topic while a request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Body returned by the topic endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicResponse {
    pub success: bool,
    #[serde(default)]
    pub question: Option<String>,
}

impl TopicResponse {
    /// Extract the question, treating anything but a non-empty question on a
    /// successful response as a failure
    pub fn into_question(self) -> Result<String, TopicError> {
        if !self.success {
            return Err(TopicError::Rejected);
        }
        match self.question {
            Some(q) if !q.trim().is_empty() => Ok(q),
            _ => Err(TopicError::Parse("missing question".to_string())),
        }
    }

    pub fn parse(body: &str) -> Result<Self, TopicError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Identifies one issued fetch; responses are matched back against it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

/// What happened to a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// New question is now displayed
    Applied,
    /// Request failed; the previous topic stays
    Retained(TopicError),
    /// A newer request was issued since; response ignored
    Stale,
}

/// Discussion topic with manual refresh and a static fallback
///
/// Every fetch gets a ticket with a monotonically increasing sequence
/// number. Only the response for the newest ticket may change state, so an
/// older response arriving late cannot overwrite a fresher one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPoller {
    fallback: Vec<String>,
    question: Option<String>,
    last_issued: u64,
    pending: Option<u64>,
}

impl TopicPoller {
    pub fn new(fallback: Vec<String>) -> Self {
        Self {
            fallback,
            question: None,
            last_issued: 0,
            pending: None,
        }
    }

    /// Start a fetch (activation or manual refresh) and enter loading
    pub fn begin_request(&mut self) -> RequestTicket {
        self.last_issued += 1;
        self.pending = Some(self.last_issued);
        tracing::debug!(sequence = self.last_issued, "Topic request issued");
        RequestTicket(self.last_issued)
    }

    /// Alias for [`TopicPoller::begin_request`] matching the refresh button
    pub fn refresh(&mut self) -> RequestTicket {
        self.begin_request()
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<TopicResponse, TopicError>,
    ) -> Completion {
        if ticket.0 != self.last_issued {
            tracing::debug!(
                sequence = ticket.0,
                latest = self.last_issued,
                "Discarding stale topic response"
            );
            return Completion::Stale;
        }
        self.pending = None;

        match result.and_then(TopicResponse::into_question) {
            Ok(question) => {
                tracing::debug!(sequence = ticket.0, "Topic updated");
                self.question = Some(question);
                Completion::Applied
            }
            Err(e) => {
                tracing::warn!(sequence = ticket.0, error = %e, "Topic refresh failed, keeping previous topic");
                Completion::Retained(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Last successfully loaded question
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Loaded question, or the first fallback topic
    pub fn topic(&self) -> Option<&str> {
        self.question
            .as_deref()
            .or_else(|| self.fallback.first().map(String::as_str))
    }

    /// Text for the topic card
    pub fn display_text(&self) -> &str {
        if self.is_loading() {
            LOADING_TEXT
        } else {
            self.topic().unwrap_or_default()
        }
    }
}
