use chrono::{DateTime, Utc};
use conference_view_core::domain::{Completion, RequestTicket};
use conference_view_core::{
    ConferenceActions, ConnectionSetup, OverlayLayout, PlaylistItem, SessionContext,
    SessionCountdown, SessionFlags, SessionStoreKey, Tick, TopicPoller, ViewId,
};
use cucumber::World;
use std::collections::HashMap;
use std::sync::Mutex;

/// SDK calls recorded by the connection setup scenarios
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedAction {
    SetAudioPlaylist(usize),
    ObserveSessionStore(Vec<SessionStoreKey>),
}

#[derive(Debug, Default)]
pub struct RecordingActions {
    pub calls: Mutex<Vec<RecordedAction>>,
}

impl RecordingActions {
    pub fn recorded(&self) -> Vec<RecordedAction> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, action: RecordedAction) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(action);
        }
    }
}

impl ConferenceActions for RecordingActions {
    fn set_audio_playlist(&self, items: &[PlaylistItem]) {
        self.record(RecordedAction::SetAudioPlaylist(items.len()));
    }

    fn observe_session_store(&self, keys: &[SessionStoreKey]) {
        self.record(RecordedAction::ObserveSessionStore(keys.to_vec()));
    }
}

/// What a countdown run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownReport {
    pub remaining: Option<u32>,
    pub display: String,
    pub urgent: bool,
    pub zero_callbacks: u32,
    /// Result of every applied tick, in order
    pub ticks: Vec<Tick>,
}

#[derive(Debug, World, Default)]
pub struct ConferenceWorld {
    /// Snapshot under test for view selection
    pub context: SessionContext,

    /// Result of the last selection; outer `None` means not selected yet
    pub selected_view: Option<Option<ViewId>>,

    /// Stand-in for browser local storage
    pub storage: HashMap<String, String>,

    pub name: String,
    pub enable_join: bool,
    pub is_mobile: bool,
    pub layout: Option<OverlayLayout>,

    pub end_time: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub urgent_threshold: Option<u32>,
    pub ticks: u32,

    pub poller: Option<TopicPoller>,
    /// Tickets in the order they were issued
    pub tickets: Vec<RequestTicket>,
    pub last_completion: Option<Completion>,

    pub setup: ConnectionSetup,
    pub actions: RecordingActions,
}

impl ConferenceWorld {
    pub fn flags(&self) -> SessionFlags {
        SessionFlags::read(&self.storage)
    }

    /// Start the countdown from the recorded inputs and apply all ticks.
    ///
    /// Replayed on demand so the world holds only plain data.
    pub fn run_countdown(&self) -> CountdownReport {
        let now = self.started_at.unwrap_or_else(Utc::now);
        let mut countdown = SessionCountdown::start(self.end_time.as_deref(), now);
        if let Some(threshold) = self.urgent_threshold {
            countdown = countdown.with_urgent_threshold(threshold);
        }

        let fired = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let fired = fired.clone();
            countdown.on_reach_zero(move || fired.set(fired.get() + 1));
        }

        let ticks = (0..self.ticks).map(|_| countdown.tick()).collect();

        CountdownReport {
            remaining: countdown.remaining_seconds(),
            display: countdown.display(),
            urgent: countdown.is_urgent(),
            zero_callbacks: fired.get(),
            ticks,
        }
    }

    pub fn poller(&mut self) -> &mut TopicPoller {
        self.poller
            .get_or_insert_with(|| TopicPoller::new(vec!["Introduction".to_string()]))
    }

    pub fn ticket(&self, index: usize) -> RequestTicket {
        *self
            .tickets
            .get(index)
            .unwrap_or_else(|| panic!("Request {} was never issued", index + 1))
    }
}
