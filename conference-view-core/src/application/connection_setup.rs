use crate::application::PlaylistItem;
use std::fmt;

/// Keys of the shared session store the main view listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStoreKey {
    PinnedMessage,
    Spotlight,
}

impl SessionStoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStoreKey::PinnedMessage => "pinnedMessage",
            SessionStoreKey::Spotlight => "spotlight",
        }
    }
}

impl fmt::Display for SessionStoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Imperative actions of the conferencing SDK used by the main view
pub trait ConferenceActions {
    fn set_audio_playlist(&self, items: &[PlaylistItem]);
    fn observe_session_store(&self, keys: &[SessionStoreKey]);
}

/// Runs the on-connect actions once per connection
///
/// Fed with the connection flag of every snapshot; acts only on the
/// disconnected → connected edge.
#[derive(Debug, Clone, Default)]
pub struct ConnectionSetup {
    playlist: Vec<PlaylistItem>,
    connected: bool,
}

impl ConnectionSetup {
    pub const OBSERVED_KEYS: [SessionStoreKey; 2] =
        [SessionStoreKey::PinnedMessage, SessionStoreKey::Spotlight];

    pub fn new(playlist: Vec<PlaylistItem>) -> Self {
        Self {
            playlist,
            connected: false,
        }
    }

    /// Returns true if the actions ran on this call
    pub fn on_connection_change(
        &mut self,
        is_connected: bool,
        actions: &dyn ConferenceActions,
    ) -> bool {
        let was_connected = std::mem::replace(&mut self.connected, is_connected);
        if !is_connected || was_connected {
            return false;
        }

        if !self.playlist.is_empty() {
            tracing::info!(tracks = self.playlist.len(), "Registering audio playlist");
            actions.set_audio_playlist(&self.playlist);
        }
        tracing::debug!(keys = ?Self::OBSERVED_KEYS, "Observing session store");
        actions.observe_session_store(&Self::OBSERVED_KEYS);
        true
    }
}
