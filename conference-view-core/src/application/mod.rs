mod config;
mod connection_setup;
mod main_view;

pub use config::{parse_playlist, ConferenceConfig, PlaylistItem, DEFAULT_TOPICS, DEFAULT_TOPIC_ENDPOINT};
pub use connection_setup::{ConferenceActions, ConnectionSetup, SessionStoreKey};
pub use main_view::{MainViewFrame, ViewTracker};
