//! # Conference View Yew Components
//!
//! Yew components for the conference preview form, the main view and its
//! session overlays. Room state comes from the conferencing SDK through
//! [`ConferenceProvider`].

pub mod app;
pub mod browser;
pub mod components;
pub mod hooks;
pub mod net;
pub mod providers;

// Re-exports for convenience
pub use app::App;
pub use components::{ConferenceMainView, CountdownOverlay, PreviewName, TopicCard};
pub use hooks::{use_conference, use_session_countdown, use_topic, ActionsHandle, ConferenceContext};
pub use net::{HttpTopicSource, TopicSource, TopicSourceHandle};
pub use providers::{ConferenceProvider, ConferenceProviderProps};
