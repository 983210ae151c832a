//! # Conference View Core
//!
//! Rendering-agnostic logic behind the conference main view: which sub-view
//! to show, the session countdown, the discussion-topic poller and the
//! preview form's join rule. No async runtime and no browser APIs, so it runs
//! the same under wasm and natively.

pub mod application;
pub mod domain;

pub use application::{
    ConferenceActions, ConferenceConfig, ConnectionSetup, MainViewFrame, PlaylistItem,
    SessionStoreKey, ViewTracker,
};
pub use domain::{
    can_join, select_view, ConfigError, FlagStore, OverlayLayout, RoleName, SessionContext,
    SessionCountdown, SessionFlags, SessionTimer, Tick, TopicError, TopicPoller, TopicResponse,
    ViewId,
};
