//! UI components for the conference view

mod countdown_overlay;
mod main_view;
mod preview_name;
mod topic_card;

pub use countdown_overlay::{CountdownOverlay, CountdownOverlayProps};
pub use main_view::{ConferenceMainView, ConferenceMainViewProps};
pub use preview_name::{PreviewName, PreviewNameProps};
pub use topic_card::{TopicCard, TopicCardProps};
