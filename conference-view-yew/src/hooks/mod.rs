mod use_conference;
mod use_session_countdown;
mod use_topic;

pub use use_conference::{use_conference, ActionsHandle, ConferenceContext};
pub use use_session_countdown::{use_session_countdown, CountdownState};
pub use use_topic::{use_topic, TopicHandle, TopicView};
