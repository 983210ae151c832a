pub mod countdown;
pub mod topic;

pub use countdown::{run_countdown, CountdownOutcome};
pub use topic::{fetch_topics, TopicSource};
