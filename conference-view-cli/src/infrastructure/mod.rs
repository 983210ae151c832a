pub mod error;
pub mod observability;
pub mod snapshot;
pub mod topic_client;

pub use error::{CliError, Result};
pub use observability::LogConfig;
pub use snapshot::{load_context, load_flags};
pub use topic_client::TopicClient;
