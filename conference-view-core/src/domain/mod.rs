pub mod context;
pub mod error;
pub mod flags;
pub mod join_gate;
pub mod overlay;
pub mod role;
pub mod timer;
pub mod topic;
pub mod view;

pub use context::{EmbedConfig, PdfConfig, Peer, PeerId, SessionContext, Track, UiMode, UiViewMode};
pub use error::{ConfigError, TopicError};
pub use flags::{keys, normalize_flag, FlagStore, SessionFlags};
pub use join_gate::{can_join, join_label, normalize_name};
pub use overlay::{is_mobile_width, CountdownTone, OverlayLayout, TopicPlacement, MOBILE_BREAKPOINT_PX};
pub use role::RoleName;
pub use timer::{
    format_countdown, EndTime, SessionCountdown, SessionTimer, Tick, COUNTDOWN_PLACEHOLDER,
    URGENT_THRESHOLD_SECS,
};
pub use topic::{Completion, RequestTicket, TopicPoller, TopicResponse, LOADING_TEXT};
pub use view::{select_view, ViewId, ViewRule, VIEW_RULES};
