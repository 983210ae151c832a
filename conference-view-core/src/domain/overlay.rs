use crate::domain::{RoleName, SessionFlags};
use serde::Serialize;

/// Viewports at most this wide get the mobile layout
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Where the topic card is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicPlacement {
    /// Fixed at the bottom centre, over the video
    Docked,
    /// In the document flow below the video (small screens)
    Inline,
}

/// Colour treatment of the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTone {
    Normal,
    Urgent,
}

impl CountdownTone {
    pub fn from_urgency(urgent: bool) -> Self {
        if urgent {
            CountdownTone::Urgent
        } else {
            CountdownTone::Normal
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CountdownTone::Normal => "#fff",
            CountdownTone::Urgent => "#ff0000",
        }
    }
}

/// Which overlays the main view shows and how much room the video gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLayout {
    pub show_topic_card: bool,
    pub show_countdown: bool,
    /// Height of the main content area, percent of the container
    pub main_height_percent: u8,
    pub topic_placement: TopicPlacement,
}

impl OverlayLayout {
    pub fn compute(flags: &SessionFlags, role: Option<&RoleName>, is_mobile: bool) -> Self {
        let learner = flags.is_peer_learner;
        let moderator = role.is_some_and(RoleName::is_moderator);

        let main_height_percent = match (learner, is_mobile) {
            (true, true) => 80,
            (true, false) => 95,
            (false, _) => 100,
        };

        Self {
            show_topic_card: learner,
            show_countdown: learner || moderator,
            main_height_percent,
            topic_placement: if is_mobile {
                TopicPlacement::Inline
            } else {
                TopicPlacement::Docked
            },
        }
    }
}

pub fn is_mobile_width(width_px: u32, breakpoint_px: u32) -> bool {
    width_px <= breakpoint_px
}
