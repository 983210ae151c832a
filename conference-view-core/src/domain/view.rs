use crate::domain::{RoleName, SessionContext, UiMode, UiViewMode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-view rendered in the main content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ViewId {
    Hls,
    Waiting,
    Embed,
    Pdf,
    Whiteboard,
    Inset,
    ScreenShare,
    PinnedTrack,
    ActiveSpeaker,
    Interview,
    Grid,
}

impl ViewId {
    pub const ALL: [ViewId; 11] = [
        ViewId::Hls,
        ViewId::Waiting,
        ViewId::Embed,
        ViewId::Pdf,
        ViewId::Whiteboard,
        ViewId::Inset,
        ViewId::ScreenShare,
        ViewId::PinnedTrack,
        ViewId::ActiveSpeaker,
        ViewId::Interview,
        ViewId::Grid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Hls => "hls",
            ViewId::Waiting => "waiting",
            ViewId::Embed => "embed",
            ViewId::Pdf => "pdf",
            ViewId::Whiteboard => "whiteboard",
            ViewId::Inset => "inset",
            ViewId::ScreenShare => "screen-share",
            ViewId::PinnedTrack => "pinned-track",
            ViewId::ActiveSpeaker => "active-speaker",
            ViewId::Interview => "interview",
            ViewId::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the selection table: the view wins if `applies` holds
/// and no earlier rule matched.
#[derive(Clone, Copy)]
pub struct ViewRule {
    pub view: ViewId,
    pub name: &'static str,
    applies: fn(&SessionContext, &RoleName) -> bool,
}

impl ViewRule {
    pub fn applies(&self, ctx: &SessionContext, role: &RoleName) -> bool {
        (self.applies)(ctx, role)
    }
}

impl fmt::Debug for ViewRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRule")
            .field("view", &self.view)
            .field("name", &self.name)
            .finish()
    }
}

/// Selection table in priority order. The last rule always matches.
pub const VIEW_RULES: [ViewRule; 11] = [
    ViewRule {
        view: ViewId::Hls,
        name: "local role is the HLS viewer role",
        applies: |ctx, role| ctx.hls_viewer_role.as_ref() == Some(role),
    },
    ViewRule {
        view: ViewId::Waiting,
        name: "local role is the waiting-room role",
        applies: |ctx, role| ctx.waiting_viewer_role.as_ref() == Some(role),
    },
    ViewRule {
        view: ViewId::Embed,
        name: "embedded content is shared",
        applies: |ctx, _| ctx.embed_config.is_some(),
    },
    ViewRule {
        view: ViewId::Pdf,
        name: "a PDF is shared",
        applies: |ctx, _| ctx.pdf_config.is_some(),
    },
    ViewRule {
        view: ViewId::Whiteboard,
        name: "a whiteboard is open",
        applies: |ctx, _| ctx.whiteboard_owner.is_some(),
    },
    ViewRule {
        view: ViewId::Inset,
        name: "template uses the inset layout",
        applies: |ctx, _| ctx.ui_mode == UiMode::Inset,
    },
    ViewRule {
        view: ViewId::ScreenShare,
        name: "a screen or video playlist is shared",
        applies: |ctx, _| {
            (ctx.has_video_screen_share() || ctx.screen_sharing_playlist_active)
                && !ctx.is_audio_only
        },
    },
    ViewRule {
        view: ViewId::PinnedTrack,
        name: "a track is pinned",
        applies: |ctx, _| ctx.pinned_track.is_some(),
    },
    ViewRule {
        view: ViewId::ActiveSpeaker,
        name: "active speaker layout requested",
        applies: |ctx, _| {
            ctx.ui_view_mode == UiViewMode::ActiveSpeaker
                || (ctx.is_headless && ctx.headless_ui_mode == Some(UiViewMode::ActiveSpeaker))
        },
    },
    ViewRule {
        view: ViewId::Interview,
        name: "local role takes part in an interview",
        applies: |_, role| role.is_interview_role(),
    },
    ViewRule {
        view: ViewId::Grid,
        name: "fallback",
        applies: |_, _| true,
    },
];

/// Pick the sub-view for the current snapshot.
///
/// Returns `None` while the local peer has no role; that is the normal
/// "render nothing yet" state during connection setup.
pub fn select_view(ctx: &SessionContext) -> Option<ViewId> {
    let role = ctx.local_peer_role.as_ref()?;

    VIEW_RULES
        .iter()
        .find(|rule| rule.applies(ctx, role))
        .map(|rule| rule.view)
}
