use crate::domain::{select_view, OverlayLayout, SessionContext, SessionFlags, ViewId};
use serde::Serialize;

/// Everything the main view needs to render one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MainViewFrame {
    /// `None` renders nothing (local role not known yet)
    pub view: Option<ViewId>,
    pub layout: OverlayLayout,
}

impl MainViewFrame {
    pub fn derive(ctx: &SessionContext, flags: &SessionFlags, is_mobile: bool) -> Self {
        Self {
            view: select_view(ctx),
            layout: OverlayLayout::compute(flags, ctx.local_peer_role.as_ref(), is_mobile),
        }
    }
}

/// Tracks the selected view across snapshots and logs transitions
#[derive(Debug, Clone, Default)]
pub struct ViewTracker {
    current: Option<ViewId>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ViewId> {
        self.current
    }

    /// Re-select for a new snapshot; returns the selected view
    pub fn update(&mut self, ctx: &SessionContext) -> Option<ViewId> {
        let next = select_view(ctx);
        if next != self.current {
            tracing::info!(
                from = ?self.current,
                to = ?next,
                role = ?ctx.local_peer_role,
                "Main view changed"
            );
            self.current = next;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Peer, RoleName};

    #[test]
    fn test_frame_for_learner() {
        let ctx = SessionContext::for_role("student");
        let flags = SessionFlags {
            is_peer_learner: true,
            ..Default::default()
        };

        let frame = MainViewFrame::derive(&ctx, &flags, false);

        assert_eq!(frame.view, Some(ViewId::Grid));
        assert!(frame.layout.show_topic_card);
        assert_eq!(frame.layout.main_height_percent, 95);
    }

    #[test]
    fn test_frame_without_role() {
        let frame = MainViewFrame::derive(&SessionContext::default(), &SessionFlags::default(), false);

        assert_eq!(frame.view, None);
        assert!(!frame.layout.show_countdown);
    }

    #[test]
    fn test_tracker_follows_snapshots() {
        let mut tracker = ViewTracker::new();
        assert_eq!(tracker.current(), None);

        let mut ctx = SessionContext::default();
        assert_eq!(tracker.update(&ctx), None);

        ctx.local_peer_role = Some(RoleName::from("moderator"));
        assert_eq!(tracker.update(&ctx), Some(ViewId::Interview));

        let ctx = ctx.with_screen_share(Peer::new("p-1", "Ana"));
        assert_eq!(tracker.update(&ctx), Some(ViewId::ScreenShare));
        assert_eq!(tracker.current(), Some(ViewId::ScreenShare));
    }
}
