use crate::browser;
use crate::components::{CountdownOverlay, TopicCard};
use crate::hooks::use_conference;
use crate::net::TopicSourceHandle;
use conference_view_core::{OverlayLayout, ViewId, ViewTracker};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConferenceMainViewProps {
    /// Renders the selected sub-view; each view is opaque to this component
    pub render_view: Callback<ViewId, Html>,
    #[prop_or_default]
    pub side_pane: Html,
    /// Shown while a sub-view suspends
    #[prop_or_default]
    pub fallback: Html,
    #[prop_or_default]
    pub on_time_up: Option<Callback<()>>,
}

/// Main content area: the selected sub-view, the side pane and the overlays
#[function_component(ConferenceMainView)]
pub fn conference_main_view(props: &ConferenceMainViewProps) -> Html {
    let conference = use_conference();
    let tracker = use_mut_ref(ViewTracker::new);
    let topic_source = use_memo(conference.config.topic_endpoint.clone(), |endpoint| {
        TopicSourceHandle::http(endpoint.clone())
    });

    let Some(view) = tracker.borrow_mut().update(&conference.session) else {
        return html! {};
    };

    let layout = OverlayLayout::compute(
        &conference.flags,
        conference.session.local_peer_role.as_ref(),
        browser::is_mobile(conference.config.mobile_breakpoint_px),
    );

    let style = format!(
        "width: 100%; height: {}%; position: relative; display: flex;",
        layout.main_height_percent
    );

    html! {
        <Suspense fallback={props.fallback.clone()}>
            <div class={classes!("conference-main", format!("conference-main--{view}"))} {style}>
                {props.render_view.emit(view)}
                {props.side_pane.clone()}
            </div>
            if layout.show_topic_card {
                <TopicCard
                    source={(*topic_source).clone()}
                    fallback={conference.config.fallback_topics.clone()}
                    placement={layout.topic_placement}
                />
            }
            if layout.show_countdown {
                <CountdownOverlay on_expired={props.on_time_up.clone()} />
            }
        </Suspense>
    }
}
