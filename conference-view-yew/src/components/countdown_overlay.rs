use crate::hooks::{use_conference, use_session_countdown};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CountdownOverlayProps {
    #[prop_or_default]
    pub on_expired: Option<Callback<()>>,
}

/// Session countdown pinned to the top centre; red once time is short
#[function_component(CountdownOverlay)]
pub fn countdown_overlay(props: &CountdownOverlayProps) -> Html {
    let conference = use_conference();
    let countdown = use_session_countdown(
        conference.flags.end_time.clone(),
        conference.config.urgent_threshold_secs,
        conference.config.tick_interval_ms,
        props.on_expired.clone(),
    );

    let style = format!(
        "position: fixed; top: 10px; left: 50%; transform: translateX(-50%); \
         font-size: 18px; font-weight: bold; color: {};",
        countdown.tone().color()
    );

    html! {
        <div
            class={classes!("conference-countdown", countdown.urgent.then_some("conference-countdown--urgent"))}
            {style}
        >
            {countdown.display.clone()}
        </div>
    }
}
