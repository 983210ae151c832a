use crate::browser;
use conference_view_core::domain::{join_label, normalize_name};
use conference_view_core::{can_join, SessionFlags};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreviewNameProps {
    pub name: AttrValue,
    /// Receives the typed name with leading whitespace removed
    pub on_change: Callback<String>,
    pub on_join: Callback<()>,
    /// Set by the preview flow once devices and token are ready
    pub enable_join: bool,
    #[prop_or_default]
    pub streaming_kit: bool,
    /// Taken from local storage when not given
    #[prop_or_default]
    pub flags: Option<SessionFlags>,
}

/// Name entry and join button shown before entering the room
#[function_component(PreviewName)]
pub fn preview_name(props: &PreviewNameProps) -> Html {
    let flags = {
        let given = props.flags.clone();
        use_state(move || given.unwrap_or_else(browser::load_session_flags))
    };

    let enabled = can_join(&props.name, props.enable_join, &flags);

    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(normalize_name(&input.value()));
        })
    };

    let on_click = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| {
            if enabled {
                on_join.emit(());
            }
        })
    };

    html! {
        <form class="conference-preview__form" onsubmit={on_submit}>
            <input
                id="name"
                class="conference-preview__input"
                type="text"
                required=true
                autofocus=true
                autocomplete="name"
                placeholder="Enter your name"
                value={props.name.clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="conference-preview__button"
                disabled={!enabled}
                onclick={on_click}
            >
                {join_label(props.streaming_kit)}
            </button>
        </form>
    }
}
