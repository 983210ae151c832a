use crate::browser;
use crate::hooks::{ActionsHandle, ConferenceContext};
use conference_view_core::{ConferenceConfig, ConnectionSetup, SessionContext, SessionFlags};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConferenceProviderProps {
    /// Latest snapshot from the conferencing SDK
    pub session: SessionContext,
    pub actions: ActionsHandle,
    /// Taken from local storage when not given
    #[prop_or_default]
    pub flags: Option<SessionFlags>,
    #[prop_or_default]
    pub config: ConferenceConfig,
    pub children: Children,
}

/// Publishes SDK state, session flags and config to the conference components
#[function_component(ConferenceProvider)]
pub fn conference_provider(props: &ConferenceProviderProps) -> Html {
    // Flags are read once per mount, never re-read on re-render
    let flags = {
        let given = props.flags.clone();
        use_state(move || given.unwrap_or_else(browser::load_session_flags))
    };
    let config = {
        let config = props.config.clone();
        use_memo(config, |config| config.clone())
    };
    let setup = {
        let playlist = props.config.audio_playlist.clone();
        use_mut_ref(move || ConnectionSetup::new(playlist))
    };

    {
        let actions = props.actions.clone();
        use_effect_with(props.session.is_connected, move |connected| {
            setup
                .borrow_mut()
                .on_connection_change(*connected, actions.as_ref());
            || ()
        });
    }

    let context = ConferenceContext {
        session: props.session.clone(),
        flags: (*flags).clone(),
        config: Rc::clone(&config),
        actions: props.actions.clone(),
    };

    html! {
        <ContextProvider<ConferenceContext> {context}>
            {props.children.clone()}
        </ContextProvider<ConferenceContext>>
    }
}
