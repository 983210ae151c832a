use crate::components::{ConferenceMainView, PreviewName};
use crate::hooks::ActionsHandle;
use crate::providers::ConferenceProvider;
use conference_view_core::application::parse_playlist;
use conference_view_core::{
    ConferenceActions, ConferenceConfig, PlaylistItem, SessionContext, SessionStoreKey, ViewId,
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum AppState {
    Preview { name: String },
    InRoom { name: String, role: String },
}

/// Stand-in for the SDK's action surface; logs what would be sent
struct LoggingActions;

impl ConferenceActions for LoggingActions {
    fn set_audio_playlist(&self, items: &[PlaylistItem]) {
        tracing::info!("🎵 Audio playlist set: {} tracks", items.len());
    }

    fn observe_session_store(&self, keys: &[SessionStoreKey]) {
        tracing::info!("👀 Observing session store keys: {:?}", keys);
    }
}

/// Extract the demo role from the `role` query parameter
fn get_role_from_url() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let parsed = web_sys::Url::new(&href).ok()?;
    let role = parsed.search_params().get("role")?;
    tracing::info!("Found role in URL: {}", role);
    Some(role)
}

fn demo_config() -> ConferenceConfig {
    let config = ConferenceConfig::default();
    match option_env!("CONFERENCE_AUDIO_PLAYLIST").map(parse_playlist) {
        Some(Ok(playlist)) => config.with_audio_playlist(playlist),
        Some(Err(e)) => {
            tracing::error!("❌ Ignoring audio playlist: {}", e);
            config
        }
        None => config,
    }
}

fn render_demo_view(view: ViewId) -> Html {
    html! {
        <div class={classes!("conference-view", format!("conference-view--{view}"))}>
            {format!("{view} view")}
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Preview {
        name: String::new(),
    });
    let actions = use_memo((), |_| ActionsHandle::new(LoggingActions));
    let config = use_memo((), |_| demo_config());

    let on_name_change = {
        let state = state.clone();
        Callback::from(move |name: String| {
            state.set(AppState::Preview { name });
        })
    };

    let on_join = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if let AppState::Preview { name } = &*state {
                let role = get_role_from_url().unwrap_or_else(|| "student".to_string());
                tracing::info!("Joining room as '{}' with role '{}'", name, role);
                state.set(AppState::InRoom {
                    name: name.clone(),
                    role,
                });
            }
        })
    };

    let on_time_up = Callback::from(|_: ()| {
        tracing::info!("⏰ Session time is up");
    });

    html! {
        <div class="app">
            {match &*state {
                AppState::Preview { name } => html! {
                    <PreviewName
                        name={AttrValue::from(name.clone())}
                        on_change={on_name_change}
                        on_join={on_join}
                        enable_join=true
                    />
                },
                AppState::InRoom { role, .. } => html! {
                    <ConferenceProvider
                        session={SessionContext::for_role(role.as_str())}
                        actions={(*actions).clone()}
                        config={(*config).clone()}
                    >
                        <ConferenceMainView
                            render_view={Callback::from(render_demo_view)}
                            on_time_up={Some(on_time_up)}
                        />
                    </ConferenceProvider>
                },
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_transitions() {
        let state = AppState::Preview {
            name: "Sam".to_string(),
        };

        if let AppState::Preview { name } = state {
            let next = AppState::InRoom {
                name,
                role: "student".to_string(),
            };
            assert!(matches!(next, AppState::InRoom { .. }));
        } else {
            panic!("Expected Preview state");
        }
    }

    #[test]
    fn test_demo_config_uses_defaults() {
        let config = demo_config();
        assert_eq!(config.fallback_topics[0], "Introduction");
    }
}
