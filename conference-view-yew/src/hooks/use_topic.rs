use crate::net::TopicSourceHandle;
use conference_view_core::TopicPoller;
use yew::prelude::*;

/// Render-ready view of the topic poller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicView {
    pub text: String,
    pub loading: bool,
}

impl From<&TopicPoller> for TopicView {
    fn from(poller: &TopicPoller) -> Self {
        Self {
            text: poller.display_text().to_string(),
            loading: poller.is_loading(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TopicHandle {
    pub view: TopicView,
    /// Fetch a new question; overlapping refreshes keep only the newest answer
    pub refresh: Callback<()>,
}

/// Discussion topic fetched from `source` on mount and on refresh
#[hook]
pub fn use_topic(source: TopicSourceHandle, fallback: Vec<String>) -> TopicHandle {
    let poller = use_mut_ref(move || TopicPoller::new(fallback));
    let view = {
        let poller = poller.clone();
        use_state(move || TopicView::from(&*poller.borrow()))
    };

    let refresh = {
        let poller = poller.clone();
        let view = view.clone();
        use_callback(source, move |_: (), source| {
            let ticket = poller.borrow_mut().begin_request();
            view.set(TopicView::from(&*poller.borrow()));

            let poller = poller.clone();
            let view = view.clone();
            let fetch = source.fetch();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch.await;
                poller.borrow_mut().complete(ticket, result);
                view.set(TopicView::from(&*poller.borrow()));
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    TopicHandle {
        view: (*view).clone(),
        refresh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference_view_core::{TopicError, TopicResponse};

    #[test]
    fn test_view_tracks_poller() {
        let mut poller = TopicPoller::new(vec!["Introduction".to_string()]);
        assert_eq!(
            TopicView::from(&poller),
            TopicView {
                text: "Introduction".to_string(),
                loading: false
            }
        );

        let ticket = poller.begin_request();
        assert!(TopicView::from(&poller).loading);
        assert_eq!(TopicView::from(&poller).text, "Loading...");

        poller.complete(
            ticket,
            Ok(TopicResponse {
                success: true,
                question: Some("Describe your city".to_string()),
            }),
        );
        assert_eq!(TopicView::from(&poller).text, "Describe your city");

        let ticket = poller.refresh();
        poller.complete(ticket, Err(TopicError::Network("timeout".to_string())));
        let view = TopicView::from(&poller);
        assert!(!view.loading);
        assert_eq!(view.text, "Describe your city");
    }
}
