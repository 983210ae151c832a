use crate::hooks::use_topic;
use crate::net::TopicSourceHandle;
use conference_view_core::domain::TopicPlacement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopicCardProps {
    pub source: TopicSourceHandle,
    pub fallback: Vec<String>,
    pub placement: TopicPlacement,
}

/// Discussion topic with a refresh button
#[function_component(TopicCard)]
pub fn topic_card(props: &TopicCardProps) -> Html {
    let topic = use_topic(props.source.clone(), props.fallback.clone());

    let on_refresh = {
        let refresh = topic.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let placement = match props.placement {
        TopicPlacement::Docked => "conference-topic--docked",
        TopicPlacement::Inline => "conference-topic--inline",
    };

    html! {
        <div class={classes!("conference-topic", placement)}>
            <div class="conference-topic__content">
                <span class="conference-topic__label">{"Topic:"}</span>
                <span class="conference-topic__text">{topic.view.text.clone()}</span>
                <button
                    class="conference-topic__refresh"
                    onclick={on_refresh}
                >
                    {"⟳ Refresh"}
                </button>
            </div>
        </div>
    }
}
