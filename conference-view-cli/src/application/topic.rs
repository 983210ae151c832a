use crate::infrastructure::TopicClient;
use conference_view_core::domain::Completion;
use conference_view_core::{TopicError, TopicPoller, TopicResponse};
use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinSet;

/// Anything that can answer a topic request
pub trait TopicSource: Clone + Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<TopicResponse, TopicError>> + Send;
}

impl TopicSource for TopicClient {
    fn fetch(&self) -> impl Future<Output = Result<TopicResponse, TopicError>> + Send {
        TopicClient::fetch(self)
    }
}

/// Issue `requests` overlapping fetches against the poller and apply the
/// responses in arrival order. Returns one completion per request, in
/// arrival order. A fetch task that panics or is cancelled completes its
/// request as a network failure.
pub async fn fetch_topics<S: TopicSource>(
    source: &S,
    poller: &mut TopicPoller,
    requests: usize,
) -> Vec<Completion> {
    let mut in_flight = JoinSet::new();
    let mut tickets = HashMap::with_capacity(requests);

    for _ in 0..requests {
        let ticket = poller.begin_request();
        let source = source.clone();
        let handle = in_flight.spawn(async move { source.fetch().await });
        tickets.insert(handle.id(), ticket);
    }

    let mut completions = Vec::with_capacity(requests);
    while let Some(joined) = in_flight.join_next_with_id().await {
        let (id, result) = match joined {
            Ok((id, result)) => (id, result),
            Err(e) => {
                tracing::error!(error = %e, "Topic fetch task failed");
                (e.id(), Err(TopicError::Network(e.to_string())))
            }
        };
        if let Some(ticket) = tickets.remove(&id) {
            completions.push(poller.complete(ticket, result));
        }
    }
    completions
}
