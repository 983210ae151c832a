use conference_view_core::domain::Completion;
use conference_view_core::{TopicError, TopicPoller, TopicResponse};
use conference_view_tests::ConferenceWorld;
use cucumber::{given, then, when};

fn complete(world: &mut ConferenceWorld, request: usize, result: Result<TopicResponse, TopicError>) {
    let ticket = world.ticket(request - 1);
    let completion = world.poller().complete(ticket, result);
    world.last_completion = Some(completion);
}

// ===== Given Steps =====

#[given(expr = "the fallback topics are {string} and {string}")]
async fn fallback_topics(world: &mut ConferenceWorld, first: String, second: String) {
    world.poller = Some(TopicPoller::new(vec![first, second]));
}

// ===== When Steps =====

#[when("a topic request is issued")]
async fn request_issued(world: &mut ConferenceWorld) {
    let ticket = world.poller().begin_request();
    world.tickets.push(ticket);
}

#[when(expr = "request {int} returns the question {string}")]
async fn request_returns(world: &mut ConferenceWorld, request: usize, question: String) {
    let body = format!(r#"{{"success": true, "question": "{}"}}"#, question);
    complete(world, request, TopicResponse::parse(&body));
}

#[when(expr = "request {int} fails with status {int}")]
async fn request_fails(world: &mut ConferenceWorld, request: usize, status: u16) {
    complete(world, request, Err(TopicError::Status(status)));
}

#[when(expr = "request {int} is rejected by the server")]
async fn request_rejected(world: &mut ConferenceWorld, request: usize) {
    complete(world, request, TopicResponse::parse(r#"{"success": false}"#));
}

// ===== Then Steps =====

#[then(expr = "the topic card shows {string}")]
async fn topic_shows(world: &mut ConferenceWorld, text: String) {
    assert_eq!(world.poller().display_text(), text);
}

#[then("the topic is not loading")]
async fn not_loading(world: &mut ConferenceWorld) {
    assert!(!world.poller().is_loading());
}

#[then("the last response was discarded")]
async fn last_discarded(world: &mut ConferenceWorld) {
    assert_eq!(world.last_completion, Some(Completion::Stale));
}
