use conference_view_core::domain::{keys, TopicPlacement};
use conference_view_core::OverlayLayout;
use conference_view_tests::ConferenceWorld;
use cucumber::{given, then, when};

fn layout(world: &ConferenceWorld) -> OverlayLayout {
    world.layout.expect("Overlay layout not computed")
}

// ===== Given Steps =====

#[given(regex = r"^the peer learner flag is (set|unset)$")]
async fn learner_flag(world: &mut ConferenceWorld, state: String) {
    if state == "set" {
        world
            .storage
            .insert(keys::IS_PEER_LEARNER.to_string(), "true".to_string());
    } else {
        world.storage.remove(keys::IS_PEER_LEARNER);
    }
}

#[given(regex = r"^the screen is (wide|narrow)$")]
async fn screen_width(world: &mut ConferenceWorld, width: String) {
    world.is_mobile = width == "narrow";
}

// ===== When Steps =====

#[when("the overlay layout is computed")]
async fn compute_layout(world: &mut ConferenceWorld) {
    world.layout = Some(OverlayLayout::compute(
        &world.flags(),
        world.context.local_peer_role.as_ref(),
        world.is_mobile,
    ));
}

// ===== Then Steps =====

#[then(regex = r"^the topic card is (shown|hidden)$")]
async fn topic_card_visibility(world: &mut ConferenceWorld, state: String) {
    assert_eq!(layout(world).show_topic_card, state == "shown");
}

#[then(regex = r"^the countdown is (shown|hidden)$")]
async fn countdown_visibility(world: &mut ConferenceWorld, state: String) {
    assert_eq!(layout(world).show_countdown, state == "shown");
}

#[then(expr = "the main area takes {int} percent of the height")]
async fn main_height(world: &mut ConferenceWorld, percent: u8) {
    assert_eq!(layout(world).main_height_percent, percent);
}

#[then("the topic card is placed inline")]
async fn placed_inline(world: &mut ConferenceWorld) {
    assert_eq!(layout(world).topic_placement, TopicPlacement::Inline);
}
