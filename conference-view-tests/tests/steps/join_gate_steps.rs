use conference_view_core::can_join;
use conference_view_core::domain::{join_label, keys, normalize_name};
use conference_view_tests::ConferenceWorld;
use cucumber::{given, then, when};

// ===== Given Steps =====

#[given(expr = "local storage holds learner {string} and type {string}")]
async fn storage_identity(world: &mut ConferenceWorld, learner: String, kind: String) {
    world.storage.insert(keys::LEARNER.to_string(), learner);
    world.storage.insert(keys::TYPE.to_string(), kind);
}

#[given(regex = r"^the preview flow (allows|blocks) joining$")]
async fn preview_permission(world: &mut ConferenceWorld, permission: String) {
    world.enable_join = permission == "allows";
}

// ===== When Steps =====

#[when(expr = "I enter the name {string}")]
async fn enter_name(world: &mut ConferenceWorld, name: String) {
    world.name = normalize_name(&name);
}

// ===== Then Steps =====

#[then(regex = r"^the join button is (enabled|disabled)$")]
async fn join_button_state(world: &mut ConferenceWorld, state: String) {
    let enabled = can_join(&world.name, world.enable_join, &world.flags());
    assert_eq!(enabled, state == "enabled");
}

#[then("the name field is empty")]
async fn name_empty(world: &mut ConferenceWorld) {
    assert!(world.name.is_empty());
}

#[then(regex = r#"^the join button reads "([^"]*)" for the (streaming|room) kit$"#)]
async fn join_button_label(_world: &mut ConferenceWorld, label: String, kit: String) {
    assert_eq!(join_label(kit == "streaming"), label);
}
