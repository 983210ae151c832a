use conference_view_core::application::parse_playlist;
use conference_view_core::ConnectionSetup;
use conference_view_tests::{ConferenceWorld, RecordedAction};
use cucumber::{given, then, when};

fn observed_count(world: &ConferenceWorld) -> usize {
    world
        .actions
        .recorded()
        .iter()
        .filter(|action| matches!(action, RecordedAction::ObserveSessionStore(_)))
        .count()
}

// ===== Given Steps =====

#[given(expr = "an audio playlist with {int} tracks is configured")]
async fn playlist_configured(world: &mut ConferenceWorld, tracks: usize) {
    let items: Vec<String> = (1..=tracks)
        .map(|i| {
            format!(
                r#"{{"id": "track-{i}", "name": "Track {i}", "url": "https://cdn.example.com/{i}.mp3"}}"#
            )
        })
        .collect();
    let playlist = parse_playlist(&format!("[{}]", items.join(","))).expect("valid playlist");
    world.setup = ConnectionSetup::new(playlist);
}

#[given("no audio playlist is configured")]
async fn no_playlist(world: &mut ConferenceWorld) {
    world.setup = ConnectionSetup::new(Vec::new());
}

// ===== When Steps =====

#[when(regex = r"^the room (connects|reports connected again|disconnects)$")]
async fn connection_changes(world: &mut ConferenceWorld, change: String) {
    let connected = change != "disconnects";
    world.setup.on_connection_change(connected, &world.actions);
}

// ===== Then Steps =====

#[then(expr = "the audio playlist with {int} tracks is registered")]
async fn playlist_registered(world: &mut ConferenceWorld, tracks: usize) {
    assert!(world
        .actions
        .recorded()
        .contains(&RecordedAction::SetAudioPlaylist(tracks)));
}

#[then("no audio playlist is registered")]
async fn no_playlist_registered(world: &mut ConferenceWorld) {
    assert!(!world
        .actions
        .recorded()
        .iter()
        .any(|action| matches!(action, RecordedAction::SetAudioPlaylist(_))));
}

#[then("the pinned message and spotlight keys are observed")]
async fn keys_observed(world: &mut ConferenceWorld) {
    assert!(world
        .actions
        .recorded()
        .contains(&RecordedAction::ObserveSessionStore(
            ConnectionSetup::OBSERVED_KEYS.to_vec()
        )));
}

#[then(regex = r"^the store keys were observed (\d+) times?$")]
async fn observed_times(world: &mut ConferenceWorld, times: usize) {
    assert_eq!(observed_count(world), times);
}
