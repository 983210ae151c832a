use conference_view_core::domain::{Peer, Track, UiMode, UiViewMode};
use conference_view_core::{select_view, ViewId};
use conference_view_tests::ConferenceWorld;
use cucumber::{given, then, when};

fn view_from_slug(slug: &str) -> ViewId {
    *ViewId::ALL
        .iter()
        .find(|view| view.as_str() == slug)
        .unwrap_or_else(|| panic!("Unknown view '{}'", slug))
}

fn layout_from_slug(slug: &str) -> UiViewMode {
    match slug {
        "active-speaker" => UiViewMode::ActiveSpeaker,
        "grid" => UiViewMode::Grid,
        other => panic!("Unknown layout '{}'", other),
    }
}

// ===== Given Steps =====

#[given("the local peer has no role yet")]
async fn no_role(world: &mut ConferenceWorld) {
    world.context.local_peer_role = None;
}

#[given(expr = "the local peer has the role {string}")]
async fn local_role(world: &mut ConferenceWorld, role: String) {
    world.context.is_connected = true;
    world.context.local_peer_role = Some(role.into());
}

#[given(expr = "the HLS viewer role is {string}")]
async fn hls_role(world: &mut ConferenceWorld, role: String) {
    world.context.hls_viewer_role = Some(role.into());
}

#[given(expr = "the waiting room role is {string}")]
async fn waiting_role(world: &mut ConferenceWorld, role: String) {
    world.context.waiting_viewer_role = Some(role.into());
}

#[given(regex = r"^(embedded content|a PDF|a whiteboard|an inset layout|a video playlist|a pinned track|an active speaker) is shared$")]
async fn content_shared(world: &mut ConferenceWorld, content: String) {
    let ctx = std::mem::take(&mut world.context);
    world.context = match content.as_str() {
        "embedded content" => ctx.with_embed("https://example.com/embed"),
        "a PDF" => ctx.with_pdf("https://example.com/slides.pdf"),
        "a whiteboard" => ctx.with_whiteboard_owner("p2"),
        "an inset layout" => ctx.with_ui_mode(UiMode::Inset),
        "a video playlist" => ctx.with_playlist_sharing(),
        "a pinned track" => ctx.with_pinned_track(Track::new("t1")),
        "an active speaker" => ctx.with_ui_view_mode(UiViewMode::ActiveSpeaker),
        other => panic!("Unknown content '{}'", other),
    };
}

#[given("a whiteboard is open")]
async fn whiteboard_open(world: &mut ConferenceWorld) {
    content_shared(world, "a whiteboard".to_string()).await;
}

#[given("a track is pinned")]
async fn track_pinned(world: &mut ConferenceWorld) {
    content_shared(world, "a pinned track".to_string()).await;
}

#[given(expr = "peer {string} is sharing their screen")]
async fn screen_share(world: &mut ConferenceWorld, peer: String) {
    world.context.screen_sharing_peer = Some(Peer::new(peer.clone(), peer));
}

#[given(expr = "peer {string} is sharing screen audio")]
async fn screen_share_audio(world: &mut ConferenceWorld, peer: String) {
    world.context.screen_sharing_audio_peer = Some(Peer::new(peer.clone(), peer));
}

#[given("the session is audio only")]
async fn audio_only(world: &mut ConferenceWorld) {
    world.context.is_audio_only = true;
}

#[given(expr = "the session is headless with the {string} layout")]
async fn headless(world: &mut ConferenceWorld, layout: String) {
    world.context.is_headless = true;
    world.context.headless_ui_mode = Some(layout_from_slug(&layout));
}

// ===== When Steps =====

#[when("the main view is selected")]
async fn select(world: &mut ConferenceWorld) {
    world.selected_view = Some(select_view(&world.context));
}

// ===== Then Steps =====

#[then("no view is rendered")]
async fn nothing_rendered(world: &mut ConferenceWorld) {
    assert_eq!(world.selected_view, Some(None));
}

#[then(expr = "the {string} view is rendered")]
async fn view_rendered(world: &mut ConferenceWorld, slug: String) {
    assert_eq!(world.selected_view, Some(Some(view_from_slug(&slug))));
}
