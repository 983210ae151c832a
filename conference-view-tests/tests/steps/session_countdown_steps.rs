use chrono::{TimeZone, Utc};
use conference_view_core::Tick;
use conference_view_tests::ConferenceWorld;
use cucumber::{given, then, when};

// ===== Given Steps =====

#[given(expr = "the session ends at {string}")]
async fn session_ends_at(world: &mut ConferenceWorld, end_time: String) {
    world.end_time = Some(end_time);
}

#[given("no session end time is stored")]
async fn no_end_time(world: &mut ConferenceWorld) {
    world.end_time = None;
}

#[given(regex = r"^the countdown starts at (\d{2}):(\d{2}):(\d{2}) UTC$")]
async fn countdown_starts_at(world: &mut ConferenceWorld, hour: u32, minute: u32, second: u32) {
    let start = Utc
        .with_ymd_and_hms(2024, 5, 1, hour, minute, second)
        .single()
        .expect("valid start time");
    world.started_at = Some(start);
}

// ===== When Steps =====

#[when(expr = "{int} seconds pass")]
async fn seconds_pass(world: &mut ConferenceWorld, seconds: u32) {
    world.ticks += seconds;
}

// ===== Then Steps =====

#[then(expr = "the countdown shows {string}")]
async fn countdown_shows(world: &mut ConferenceWorld, display: String) {
    assert_eq!(world.run_countdown().display, display);
}

#[then(expr = "{int} seconds remain")]
async fn seconds_remain(world: &mut ConferenceWorld, seconds: u32) {
    assert_eq!(world.run_countdown().remaining, Some(seconds));
}

#[then(regex = r"^the time-up notice fired (\d+) times?$")]
async fn time_up_fired(world: &mut ConferenceWorld, count: u32) {
    assert_eq!(world.run_countdown().zero_callbacks, count);
}

#[then(expr = "the countdown reached zero on tick {int}")]
async fn reached_zero_on(world: &mut ConferenceWorld, tick: usize) {
    let report = world.run_countdown();
    assert_eq!(report.ticks.get(tick - 1), Some(&Tick::ReachedZero));
}

#[then(expr = "the {int} ticks after zero were ignored")]
async fn ticks_after_zero_ignored(world: &mut ConferenceWorld, count: usize) {
    let report = world.run_countdown();
    let after_zero: Vec<_> = report
        .ticks
        .iter()
        .skip_while(|tick| !tick.is_final())
        .skip_while(|tick| **tick == Tick::ReachedZero)
        .collect();
    assert_eq!(after_zero.len(), count);
    assert!(after_zero.iter().all(|tick| **tick == Tick::Stopped));
}

#[then("the countdown is urgent")]
async fn is_urgent(world: &mut ConferenceWorld) {
    assert!(world.run_countdown().urgent);
}

#[then("the countdown is not urgent")]
async fn is_not_urgent(world: &mut ConferenceWorld) {
    assert!(!world.run_countdown().urgent);
}
