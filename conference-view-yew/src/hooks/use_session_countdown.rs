use conference_view_core::domain::CountdownTone;
use conference_view_core::SessionCountdown;
use futures::future::abortable;
use futures::StreamExt;
use gloo_timers::future::IntervalStream;
use yew::prelude::*;

/// Render-ready view of the countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    /// `M:SS`, or the placeholder when the end time is unusable
    pub display: String,
    pub urgent: bool,
    pub remaining_seconds: Option<u32>,
}

impl CountdownState {
    pub fn tone(&self) -> CountdownTone {
        CountdownTone::from_urgency(self.urgent)
    }
}

impl From<&SessionCountdown> for CountdownState {
    fn from(countdown: &SessionCountdown) -> Self {
        Self {
            display: countdown.display(),
            urgent: countdown.is_urgent(),
            remaining_seconds: countdown.remaining_seconds(),
        }
    }
}

/// Countdown to `end_time` (`HH:MM` UTC), ticking every `tick_ms`.
///
/// The remaining time is computed once on mount. `on_expired` runs once when
/// zero is reached, or right after mount if the session already ended. The
/// ticking task stops at zero and is aborted when the component unmounts.
#[hook]
pub fn use_session_countdown(
    end_time: Option<String>,
    urgent_threshold: u32,
    tick_ms: u32,
    on_expired: Option<Callback<()>>,
) -> CountdownState {
    let countdown = use_mut_ref(move || {
        SessionCountdown::start(end_time.as_deref(), chrono::Utc::now())
            .with_urgent_threshold(urgent_threshold)
    });
    let state = {
        let countdown = countdown.clone();
        use_state(move || CountdownState::from(&*countdown.borrow()))
    };

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(on_expired) = on_expired {
                countdown
                    .borrow_mut()
                    .on_reach_zero(move || on_expired.emit(()));
            }

            let running = countdown.borrow().is_running();
            let (ticker, abort) = abortable(async move {
                if !running {
                    return;
                }
                let mut ticks = IntervalStream::new(tick_ms);
                while ticks.next().await.is_some() {
                    let tick = countdown.borrow_mut().tick();
                    state.set(CountdownState::from(&*countdown.borrow()));
                    if tick.is_final() {
                        tracing::debug!("Countdown finished, ticking stopped");
                        break;
                    }
                }
            });
            wasm_bindgen_futures::spawn_local(async move {
                let _ = ticker.await;
            });

            move || abort.abort()
        });
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use conference_view_core::domain::COUNTDOWN_PLACEHOLDER;

    #[test]
    fn test_state_from_active_countdown() {
        let now = Utc.with_ymd_and_hms(2024, 5, 14, 10, 28, 30).unwrap();
        let countdown = SessionCountdown::start(Some("10:30"), now);

        let state = CountdownState::from(&countdown);

        assert_eq!(state.display, "1:30");
        assert!(state.urgent);
        assert_eq!(state.remaining_seconds, Some(90));
        assert_eq!(state.tone(), CountdownTone::Urgent);
    }

    #[test]
    fn test_state_from_unavailable_countdown() {
        let countdown = SessionCountdown::start(None, Utc::now());

        let state = CountdownState::from(&countdown);

        assert_eq!(state.display, COUNTDOWN_PLACEHOLDER);
        assert!(!state.urgent);
        assert_eq!(state.remaining_seconds, None);
        assert_eq!(state.tone(), CountdownTone::Normal);
    }
}
