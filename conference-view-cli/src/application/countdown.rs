use conference_view_core::SessionCountdown;
use std::future::Future;
use std::time::Duration;

/// How a countdown run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Reached zero, or was already at zero when started
    Finished,
    /// Shutdown signal arrived first
    Interrupted,
    /// No usable end time; nothing to run
    Unavailable,
}

/// Drive `countdown` once per `period` until it reaches zero or `shutdown`
/// resolves. `on_tick` sees the initial state and every tick after it.
pub async fn run_countdown<S, F>(
    countdown: &mut SessionCountdown,
    period: Duration,
    shutdown: S,
    mut on_tick: F,
) -> CountdownOutcome
where
    S: Future<Output = ()>,
    F: FnMut(&SessionCountdown),
{
    on_tick(countdown);

    if matches!(countdown, SessionCountdown::Unavailable(_)) {
        return CountdownOutcome::Unavailable;
    }
    if !countdown.is_running() {
        return CountdownOutcome::Finished;
    }

    let mut interval = tokio::time::interval(period);
    // First tick completes immediately
    interval.tick().await;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let tick = countdown.tick();
                on_tick(countdown);
                if tick.is_final() {
                    return CountdownOutcome::Finished;
                }
            }
            _ = &mut shutdown => {
                tracing::info!(remaining = ?countdown.remaining_seconds(), "Countdown interrupted");
                return CountdownOutcome::Interrupted;
            }
        }
    }
}
