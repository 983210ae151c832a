use crate::domain::ConfigError;
use chrono::{DateTime, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

/// Remaining seconds at or below which the countdown is shown as urgent
pub const URGENT_THRESHOLD_SECS: u32 = 120;

/// Shown instead of the countdown when the end time is unusable
pub const COUNTDOWN_PLACEHOLDER: &str = "--:--";

/// Configured end of the session, wall-clock UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTime {
    hours: u32,
    minutes: u32,
}

impl EndTime {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, ConfigError> {
        if hours > 23 || minutes > 59 {
            return Err(ConfigError::EndTimeOutOfRange(format!(
                "{hours:02}:{minutes:02}"
            )));
        }
        Ok(EndTime { hours, minutes })
    }

    /// Parse an optional stored value; absence is a configuration error
    pub fn parse_optional(value: Option<&str>) -> Result<Self, ConfigError> {
        value.ok_or(ConfigError::MissingEndTime)?.parse()
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds from `now` until this end time on the same UTC day.
    ///
    /// Negative once the end time has passed. Sub-second precision of `now`
    /// is ignored.
    pub fn seconds_until(&self, now: DateTime<Utc>) -> i64 {
        let end_minutes = i64::from(self.hours * 60 + self.minutes);
        let now_minutes = i64::from(now.hour() * 60 + now.minute());
        (end_minutes - now_minutes) * 60 - i64::from(now.second())
    }
}

impl FromStr for EndTime {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedEndTime(s.to_string());

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
        let component = |part: &str| -> Result<u32, ConfigError> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };

        EndTime::new(component(hours)?, component(minutes)?)
    }
}

impl fmt::Display for EndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; the scheduler keeps going
    Counting { remaining: u32 },
    /// This tick hit zero; zero callbacks have fired
    ReachedZero,
    /// Already at zero; the scheduler should be cancelled
    Stopped,
}

impl Tick {
    /// Whether the periodic task driving the timer should stop now
    pub fn is_final(&self) -> bool {
        !matches!(self, Tick::Counting { .. })
    }
}

type ZeroCallback = Box<dyn FnOnce()>;

/// Per-second countdown to the end of the session
///
/// The remaining time is computed once at start and then only moves down.
pub struct SessionTimer {
    end_time: EndTime,
    remaining_seconds: u32,
    urgent_threshold: u32,
    on_zero: Vec<ZeroCallback>,
}

impl SessionTimer {
    /// Start a countdown towards `end_time` as seen at `now`.
    ///
    /// An end time that has already passed clamps to zero.
    pub fn initialize(end_time: Option<&str>, now: DateTime<Utc>) -> Result<Self, ConfigError> {
        let end_time = EndTime::parse_optional(end_time)?;
        Ok(Self::from_end_time(end_time, now))
    }

    pub fn from_end_time(end_time: EndTime, now: DateTime<Utc>) -> Self {
        let remaining = end_time.seconds_until(now).max(0);
        let remaining_seconds = u32::try_from(remaining).unwrap_or(u32::MAX);

        tracing::debug!(
            end_time = %end_time,
            remaining_seconds,
            "Session countdown initialized"
        );
        if remaining_seconds == 0 {
            tracing::info!(end_time = %end_time, "Time's up!");
        }

        Self {
            end_time,
            remaining_seconds,
            urgent_threshold: URGENT_THRESHOLD_SECS,
            on_zero: Vec::new(),
        }
    }

    pub fn with_urgent_threshold(mut self, seconds: u32) -> Self {
        self.urgent_threshold = seconds;
        self
    }

    pub fn end_time(&self) -> EndTime {
        self.end_time
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_urgent(&self) -> bool {
        self.remaining_seconds <= self.urgent_threshold
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Register a callback for the moment the countdown reaches zero.
    ///
    /// On a timer that is already at zero the callback runs immediately.
    /// Either way it runs exactly once.
    pub fn on_reach_zero(&mut self, callback: impl FnOnce() + 'static) {
        if self.is_expired() {
            callback();
        } else {
            self.on_zero.push(Box::new(callback));
        }
    }

    pub fn tick(&mut self) -> Tick {
        if self.remaining_seconds == 0 {
            return Tick::Stopped;
        }

        self.remaining_seconds -= 1;
        if self.remaining_seconds > 0 {
            return Tick::Counting {
                remaining: self.remaining_seconds,
            };
        }

        tracing::info!(end_time = %self.end_time, "Time's up!");
        for callback in self.on_zero.drain(..) {
            callback();
        }
        Tick::ReachedZero
    }

    /// `M:SS`, minutes unbounded
    pub fn display(&self) -> String {
        format_countdown(self.remaining_seconds)
    }
}

impl fmt::Debug for SessionTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTimer")
            .field("end_time", &self.end_time)
            .field("remaining_seconds", &self.remaining_seconds)
            .field("urgent_threshold", &self.urgent_threshold)
            .field("pending_callbacks", &self.on_zero.len())
            .finish()
    }
}

pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Countdown as shown by the overlay: running, or degraded to a placeholder
/// because the end time could not be used.
#[derive(Debug)]
pub enum SessionCountdown {
    Active(SessionTimer),
    Unavailable(ConfigError),
}

impl SessionCountdown {
    /// Start from the stored end time. Configuration problems are logged
    /// here, once, and the countdown degrades to the placeholder.
    pub fn start(end_time: Option<&str>, now: DateTime<Utc>) -> Self {
        match SessionTimer::initialize(end_time, now) {
            Ok(timer) => SessionCountdown::Active(timer),
            Err(e) => {
                tracing::warn!(error = %e, "Session countdown disabled");
                SessionCountdown::Unavailable(e)
            }
        }
    }

    pub fn with_urgent_threshold(self, seconds: u32) -> Self {
        match self {
            SessionCountdown::Active(timer) => {
                SessionCountdown::Active(timer.with_urgent_threshold(seconds))
            }
            unavailable => unavailable,
        }
    }

    pub fn tick(&mut self) -> Tick {
        match self {
            SessionCountdown::Active(timer) => timer.tick(),
            SessionCountdown::Unavailable(_) => Tick::Stopped,
        }
    }

    pub fn on_reach_zero(&mut self, callback: impl FnOnce() + 'static) {
        if let SessionCountdown::Active(timer) = self {
            timer.on_reach_zero(callback);
        }
    }

    pub fn remaining_seconds(&self) -> Option<u32> {
        match self {
            SessionCountdown::Active(timer) => Some(timer.remaining_seconds()),
            SessionCountdown::Unavailable(_) => None,
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, SessionCountdown::Active(timer) if timer.is_urgent())
    }

    /// Whether a periodic tick is still needed
    pub fn is_running(&self) -> bool {
        matches!(self, SessionCountdown::Active(timer) if !timer.is_expired())
    }

    pub fn display(&self) -> String {
        match self {
            SessionCountdown::Active(timer) => timer.display(),
            SessionCountdown::Unavailable(_) => COUNTDOWN_PLACEHOLDER.to_string(),
        }
    }
}
