//! Launch window calendar and configuration.
//!
//! The launch window is the recurring daily time-of-day span during which
//! new print jobs may be *started*. Outside of it the shop is closed for
//! launches; jobs already running are allowed to finish overnight.
//!
//! The window is single-span and non-wrapping: `daily_start < daily_end`
//! within one calendar day. Overnight windows (wrapping past midnight) are
//! rejected at configuration time rather than silently mishandled. A window
//! with `daily_start == daily_end` normalizes to "always open".

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default daily window start, `"HH:MM"`.
pub const DEFAULT_LAUNCH_START: &str = "09:30";
/// Default daily window end, `"HH:MM"`.
pub const DEFAULT_LAUNCH_END: &str = "19:30";

/// A launch-window configuration error.
///
/// Configuration problems are fatal and surfaced to the operator; they
/// must never degrade into a silent always-closed window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A time-of-day string did not parse as `HH:MM`.
    #[error("invalid time of day '{value}': expected HH:MM")]
    InvalidTimeOfDay {
        /// The offending input.
        value: String,
    },
    /// The window would wrap past midnight.
    #[error("launch window {start}..{end} wraps past midnight; overnight windows are not supported")]
    WrappingWindow {
        /// Configured daily start.
        start: NaiveTime,
        /// Configured daily end.
        end: NaiveTime,
    },
}

/// The recurring daily launch window.
///
/// Half-open on each day: an instant is inside the window iff its
/// time-of-day lies in `[daily_start, daily_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchWindow {
    daily_start: NaiveTime,
    daily_end: NaiveTime,
}

impl LaunchWindow {
    /// Creates a window, rejecting wrapping configurations.
    ///
    /// `daily_start == daily_end` is accepted and means "always open".
    pub fn new(daily_start: NaiveTime, daily_end: NaiveTime) -> Result<Self, ConfigError> {
        if daily_start > daily_end {
            return Err(ConfigError::WrappingWindow {
                start: daily_start,
                end: daily_end,
            });
        }
        Ok(Self {
            daily_start,
            daily_end,
        })
    }

    /// Parses a window from two `"HH:MM"` strings.
    pub fn parse(daily_start: &str, daily_end: &str) -> Result<Self, ConfigError> {
        Self::new(parse_time_of_day(daily_start)?, parse_time_of_day(daily_end)?)
    }

    /// Daily window start.
    #[inline]
    pub fn daily_start(&self) -> NaiveTime {
        self.daily_start
    }

    /// Daily window end.
    #[inline]
    pub fn daily_end(&self) -> NaiveTime {
        self.daily_end
    }

    /// Whether the window spans the entire day.
    #[inline]
    pub fn is_always_open(&self) -> bool {
        self.daily_start == self.daily_end
    }

    /// Whether `at` falls inside the launch window.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        if self.is_always_open() {
            return true;
        }
        let t = at.time();
        t >= self.daily_start && t < self.daily_end
    }

    /// Smallest instant at or after `at` that is inside the window.
    ///
    /// Idempotent for in-window inputs: if `at` is already inside, it is
    /// returned unchanged. Before today's start the answer is today at
    /// `daily_start`; at or after today's end, tomorrow at `daily_start`.
    pub fn next_open(&self, at: NaiveDateTime) -> NaiveDateTime {
        if self.contains(at) {
            return at;
        }
        if at.time() < self.daily_start {
            at.date().and_time(self.daily_start)
        } else {
            (at + Duration::days(1)).date().and_time(self.daily_start)
        }
    }

    /// The window-close instant (`daily_end`) on `at`'s calendar day.
    ///
    /// For an in-window `at` this is strictly in the future, which is what
    /// makes the dead-zone walk terminate.
    pub fn close_on_day(&self, at: NaiveDateTime) -> NaiveDateTime {
        at.date().and_time(self.daily_end)
    }
}

/// Externally persisted launch-window settings, as stored (`"HH:MM"` strings).
///
/// Loaded once per render cycle and treated as constant for the duration of
/// a layout computation. [`LaunchSettings::window`] is the fail-fast parse
/// boundary between stored strings and the typed calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSettings {
    /// Daily window start, `"HH:MM"`.
    #[serde(default = "default_launch_start")]
    pub launch_start_time: String,
    /// Daily window end, `"HH:MM"`.
    #[serde(default = "default_launch_end")]
    pub launch_end_time: String,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            launch_start_time: default_launch_start(),
            launch_end_time: default_launch_end(),
        }
    }
}

impl LaunchSettings {
    /// Parses the stored strings into a typed [`LaunchWindow`].
    pub fn window(&self) -> Result<LaunchWindow, ConfigError> {
        LaunchWindow::parse(&self.launch_start_time, &self.launch_end_time)
    }
}

fn default_launch_start() -> String {
    DEFAULT_LAUNCH_START.to_string()
}

fn default_launch_end() -> String {
    DEFAULT_LAUNCH_END.to_string()
}

/// Parses a strict `HH:MM` time of day.
fn parse_time_of_day(s: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| ConfigError::InvalidTimeOfDay {
        value: s.to_string(),
    })
}
