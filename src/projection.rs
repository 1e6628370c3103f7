//! Duration projection: estimated busy-minutes → wall-clock completion.
//!
//! The layout engine consumes projection as an external primitive and only
//! relies on two contract points: the result is monotonic in
//! `estimated_minutes`, and zero minutes project to `start` unchanged.
//! Which policy applies is a shop decision:
//!
//! - [`WallClockProjector`] — the machine works unattended through the
//!   night; only new-job launches are constrained by the launch window.
//!   This is the default.
//! - [`WindowPausedProjector`] — the clock only advances inside the launch
//!   window, so a job spanning the evening close resumes next morning.

use chrono::{Duration, NaiveDateTime};

use crate::models::LaunchWindow;

/// Converts required printer-busy minutes into a completion instant.
pub trait DurationProjector {
    /// Projects the completion instant for `estimated_minutes` of work
    /// starting at `start`.
    ///
    /// Negative estimates clamp to zero: the result is never before `start`.
    fn project_end(&self, start: NaiveDateTime, estimated_minutes: i64) -> NaiveDateTime;
}

/// 24/7 projection: completion is `start + estimated_minutes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClockProjector;

impl DurationProjector for WallClockProjector {
    fn project_end(&self, start: NaiveDateTime, estimated_minutes: i64) -> NaiveDateTime {
        start + Duration::minutes(estimated_minutes.max(0))
    }
}

/// Window-paused projection: busy minutes accrue only inside the launch
/// window, skipping each overnight close.
///
/// An always-open window degenerates to wall-clock projection.
#[derive(Debug, Clone, Copy)]
pub struct WindowPausedProjector {
    window: LaunchWindow,
}

impl WindowPausedProjector {
    /// Creates a projector paused outside `window`.
    pub fn new(window: LaunchWindow) -> Self {
        Self { window }
    }
}

impl DurationProjector for WindowPausedProjector {
    fn project_end(&self, start: NaiveDateTime, estimated_minutes: i64) -> NaiveDateTime {
        let mut remaining = estimated_minutes.max(0);
        if remaining == 0 {
            return start;
        }
        if self.window.is_always_open() {
            return start + Duration::minutes(remaining);
        }

        let mut cursor = self.window.next_open(start);
        loop {
            let close = self.window.close_on_day(cursor);
            let available = (close - cursor).num_minutes();
            if remaining <= available {
                return cursor + Duration::minutes(remaining);
            }
            remaining -= available;
            cursor = self.window.next_open(close);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn window() -> LaunchWindow {
        LaunchWindow::parse("09:30", "19:30").unwrap()
    }

    #[test]
    fn test_wall_clock_simple() {
        let p = WallClockProjector;
        assert_eq!(p.project_end(at(1, 8, 0), 120), at(1, 10, 0));
    }

    #[test]
    fn test_wall_clock_runs_overnight() {
        let p = WallClockProjector;
        // 10h print launched at 18:00 finishes at 04:00 next day.
        assert_eq!(p.project_end(at(1, 18, 0), 600), at(2, 4, 0));
    }

    #[test]
    fn test_zero_minutes_is_identity() {
        let start = at(1, 3, 0); // outside the window
        assert_eq!(WallClockProjector.project_end(start, 0), start);
        assert_eq!(
            WindowPausedProjector::new(window()).project_end(start, 0),
            start
        );
    }

    #[test]
    fn test_negative_minutes_clamp() {
        let start = at(1, 12, 0);
        assert_eq!(WallClockProjector.project_end(start, -30), start);
        assert_eq!(
            WindowPausedProjector::new(window()).project_end(start, -30),
            start
        );
    }

    #[test]
    fn test_paused_fits_within_day() {
        let p = WindowPausedProjector::new(window());
        assert_eq!(p.project_end(at(1, 10, 0), 60), at(1, 11, 0));
    }

    #[test]
    fn test_paused_spans_overnight_close() {
        let p = WindowPausedProjector::new(window());
        // 18:30 + 120min: 60min until 19:30 close, 60min from 09:30 next day.
        assert_eq!(p.project_end(at(1, 18, 30), 120), at(2, 10, 30));
    }

    #[test]
    fn test_paused_start_outside_window_snaps_forward() {
        let p = WindowPausedProjector::new(window());
        // Started at 03:00: the clock only starts at 09:30.
        assert_eq!(p.project_end(at(1, 3, 0), 30), at(1, 10, 0));
    }

    #[test]
    fn test_paused_multi_day() {
        let p = WindowPausedProjector::new(window());
        // 600 min/day of window; 1500 min = 2 full days + 300 min.
        assert_eq!(p.project_end(at(1, 9, 30), 1500), at(3, 14, 30));
    }

    #[test]
    fn test_paused_always_open_degenerates() {
        let w = LaunchWindow::parse("00:00", "00:00").unwrap();
        let p = WindowPausedProjector::new(w);
        assert_eq!(p.project_end(at(1, 22, 0), 300), at(2, 3, 0));
    }

    #[test]
    fn test_monotonic_in_minutes() {
        let p = WindowPausedProjector::new(window());
        let start = at(1, 18, 0);
        let mut prev = p.project_end(start, 0);
        for minutes in [10, 60, 90, 200, 900] {
            let end = p.project_end(start, minutes);
            assert!(end >= prev);
            prev = end;
        }
    }
}
