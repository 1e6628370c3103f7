//! Horizon calculation.
//!
//! The horizon is the total time span, starting at the render origin, that
//! the timeline must visually cover: at least [`MIN_HORIZON_HOURS`], and
//! always far enough that no scheduled job's projected end is clipped.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::Job;
use crate::projection::DurationProjector;

/// Minimum horizon span (hours).
pub const MIN_HORIZON_HOURS: i64 = 48;
/// Padding appended past the latest projected end (minutes).
pub const HORIZON_PADDING_MINUTES: i64 = 120;

/// The derived time span covered by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horizon {
    /// The render-time "now" — the left edge of the timeline.
    pub origin: NaiveDateTime,
    /// Total minutes covered from `origin`.
    pub total_minutes: i64,
}

impl Horizon {
    /// The right edge of the timeline.
    #[inline]
    pub fn end(&self) -> NaiveDateTime {
        self.origin + Duration::minutes(self.total_minutes)
    }

    /// Whether `at` falls inside `[origin, end)`.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.origin && at < self.end()
    }

    /// Minute offset of `at` from the origin (may be negative).
    #[inline]
    pub fn offset_minutes(&self, at: NaiveDateTime) -> i64 {
        (at - self.origin).num_minutes()
    }
}

/// Computes the horizon for a set of jobs.
///
/// Starts from `origin + 48h` and extends to cover the projected end of
/// every job that has a `scheduled_start`; unscheduled jobs render at the
/// origin but do not extend the horizon (they are not actually scheduled
/// yet). [`HORIZON_PADDING_MINUTES`] of padding is always appended, so the
/// result is never below `48h + 120m` and grows only when a real job would
/// otherwise be clipped.
pub fn compute_horizon(
    origin: NaiveDateTime,
    jobs: &[Job],
    projector: &dyn DurationProjector,
) -> Horizon {
    let mut end = origin + Duration::hours(MIN_HORIZON_HOURS);
    for job in jobs {
        if let Some(start) = job.scheduled_start {
            let projected = projector.project_end(start, job.estimated_minutes);
            if projected > end {
                end = projected;
            }
        }
    }
    Horizon {
        origin,
        total_minutes: (end - origin).num_minutes() + HORIZON_PADDING_MINUTES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::WallClockProjector;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    const MIN_TOTAL: i64 = MIN_HORIZON_HOURS * 60 + HORIZON_PADDING_MINUTES;

    #[test]
    fn test_no_jobs_gives_minimum_plus_padding() {
        let h = compute_horizon(at(1, 8, 0), &[], &WallClockProjector);
        assert_eq!(h.total_minutes, MIN_TOTAL);
        assert_eq!(h.end(), at(3, 10, 0)); // 48h + 2h past 08:00
    }

    #[test]
    fn test_short_job_does_not_extend() {
        let jobs = vec![Job::new("J1")
            .with_scheduled_start(at(1, 8, 0))
            .with_estimate(120)];
        let h = compute_horizon(at(1, 8, 0), &jobs, &WallClockProjector);
        assert_eq!(h.total_minutes, MIN_TOTAL);
    }

    #[test]
    fn test_long_job_extends_exactly() {
        // Projected end at origin + 72h; horizon = 72h + padding.
        let jobs = vec![Job::new("J1")
            .with_scheduled_start(at(1, 8, 0))
            .with_estimate(72 * 60)];
        let h = compute_horizon(at(1, 8, 0), &jobs, &WallClockProjector);
        assert_eq!(h.total_minutes, 72 * 60 + HORIZON_PADDING_MINUTES);
    }

    #[test]
    fn test_unscheduled_job_excluded() {
        // A huge but unscheduled estimate must not extend the horizon.
        let jobs = vec![Job::new("J1").with_estimate(10_000)];
        let h = compute_horizon(at(1, 8, 0), &jobs, &WallClockProjector);
        assert_eq!(h.total_minutes, MIN_TOTAL);
    }

    #[test]
    fn test_monotonic_in_jobs() {
        let origin = at(1, 8, 0);
        let mut jobs = vec![Job::new("J1")
            .with_scheduled_start(origin)
            .with_estimate(60 * 60)];
        let before = compute_horizon(origin, &jobs, &WallClockProjector);

        jobs.push(
            Job::new("J2")
                .with_scheduled_start(at(2, 8, 0))
                .with_estimate(80 * 60),
        );
        let after = compute_horizon(origin, &jobs, &WallClockProjector);

        assert!(after.total_minutes >= before.total_minutes);
        // Exactly enough to cover J2's projected end plus padding.
        assert_eq!(
            after.end(),
            at(2, 8, 0)
                + chrono::Duration::minutes(80 * 60)
                + chrono::Duration::minutes(HORIZON_PADDING_MINUTES)
        );
    }

    #[test]
    fn test_horizon_accessors() {
        let h = Horizon {
            origin: at(1, 8, 0),
            total_minutes: 60,
        };
        assert!(h.contains(at(1, 8, 0)));
        assert!(h.contains(at(1, 8, 59)));
        assert!(!h.contains(at(1, 9, 0)));
        assert_eq!(h.offset_minutes(at(1, 9, 30)), 90);
        assert_eq!(h.offset_minutes(at(1, 7, 0)), -60);
    }
}
