//! Time-axis rendering: hour markers and day labels.
//!
//! The axis adapts to zoom. Hour markers are decimated so that labels never
//! crowd: the step between rendered markers grows as pixels-per-hour
//! shrinks, guaranteeing a minimum inter-label gap at any scale. Markers
//! align to hours whose hour-of-day is a multiple of the step, so midnight
//! is always eligible and label positions stay stable from day to day.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Pixels-per-hour at or above which every hour gets a marker.
pub const HOURLY_STEP_MIN_PX: f64 = 40.0;
/// Pixels-per-hour at or above which every third hour gets a marker.
pub const THREE_HOUR_STEP_MIN_PX: f64 = 15.0;

/// An hour tick on the shared time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourMarker {
    /// Minutes from the horizon origin.
    pub offset_minutes: i64,
    /// Hour of day (0-23), the label text source.
    pub hour: u32,
    /// Whether this marker sits on a midnight boundary, used for a
    /// visual day-separator cue independent of the day-label row.
    pub is_new_day: bool,
}

/// One calendar day's segment of the day-label row.
///
/// The first and last segments are clipped to the horizon bounds; all
/// segments together partition the horizon exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    /// The calendar day this segment belongs to.
    pub date: NaiveDate,
    /// Minutes from the horizon origin to the segment start.
    pub start_offset_minutes: i64,
    /// Segment width in minutes.
    pub width_minutes: i64,
}

/// Marker step in hours for a given horizontal scale.
///
/// 1 hour at ≥ 40 px/h, 3 hours at ≥ 15 px/h, 6 hours below that. Adjacent
/// markers are exactly one step apart, so the inter-label pixel gap is at
/// least `step * px_per_hour ≥ 40 px`-ish at every zoom.
pub fn hour_step(px_per_hour: f64) -> i64 {
    if px_per_hour >= HOURLY_STEP_MIN_PX {
        1
    } else if px_per_hour >= THREE_HOUR_STEP_MIN_PX {
        3
    } else {
        6
    }
}

/// Computes the decimated hour markers over the horizon.
pub fn compute_hour_markers(
    origin: NaiveDateTime,
    horizon_minutes: i64,
    px_per_minute: f64,
) -> Vec<HourMarker> {
    let step = hour_step(px_per_minute * 60.0);
    let mut markers = Vec::new();

    // Snap to the first whole hour at or after the origin, then forward to
    // the step-aligned grid (hour-of-day divisible by step; steps divide 24
    // so the grid is the same on every day).
    let mut tick = snap_to_hour(origin);
    while i64::from(tick.hour()) % step != 0 {
        tick += Duration::hours(1);
    }

    let horizon_end = origin + Duration::minutes(horizon_minutes);
    while tick < horizon_end {
        markers.push(HourMarker {
            offset_minutes: (tick - origin).num_minutes(),
            hour: tick.hour(),
            is_new_day: tick.hour() == 0,
        });
        tick += Duration::hours(step);
    }

    markers
}

/// Partitions the horizon into calendar-day-aligned label segments.
pub fn compute_day_labels(origin: NaiveDateTime, horizon_minutes: i64) -> Vec<DaySegment> {
    let horizon_end = origin + Duration::minutes(horizon_minutes);
    let mut segments = Vec::new();
    let mut cursor = origin;

    while cursor < horizon_end {
        let next_midnight = (cursor.date() + Duration::days(1)).and_hms_opt(0, 0, 0)
            .unwrap_or(horizon_end);
        let seg_end = next_midnight.min(horizon_end);
        segments.push(DaySegment {
            date: cursor.date(),
            start_offset_minutes: (cursor - origin).num_minutes(),
            width_minutes: (seg_end - cursor).num_minutes(),
        });
        cursor = seg_end;
    }

    segments
}

fn snap_to_hour(at: NaiveDateTime) -> NaiveDateTime {
    let floored = at
        .date()
        .and_hms_opt(at.hour(), 0, 0)
        .unwrap_or(at);
    if floored < at {
        floored + Duration::hours(1)
    } else {
        floored
    }
}
