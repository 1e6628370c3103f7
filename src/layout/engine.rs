//! Layout engine: orchestration and memoization.
//!
//! Chains the derived computations (horizon → dead zones → axis → grid)
//! over one immutable input snapshot. All of it is pure: the engine only
//! adds memoization, recomputing when — and only when — the declared
//! inputs change. Hover state is deliberately not an input; see
//! [`crate::layout::tooltip`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::axis::{compute_day_labels, compute_hour_markers, DaySegment, HourMarker};
use crate::layout::dead_zones::{compute_dead_zones, DeadZone};
use crate::layout::horizon::{compute_horizon, Horizon};
use crate::layout::rows::{layout_grid, TimelineGrid};
use crate::models::{Job, LaunchWindow, Printer};
use crate::projection::{DurationProjector, WallClockProjector};

/// Default horizontal scale (px per minute): the original 120 px/hour.
pub const DEFAULT_PX_PER_MINUTE: f64 = 2.0;

/// One render cycle's inputs, refreshed by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineInput {
    /// The render-time "now" — left edge of the timeline.
    pub origin: NaiveDateTime,
    /// Printers (row axis), read-only.
    pub printers: Vec<Printer>,
    /// Jobs (bars), read-only.
    pub jobs: Vec<Job>,
    /// The launch window, loaded once per render cycle.
    pub window: LaunchWindow,
    /// Horizontal scale.
    pub px_per_minute: f64,
}

impl TimelineInput {
    /// Creates an input at the default scale.
    pub fn new(
        origin: NaiveDateTime,
        printers: Vec<Printer>,
        jobs: Vec<Job>,
        window: LaunchWindow,
    ) -> Self {
        Self {
            origin,
            printers,
            jobs,
            window,
            px_per_minute: DEFAULT_PX_PER_MINUTE,
        }
    }

    /// Sets the horizontal scale.
    pub fn with_px_per_minute(mut self, px_per_minute: f64) -> Self {
        self.px_per_minute = px_per_minute;
        self
    }
}

/// The complete derived geometry for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    /// The covered time span.
    pub horizon: Horizon,
    /// Non-operating bands, sorted and disjoint.
    pub dead_zones: Vec<DeadZone>,
    /// Decimated hour ticks.
    pub hour_markers: Vec<HourMarker>,
    /// Calendar-day label segments.
    pub day_labels: Vec<DaySegment>,
    /// Per-printer rows plus idle/unassigned lists.
    pub grid: TimelineGrid,
    /// Total axis width in px.
    pub total_width_px: f64,
}

/// Memoizing layout engine.
///
/// Owns the duration-projection policy and the last computed snapshot.
/// [`TimelineEngine::compute`] is the only entry point; it performs no
/// I/O and never blocks.
pub struct TimelineEngine {
    projector: Box<dyn DurationProjector>,
    cache: Option<(TimelineInput, TimelineSnapshot)>,
}

impl TimelineEngine {
    /// Creates an engine with the default wall-clock projector.
    pub fn new() -> Self {
        Self::with_projector(Box::new(WallClockProjector))
    }

    /// Creates an engine with an explicit projection policy.
    pub fn with_projector(projector: Box<dyn DurationProjector>) -> Self {
        Self {
            projector,
            cache: None,
        }
    }

    /// Returns the snapshot for `input`, recomputing only on change.
    pub fn compute(&mut self, input: &TimelineInput) -> &TimelineSnapshot {
        let cached = matches!(&self.cache, Some((prev, _)) if prev == input);
        if !cached {
            debug!(
                printers = input.printers.len(),
                jobs = input.jobs.len(),
                px_per_minute = input.px_per_minute,
                "recomputing timeline layout"
            );
            let snapshot = compute_snapshot(input, self.projector.as_ref());
            self.cache = Some((input.clone(), snapshot));
        } else {
            debug!("timeline layout unchanged, serving memoized snapshot");
        }

        // The cache was just populated on the miss path.
        match &self.cache {
            Some((_, snapshot)) => snapshot,
            None => unreachable!("cache populated above"),
        }
    }
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the full snapshot without memoization.
pub fn compute_snapshot(
    input: &TimelineInput,
    projector: &dyn DurationProjector,
) -> TimelineSnapshot {
    let horizon = compute_horizon(input.origin, &input.jobs, projector);
    let dead_zones = compute_dead_zones(input.origin, horizon.total_minutes, &input.window);
    let hour_markers =
        compute_hour_markers(input.origin, horizon.total_minutes, input.px_per_minute);
    let day_labels = compute_day_labels(input.origin, horizon.total_minutes);
    let grid = layout_grid(
        &input.printers,
        &input.jobs,
        &horizon,
        projector,
        input.px_per_minute,
    );

    TimelineSnapshot {
        total_width_px: horizon.total_minutes as f64 * input.px_per_minute,
        horizon,
        dead_zones,
        hour_markers,
        day_labels,
        grid,
    }
}
