//! Per-printer job layout.
//!
//! Places each printer's jobs as rectangles on the shared time axis:
//! position from the scheduled start (origin fallback), width from the
//! projected duration with a minimum-width floor so every job stays
//! visible and clickable. Printers with no jobs are segregated into an
//! idle list; jobs with no (or an unknown) printer go to an unassigned
//! list rather than disappearing.
//!
//! Geometry is hover-invariant by construction: hover state is never an
//! input here, so raising a bar on hover cannot shift the layout.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::layout::horizon::Horizon;
use crate::models::{Job, JobPriority, JobState, Printer};
use crate::projection::DurationProjector;

/// Minimum rendered job width (px), so zero/sliver estimates stay clickable.
pub const MIN_JOB_WIDTH_PX: f64 = 24.0;
/// Minimum width (px) at which the full bar label fits.
pub const FULL_LABEL_MIN_WIDTH_PX: f64 = 60.0;

/// A positioned job rectangle on a printer row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRect {
    /// The job this rectangle renders.
    pub job_id: String,
    /// Left edge in px from the axis origin (never negative).
    pub left_px: f64,
    /// Width in px (≥ [`MIN_JOB_WIDTH_PX`]).
    pub width_px: f64,
    /// Layout start instant (scheduled start or origin fallback).
    pub start: NaiveDateTime,
    /// Projected completion instant.
    pub end: NaiveDateTime,
    /// Lifecycle state — drives the fill color.
    pub state: JobState,
    /// Priority — drives the additive outline.
    pub priority: JobPriority,
    /// Bar label: full form when the bar is wide enough, compact otherwise.
    pub label: String,
}

/// One printer's row on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterRow {
    /// Printer identifier.
    pub printer_id: String,
    /// Printer display name.
    pub printer_name: String,
    /// Printer type label ("Unknown resource type" when unset).
    pub type_label: String,
    /// Remaining work: estimated minutes summed over non-done jobs.
    pub active_minutes: i64,
    /// Job rectangles, ordered by (start, position).
    pub jobs: Vec<JobRect>,
}

/// A printer with no jobs, listed outside the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdlePrinter {
    /// Printer identifier.
    pub printer_id: String,
    /// Printer display name.
    pub printer_name: String,
    /// Printer type label.
    pub type_label: String,
}

/// A job that cannot be placed on any row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedJob {
    /// Job identifier.
    pub job_id: String,
    /// Parent project name.
    pub project_name: String,
    /// Item name.
    pub item_name: String,
    /// Batch number.
    pub batch_number: i32,
    /// Estimated minutes.
    pub estimated_minutes: i64,
}

impl UnassignedJob {
    /// One-line summary for the unassigned list.
    pub fn summary(&self) -> String {
        format!(
            "{} — {} batch {} (~{})",
            self.project_name,
            self.item_name,
            self.batch_number,
            format_minutes(self.estimated_minutes)
        )
    }
}

/// The laid-out grid: rows with jobs, idle printers, unassigned jobs.
///
/// Empty `rows` is an ordinary state (rendered as an explicit empty
/// message), not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineGrid {
    /// Printer rows that have at least one job.
    pub rows: Vec<PrinterRow>,
    /// Printers with no jobs.
    pub idle_printers: Vec<IdlePrinter>,
    /// Jobs without a placeable printer.
    pub unassigned: Vec<UnassignedJob>,
}

impl TimelineGrid {
    /// Looks up a job's rectangle (e.g. as a tooltip anchor source).
    pub fn job_rect(&self, job_id: &str) -> Option<&JobRect> {
        self.rows
            .iter()
            .flat_map(|r| r.jobs.iter())
            .find(|j| j.job_id == job_id)
    }
}

/// Lays out all jobs against all printers on the shared axis.
///
/// Jobs whose `printer_id` is absent — or names a printer not in
/// `printers` — are routed to the unassigned list; one stray reference
/// must not blank the timeline.
pub fn layout_grid(
    printers: &[Printer],
    jobs: &[Job],
    horizon: &Horizon,
    projector: &dyn DurationProjector,
    px_per_minute: f64,
) -> TimelineGrid {
    let known: HashSet<&str> = printers.iter().map(|p| p.id.as_str()).collect();

    let mut rows = Vec::new();
    let mut idle_printers = Vec::new();

    for printer in printers {
        let mut rects: Vec<(&Job, JobRect)> = jobs
            .iter()
            .filter(|j| j.printer_id.as_deref() == Some(printer.id.as_str()))
            .map(|j| (j, layout_job(j, horizon, projector, px_per_minute)))
            .collect();

        if rects.is_empty() {
            idle_printers.push(IdlePrinter {
                printer_id: printer.id.clone(),
                printer_name: printer.name.clone(),
                type_label: printer.type_label().to_string(),
            });
            continue;
        }

        rects.sort_by(|(ja, ra), (jb, rb)| {
            ra.start.cmp(&rb.start).then(ja.position.cmp(&jb.position))
        });

        let active_minutes = rects
            .iter()
            .filter(|(j, _)| j.state.is_active())
            .map(|(j, _)| j.estimated_minutes)
            .sum();

        rows.push(PrinterRow {
            printer_id: printer.id.clone(),
            printer_name: printer.name.clone(),
            type_label: printer.type_label().to_string(),
            active_minutes,
            jobs: rects.into_iter().map(|(_, r)| r).collect(),
        });
    }

    let unassigned = jobs
        .iter()
        .filter(|j| match j.printer_id.as_deref() {
            None => true,
            Some(id) => !known.contains(id),
        })
        .map(|j| UnassignedJob {
            job_id: j.id.clone(),
            project_name: j.project_name.clone(),
            item_name: j.item_name.clone(),
            batch_number: j.batch_number,
            estimated_minutes: j.estimated_minutes,
        })
        .collect();

    TimelineGrid {
        rows,
        idle_printers,
        unassigned,
    }
}

fn layout_job(
    job: &Job,
    horizon: &Horizon,
    projector: &dyn DurationProjector,
    px_per_minute: f64,
) -> JobRect {
    let start = job.effective_start(horizon.origin);
    let end = projector.project_end(start, job.estimated_minutes);
    let left_px = (horizon.offset_minutes(start) as f64 * px_per_minute).max(0.0);
    let width_px = ((end - start).num_minutes() as f64 * px_per_minute).max(MIN_JOB_WIDTH_PX);

    JobRect {
        job_id: job.id.clone(),
        left_px,
        width_px,
        start,
        end,
        state: job.state,
        priority: job.priority,
        label: bar_label(job, width_px),
    }
}

/// Bar label: `"B{batch} · {pieces} pcs"` when the bar is wide enough,
/// `"B{batch}"` otherwise.
fn bar_label(job: &Job, width_px: f64) -> String {
    if width_px >= FULL_LABEL_MIN_WIDTH_PX {
        format!("B{} · {} pcs", job.batch_number, job.pieces_in_batch)
    } else {
        format!("B{}", job.batch_number)
    }
}

/// Formats minutes as `"2h 5m"`, collapsing to `"45m"` below one hour.
pub fn format_minutes(minutes: i64) -> String {
    let h = minutes / 60;
    let m = minutes % 60;
    if h > 0 {
        format!("{h}h {m}m")
    } else {
        format!("{m}m")
    }
}
