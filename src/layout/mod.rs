//! Derived timeline geometry.
//!
//! Every computation here is a pure function of
//! `{origin, jobs, printers, launch window, px_per_minute}`:
//!
//! - **`horizon`**: the total covered time span
//! - **`dead_zones`**: non-operating bands outside the launch window
//! - **`axis`**: adaptively decimated hour markers and day labels
//! - **`rows`**: per-printer job rectangles, idle and unassigned lists
//! - **`tooltip`**: two-phase measure-then-place hover tooltips
//! - **`engine`**: orchestration with change-detection memoization
//!
//! Rows are laid out independently from the same read-only horizon and
//! dead-zone data; there is no shared mutable state across printers.

mod axis;
mod dead_zones;
mod engine;
mod horizon;
mod rows;
mod tooltip;

pub use axis::{
    compute_day_labels, compute_hour_markers, hour_step, DaySegment, HourMarker,
    HOURLY_STEP_MIN_PX, THREE_HOUR_STEP_MIN_PX,
};
pub use dead_zones::{compute_dead_zones, DeadZone};
pub use engine::{
    compute_snapshot, TimelineEngine, TimelineInput, TimelineSnapshot, DEFAULT_PX_PER_MINUTE,
};
pub use horizon::{compute_horizon, Horizon, HORIZON_PADDING_MINUTES, MIN_HORIZON_HOURS};
pub use rows::{
    format_minutes, layout_grid, IdlePrinter, JobRect, PrinterRow, TimelineGrid, UnassignedJob,
    FULL_LABEL_MIN_WIDTH_PX, MIN_JOB_WIDTH_PX,
};
pub use tooltip::{
    place_tooltip, Rect, Size, TooltipPhase, TooltipPosition, TooltipState, TOOLTIP_GAP_PX,
    TOOLTIP_MARGIN_PX,
};
