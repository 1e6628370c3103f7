//! Print job model.
//!
//! A job is one batch of pieces queued on (or waiting for) a printer.
//! Jobs are produced upstream — the assignment of a job to a printer and
//! its `scheduled_start` are external decisions — and are immutable
//! inputs to layout.
//!
//! # Time Model
//! Instants are naive wall-clock datetimes (`chrono::NaiveDateTime`);
//! the process TZ must match the shop TZ. Durations are whole minutes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle state of a print job.
///
/// States are mutually exclusive and exhaustive; each maps to a distinct
/// fill color in the rendered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    /// Waiting in queue.
    Queued,
    /// Currently printing.
    Printing,
    /// Finished successfully.
    Done,
    /// Finished with a failure.
    Failed,
}

impl JobState {
    /// Whether this job still occupies (or will occupy) printer time.
    ///
    /// Done jobs are kept on the timeline for context but excluded from
    /// a row's remaining-work total.
    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, JobState::Done)
    }
}

/// Scheduling priority of a job.
///
/// Priority drives an additional outline in the rendered timeline,
/// purely additive to the state fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPriority {
    /// Default priority.
    #[default]
    Normal,
    /// Elevated priority.
    High,
    /// Jump-the-queue priority.
    Urgent,
}

/// A print job (one batch of pieces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Assigned printer ID. `None` = not yet assigned; the job renders
    /// in the unassigned list instead of the grid.
    pub printer_id: Option<String>,
    /// Lifecycle state.
    pub state: JobState,
    /// Intra-printer ordering (informational; layout positions by start).
    pub position: i32,
    /// Estimated printer-busy time in minutes (≥ 0).
    pub estimated_minutes: i64,
    /// Planned launch instant. `None` = not yet scheduled; layout falls
    /// back to the timeline origin.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub scheduled_start: Option<NaiveDateTime>,
    /// Scheduling priority.
    #[serde(default)]
    pub priority: JobPriority,
    /// Batch number within the parent item.
    pub batch_number: i32,
    /// Number of pieces printed in this batch.
    pub pieces_in_batch: i32,
    /// Name of the item being printed.
    pub item_name: String,
    /// Name of the parent project.
    pub project_name: String,
    /// Sliced G-code filename, when already sliced.
    pub gcode_filename: Option<String>,
}

impl Job {
    /// Creates a new queued job with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            printer_id: None,
            state: JobState::Queued,
            position: 0,
            estimated_minutes: 0,
            scheduled_start: None,
            priority: JobPriority::Normal,
            batch_number: 1,
            pieces_in_batch: 1,
            item_name: String::new(),
            project_name: String::new(),
            gcode_filename: None,
        }
    }

    /// Assigns the job to a printer.
    pub fn with_printer(mut self, printer_id: impl Into<String>) -> Self {
        self.printer_id = Some(printer_id.into());
        self
    }

    /// Sets the lifecycle state.
    pub fn with_state(mut self, state: JobState) -> Self {
        self.state = state;
        self
    }

    /// Sets the intra-printer position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the estimated printer-busy minutes.
    pub fn with_estimate(mut self, estimated_minutes: i64) -> Self {
        self.estimated_minutes = estimated_minutes;
        self
    }

    /// Sets the planned launch instant.
    pub fn with_scheduled_start(mut self, start: NaiveDateTime) -> Self {
        self.scheduled_start = Some(start);
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: JobPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets batch number and piece count.
    pub fn with_batch(mut self, batch_number: i32, pieces_in_batch: i32) -> Self {
        self.batch_number = batch_number;
        self.pieces_in_batch = pieces_in_batch;
        self
    }

    /// Sets the item name.
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    /// Sets the project name.
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Sets the G-code filename.
    pub fn with_gcode(mut self, filename: impl Into<String>) -> Self {
        self.gcode_filename = Some(filename.into());
        self
    }

    /// Whether the job is assigned to a printer.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.printer_id.is_some()
    }

    /// Layout start instant: `scheduled_start`, falling back to `origin`.
    ///
    /// The fallback is a documented default, not an error — an unscheduled
    /// job renders at the left edge of the timeline.
    #[inline]
    pub fn effective_start(&self, origin: NaiveDateTime) -> NaiveDateTime {
        self.scheduled_start.unwrap_or(origin)
    }
}

/// Deserializes an optional instant, mapping unparseable values to `None`.
///
/// One malformed `scheduled_start` in an input batch must not reject the
/// whole timeline; the affected job falls back to the origin instead.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_instant))
}

/// Parses an instant from `YYYY-MM-DDTHH:MM[:SS]`.
fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}
