//! Timeline domain models.
//!
//! Inputs to the layout engine: printers (the row axis), jobs (the bars),
//! and the launch window (the recurring daily operating span). All of them
//! are produced elsewhere — this crate is a read-only projection from
//! business data to visual geometry and never mutates an entity.

mod job;
mod launch_window;
mod printer;

pub use job::{Job, JobPriority, JobState};
pub use launch_window::{
    ConfigError, LaunchSettings, LaunchWindow, DEFAULT_LAUNCH_END, DEFAULT_LAUNCH_START,
};
pub use printer::{Printer, UNKNOWN_TYPE_LABEL};
