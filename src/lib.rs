//! Launch-window-constrained resource-timeline layout engine.
//!
//! Lays out print jobs for many physical printers along a shared time
//! axis, respects a recurring daily operating window outside of which new
//! jobs cannot be started, and produces the geometry for a Gantt-style
//! chart: adaptive hour markers, day-boundary segments, non-operating
//! bands, per-printer job rectangles, and collision-aware tooltip
//! positions. The engine performs no I/O and never mutates its inputs —
//! it is a read-only projection from business data to pixel geometry.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Printer`, `Job`, `LaunchWindow`,
//!   `LaunchSettings`
//! - **`projection`**: Estimated busy-minutes → wall-clock completion
//! - **`layout`**: Horizon, dead zones, time axis, per-printer rows,
//!   tooltips, and the memoizing engine
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   printer references, negative estimates)
//! - **`estimate`**: Volume-based print-time estimation
//!
//! # Time Model
//!
//! Instants are naive wall-clock datetimes (`chrono::NaiveDateTime`); the
//! process TZ must match the shop TZ. Durations are whole minutes; all
//! intervals are half-open `[start, end)`.

pub mod estimate;
pub mod layout;
pub mod models;
pub mod projection;
pub mod validation;
