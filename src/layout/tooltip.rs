//! Tooltip placement.
//!
//! A tooltip cannot be positioned until it has been rendered and measured,
//! so placement is a two-phase protocol: mount invisibly (*pending*), read
//! the box metrics, then commit a collision-free position (*placed*). Each
//! hover owns exactly one [`TooltipState`]; a new hover replaces the old
//! state outright, so there is no queued or cancelled work to track.
//!
//! Collision handling is deliberately minimal: flip above the anchor when
//! the default below-anchor position would overflow the viewport bottom,
//! and clamp horizontally. Simultaneous top-and-bottom overflow on a very
//! small viewport is a known boundary condition, not a handled case.

use serde::{Deserialize, Serialize};

/// Gap between the anchor and the tooltip (px).
pub const TOOLTIP_GAP_PX: f64 = 4.0;
/// Minimum distance kept from the viewport edges (px).
pub const TOOLTIP_MARGIN_PX: f64 = 8.0;

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A measured box size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A committed tooltip position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    /// Left edge in viewport coordinates.
    pub left: f64,
    /// Top edge in viewport coordinates.
    pub top: f64,
    /// Whether the tooltip was flipped above the anchor.
    pub flipped: bool,
}

/// Placement phase of one hover interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TooltipPhase {
    /// Mounted but not yet measured; must render invisible.
    Pending,
    /// Measured and positioned; visible.
    Placed(TooltipPosition),
}

/// Ephemeral per-hover tooltip state.
///
/// Lifetime is exactly one hover interaction: created on enter in the
/// *pending* phase, advanced to *placed* by the post-layout measurement
/// pass, and dropped on leave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    /// The hovered job.
    pub job_id: String,
    /// The hovered bar's bounding box in viewport coordinates.
    pub anchor: Rect,
    phase: TooltipPhase,
}

impl TooltipState {
    /// Starts a hover interaction in the pending phase.
    pub fn new(job_id: impl Into<String>, anchor: Rect) -> Self {
        Self {
            job_id: job_id.into(),
            anchor,
            phase: TooltipPhase::Pending,
        }
    }

    /// Commits the measured size, advancing to the placed phase.
    ///
    /// Re-measuring simply replaces the position; the phase machine has no
    /// other transitions.
    pub fn measure(&mut self, tooltip: Size, viewport: Size) {
        self.phase = TooltipPhase::Placed(place_tooltip(&self.anchor, tooltip, viewport));
    }

    /// The committed position, once placed.
    pub fn position(&self) -> Option<TooltipPosition> {
        match self.phase {
            TooltipPhase::Pending => None,
            TooltipPhase::Placed(pos) => Some(pos),
        }
    }

    /// Whether the tooltip has been placed (and may become visible).
    pub fn is_placed(&self) -> bool {
        matches!(self.phase, TooltipPhase::Placed(_))
    }

    /// Whether the given job's bar should be raised in z-order.
    ///
    /// Raising is a pure rendering concern; it never feeds back into
    /// layout, so hovering cannot shift geometry.
    pub fn raises(&self, job_id: &str) -> bool {
        self.job_id == job_id
    }
}

/// Computes a collision-free position for a measured tooltip.
///
/// Default placement is below the anchor, left-aligned with it. If that
/// would overflow the viewport bottom the tooltip flips above the anchor;
/// the left edge is then clamped to keep [`TOOLTIP_MARGIN_PX`] from both
/// sides (the left margin wins for tooltips wider than the viewport).
pub fn place_tooltip(anchor: &Rect, tooltip: Size, viewport: Size) -> TooltipPosition {
    let mut top = anchor.bottom() + TOOLTIP_GAP_PX;
    let mut flipped = false;

    if top + tooltip.height > viewport.height - TOOLTIP_MARGIN_PX {
        top = anchor.y - tooltip.height - TOOLTIP_GAP_PX;
        flipped = true;
    }

    let left = anchor
        .x
        .min(viewport.width - tooltip.width - TOOLTIP_MARGIN_PX)
        .max(TOOLTIP_MARGIN_PX);

    TooltipPosition { left, top, flipped }
}
