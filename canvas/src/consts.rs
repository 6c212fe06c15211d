//! Shared numeric constants for the canvas crate.

// ── Stroke styling ──────────────────────────────────────────────

/// Line width in pixels for draw strokes.
pub const DRAW_WIDTH_PX: f64 = 2.0;

/// Line width in pixels for erase strokes.
pub const ERASE_WIDTH_PX: f64 = 10.0;

/// Stroke color for draw operations. Erasure paints transparency instead.
pub const STROKE_COLOR: &str = "#000000";

// ── Stroke validity ─────────────────────────────────────────────

/// Minimum number of points for a path to have any visual effect.
/// Shorter paths are never rendered or persisted.
pub const MIN_STROKE_POINTS: usize = 2;

// ── Reconciliation ──────────────────────────────────────────────

/// Capacity of the seen-operation id window. Oldest ids are evicted
/// FIFO once the window is full.
pub const SEEN_OPS_CAPACITY: usize = 512;
