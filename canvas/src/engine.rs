//! Top-level drawing engine: stroke capture and reconciliation.
//!
//! DESIGN
//! ======
//! `EngineCore` owns the surface, the gesture state machine, and the
//! seen-operation window. Pointer handlers render optimistic feedback
//! immediately and return an [`Action`] describing what the host must do
//! next — persistence and log fetches are the host's concern, dispatched
//! fire-and-forget so input handling never waits on a network round-trip.
//!
//! Every operation reaches the surface exactly once per client: own strokes
//! render optimistically during capture and their ids are recorded via
//! [`EngineCore::note_saved`]; remote operations render on arrival through
//! [`EngineCore::apply_insert`], which discards echoes and redelivered ids.
//! Full replay ([`EngineCore::load_snapshot`]) is the sole consistency
//! mechanism after a load or resize — there is no incremental diffing.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use uuid::Uuid;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::consts::SEEN_OPS_CAPACITY;
use crate::dedup::SeenOps;
use crate::geometry::Point;
use crate::input::{CaptureState, Tool};
use crate::op::{DrawingPath, OperationRecord, now_ms};
use crate::render::{BrowserSurface, render_path};
use crate::surface::{StrokeStyle, Surface, SurfaceError};

/// What the host must do after an engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// A stroke finalized. Persist it in the background; on success, feed
    /// the server-assigned id back via [`EngineCore::note_saved`]. On
    /// failure, surface an error to the user — the optimistic pixels stay.
    StrokeFinalized(DrawingPath),
    /// The surface was cleared. Re-fetch the operation log and call
    /// [`EngineCore::load_snapshot`] with it.
    ReloadNeeded,
}

/// Core engine state — everything that doesn't depend on the browser.
///
/// Generic over the surface backend so the full pipeline runs against
/// [`crate::raster::RasterSurface`] in native tests.
pub struct EngineCore<S: Surface> {
    surface: S,
    tool: Tool,
    capture: CaptureState,
    seen: SeenOps,
}

impl<S: Surface> EngineCore<S> {
    /// Create an engine drawing onto `surface`.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            tool: Tool::default(),
            capture: CaptureState::default(),
            seen: SeenOps::new(SEEN_OPS_CAPACITY),
        }
    }

    // --- Tool ---

    /// Set the active tool. Takes effect for segments rendered after the
    /// change, even mid-stroke; the finalized operation records the tool
    /// active at release.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// The currently active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    // --- Stroke capture ---

    /// Begin a stroke gesture at `point`.
    pub fn on_pointer_down(&mut self, point: Point) -> Action {
        self.capture = CaptureState::Capturing { points: vec![point] };
        Action::None
    }

    /// Extend the active gesture to `point`, rendering the incremental
    /// segment with the current tool's style for immediate feedback.
    /// Ignored while idle.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn on_pointer_move(&mut self, point: Point) -> Result<Action, SurfaceError> {
        let CaptureState::Capturing { points } = &mut self.capture else {
            return Ok(Action::None);
        };

        let prev = points.last().copied();
        points.push(point);

        if let Some(prev) = prev {
            let style = StrokeStyle::for_kind(self.tool.kind());
            self.surface.stroke_polyline(&[prev, point], style)?;
        }
        Ok(Action::None)
    }

    /// End the active gesture. Gestures with fewer than two points are
    /// discarded silently (a click, not a stroke); otherwise the finalized
    /// path is handed to the host for persistence.
    pub fn on_pointer_up(&mut self) -> Action {
        let state = std::mem::take(&mut self.capture);
        let CaptureState::Capturing { points } = state else {
            return Action::None;
        };

        let path = DrawingPath { points, kind: self.tool.kind(), timestamp: now_ms() };
        if !path.is_drawable() {
            return Action::None;
        }
        Action::StrokeFinalized(path)
    }

    /// The pointer left the surface: same as pointer-up.
    pub fn on_pointer_leave(&mut self) -> Action {
        self.on_pointer_up()
    }

    // --- Reconciliation ---

    /// Record the server-assigned id of a stroke this client persisted, so
    /// the realtime echo of that insert is discarded instead of rendered a
    /// second time.
    pub fn note_saved(&mut self, id: Uuid) {
        self.seen.insert(id);
    }

    /// Clear the surface and replay the full operation log in the given
    /// (ascending commit-time) order. Marks every replayed id as seen.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn load_snapshot(&mut self, records: &[OperationRecord]) -> Result<(), SurfaceError> {
        self.surface.clear()?;
        for record in records {
            render_path(&mut self.surface, &record.path_data.points, record.operation_type)?;
            self.seen.insert(record.id);
        }
        Ok(())
    }

    /// Apply a realtime insert event. Returns `true` if the operation was
    /// rendered, `false` if it was discarded as an echo of this client's
    /// own write or a redelivery of something already on the surface.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn apply_insert(&mut self, record: &OperationRecord) -> Result<bool, SurfaceError> {
        if self.seen.contains(record.id) {
            return Ok(false);
        }
        render_path(&mut self.surface, &record.path_data.points, record.operation_type)?;
        self.seen.insert(record.id);
        Ok(true)
    }

    /// Resize the surface to new pixel dimensions. Resizing clears all
    /// pixels — including any in-progress optimistic stroke, whose gesture
    /// is abandoned — so the host must reload and replay the log.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<Action, SurfaceError> {
        self.surface.resize(width, height)?;
        self.capture = CaptureState::Idle;
        Ok(Action::ReloadNeeded)
    }

    // --- Queries ---

    /// Whether a stroke gesture is currently active.
    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.capture.is_capturing()
    }

    /// The surface being drawn onto.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// =============================================================================
// BROWSER ENGINE
// =============================================================================

/// The full browser engine. Wraps `EngineCore` over the canvas element's 2D
/// context and converts DOM mouse events into surface-local points.
pub struct Engine {
    pub core: EngineCore<BrowserSurface>,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        Ok(Self { core: EngineCore::new(BrowserSurface::new(canvas)?) })
    }

    /// Size the backing store to the element's current CSS layout box and
    /// reset stroke styling. Must be called on mount and whenever the
    /// layout changes; the returned [`Action::ReloadNeeded`] tells the
    /// host to re-fetch and replay the operation log.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn setup(&mut self) -> Result<Action, SurfaceError> {
        let (width, height) = self.core.surface().layout_size();
        self.core.resize(width, height)
    }

    // --- Delegated input events ---

    pub fn pointer_down(&mut self, event: &MouseEvent) -> Action {
        let point = self.core.surface().event_point(event);
        self.core.on_pointer_down(point)
    }

    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn pointer_move(&mut self, event: &MouseEvent) -> Result<Action, SurfaceError> {
        let point = self.core.surface().event_point(event);
        self.core.on_pointer_move(point)
    }

    pub fn pointer_up(&mut self) -> Action {
        self.core.on_pointer_up()
    }

    pub fn pointer_leave(&mut self) -> Action {
        self.core.on_pointer_leave()
    }

    // --- Delegated data inputs ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn note_saved(&mut self, id: Uuid) {
        self.core.note_saved(id);
    }

    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn load_snapshot(&mut self, records: &[OperationRecord]) -> Result<(), SurfaceError> {
        self.core.load_snapshot(records)
    }

    /// # Errors
    ///
    /// Propagates backend failures from the surface.
    pub fn apply_insert(&mut self, record: &OperationRecord) -> Result<bool, SurfaceError> {
        self.core.apply_insert(record)
    }
}
