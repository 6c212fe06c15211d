//! The drawing surface abstraction.
//!
//! Rendering writes through the [`Surface`] trait so the same capture and
//! reconciliation logic drives both the software raster (native, tests) and
//! the browser 2D context (WASM). Resizing a surface clears its pixel
//! contents — both backends inherit that behavior from the HTML canvas
//! element, and callers must replay the operation log afterwards.

use crate::consts::{DRAW_WIDTH_PX, ERASE_WIDTH_PX};
use crate::op::OpKind;

/// How a stroke combines with existing pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint over existing content (normal drawing).
    SourceOver,
    /// Clear existing content along the stroke (the eraser mechanism —
    /// there is no separate bitmap mask).
    DestinationOut,
}

impl Composite {
    /// The `globalCompositeOperation` name for the 2D context.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::DestinationOut => "destination-out",
        }
    }
}

/// Width and compositing for one stroke. Round caps and joins are implied;
/// the draw color is fixed (`consts::STROKE_COLOR`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub composite: Composite,
}

impl StrokeStyle {
    /// The style used for operations of the given kind: thin source-over
    /// strokes for draws, a wide destination-out band for erasures.
    #[must_use]
    pub fn for_kind(kind: OpKind) -> Self {
        match kind {
            OpKind::Draw => Self { width: DRAW_WIDTH_PX, composite: Composite::SourceOver },
            OpKind::Erase => Self { width: ERASE_WIDTH_PX, composite: Composite::DestinationOut },
        }
    }
}

/// A backend failure while touching the surface. The raster backend never
/// fails; the browser backend maps JS exceptions here.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface backend error in {context}: {detail}")]
    Backend {
        context: &'static str,
        detail: String,
    },
}

/// A drawing surface measured in pixels with the origin at its top-left
/// corner.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Resize the surface to the given pixel dimensions. Clears all pixel
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the underlying context rejects the call.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError>;

    /// Clear all pixel contents without changing dimensions.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the underlying context rejects the call.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Stroke a connected polyline through `points` in order. Fewer than
    /// two points is a no-op at the [`crate::render::render_path`] level;
    /// implementations may assume at least one segment.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the underlying context rejects the call.
    fn stroke_polyline(&mut self, points: &[crate::geometry::Point], style: StrokeStyle) -> Result<(), SurfaceError>;
}
