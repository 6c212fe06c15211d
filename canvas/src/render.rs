//! Path rendering, and the browser-backed surface.
//!
//! [`render_path`] is the single entry point for putting a persisted or
//! incoming operation onto a surface; the capture path strokes incremental
//! segments through the same [`Surface`] trait. This module is also the only
//! place that touches [`web_sys::CanvasRenderingContext2d`] — all fallible
//! context calls are mapped into [`SurfaceError`] and propagated.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::consts::{DRAW_WIDTH_PX, MIN_STROKE_POINTS, STROKE_COLOR};
use crate::geometry::{Point, SurfaceRect, event_to_point};
use crate::op::OpKind;
use crate::surface::{StrokeStyle, Surface, SurfaceError};

/// Render a full operation path onto a surface.
///
/// No-op for paths with fewer than two points — they carry no visual
/// effect. Otherwise strokes the connected polyline with the style for
/// `kind`: thin source-over for draws, a wide destination-out band for
/// erasures.
///
/// # Errors
///
/// Propagates backend failures from the surface.
pub fn render_path<S: Surface>(surface: &mut S, points: &[Point], kind: OpKind) -> Result<(), SurfaceError> {
    if points.len() < MIN_STROKE_POINTS {
        return Ok(());
    }
    surface.stroke_polyline(points, StrokeStyle::for_kind(kind))
}

// =============================================================================
// BROWSER SURFACE
// =============================================================================

/// A surface backed by an HTML canvas element's 2D context.
pub struct BrowserSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl BrowserSurface {
    /// Bind to a canvas element and acquire its 2D context.
    ///
    /// # Errors
    ///
    /// Returns a backend error if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| js_error("get_context", &e))?
            .ok_or(SurfaceError::Backend { context: "get_context", detail: "2d context unavailable".to_string() })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Backend { context: "get_context", detail: "unexpected context type".to_string() })?;

        Ok(Self { canvas, ctx })
    }

    /// Pixel size of the element's current CSS layout box. The backing
    /// store must be resized to this whenever the layout changes.
    #[must_use]
    pub fn layout_size(&self) -> (u32, u32) {
        let w = self.canvas.offset_width().max(0);
        let h = self.canvas.offset_height().max(0);
        #[allow(clippy::cast_sign_loss)]
        (w as u32, h as u32)
    }

    /// Surface-local point for a mouse event, from the element's current
    /// bounding rectangle.
    #[must_use]
    pub fn event_point(&self, event: &MouseEvent) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        event_to_point(
            f64::from(event.client_x()),
            f64::from(event.client_y()),
            SurfaceRect { left: rect.left(), top: rect.top() },
        )
    }

    fn apply_stroke_defaults(&self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.set_line_width(DRAW_WIDTH_PX);
        self.ctx.set_stroke_style_str(STROKE_COLOR);
    }
}

impl Surface for BrowserSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        // Resizing the backing store clears the element's pixel contents
        // and resets context state, so stroke defaults are reapplied.
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.apply_stroke_defaults();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.ctx.clear_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: StrokeStyle) -> Result<(), SurfaceError> {
        let Some(first) = points.first() else {
            return Ok(());
        };

        self.ctx
            .set_global_composite_operation(style.composite.as_css())
            .map_err(|e| js_error("set_global_composite_operation", &e))?;
        self.ctx.set_stroke_style_str(STROKE_COLOR);
        self.ctx.set_line_width(style.width);

        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in &points[1..] {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
        Ok(())
    }
}

fn js_error(context: &'static str, value: &JsValue) -> SurfaceError {
    SurfaceError::Backend { context, detail: format!("{value:?}") }
}
