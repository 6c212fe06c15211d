//! Points and coordinate mapping between viewport and surface space.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in surface-local pixel coordinates (origin at the surface's
/// top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport-space origin of the surface's bounding rectangle, as reported
/// by the host layout (`getBoundingClientRect` in the browser).
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

/// Map a pointer event's viewport coordinates into surface-local
/// coordinates by subtracting the bounding rectangle's origin.
#[must_use]
pub fn event_to_point(client_x: f64, client_y: f64, rect: SurfaceRect) -> Point {
    Point {
        x: client_x - rect.left,
        y: client_y - rect.top,
    }
}

/// Distance from `p` to the closest point on segment `a`–`b`.
///
/// A zero-length segment degenerates to point distance, which is what gives
/// stroked segments their round caps.
#[must_use]
pub fn dist_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    (p.x - cx).hypot(p.y - cy)
}
