use super::*;
use crate::consts::{DRAW_WIDTH_PX, ERASE_WIDTH_PX};

fn draw_style() -> StrokeStyle {
    StrokeStyle { width: DRAW_WIDTH_PX, composite: Composite::SourceOver }
}

fn erase_style() -> StrokeStyle {
    StrokeStyle { width: ERASE_WIDTH_PX, composite: Composite::DestinationOut }
}

// =============================================================
// Construction / resize / clear
// =============================================================

#[test]
fn new_surface_is_blank() {
    let s = RasterSurface::new(32, 16);
    assert_eq!(s.width(), 32);
    assert_eq!(s.height(), 16);
    assert_eq!(s.pixels().len(), 32 * 16 * 4);
    assert!(s.is_blank());
}

#[test]
fn resize_changes_dimensions_and_clears() {
    let mut s = RasterSurface::new(10, 10);
    s.stroke_polyline(&[Point::new(1.0, 5.0), Point::new(9.0, 5.0)], draw_style()).unwrap();
    assert!(!s.is_blank());

    s.resize(20, 5).unwrap();
    assert_eq!(s.width(), 20);
    assert_eq!(s.height(), 5);
    assert!(s.is_blank());
}

#[test]
fn clear_keeps_dimensions() {
    let mut s = RasterSurface::new(10, 10);
    s.stroke_polyline(&[Point::new(1.0, 5.0), Point::new(9.0, 5.0)], draw_style()).unwrap();
    s.clear().unwrap();
    assert_eq!(s.width(), 10);
    assert!(s.is_blank());
}

// =============================================================
// Stroke stamping
// =============================================================

#[test]
fn horizontal_stroke_paints_pixels_on_the_line() {
    let mut s = RasterSurface::new(20, 20);
    s.stroke_polyline(&[Point::new(2.0, 10.0), Point::new(18.0, 10.0)], draw_style()).unwrap();

    assert_eq!(s.pixel(10, 10), [0, 0, 0, 255]);
    assert_eq!(s.pixel(10, 9), [0, 0, 0, 255]);
    // Well outside the 2px band.
    assert_eq!(s.pixel(10, 14), [0, 0, 0, 0]);
}

#[test]
fn stroke_width_bounds_the_painted_band() {
    let mut s = RasterSurface::new(40, 40);
    let wide = StrokeStyle { width: 10.0, composite: Composite::SourceOver };
    s.stroke_polyline(&[Point::new(5.0, 20.0), Point::new(35.0, 20.0)], wide).unwrap();

    // Within half the width of the centerline.
    assert_eq!(s.pixel(20, 16), [0, 0, 0, 255]);
    assert_eq!(s.pixel(20, 24), [0, 0, 0, 255]);
    // Beyond it.
    assert_eq!(s.pixel(20, 27), [0, 0, 0, 0]);
}

#[test]
fn round_caps_extend_past_endpoints() {
    let mut s = RasterSurface::new(40, 40);
    let wide = StrokeStyle { width: 10.0, composite: Composite::SourceOver };
    s.stroke_polyline(&[Point::new(20.0, 20.0), Point::new(25.0, 20.0)], wide).unwrap();

    // Cap pixels before the first endpoint.
    assert_eq!(s.pixel(16, 20), [0, 0, 0, 255]);
    // But not a full half-width beyond the cap radius.
    assert_eq!(s.pixel(13, 20), [0, 0, 0, 0]);
}

#[test]
fn single_point_polyline_paints_nothing() {
    let mut s = RasterSurface::new(10, 10);
    s.stroke_polyline(&[Point::new(5.0, 5.0)], draw_style()).unwrap();
    assert!(s.is_blank());
}

#[test]
fn strokes_clamp_to_surface_bounds() {
    let mut s = RasterSurface::new(10, 10);
    s.stroke_polyline(&[Point::new(-20.0, 5.0), Point::new(30.0, 5.0)], draw_style()).unwrap();
    assert_eq!(s.pixel(0, 5), [0, 0, 0, 255]);
    assert_eq!(s.pixel(9, 5), [0, 0, 0, 255]);
}

#[test]
fn zero_sized_surface_ignores_strokes() {
    let mut s = RasterSurface::new(0, 0);
    s.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)], draw_style()).unwrap();
    assert!(s.pixels().is_empty());
}

// =============================================================
// Compositing
// =============================================================

#[test]
fn destination_out_clears_drawn_pixels() {
    let mut s = RasterSurface::new(30, 30);
    let wide = StrokeStyle { width: 6.0, composite: Composite::SourceOver };
    s.stroke_polyline(&[Point::new(2.0, 15.0), Point::new(28.0, 15.0)], wide).unwrap();
    assert_eq!(s.pixel(15, 15), [0, 0, 0, 255]);

    s.stroke_polyline(&[Point::new(15.0, 2.0), Point::new(15.0, 28.0)], erase_style()).unwrap();
    // The crossing is erased; the rest of the horizontal stroke survives.
    assert_eq!(s.pixel(15, 15), [0, 0, 0, 0]);
    assert_eq!(s.pixel(4, 15), [0, 0, 0, 255]);
}

#[test]
fn segment_by_segment_equals_full_polyline() {
    let pts = [
        Point::new(3.0, 3.0),
        Point::new(12.0, 8.0),
        Point::new(20.0, 4.0),
        Point::new(27.0, 14.0),
    ];

    let mut whole = RasterSurface::new(32, 32);
    whole.stroke_polyline(&pts, draw_style()).unwrap();

    let mut incremental = RasterSurface::new(32, 32);
    for pair in pts.windows(2) {
        incremental.stroke_polyline(pair, draw_style()).unwrap();
    }

    assert_eq!(whole.pixels(), incremental.pixels());
}
