use num_complex::Complex64;

use crate::viewport::Viewport;

/// Integer screen coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// An orbit rasterized for display: a polyline clamped to the viewport plus
/// a marker for each sample that fell inside it.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryOverlay {
    pub polyline: Vec<ScreenPoint>,
    pub markers: Vec<ScreenPoint>,
}

/// Map an orbit to screen space under the given viewport.
///
/// Polyline points are clamped to the viewport rectangle so segments heading
/// off-screen stay drawable; markers are emitted only for unclamped samples,
/// except the start point which is always marked.
pub fn rasterize(points: &[Complex64], viewport: &Viewport) -> TrajectoryOverlay {
    let mut overlay = TrajectoryOverlay::default();
    if points.is_empty() {
        return overlay;
    }

    let max_x = viewport.width() as i32;
    let max_y = viewport.height() as i32;

    for (i, &point) in points.iter().enumerate() {
        let (sx, sy) = viewport.plane_to_screen(point);
        let x = sx as i32;
        let y = sy as i32;

        let clamped_x = x.clamp(0, max_x);
        let clamped_y = y.clamp(0, max_y);
        let clamped = clamped_x != x || clamped_y != y;

        overlay.polyline.push(ScreenPoint {
            x: clamped_x,
            y: clamped_y,
        });

        if i == 0 || !clamped {
            overlay.markers.push(ScreenPoint { x, y });
        }
    }

    overlay
}
