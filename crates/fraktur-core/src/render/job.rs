use crate::fractal::FractalKind;
use crate::viewport::Viewport;

/// Immutable snapshot of everything a render pass needs, captured at
/// dispatch time. Workers read only this copy; later mutations of the live
/// session state cannot leak into an in-flight job.
#[derive(Clone, Debug)]
pub struct RenderJob {
    pub viewport: Viewport,
    pub fractal: FractalKind,
    pub max_iterations: u32,
    /// Resolution length-scale: render dimensions are window dimensions
    /// times this factor.
    pub scale: f64,
    pub render_width: u32,
    pub render_height: u32,
}

impl RenderJob {
    pub fn new(viewport: &Viewport, fractal: FractalKind, max_iterations: u32, scale: f64) -> Self {
        Self {
            viewport: *viewport,
            fractal,
            max_iterations,
            scale,
            render_width: (viewport.width() as f64 * scale) as u32,
            render_height: (viewport.height() as f64 * scale) as u32,
        }
    }
}

/// Per-frame iteration budget for the given zoom depth.
///
/// Linear in the zoom-step count so frame cost stays bounded while deeper
/// zooms still resolve boundary detail. Total for all inputs: negative step
/// counts and non-finite values clamp to the floor, the result always lands
/// in [1, cap].
pub fn iteration_budget(zoom_steps: f64, initial: u32, increment: u32, cap: u32) -> u32 {
    let cap = cap.max(1);
    let raw = zoom_steps * increment as f64 + initial as f64;

    if raw < 1.0 || raw.is_nan() {
        1
    } else if raw >= cap as f64 {
        cap
    } else {
        raw as u32
    }
}
