use num_complex::Complex64;

use crate::consts::{BASE_PLANE_EXTENT, MIN_ZOOM, OFFSET_LIMIT};

/// View of the complex plane through a pixel window.
///
/// Owns the bidirectional mapping between screen coordinates and plane
/// coordinates. Plane extents and per-pixel deltas are derived state and are
/// recomputed together whenever zoom or window size changes; the shorter
/// window dimension always spans `BASE_PLANE_EXTENT / zoom` and the longer
/// one scales by aspect ratio.
///
/// Screen y grows downward while the imaginary axis grows upward, so the
/// mapping inverts y: row 0 (the top of the window) is the most positive
/// imaginary value. `plane_to_screen` applies the same convention.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: u32,
    height: u32,
    half_width: f64,
    half_height: f64,
    zoom: f64,
    zoom_steps: f64,
    plane_width: f64,
    plane_height: f64,
    dx_ratio: f64,
    dy_ratio: f64,
    offset: Complex64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let mut vp = Self {
            width,
            height,
            half_width: width as f64 / 2.0,
            half_height: height as f64 / 2.0,
            zoom: MIN_ZOOM,
            zoom_steps: 0.0,
            plane_width: 0.0,
            plane_height: 0.0,
            dx_ratio: 0.0,
            dy_ratio: 0.0,
            offset: Complex64::new(0.0, 0.0),
        };
        vp.refresh_plane_extent();
        vp
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Discrete zoom steps taken from the initial view, `log2(zoom)`.
    /// Drives the iteration budget.
    pub fn zoom_steps(&self) -> f64 {
        self.zoom_steps
    }

    pub fn offset(&self) -> Complex64 {
        self.offset
    }

    pub fn plane_width(&self) -> f64 {
        self.plane_width
    }

    pub fn plane_height(&self) -> f64 {
        self.plane_height
    }

    /// True when the view is at the initial zoom and centered at the origin.
    pub fn is_initial(&self) -> bool {
        self.zoom == MIN_ZOOM && self.offset == Complex64::new(0.0, 0.0)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.half_width = width as f64 / 2.0;
        self.half_height = height as f64 / 2.0;
        self.refresh_plane_extent();
    }

    /// Set the absolute zoom factor. Values below the minimum are clamped.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = if zoom.is_finite() { zoom.max(MIN_ZOOM) } else { MIN_ZOOM };
        self.zoom_steps = self.zoom.log2();
        self.refresh_plane_extent();
    }

    /// Center the view on `center`, clamped to the legal pan region.
    pub fn set_offset(&mut self, center: Complex64) {
        self.offset = Complex64::new(
            center.re.clamp(-OFFSET_LIMIT, OFFSET_LIMIT),
            center.im.clamp(-OFFSET_LIMIT, OFFSET_LIMIT),
        );
    }

    pub fn reset(&mut self) {
        self.zoom = MIN_ZOOM;
        self.zoom_steps = 0.0;
        self.offset = Complex64::new(0.0, 0.0);
        self.refresh_plane_extent();
    }

    /// Map a (possibly fractional) pixel coordinate to a plane point.
    pub fn screen_to_plane(&self, px: f64, py: f64) -> Complex64 {
        Complex64::new(
            (px - self.half_width) * self.dx_ratio + self.offset.re,
            (self.half_height - py) * self.dy_ratio + self.offset.im,
        )
    }

    /// Inverse of `screen_to_plane`.
    pub fn plane_to_screen(&self, point: Complex64) -> (f64, f64) {
        (
            (point.re - self.offset.re) / self.dx_ratio + self.half_width,
            self.half_height - (point.im - self.offset.im) / self.dy_ratio,
        )
    }

    fn refresh_plane_extent(&mut self) {
        let aspect_ratio = self.width as f64 / self.height as f64;

        if self.width < self.height {
            self.plane_width = BASE_PLANE_EXTENT / self.zoom;
            self.plane_height = self.plane_width / aspect_ratio;
        } else {
            self.plane_height = BASE_PLANE_EXTENT / self.zoom;
            self.plane_width = self.plane_height * aspect_ratio;
        }

        self.dx_ratio = self.plane_width / self.width as f64;
        self.dy_ratio = self.plane_height / self.height as f64;
    }
}
