use std::sync::Arc;

use num_complex::Complex64;
use tracing::{error, info, warn};

use crate::config::RenderSettings;
use crate::consts::{MAX_ITERATIONS_LIMIT, MIN_ZOOM};
use crate::error::Result;
use crate::fractal::FractalKind;
use crate::frame::Frame;
use crate::render::{iteration_budget, RenderJob, RenderScheduler};
use crate::trajectory::{self, TrajectoryOverlay};
use crate::viewport::Viewport;

/// A selectable render resolution: the render dimensions are the window
/// dimensions times `length_scale` (so 50% pixel area is a √0.5 length
/// factor).
#[derive(Clone, Copy, Debug)]
pub struct ResolutionOption {
    pub name: &'static str,
    pub length_scale: f64,
}

pub const RESOLUTION_OPTIONS: &[ResolutionOption] = &[
    ResolutionOption { name: "100%", length_scale: 1.0 },
    ResolutionOption { name: "50%", length_scale: 0.707_106_781_186_547_6 },
    ResolutionOption { name: "25%", length_scale: 0.5 },
    ResolutionOption { name: "12.5%", length_scale: 0.353_553_390_593_273_8 },
    ResolutionOption { name: "6.25%", length_scale: 0.25 },
];

/// Long-lived interactive state: viewport, fractal and resolution selection,
/// iteration settings, the scheduler, and the cached trajectory overlay.
///
/// One handler per external intent. Handlers validate, mutate, and
/// re-dispatch; invalid parameters are rejected as logged no-ops with no
/// state change, and anything that moves the view drops the trajectory
/// overlay.
pub struct Session {
    viewport: Viewport,
    fractal: FractalKind,
    resolution_index: usize,
    settings: RenderSettings,
    /// Budget used by the most recent dispatch; trajectory requests reuse it.
    current_iterations: u32,
    scheduler: RenderScheduler,
    trajectory: Option<TrajectoryOverlay>,
}

impl Session {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_settings(width, height, RenderSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: RenderSettings) -> Self {
        let mut settings = settings;
        settings.max_iterations = settings.max_iterations.clamp(1, MAX_ITERATIONS_LIMIT);

        let viewport = Viewport::new(width.max(1), height.max(1));
        let current_iterations = iteration_budget(
            viewport.zoom_steps(),
            settings.initial_iterations,
            settings.iteration_increment,
            settings.max_iterations,
        );

        Self {
            viewport,
            fractal: FractalKind::Mandelbrot,
            resolution_index: 0,
            settings,
            current_iterations,
            scheduler: RenderScheduler::new(),
            trajectory: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn fractal(&self) -> FractalKind {
        self.fractal
    }

    pub fn resolution_index(&self) -> usize {
        self.resolution_index
    }

    /// Budget the most recent dispatch ran with.
    pub fn iterations(&self) -> u32 {
        self.current_iterations
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.scheduler.latest_frame()
    }

    pub fn progress(&self) -> f32 {
        self.scheduler.progress()
    }

    pub fn is_rendering(&self) -> bool {
        self.scheduler.is_rendering()
    }

    pub fn trajectory(&self) -> Option<&TrajectoryOverlay> {
        self.trajectory.as_ref()
    }

    /// Block until the in-flight render (if any) completes.
    pub fn wait(&mut self) {
        self.scheduler.wait();
    }

    /// Center the view on a plane point.
    pub fn pan_to(&mut self, center: Complex64) -> Result<()> {
        self.viewport.set_offset(center);
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Multiply the zoom factor. Rejected when the result would fall below
    /// the minimum zoom.
    pub fn zoom_by(&mut self, factor: f64) -> Result<()> {
        let target = self.viewport.zoom() * factor;
        if !target.is_finite() || target < MIN_ZOOM {
            warn!(factor, "rejecting zoom below minimum level");
            return Ok(());
        }
        self.viewport.set_zoom(target);
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Jump to an absolute zoom factor.
    pub fn zoom_to(&mut self, zoom: f64) -> Result<()> {
        if !zoom.is_finite() || zoom < MIN_ZOOM {
            warn!(zoom, "rejecting zoom below minimum level");
            return Ok(());
        }
        self.viewport.set_zoom(zoom);
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Switch the active fractal by its index in `FractalKind::ALL`.
    pub fn select_fractal(&mut self, index: usize) -> Result<()> {
        let Some(&kind) = FractalKind::ALL.get(index) else {
            warn!(index, "rejecting out-of-range fractal selection");
            return Ok(());
        };
        if kind == self.fractal {
            return Ok(());
        }
        info!(fractal = %kind, "switching fractal");
        self.fractal = kind;
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Switch the render resolution by its index in `RESOLUTION_OPTIONS`.
    pub fn select_resolution(&mut self, index: usize) -> Result<()> {
        if index >= RESOLUTION_OPTIONS.len() {
            warn!(index, "rejecting out-of-range resolution selection");
            return Ok(());
        }
        if index == self.resolution_index {
            return Ok(());
        }
        self.resolution_index = index;
        self.begin_render(false)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            warn!(width, height, "rejecting zero-sized window");
            return Ok(());
        }
        if width == self.viewport.width() && height == self.viewport.height() {
            return Ok(());
        }
        self.viewport.resize(width, height);
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Raise or lower the absolute iteration cap used by full renders.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<()> {
        if max_iterations == 0 {
            warn!("rejecting zero iteration cap");
            return Ok(());
        }
        self.settings.max_iterations = max_iterations.min(MAX_ITERATIONS_LIMIT);
        self.begin_render(false)
    }

    /// Re-render at the absolute iteration cap instead of the zoom-derived
    /// budget.
    pub fn request_full_render(&mut self) -> Result<()> {
        self.begin_render(true)
    }

    /// Return to the initial zoom and origin. No-op when already there.
    pub fn reset(&mut self) -> Result<()> {
        if self.viewport.is_initial() {
            return Ok(());
        }
        self.viewport.reset();
        self.trajectory = None;
        self.begin_render(false)
    }

    /// Compute and cache the orbit overlay for a plane point. Skipped while
    /// a frame render is in flight.
    pub fn request_trajectory_at(&mut self, point: Complex64) -> Option<&TrajectoryOverlay> {
        if self.scheduler.is_rendering() {
            return None;
        }
        let orbit = self.fractal.trajectory(point, self.current_iterations);
        self.trajectory = Some(trajectory::rasterize(&orbit, &self.viewport));
        self.trajectory.as_ref()
    }

    fn begin_render(&mut self, full: bool) -> Result<()> {
        self.current_iterations = if full {
            self.settings.max_iterations
        } else {
            iteration_budget(
                self.viewport.zoom_steps(),
                self.settings.initial_iterations,
                self.settings.iteration_increment,
                self.settings.max_iterations,
            )
        };

        let scale = RESOLUTION_OPTIONS[self.resolution_index].length_scale;
        let job = RenderJob::new(&self.viewport, self.fractal, self.current_iterations, scale);

        self.scheduler.dispatch(job).inspect_err(|e| {
            error!(error = %e, "render dispatch failed; keeping previous frame");
        })
    }
}
