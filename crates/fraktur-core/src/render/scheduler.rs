use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use ndarray::Array2;
use tracing::debug;

use crate::color;
use crate::consts::MAX_FRAME_PIXELS;
use crate::error::{FrakturError, Result};
use crate::frame::Frame;
use crate::render::job::RenderJob;

/// Runs render jobs on the worker pool, one at a time.
///
/// A dispatch cancels and synchronously waits out any in-flight job before
/// the new job's workers may touch the pixel buffer, so at most one job ever
/// writes it. The published frame is only ever the wholly-completed output
/// of a single job; cancelled jobs are discarded without publishing.
pub struct RenderScheduler {
    cancel: Arc<AtomicBool>,
    rendering: Arc<AtomicBool>,
    columns_done: Arc<AtomicUsize>,
    total_columns: usize,
    published: Arc<Mutex<Option<Arc<Frame>>>>,
    orchestrator: Option<JoinHandle<()>>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
            rendering: Arc::new(AtomicBool::new(false)),
            columns_done: Arc::new(AtomicUsize::new(0)),
            total_columns: 0,
            published: Arc::new(Mutex::new(None)),
            orchestrator: None,
        }
    }

    /// Start rendering `job`, cancelling any job still in flight.
    ///
    /// Returns without waiting for the new job; the caller blocks only for
    /// the cancellation of the previous one, which is bounded by the
    /// workers' per-pixel flag polling.
    pub fn dispatch(&mut self, job: RenderJob) -> Result<()> {
        self.cancel_in_flight();

        let pixels = job.render_width as usize * job.render_height as usize;
        if pixels == 0 || pixels > MAX_FRAME_PIXELS {
            return Err(FrakturError::FrameAllocation {
                width: job.render_width,
                height: job.render_height,
            });
        }

        debug!(
            fractal = %job.fractal,
            width = job.render_width,
            height = job.render_height,
            iterations = job.max_iterations,
            "dispatching render job"
        );

        self.total_columns = job.render_width as usize;
        self.columns_done.store(0, Ordering::Relaxed);
        self.rendering.store(true, Ordering::SeqCst);

        let cancel = Arc::clone(&self.cancel);
        let rendering = Arc::clone(&self.rendering);
        let columns_done = Arc::clone(&self.columns_done);
        let published = Arc::clone(&self.published);

        self.orchestrator = Some(std::thread::spawn(move || {
            run_job(&job, &cancel, &columns_done, &published);
            rendering.store(false, Ordering::SeqCst);
        }));

        Ok(())
    }

    /// The most recently completed frame, if any.
    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.published.lock().expect("published frame lock poisoned").clone()
    }

    /// Fraction of the current job's columns completed, in 0..=1.
    /// Non-decreasing until the job finishes.
    pub fn progress(&self) -> f32 {
        if self.total_columns == 0 {
            return 0.0;
        }
        let done = self.columns_done.load(Ordering::Relaxed);
        (done as f32 / self.total_columns as f32).min(1.0)
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering.load(Ordering::SeqCst)
    }

    /// Block until the in-flight job (if any) has finished.
    pub fn wait(&mut self) {
        if let Some(handle) = self.orchestrator.take() {
            let _ = handle.join();
        }
    }

    /// Signal cancellation and wait for the in-flight job to stop.
    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.orchestrator.take() {
            self.cancel.store(true, Ordering::SeqCst);
            let _ = handle.join();
            self.cancel.store(false, Ordering::SeqCst);
        }
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RenderScheduler {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

/// One complete render pass: partition columns over the worker pool, then
/// publish the buffer unless the pass was cancelled.
fn run_job(
    job: &RenderJob,
    cancel: &AtomicBool,
    columns_done: &AtomicUsize,
    published: &Mutex<Option<Arc<Frame>>>,
) {
    let width = job.render_width as usize;
    let height = job.render_height as usize;
    let buffer = Mutex::new(Array2::<u32>::zeros((height, width)));

    let workers = rayon::current_num_threads().max(1);
    let columns_per_worker = width.div_ceil(workers);

    rayon::scope(|scope| {
        for start in (0..width).step_by(columns_per_worker) {
            let end = (start + columns_per_worker).min(width);
            let buffer = &buffer;
            scope.spawn(move |_| {
                render_columns(job, start..end, cancel, columns_done, buffer);
            });
        }
    });

    if cancel.load(Ordering::SeqCst) {
        debug!("render job cancelled, discarding partial buffer");
        return;
    }

    let pixels = buffer.into_inner().expect("pixel buffer lock poisoned");
    let mut slot = published.lock().expect("published frame lock poisoned");
    *slot = Some(Arc::new(Frame::new(pixels)));
}

/// Render a contiguous range of output columns into the shared buffer.
///
/// Columns are disjoint between workers; the buffer lock still serializes
/// the writes to keep memory visibility simple. The cancellation flag is
/// polled once per pixel.
fn render_columns(
    job: &RenderJob,
    columns: Range<usize>,
    cancel: &AtomicBool,
    columns_done: &AtomicUsize,
    buffer: &Mutex<Array2<u32>>,
) {
    let height = job.render_height as usize;
    let inv_scale = 1.0 / job.scale;

    for x in columns {
        for y in 0..height {
            if cancel.load(Ordering::Relaxed) {
                return;
            }

            let c = job
                .viewport
                .screen_to_plane(x as f64 * inv_scale, y as f64 * inv_scale);
            let class = job.fractal.classify(c, job.max_iterations);
            let packed = color::pack(color::shade(class, job.max_iterations));

            let mut pixels = buffer.lock().expect("pixel buffer lock poisoned");
            pixels[[y, x]] = packed;
        }

        columns_done.fetch_add(1, Ordering::Relaxed);
    }
}
