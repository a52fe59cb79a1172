use std::thread;
use std::time::{Duration, Instant};

use num_complex::Complex64;

use fraktur_core::error::FrakturError;
use fraktur_core::fractal::FractalKind;
use fraktur_core::render::{RenderJob, RenderScheduler};
use fraktur_core::viewport::Viewport;

#[test]
fn test_completed_job_publishes_frame() {
    let vp = Viewport::new(64, 48);
    let job = RenderJob::new(&vp, FractalKind::Mandelbrot, 100, 1.0);

    let mut scheduler = RenderScheduler::new();
    assert!(scheduler.latest_frame().is_none());

    scheduler.dispatch(job).unwrap();
    scheduler.wait();

    let frame = scheduler.latest_frame().expect("completed job must publish");
    assert_eq!(frame.width(), 64);
    assert_eq!(frame.height(), 48);
    assert!(!scheduler.is_rendering());
    assert!((scheduler.progress() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_resolution_scale_shrinks_render_dimensions() {
    let vp = Viewport::new(64, 48);
    let job = RenderJob::new(&vp, FractalKind::Newton, 50, 0.5);
    assert_eq!((job.render_width, job.render_height), (32, 24));

    let mut scheduler = RenderScheduler::new();
    scheduler.dispatch(job).unwrap();
    scheduler.wait();

    let frame = scheduler.latest_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (32, 24));
}

#[test]
fn test_identical_jobs_render_byte_identical_frames() {
    let mut vp = Viewport::new(96, 64);
    vp.set_zoom(8.0);
    vp.set_offset(Complex64::new(-0.7, 0.2));
    let job = RenderJob::new(&vp, FractalKind::Mandelbrot, 300, 1.0);

    let mut scheduler = RenderScheduler::new();
    scheduler.dispatch(job.clone()).unwrap();
    scheduler.wait();
    let first = scheduler.latest_frame().unwrap();

    scheduler.dispatch(job).unwrap();
    scheduler.wait();
    let second = scheduler.latest_frame().unwrap();

    assert_eq!(*first, *second);
}

#[test]
fn test_zero_sized_job_is_rejected() {
    let vp = Viewport::new(1, 1);
    let job = RenderJob::new(&vp, FractalKind::Mandelbrot, 100, 0.25);

    let mut scheduler = RenderScheduler::new();
    match scheduler.dispatch(job) {
        Err(FrakturError::FrameAllocation { width: 0, height: 0 }) => {}
        other => panic!("expected FrameAllocation, got {other:?}"),
    }
    assert!(scheduler.latest_frame().is_none());
}

#[test]
fn test_superseding_job_never_mixes_pixels() {
    // A slow boundary-heavy job, cancelled mid-flight by a different job on
    // the same scheduler. The displayed frame must be wholly the second
    // job's output.
    let mut slow_vp = Viewport::new(300, 200);
    slow_vp.set_zoom(100.0);
    slow_vp.set_offset(Complex64::new(-0.745, 0.113));
    let slow_job = RenderJob::new(&slow_vp, FractalKind::Mandelbrot, 1_500, 1.0);

    let fast_vp = Viewport::new(300, 200);
    let fast_job = RenderJob::new(&fast_vp, FractalKind::Newton, 200, 1.0);

    let mut scheduler = RenderScheduler::new();
    scheduler.dispatch(slow_job).unwrap();

    // Let the first job get some columns in (more than half when it is slow
    // enough; superseding a finished job is equally valid).
    let start = Instant::now();
    while scheduler.is_rendering()
        && scheduler.progress() < 0.5
        && start.elapsed() < Duration::from_secs(15)
    {
        thread::sleep(Duration::from_millis(2));
    }

    scheduler.dispatch(fast_job.clone()).unwrap();
    scheduler.wait();
    let displayed = scheduler.latest_frame().unwrap();

    let mut reference_scheduler = RenderScheduler::new();
    reference_scheduler.dispatch(fast_job).unwrap();
    reference_scheduler.wait();
    let reference = reference_scheduler.latest_frame().unwrap();

    assert_eq!(
        *displayed, *reference,
        "displayed frame contains pixels not from the superseding job"
    );
}

#[test]
fn test_progress_is_non_decreasing() {
    let mut vp = Viewport::new(200, 150);
    vp.set_zoom(50.0);
    vp.set_offset(Complex64::new(-0.745, 0.113));
    let job = RenderJob::new(&vp, FractalKind::Mandelbrot, 800, 1.0);

    let mut scheduler = RenderScheduler::new();
    scheduler.dispatch(job).unwrap();

    let mut last = 0.0f32;
    while scheduler.is_rendering() {
        let now = scheduler.progress();
        assert!(now >= last, "progress went backwards: {now} < {last}");
        last = now;
        thread::sleep(Duration::from_millis(1));
    }
    scheduler.wait();
    assert!((scheduler.progress() - 1.0).abs() < f32::EPSILON);
}
