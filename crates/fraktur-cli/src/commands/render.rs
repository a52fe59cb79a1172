use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use num_complex::Complex64;
use tracing::debug;

use fraktur_core::config::RenderSettings;
use fraktur_core::export;
use fraktur_core::fractal::FractalKind;
use fraktur_core::session::Session;

#[derive(Clone, Copy, ValueEnum)]
pub enum FractalArg {
    Mandelbrot,
    Tricorn,
    BurningShip,
    Newton,
}

impl FractalArg {
    pub fn kind(self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Tricorn => FractalKind::Tricorn,
            Self::BurningShip => FractalKind::BurningShip,
            Self::Newton => FractalKind::Newton,
        }
    }

    pub fn index(self) -> usize {
        FractalKind::ALL
            .iter()
            .position(|&k| k == self.kind())
            .expect("every fractal kind is listed")
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Output image path
    #[arg(long, default_value = "fractal.png")]
    pub output: PathBuf,

    /// Fractal to render
    #[arg(long, value_enum, default_value = "mandelbrot")]
    pub fractal: FractalArg,

    /// Render width in pixels
    #[arg(long, default_value = "1600")]
    pub width: u32,

    /// Render height in pixels
    #[arg(long, default_value = "900")]
    pub height: u32,

    /// Zoom exponent: the view magnification is 10^ZOOM
    #[arg(long, default_value = "0")]
    pub zoom: f64,

    /// Real part of the view center
    #[arg(long, default_value = "0")]
    pub real: f64,

    /// Imaginary part of the view center
    #[arg(long, default_value = "0")]
    pub imag: f64,

    /// Resolution option index (0 = 100%, 4 = 6.25%)
    #[arg(long, default_value = "0")]
    pub resolution: usize,

    /// Render at the absolute iteration cap instead of the zoom-derived budget
    #[arg(long)]
    pub full: bool,

    /// TOML file with render settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let settings = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading settings from {}", path.display()))?;
            let settings: RenderSettings = toml::from_str(&raw)?;
            debug!(path = %path.display(), "loaded render settings");
            settings
        }
        None => RenderSettings::default(),
    };

    let mut session = Session::with_settings(args.width, args.height, settings);
    session.select_fractal(args.fractal.index())?;
    session.zoom_to(10f64.powf(args.zoom))?;
    session.pan_to(Complex64::new(args.real, args.imag))?;
    session.select_resolution(args.resolution)?;
    if args.full {
        session.request_full_render()?;
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {percent}%")?
            .progress_chars("=> "),
    );
    pb.set_message(format!("Rendering {}", session.fractal()));

    while session.is_rendering() {
        pb.set_position((session.progress() * 100.0) as u64);
        thread::sleep(Duration::from_millis(50));
    }
    session.wait();
    pb.finish_with_message(format!("Rendered {}", session.fractal()));

    let frame = session.latest_frame().context("no frame was produced")?;
    export::save_frame(&frame, &args.output)?;

    println!(
        "Saved {} ({}x{}, {} iterations, zoom 10^{})",
        style(args.output.display()).green(),
        frame.width(),
        frame.height(),
        session.iterations(),
        args.zoom,
    );

    Ok(())
}
