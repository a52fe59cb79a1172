use anyhow::Result;
use clap::Args;
use console::style;
use num_complex::Complex64;

use fraktur_core::consts::MAX_ITERATIONS_LIMIT;
use fraktur_core::trajectory;
use fraktur_core::viewport::Viewport;

use super::render::FractalArg;

#[derive(Args)]
pub struct OrbitArgs {
    /// Real part of the inspected point
    pub real: f64,

    /// Imaginary part of the inspected point
    pub imag: f64,

    /// Fractal whose recurrence to iterate
    #[arg(long, value_enum, default_value = "mandelbrot")]
    pub fractal: FractalArg,

    /// Iteration budget
    #[arg(long, default_value = "100")]
    pub iterations: u32,

    /// Window width for the screen-coordinate column
    #[arg(long, default_value = "1600")]
    pub width: u32,

    /// Window height for the screen-coordinate column
    #[arg(long, default_value = "900")]
    pub height: u32,
}

pub fn run(args: &OrbitArgs) -> Result<()> {
    let kind = args.fractal.kind();
    let point = Complex64::new(args.real, args.imag);
    let budget = args.iterations.clamp(1, MAX_ITERATIONS_LIMIT);

    let orbit = kind.trajectory(point, budget);
    let viewport = Viewport::new(args.width, args.height);
    let overlay = trajectory::rasterize(&orbit, &viewport);

    println!(
        "{} orbit of {:.6}{:+.6}i ({} points, budget {}):\n",
        style(kind.name()).bold(),
        point.re,
        point.im,
        orbit.len(),
        budget
    );
    println!("{:>5}  {:>18}  {:>18}  {:>7}  {:>7}", "Step", "Re", "Im", "X", "Y");
    println!("{}", "-".repeat(62));

    for (i, (z, screen)) in orbit.iter().zip(overlay.polyline.iter()).enumerate() {
        println!(
            "{:>5}  {:>18.12}  {:>18.12}  {:>7}  {:>7}",
            i, z.re, z.im, screen.x, screen.y
        );
    }

    Ok(())
}
