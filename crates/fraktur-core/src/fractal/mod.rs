mod burning_ship;
mod mandelbrot;
mod newton;
mod periodicity;
mod tricorn;

pub use newton::NEWTON_ROOTS;
pub use periodicity::PeriodicityChecker;

use num_complex::Complex64;

/// Outcome of classifying a single plane point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelClass {
    /// The orbit escaped; `iterations` is the 0-based index of the update
    /// that crossed the escape radius.
    Escaped { iterations: u32 },
    /// The orbit neither escaped nor converged within the budget, or was
    /// judged periodic early.
    Interior,
    /// Newton's method reached the root with this index.
    Converged { root: usize },
}

/// The selectable fractal algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FractalKind {
    Mandelbrot,
    Tricorn,
    BurningShip,
    Newton,
}

impl FractalKind {
    pub const ALL: [FractalKind; 4] = [
        FractalKind::Mandelbrot,
        FractalKind::Tricorn,
        FractalKind::BurningShip,
        FractalKind::Newton,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
            Self::Newton => "Newton Fractal",
        }
    }

    /// Keyboard key that activates this fractal in an interactive frontend.
    pub fn hotkey(self) -> char {
        match self {
            Self::Mandelbrot => '1',
            Self::Tricorn => '2',
            Self::BurningShip => '3',
            Self::Newton => '4',
        }
    }

    /// Classify the plane point `c` under the given iteration budget.
    pub fn classify(self, c: Complex64, max_iterations: u32) -> PixelClass {
        match self {
            Self::Mandelbrot => mandelbrot::classify(c, max_iterations),
            Self::Tricorn => tricorn::classify(c, max_iterations),
            Self::BurningShip => burning_ship::classify(c, max_iterations),
            Self::Newton => newton::classify(c, max_iterations),
        }
    }

    /// The orbit of `c`: every visited point starting with the initial value,
    /// truncated at escape or convergence. Recomputed from scratch on every
    /// call, never resumed.
    pub fn trajectory(self, c: Complex64, max_iterations: u32) -> Vec<Complex64> {
        match self {
            Self::Mandelbrot => mandelbrot::trajectory(c, max_iterations),
            Self::Tricorn => tricorn::trajectory(c, max_iterations),
            Self::BurningShip => burning_ship::trajectory(c, max_iterations),
            Self::Newton => newton::trajectory(c, max_iterations),
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
