use num_complex::Complex64;

use crate::consts::NEWTON_ROOT_TOLERANCE;

use super::PixelClass;

const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// The three cube roots of unity, f(z) = z^3 - 1.
pub const NEWTON_ROOTS: [Complex64; 3] = [
    Complex64 { re: 1.0, im: 0.0 },
    Complex64 { re: -0.5, im: SQRT3_OVER_2 },
    Complex64 { re: -0.5, im: -SQRT3_OVER_2 },
];

/// z_{n+1} = z_n - (z_n^3 - 1) / (3 z_n^2), classified by which root the
/// iteration settles on.
pub(super) fn classify(z0: Complex64, max_iterations: u32) -> PixelClass {
    let mut z = z0;

    for _ in 0..max_iterations {
        let Some(next) = step(z) else {
            // Degenerate denominator: no convergence for this pixel.
            return PixelClass::Interior;
        };
        z = next;

        if let Some(root) = nearest_root(z) {
            return PixelClass::Converged { root };
        }
    }

    PixelClass::Interior
}

pub(super) fn trajectory(z0: Complex64, max_iterations: u32) -> Vec<Complex64> {
    let mut z = z0;
    let mut points = vec![z];

    for _ in 0..max_iterations {
        let Some(next) = step(z) else {
            break;
        };
        z = next;
        points.push(z);

        if nearest_root(z).is_some() {
            break;
        }
    }

    points
}

/// One Newton step. `None` when the derivative vanishes (z = 0 exactly).
fn step(z: Complex64) -> Option<Complex64> {
    let z_sq = z * z;
    let derivative = z_sq * 3.0;
    if derivative.norm_sqr() == 0.0 {
        return None;
    }
    let f = z_sq * z - 1.0;
    Some(z - f / derivative)
}

/// Index of the root within component-wise tolerance of `z`, if any.
fn nearest_root(z: Complex64) -> Option<usize> {
    NEWTON_ROOTS.iter().position(|root| {
        (z.re - root.re).abs() < NEWTON_ROOT_TOLERANCE && (z.im - root.im).abs() < NEWTON_ROOT_TOLERANCE
    })
}
