use num_complex::Complex64;

use crate::consts::ESCAPE_RADIUS_SQ;

use super::periodicity::PeriodicityChecker;
use super::PixelClass;

/// z_{n+1} = conj(z_n)^2 + c, z_0 = 0.
pub(super) fn classify(c: Complex64, max_iterations: u32) -> PixelClass {
    let mut z = Complex64::new(0.0, 0.0);
    let mut checker = PeriodicityChecker::new(z);

    for i in 0..max_iterations {
        let zc = z.conj();
        z = zc * zc + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            return PixelClass::Escaped { iterations: i };
        }
        if checker.advance(z) {
            return PixelClass::Interior;
        }
    }

    PixelClass::Interior
}

pub(super) fn trajectory(c: Complex64, max_iterations: u32) -> Vec<Complex64> {
    let mut z = Complex64::new(0.0, 0.0);
    let mut points = vec![z];

    for _ in 0..max_iterations {
        let zc = z.conj();
        z = zc * zc + c;
        points.push(z);
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            break;
        }
    }

    points
}
