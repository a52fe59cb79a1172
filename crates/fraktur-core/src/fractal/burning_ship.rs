use num_complex::Complex64;

use crate::consts::ESCAPE_RADIUS_SQ;

use super::periodicity::PeriodicityChecker;
use super::PixelClass;

/// z_{n+1} = (|Re z_n| + i|Im z_n|)^2 + c, z_0 = 0.
///
/// `c` is reflected through the real axis once up front so the ship renders
/// upright under the top-row-is-positive-imaginary screen mapping.
pub(super) fn classify(c: Complex64, max_iterations: u32) -> PixelClass {
    let c = c.conj();
    let mut z = Complex64::new(0.0, 0.0);
    let mut checker = PeriodicityChecker::new(z);

    for i in 0..max_iterations {
        let folded = Complex64::new(z.re.abs(), z.im.abs());
        z = folded * folded + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            return PixelClass::Escaped { iterations: i };
        }
        if checker.advance(z) {
            return PixelClass::Interior;
        }
    }

    PixelClass::Interior
}

/// Orbit points are conjugated back before being returned, so the displayed
/// trajectory lines up with the un-reflected viewport.
pub(super) fn trajectory(c: Complex64, max_iterations: u32) -> Vec<Complex64> {
    let c = c.conj();
    let mut z = Complex64::new(0.0, 0.0);
    let mut points = vec![z.conj()];

    for _ in 0..max_iterations {
        let folded = Complex64::new(z.re.abs(), z.im.abs());
        z = folded * folded + c;
        points.push(z.conj());
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            break;
        }
    }

    points
}
