use num_complex::Complex64;

use crate::consts::ESCAPE_RADIUS_SQ;

use super::periodicity::PeriodicityChecker;
use super::PixelClass;

/// z_{n+1} = z_n^2 + c, z_0 = 0.
pub(super) fn classify(c: Complex64, max_iterations: u32) -> PixelClass {
    // A large share of interior pixels fall in the main cardioid or the
    // period-2 bulb; both have closed-form membership tests.
    if in_main_cardioid(c) || in_period2_bulb(c) {
        return PixelClass::Interior;
    }

    let mut z = Complex64::new(0.0, 0.0);
    let mut checker = PeriodicityChecker::new(z);

    for i in 0..max_iterations {
        z = z * z + c;
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
        z = z * z + c;
        points.push(z);
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            break;
        }
    }

    points
}

/// q(q + (re - 1/4)) <= im^2 / 4, with q = (re - 1/4)^2 + im^2.
fn in_main_cardioid(c: Complex64) -> bool {
    let q = (c.re - 0.25) * (c.re - 0.25) + c.im * c.im;
    q * (q + (c.re - 0.25)) <= 0.25 * c.im * c.im
}

/// (re + 1)^2 + im^2 <= 1/16.
fn in_period2_bulb(c: Complex64) -> bool {
    (c.re + 1.0) * (c.re + 1.0) + c.im * c.im <= 0.0625
}
