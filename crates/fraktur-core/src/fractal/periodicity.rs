use num_complex::Complex64;

use crate::consts::{PERIODICITY_CHECK_INTERVAL, PERIODICITY_EPSILON};

/// Detects orbits that have settled into a cycle, so interior points can be
/// classified without exhausting the iteration budget.
///
/// A checkpoint is recorded every `PERIODICITY_CHECK_INTERVAL` iterations and
/// the current point compared against it. Points deep inside filled regions
/// revisit the checkpoint long before the budget runs out.
pub struct PeriodicityChecker {
    checkpoint: Complex64,
    iteration: u32,
}

impl PeriodicityChecker {
    pub fn new(z0: Complex64) -> Self {
        Self {
            checkpoint: z0,
            iteration: 0,
        }
    }

    /// Feed the next orbit point. Returns true once the orbit is judged
    /// cyclic.
    pub fn advance(&mut self, z: Complex64) -> bool {
        self.iteration += 1;
        if self.iteration % PERIODICITY_CHECK_INTERVAL != 0 {
            return false;
        }
        if points_coincide(z, self.checkpoint) {
            return true;
        }
        self.checkpoint = z;
        false
    }
}

/// Cycle test: squared distance, dot-product deviation from 1, and cross
/// product must all fall under the epsilon.
pub fn points_coincide(z: Complex64, w: Complex64) -> bool {
    let dist_sq = (z - w).norm_sqr();
    let dot = z.re * w.re + z.im * w.im;
    let cross = z.re * w.im - z.im * w.re;

    dist_sq < PERIODICITY_EPSILON
        && (dot - 1.0).abs() < PERIODICITY_EPSILON
        && cross.abs() < PERIODICITY_EPSILON
}
