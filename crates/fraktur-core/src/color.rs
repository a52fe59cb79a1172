use crate::fractal::PixelClass;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Non-escaping points.
pub const INTERIOR: Rgb = BLACK;

/// One distinct color per cube root of unity.
pub const NEWTON_ROOT_COLORS: [Rgb; 3] = [
    Rgb { r: 216, g: 58, b: 58 },
    Rgb { r: 58, g: 216, b: 112 },
    Rgb { r: 58, g: 112, b: 216 },
];

/// Gradient stops for escape-time coloring, traversed by normalized
/// iteration count.
const GRADIENT: [Rgb; 5] = [
    Rgb { r: 0, g: 7, b: 100 },
    Rgb { r: 32, g: 107, b: 203 },
    Rgb { r: 237, g: 255, b: 255 },
    Rgb { r: 255, g: 170, b: 0 },
    Rgb { r: 64, g: 2, b: 0 },
];

pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    Rgb {
        r: (a.r as f64 + (b.r as f64 - a.r as f64) * t) as u8,
        g: (a.g as f64 + (b.g as f64 - a.g as f64) * t) as u8,
        b: (a.b as f64 + (b.b as f64 - a.b as f64) * t) as u8,
    }
}

/// Color for an orbit that escaped after `iterations` of a budget of
/// `max_iterations`. Square-root normalization stretches the low-iteration
/// range where most of the visible boundary detail lives.
pub fn escape_gradient(iterations: u32, max_iterations: u32) -> Rgb {
    let max = max_iterations.max(1);
    let t = ((iterations + 1).min(max) as f64 / max as f64).sqrt();

    let segments = (GRADIENT.len() - 1) as f64;
    let position = t * segments;
    let index = (position as usize).min(GRADIENT.len() - 2);
    lerp(GRADIENT[index], GRADIENT[index + 1], position - index as f64)
}

/// Map a pixel classification to its display color.
pub fn shade(class: PixelClass, max_iterations: u32) -> Rgb {
    match class {
        PixelClass::Escaped { iterations } => escape_gradient(iterations, max_iterations),
        PixelClass::Interior => INTERIOR,
        PixelClass::Converged { root } => NEWTON_ROOT_COLORS[root % NEWTON_ROOT_COLORS.len()],
    }
}

/// Pack to RGBA with full alpha; byte order is r, g, b, a little-endian.
pub fn pack(color: Rgb) -> u32 {
    color.r as u32 | (color.g as u32) << 8 | (color.b as u32) << 16 | 0xFF << 24
}
