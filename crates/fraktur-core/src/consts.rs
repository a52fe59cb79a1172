/// Squared escape radius for the escape-time recurrences (radius 2).
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Orbit points are checked against the periodicity checkpoint every this
/// many iterations.
pub const PERIODICITY_CHECK_INTERVAL: u32 = 20;

/// Tolerance for judging an orbit to have settled into a cycle.
pub const PERIODICITY_EPSILON: f64 = 1e-8;

/// Component-wise tolerance for Newton root convergence.
pub const NEWTON_ROOT_TOLERANCE: f64 = 1e-6;

/// Iteration budget at zoom step zero.
pub const INITIAL_ITERATIONS: u32 = 96;

/// Additional iterations granted per discrete zoom step.
pub const ITERATION_INCREMENT: u32 = 40;

/// Default absolute iteration cap used by full renders.
pub const DEFAULT_MAX_ITERATIONS: u32 = 5_000;

/// Hard upper limit on any iteration budget, bounding worst-case latency.
pub const MAX_ITERATIONS_LIMIT: u32 = 10_000;

/// Minimum zoom factor (the fully zoomed-out view).
pub const MIN_ZOOM: f64 = 1.0;

/// Plane extent mapped onto the shorter window dimension at zoom 1.
pub const BASE_PLANE_EXTENT: f64 = 4.0;

/// Pan offset clamp on both axes.
pub const OFFSET_LIMIT: f64 = 2.5;

/// Pixel count above which a render job is refused. 2^28 pixels is 1 GiB of
/// RGBA, well past any sane window times resolution scale.
pub const MAX_FRAME_PIXELS: usize = 1 << 28;
