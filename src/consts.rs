// Distance below which two points are considered coincident for comparisons.
pub const SMALL_DISTANCE: f64 = 1e-8;

// Parameter step used by callers that flatten a curve for display.
pub const DEFAULT_SAMPLE_RATE: f64 = 0.01;
