//! Default routing and hit-testing settings (canvas units)

/// Stand-off distance of a bind dongle from its anchor
pub const DONGLE_LENGTH: f64 = 40.0;

/// Hard cap on kernel iterations per routed segment
pub const MAX_KERNEL_STEPS: usize = 50;

/// Straight pieces used to approximate one cubic curve for border tests
pub const CURVE_SEGMENTS: usize = 10;
