/// Interval of the acquisition timer, in seconds.
pub const DEFAULT_TICK_INTERVAL_SECS: f64 = 0.1;

/// Length of a full capture window, in seconds.
pub const DEFAULT_TARGET_DURATION_SECS: f64 = 60.0;
