use motion_common::types::Rgb;

/// Multiplier converting raw sensor units into pixel displacement.
pub const VALUE_SCALE: f64 = 100.0;

/// Stroke width of every axis polyline.
pub const LINE_WIDTH: f64 = 1.0;

/// Samples per second at the stock 0.1s acquisition tick.
pub const SAMPLES_PER_SECOND: f64 = 10.0;

/// Interval of the playback readout clock, in seconds.
pub const TRANSPORT_TICK_SECS: f64 = 0.1;

/// Fixed stroke colors indexed by `Axis`: x red, y green, z blue. Shared
/// by both render modes.
pub const AXIS_PALETTE: [Rgb; 3] = [Rgb::RED, Rgb::GREEN, Rgb::BLUE];
