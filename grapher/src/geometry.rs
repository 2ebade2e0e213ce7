use crate::constants::VALUE_SCALE;
use crate::errors::GraphError;

/// Per-render plot parameters.
///
/// Width and height are in pixels; `value_scale` converts raw sensor units
/// (e.g. rad/s) into a legible pixel displacement around the center line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    width: f64,
    height: f64,
    value_scale: f64,
}

impl PlotGeometry {
    pub fn new(width: f64, height: f64, value_scale: f64) -> Result<Self, GraphError> {
        for (name, value) in [
            ("width", width),
            ("height", height),
            ("value scale", value_scale),
        ] {
            ensure_positive(name, value)?;
        }
        Ok(Self {
            width,
            height,
            value_scale,
        })
    }

    /// Geometry with the stock 100x value scale.
    pub fn with_default_scale(width: f64, height: f64) -> Result<Self, GraphError> {
        Self::new(width, height, VALUE_SCALE)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn value_scale(&self) -> f64 {
        self.value_scale
    }

    /// Pixel Y of the horizontal center line.
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// Horizontal pixel distance between consecutive sample vertices.
    ///
    /// One formula for both render modes: live mode fixes it at session
    /// start from the target duration and tick rate, playback derives it
    /// from the record's stored duration on every render. That is what
    /// makes a capture and its playback geometrically identical.
    pub fn sample_interval(
        &self,
        duration_secs: f64,
        samples_per_second: f64,
    ) -> Result<f64, GraphError> {
        ensure_positive("duration", duration_secs)?;
        ensure_positive("sample rate", samples_per_second)?;
        Ok(self.width / (duration_secs * samples_per_second))
    }
}

/// Pixel X of the sample at `index`.
pub fn pixel_x(index: usize, interval: f64) -> f64 {
    index as f64 * interval
}

/// Pixel Y of `value`, measured down from the top edge of the plot.
pub fn pixel_y(value: f64, center_y: f64, scale: f64) -> f64 {
    center_y - value * scale
}

fn ensure_positive(name: &str, value: f64) -> Result<(), GraphError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GraphError::InvalidGeometry(format!(
            "{} must be positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}
