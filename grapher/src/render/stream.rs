use motion_common::traits::RenderSurface;
use motion_common::types::{Axis, Point, XYZ};

use crate::constants::{AXIS_PALETTE, LINE_WIDTH};
use crate::errors::GraphError;
use crate::geometry::{pixel_y, PlotGeometry};

/// Accumulated state of a live render: one open polyline and one cursor
/// per axis, each seeded at `(0, center_y)`.
///
/// Vertices are only appended, never rewritten, so each received triple
/// costs O(1) work and redraw stays purely additive.
pub struct StreamState {
    interval: f64,
    center_y: f64,
    lines: [Vec<Point>; 3],
    cursors: [f64; 3],
}

impl StreamState {
    pub(crate) fn new(
        geometry: &PlotGeometry,
        target_duration_secs: f64,
        tick_interval_secs: f64,
    ) -> Result<Self, GraphError> {
        if !tick_interval_secs.is_finite() || tick_interval_secs <= 0.0 {
            return Err(GraphError::InvalidGeometry(format!(
                "tick interval must be positive and finite, got {}",
                tick_interval_secs
            )));
        }
        let samples_per_second = 1.0 / tick_interval_secs;
        let interval = geometry.sample_interval(target_duration_secs, samples_per_second)?;
        let center_y = geometry.center_y();
        let start = Point::new(0.0, center_y);
        Ok(Self {
            interval,
            center_y,
            lines: [vec![start], vec![start], vec![start]],
            cursors: [0.0; 3],
        })
    }

    /// Appends one vertex per axis, draws the three new segments, then
    /// requests a single redraw so the lines stay visually synchronized.
    pub(crate) fn extend<S>(&mut self, sample: &XYZ, geometry: &PlotGeometry, surface: &mut S)
    where
        S: RenderSurface,
    {
        for axis in Axis::ALL {
            let i = axis.index();
            // raw-to-display scaling happens once here, not in the mapper
            let scaled = sample.axis(axis) * geometry.value_scale();
            let vertex = Point::new(self.cursors[i], pixel_y(scaled, self.center_y, 1.0));
            let previous = *self.lines[i].last().unwrap();
            self.lines[i].push(vertex);
            surface.draw_polyline(&[previous, vertex], AXIS_PALETTE[i], LINE_WIDTH);
            self.cursors[i] += self.interval;
        }
        surface.request_redraw();
    }

    /// Strokes every polyline accumulated so far.
    pub(crate) fn stroke_all<S>(&self, surface: &mut S)
    where
        S: RenderSurface,
    {
        for axis in Axis::ALL {
            surface.draw_polyline(
                &self.lines[axis.index()],
                AXIS_PALETTE[axis.index()],
                LINE_WIDTH,
            );
        }
        surface.request_redraw();
    }

    /// Vertices accumulated for `axis`, seed point included.
    pub fn polyline(&self, axis: Axis) -> &[Point] {
        &self.lines[axis.index()]
    }

    /// Pixel X where the next sample of `axis` will land.
    pub fn cursor(&self, axis: Axis) -> f64 {
        self.cursors[axis.index()]
    }

    /// Horizontal pixel interval fixed at session start.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}
