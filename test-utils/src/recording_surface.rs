use motion_common::traits::RenderSurface;
use motion_common::types::{Point, Rgb};

/// One captured `draw_polyline` command.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub points: Vec<Point>,
    pub color: Rgb,
    pub line_width: f64,
}

/// Render surface that records every drawing command it receives.
#[derive(Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    redraw_requests: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn redraw_requests(&self) -> usize {
        self.redraw_requests
    }

    /// Draw calls stroked with `color`, in arrival order.
    pub fn calls_with_color(&self, color: Rgb) -> Vec<&DrawCall> {
        self.calls.iter().filter(|call| call.color == color).collect()
    }

    /// Concatenated vertices of every call stroked with `color`, with the
    /// shared endpoint between consecutive segments collapsed. Turns the
    /// incremental two-point segments of a live render back into one
    /// polyline.
    pub fn stitched_polyline(&self, color: Rgb) -> Vec<Point> {
        let mut stitched: Vec<Point> = Vec::new();
        for call in self.calls_with_color(color) {
            for point in &call.points {
                if stitched.last() != Some(point) {
                    stitched.push(*point);
                }
            }
        }
        stitched
    }
}

impl RenderSurface for RecordingSurface {
    fn draw_polyline(&mut self, points: &[Point], color: Rgb, line_width: f64) {
        self.calls.push(DrawCall {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
