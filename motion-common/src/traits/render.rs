use crate::types::{Point, Rgb};

/// Drawing backend the graph renderers issue commands to.
///
/// The host UI layer owns surface refresh timing; `request_redraw` is a
/// signal, not a draw.
pub trait RenderSurface {
    fn draw_polyline(&mut self, points: &[Point], color: Rgb, line_width: f64);
    fn request_redraw(&mut self);
}
