use motion_common::traits::RenderSurface;
use motion_common::types::{Axis, MeasuredData, Point};

use crate::constants::{AXIS_PALETTE, LINE_WIDTH, SAMPLES_PER_SECOND};
use crate::errors::GraphError;
use crate::geometry::{pixel_x, pixel_y, PlotGeometry};

/// Builds the three complete polylines for a finalized record.
///
/// The horizontal interval is derived from the record's stored duration on
/// every call, with the same formula live mode fixes at session start, so
/// a capture and its playback land on identical vertices.
pub(crate) fn build_polylines(
    record: &MeasuredData,
    geometry: &PlotGeometry,
) -> Result<[Vec<Point>; 3], GraphError> {
    let interval = geometry.sample_interval(record.duration_secs(), SAMPLES_PER_SECOND)?;
    let center_y = geometry.center_y();

    let mut lines: [Vec<Point>; 3] = Default::default();
    for axis in Axis::ALL {
        let samples = record.axis(axis);
        let mut line = Vec::with_capacity(samples.len() + 1);
        line.push(Point::new(0.0, center_y));
        for (index, value) in samples.iter().enumerate() {
            let scaled = value * geometry.value_scale();
            line.push(Point::new(
                pixel_x(index, interval),
                pixel_y(scaled, center_y, 1.0),
            ));
        }
        lines[axis.index()] = line;
    }
    Ok(lines)
}

/// Draws all three axis polylines of `record` in one pass.
pub(crate) fn draw_record<S>(
    record: &MeasuredData,
    geometry: &PlotGeometry,
    surface: &mut S,
) -> Result<(), GraphError>
where
    S: RenderSurface,
{
    let lines = build_polylines(record, geometry)?;
    for (line, color) in lines.iter().zip(AXIS_PALETTE) {
        surface.draw_polyline(line, color, LINE_WIDTH);
    }
    surface.request_redraw();
    Ok(())
}
