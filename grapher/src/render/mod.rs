pub(crate) mod playback;
pub(crate) mod stream;

pub use stream::StreamState;

use log::debug;
use std::sync::Arc;

use motion_common::traits::{RenderSurface, SampleSink};
use motion_common::types::{MeasuredData, XYZ};

use crate::errors::GraphError;
use crate::geometry::PlotGeometry;

/// Render mode: incremental polylines fed by a live session, or a one-pass
/// drawing of a finalized record.
pub enum GraphMode {
    Streaming(StreamState),
    Playback(Arc<MeasuredData>),
}

/// Three-axis line graph over a render surface.
///
/// The renderer owns its surface and a mode tag; both modes share one
/// palette and one coordinate mapping, so a live capture and its later
/// playback are visually indistinguishable apart from animation.
pub struct GraphRenderer<S>
where
    S: RenderSurface,
{
    surface: S,
    geometry: PlotGeometry,
    mode: GraphMode,
}

impl<S> GraphRenderer<S>
where
    S: RenderSurface,
{
    /// Live renderer. The horizontal interval is fixed here, once, from
    /// the session's target duration and tick interval.
    pub fn streaming(
        surface: S,
        geometry: PlotGeometry,
        target_duration_secs: f64,
        tick_interval_secs: f64,
    ) -> Result<Self, GraphError> {
        let state = StreamState::new(&geometry, target_duration_secs, tick_interval_secs)?;
        Ok(Self {
            surface,
            geometry,
            mode: GraphMode::Streaming(state),
        })
    }

    /// Playback renderer over a finalized record.
    pub fn playback(surface: S, geometry: PlotGeometry, record: Arc<MeasuredData>) -> Self {
        Self {
            surface,
            geometry,
            mode: GraphMode::Playback(record),
        }
    }

    /// Draws the current mode onto the surface.
    ///
    /// Streaming strokes the polylines accumulated so far; playback
    /// rebuilds all three polylines from the record, recomputing the
    /// interval from its stored duration.
    pub fn draw(&mut self) -> Result<(), GraphError> {
        match &mut self.mode {
            GraphMode::Streaming(state) => {
                state.stroke_all(&mut self.surface);
                Ok(())
            }
            GraphMode::Playback(record) => {
                playback::draw_record(record, &self.geometry, &mut self.surface)
            }
        }
    }

    pub fn mode(&self) -> &GraphMode {
        &self.mode
    }

    pub fn geometry(&self) -> &PlotGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S> SampleSink for GraphRenderer<S>
where
    S: RenderSurface,
{
    /// Extends the live polylines with one triple. A playback renderer
    /// ignores delivered samples.
    fn receive(&mut self, sample: XYZ) {
        match &mut self.mode {
            GraphMode::Streaming(state) => {
                state.extend(&sample, &self.geometry, &mut self.surface)
            }
            GraphMode::Playback(_) => {
                debug!("sample delivered to a playback renderer, ignoring");
            }
        }
    }
}
