//! # Crate grapher-rs
//!
//! ## grapher-rs
//!
//! The `grapher-rs` crate renders three-axis motion time series as three
//! colored polylines over a [`motion_common::traits::RenderSurface`].
//!
//! Features include:
//! - Live mode: polylines extended incrementally, one atomic triple at a
//!   time, with per-axis cursors and a horizontal interval fixed once at
//!   session start.
//! - Playback mode: one-pass drawing of a finalized record, recomputing
//!   the interval from the record's stored duration on every render.
//! - A shared coordinate mapping, so a capture and its later playback land
//!   on geometrically identical plots.
//! - A playback transport clock that advances a displayed elapsed-time
//!   readout and stops itself at the record's duration.
//!
//! **NOTE** Surface refresh timing belongs to the host UI layer; this
//! crate only issues drawing commands and redraw requests.

pub mod constants;
pub mod errors;
pub mod geometry;
pub mod render;
pub mod transport;

pub use errors::GraphError;
pub use geometry::{pixel_x, pixel_y, PlotGeometry};
pub use render::{GraphMode, GraphRenderer, StreamState};
pub use transport::{run_transport, PlaybackTransport};
