//! Shared types and traits for the `motiongraph` workspace

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;
pub mod utils;

// Re-export traits
#[doc(inline)]
pub use traits::{RenderSurface, SampleSink};

// Re-export types
#[doc(inline)]
pub use types::{
    Axis, AxisBuffer, AxisSample, MeasuredData, MeasuredSession, Point, Rgb, SensorKind, XYZ,
};
