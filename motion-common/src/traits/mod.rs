pub mod render;
pub mod sink;

pub use render::RenderSurface;
pub use sink::SampleSink;
