//! Test doubles and fixtures shared by the workspace test suites.

pub mod fixtures;
pub mod recording_surface;

pub use recording_surface::{DrawCall, RecordingSurface};
