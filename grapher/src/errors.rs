//! Module errors

/// Represents the different types of errors that can occur while rendering.
#[derive(Debug)]
pub enum GraphError {
    /// Error indicating a zero, negative or non-finite plot parameter;
    /// mapping through it would produce NaN or garbage pixel coordinates.
    InvalidGeometry(String),
}
