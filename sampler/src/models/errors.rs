//! Module errors

/// Represents the different types of errors that can occur while sampling.
#[derive(Debug)]
pub enum SamplerError {
    /// Error indicating a non-positive or non-finite tick interval or
    /// target duration.
    InvalidConfig(String),

    /// Error indicating the requested sensor kind is not advertised by the
    /// source.
    UnsupportedSensor(String),

    /// Error indicating that `stop` found no active session.
    SessionNotActive(String),

    /// Error indicating that the listener was not found.
    ListenerNotFound(String),
}
