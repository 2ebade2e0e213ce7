use crate::types::XYZ;

/// Receiver of per-tick sample triples.
///
/// The sampling service delivers exactly one triple per tick, synchronously
/// and in tick order; a triple is never interleaved with another tick's.
/// Implemented by the live renderer.
pub trait SampleSink {
    fn receive(&mut self, sample: XYZ);
}
