use async_trait::async_trait;

use motion_common::types::{SensorKind, XYZ};

/// Port to an external sensor stream.
///
/// The service pulls one triple per tick. `None` models a hardware hiccup:
/// that tick is skipped, never retried. A retry would desynchronize
/// elapsed time from the tick count.
#[async_trait]
pub trait SensorSource {
    /// Sensor kinds this source can deliver.
    fn available(&self) -> Vec<SensorKind>;

    /// Reads one (x, y, z) triple for `kind`.
    ///
    /// Returns `None` when the hardware yields nothing on this tick.
    async fn sample(&self, kind: SensorKind) -> Option<XYZ>;
}
