use uuid::Uuid;

#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Serialize};

use crate::types::{Axis, AxisBuffer, AxisSample, SensorKind};

/// Immutable finalized output of one sampling session.
///
/// Produced exactly once, at stop time. Its fields are the contract other
/// components persist: identifier, creation timestamp, sensor kind, the
/// one-decimal-rounded duration and the three completed axis sequences.
/// Share it behind `Arc`; there is no writer once it exists.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(Serialize, Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredData {
    id: Uuid,
    created_at_secs: f64,
    kind: SensorKind,
    duration_secs: f64,
    axis_x: AxisBuffer,
    axis_y: AxisBuffer,
    axis_z: AxisBuffer,
}

impl MeasuredData {
    pub fn new(
        id: Uuid,
        created_at_secs: f64,
        kind: SensorKind,
        duration_secs: f64,
        axis_x: AxisBuffer,
        axis_y: AxisBuffer,
        axis_z: AxisBuffer,
    ) -> Self {
        Self {
            id,
            created_at_secs,
            kind,
            duration_secs,
            axis_x,
            axis_y,
            axis_z,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at_secs(&self) -> f64 {
        self.created_at_secs
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Total elapsed duration in seconds, rounded to one decimal.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Completed sample sequence for `axis`, dense from index 0.
    pub fn axis(&self, axis: Axis) -> &[AxisSample] {
        match axis {
            Axis::X => self.axis_x.as_slice(),
            Axis::Y => self.axis_y.as_slice(),
            Axis::Z => self.axis_z.as_slice(),
        }
    }

    /// Number of triples recorded. Identical across the three axes.
    pub fn sample_count(&self) -> usize {
        self.axis_x.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::epoch_secs_now;

    fn sample_record() -> MeasuredData {
        MeasuredData::new(
            Uuid::new_v4(),
            epoch_secs_now(),
            SensorKind::Gyroscope,
            0.3,
            AxisBuffer::from(vec![0.1, 0.2, 0.3]),
            AxisBuffer::from(vec![-0.1, -0.2, -0.3]),
            AxisBuffer::from(vec![1.0, 2.0, 3.0]),
        )
    }

    #[test]
    fn test_axis_access() {
        let record = sample_record();
        assert_eq!(record.axis(Axis::X), &[0.1, 0.2, 0.3]);
        assert_eq!(record.axis(Axis::Y), &[-0.1, -0.2, -0.3]);
        assert_eq!(record.axis(Axis::Z), &[1.0, 2.0, 3.0]);
        assert_eq!(record.sample_count(), 3);
    }

    #[test]
    fn test_serde_round_trip() {
        let record = sample_record();
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: MeasuredData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_serialized_fields_are_the_contract() {
        let record = sample_record();
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        for field in [
            "id",
            "created_at_secs",
            "kind",
            "duration_secs",
            "axis_x",
            "axis_y",
            "axis_z",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
    }
}
