#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Serialize};

const DEFAULT_AXIS_BUFFER_CAPACITY: usize = 64;

/// One scalar reading at a discrete sample index, immutable once appended.
pub type AxisSample = f64;

/// Append-only sample history for one sensor axis.
///
/// Indices are dense starting at 0. The buffer only grows while a session
/// is active; once the session finalizes, ownership moves into the record
/// and no writer exists anymore.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(Serialize, Deserialize)
)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisBuffer {
    samples: Vec<AxisSample>,
}

impl AxisBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(DEFAULT_AXIS_BUFFER_CAPACITY),
        }
    }

    pub fn push(&mut self, sample: AxisSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_slice(&self) -> &[AxisSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &AxisSample> {
        self.samples.iter()
    }
}

impl From<Vec<AxisSample>> for AxisBuffer {
    fn from(samples: Vec<AxisSample>) -> Self {
        Self { samples }
    }
}
