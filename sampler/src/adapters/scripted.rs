// Replays a fixed schedule of readings, for exact-value tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use motion_common::types::{SensorKind, XYZ};

use crate::ports::SensorSource;

/// Sensor source that replays a prepared schedule, one entry per tick.
///
/// A `None` entry models a tick on which the hardware yields nothing; an
/// exhausted schedule keeps yielding `None`.
pub struct ScriptedSource {
    kinds: Vec<SensorKind>,
    schedule: Mutex<VecDeque<Option<XYZ>>>,
}

impl ScriptedSource {
    pub fn new(kinds: Vec<SensorKind>, schedule: Vec<Option<XYZ>>) -> Self {
        Self {
            kinds,
            schedule: Mutex::new(schedule.into()),
        }
    }

    /// Schedule of `n` triples with strictly increasing components, no
    /// dropped ticks.
    pub fn counting(kinds: Vec<SensorKind>, n: usize) -> Self {
        let schedule = (0..n)
            .map(|i| {
                let base = i as f64;
                Some(XYZ::new([base, -base, base * 0.5]))
            })
            .collect();
        Self::new(kinds, schedule)
    }
}

#[async_trait]
impl SensorSource for ScriptedSource {
    fn available(&self) -> Vec<SensorKind> {
        self.kinds.clone()
    }

    async fn sample(&self, kind: SensorKind) -> Option<XYZ> {
        if !self.kinds.contains(&kind) {
            return None;
        }
        let mut schedule = self.schedule.lock().unwrap();
        schedule.pop_front().unwrap_or(None)
    }
}
