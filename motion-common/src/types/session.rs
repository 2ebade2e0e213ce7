use uuid::Uuid;

use crate::types::{Axis, AxisBuffer, MeasuredData, SensorKind, XYZ};
use crate::utils::{epoch_secs_now, round_decimal};

/// Mutable state of one in-progress acquisition run.
///
/// The session exclusively owns its three axis buffers. Exactly one triple
/// may be appended per tick; a tick whose sensor read failed appends
/// nothing but still advances elapsed time, so the buffer length may fall
/// short of `elapsed / tick_interval`.
#[derive(Debug)]
pub struct MeasuredSession {
    id: Uuid,
    kind: SensorKind,
    elapsed_secs: f64,
    x: AxisBuffer,
    y: AxisBuffer,
    z: AxisBuffer,
}

impl MeasuredSession {
    pub fn new(kind: SensorKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            elapsed_secs: 0.0,
            x: AxisBuffer::new(),
            y: AxisBuffer::new(),
            z: AxisBuffer::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Number of triples appended so far. All three buffers share it.
    pub fn sample_count(&self) -> usize {
        self.x.len()
    }

    /// Appends one triple, one scalar per axis buffer.
    pub fn append(&mut self, sample: &XYZ) {
        self.x.push(sample.axis(Axis::X));
        self.y.push(sample.axis(Axis::Y));
        self.z.push(sample.axis(Axis::Z));
    }

    /// Advances elapsed time by exactly one tick interval.
    pub fn advance(&mut self, tick_interval_secs: f64) {
        self.elapsed_secs += tick_interval_secs;
    }

    /// Whether elapsed time has reached `target_secs`.
    ///
    /// Both sides are rounded to one decimal before the equality test, so
    /// repeated additions of 0.1 cannot drift past the target.
    pub fn is_complete(&self, target_secs: f64) -> bool {
        round_decimal(self.elapsed_secs) == round_decimal(target_secs)
    }

    /// Consumes the session into its immutable record.
    ///
    /// Ownership of the buffers transfers to the record; no mutable
    /// reference to them survives this call.
    pub fn finalize(self) -> MeasuredData {
        MeasuredData::new(
            self.id,
            epoch_secs_now(),
            self.kind,
            round_decimal(self.elapsed_secs),
            self.x,
            self.y,
            self.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_SECS: f64 = 0.1;

    #[test]
    fn test_three_ticks_reach_target() {
        let mut session = MeasuredSession::new(SensorKind::Gyroscope);
        for i in 0..3 {
            assert!(!session.is_complete(0.3));
            session.append(&XYZ::new([i as f64, 0.0, 0.0]));
            session.advance(TICK_SECS);
        }
        assert!(session.is_complete(0.3));
        assert_eq!(session.sample_count(), 3);
    }

    #[test]
    fn test_dropped_tick_still_completes() {
        let mut session = MeasuredSession::new(SensorKind::Accelerometer);
        for tick in 0..10 {
            // tick #5 yields no sensor data
            if tick != 5 {
                session.append(&XYZ::new([0.1, 0.2, 0.3]));
            }
            session.advance(TICK_SECS);
        }
        assert!(session.is_complete(1.0));
        assert_eq!(session.sample_count(), 9);
    }

    #[test]
    fn test_finalize_rounds_duration() {
        let mut session = MeasuredSession::new(SensorKind::Gyroscope);
        for _ in 0..3 {
            session.append(&XYZ::new([1.0, 2.0, 3.0]));
            session.advance(TICK_SECS);
        }
        let id = session.id();
        let record = session.finalize();
        assert_eq!(record.id(), id);
        assert_eq!(record.duration_secs(), 0.3);
        assert_eq!(record.kind(), SensorKind::Gyroscope);
        assert_eq!(record.sample_count(), 3);
        assert_eq!(record.axis(Axis::Y), &[2.0, 2.0, 2.0]);
    }
}
