use uuid::Uuid;

use motion_common::types::{Axis, AxisBuffer, MeasuredData, SensorKind, XYZ};
use motion_common::utils::{epoch_secs_now, round_decimal};

/// Deterministic triple for tick `index`, distinct across axes and ticks.
///
/// Components are exact binary fractions, so scaled pixel coordinates can
/// be compared with plain equality.
pub fn triple(index: usize) -> XYZ {
    let base = (index + 1) as f64 * 0.25;
    XYZ::new([base, -base, base * 0.5])
}

/// Record equivalent to a session that received `triples` over
/// `duration_secs`, finalized with the usual one-decimal rounding.
pub fn record_from_triples(
    kind: SensorKind,
    duration_secs: f64,
    triples: &[XYZ],
) -> MeasuredData {
    let mut x = Vec::with_capacity(triples.len());
    let mut y = Vec::with_capacity(triples.len());
    let mut z = Vec::with_capacity(triples.len());
    for sample in triples {
        x.push(sample.axis(Axis::X));
        y.push(sample.axis(Axis::Y));
        z.push(sample.axis(Axis::Z));
    }
    MeasuredData::new(
        Uuid::new_v4(),
        epoch_secs_now(),
        kind,
        round_decimal(duration_secs),
        AxisBuffer::from(x),
        AxisBuffer::from(y),
        AxisBuffer::from(z),
    )
}
