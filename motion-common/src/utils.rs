use std::time::{SystemTime, UNIX_EPOCH};

/// Rounds a seconds value to one decimal place.
///
/// Elapsed time is accumulated by repeated additions of the tick interval,
/// which drifts in floating point; both timers compare rounded values so a
/// 0.1s accumulator still meets its target exactly.
pub fn round_decimal(secs: f64) -> f64 {
    (secs * 10.0).round() / 10.0
}

/// Wall-clock time as fractional seconds since the Unix epoch.
pub fn epoch_secs_now() -> f64 {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
    now.as_secs() as f64 + now.subsec_micros() as f64 * 1e-6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_decimal_absorbs_accumulator_drift() {
        let mut elapsed: f64 = 0.0;
        for _ in 0..3 {
            elapsed += 0.1;
        }
        // 0.1 + 0.1 + 0.1 != 0.3 in f64
        assert_ne!(elapsed, 0.3);
        assert_eq!(round_decimal(elapsed), round_decimal(0.3));
    }

    #[test]
    fn test_round_decimal_one_minute_capture() {
        let mut elapsed: f64 = 0.0;
        for _ in 0..600 {
            elapsed += 0.1;
        }
        assert_eq!(round_decimal(elapsed), 60.0);
    }

    #[test]
    fn test_round_decimal_single_place() {
        assert_eq!(round_decimal(0.25), 0.3);
        assert_eq!(round_decimal(1.04), 1.0);
        assert_eq!(round_decimal(-0.15), -0.2);
    }

    #[test]
    fn test_epoch_secs_now_is_recent() {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        let timestamp = now.as_secs() as f64 + now.subsec_micros() as f64 * 1e-6;
        assert!((epoch_secs_now() - timestamp).abs() < 1.0);
    }
}
