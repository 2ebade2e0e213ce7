use std::fmt;

#[cfg(any(feature = "serde-serialize", test))]
use serde::{Deserialize, Serialize};

/// Kind of motion sensor a session reads from.
///
/// The kind selects the external sensor stream and labels the finalized
/// record; it has no effect on sampling or rendering behavior.
#[cfg_attr(
    any(feature = "serde-serialize", test),
    derive(Serialize, Deserialize)
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Gyroscope,
    Accelerometer,
}

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Gyroscope => "gyroscope",
            SensorKind::Accelerometer => "accelerometer",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SensorKind {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower_case_value = value.to_lowercase();
        if lower_case_value.contains("gyr") {
            Ok(Self::Gyroscope)
        } else if lower_case_value.contains("acc") {
            Ok(Self::Accelerometer)
        } else {
            Err(format!("Unknown sensor kind: {}", value))
        }
    }
}

impl TryFrom<String> for SensorKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SensorKind::try_from(value.as_str())
    }
}
