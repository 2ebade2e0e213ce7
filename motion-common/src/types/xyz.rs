use nalgebra::Vector3;

use std::ops::Mul;

use crate::types::Axis;

pub const N_XYZ_COORDINATES: usize = 3;

/// One atomic triple of scalar readings, produced by a single tick.
///
/// The three components travel together from the sensor source to the
/// buffers and the renderer; they are never delivered axis by axis.
#[derive(Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(data))
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Component of this triple along `axis`.
    pub fn axis(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(value: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::from(value))
    }
}

impl From<XYZ> for [f64; N_XYZ_COORDINATES] {
    fn from(value: XYZ) -> Self {
        value.inner()
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        if value.len() != N_XYZ_COORDINATES {
            return Err("Can't convert to XYZ");
        }
        Ok(Self(Vector3::from_vec(value)))
    }
}

impl Mul<f64> for XYZ {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0];
        let xyz = XYZ::new(data);
        assert_eq!(xyz.inner(), data);
    }

    #[test]
    fn test_axis_access() {
        let xyz = XYZ::new([0.5, -0.25, 2.0]);
        assert_eq!(xyz.axis(Axis::X), 0.5);
        assert_eq!(xyz.axis(Axis::Y), -0.25);
        assert_eq!(xyz.axis(Axis::Z), 2.0);
    }

    #[test]
    fn test_scale() {
        let xyz = XYZ::new([0.75, -0.5, 0.0]) * 100.0;
        assert_eq!(xyz.inner(), [75.0, -50.0, 0.0]);
    }

    #[test]
    fn test_try_from_wrong_length() {
        assert!(XYZ::try_from(vec![1.0, 2.0]).is_err());
        assert!(XYZ::try_from(vec![1.0, 2.0, 3.0]).is_ok());
    }
}
