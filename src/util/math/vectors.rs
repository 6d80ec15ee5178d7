use core::ops::Mul;

/// Horizontal-plane projection of a reference measurement, either
/// gravity-corrected acceleration or the magnetic field vector.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReferenceVector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ReferenceVector3D {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        ReferenceVector3D { x, y, z }
    }
}

impl Mul<f32> for ReferenceVector3D {
    type Output = ReferenceVector3D;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    Roll,
    Pitch,
}

/// Tilt relative to level for each rotation axis, in radians
/// (0 = level, ±π/2 = vertical). The sensor-fusion stage owns and
/// updates this table; this crate only reads one entry per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiltAngles {
    pub roll: f32,
    pub pitch: f32,
}

impl TiltAngles {
    pub fn angle(&self, axis: RotationAxis) -> f32 {
        match axis {
            RotationAxis::Roll => self.roll,
            RotationAxis::Pitch => self.pitch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_angle_lookup_by_axis() {
        let angles = TiltAngles {
            roll: 0.25,
            pitch: -0.5,
        };

        assert_eq!(angles.angle(RotationAxis::Roll), 0.25);
        assert_eq!(angles.angle(RotationAxis::Pitch), -0.5);
    }

    #[test]
    fn uniform_scaling_scales_every_component() {
        let scaled = ReferenceVector3D::new(1.0, -2.0, 0.5) * 4.0;

        assert_eq!(scaled, ReferenceVector3D::new(4.0, -8.0, 2.0));
    }
}
