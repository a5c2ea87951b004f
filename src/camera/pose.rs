use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A camera position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Rotation from camera space to world space.
    pub orientation: Quat,
}

impl CameraPose {
    /// Origin position with identity orientation.
    pub const ZERO: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Build a pose from a position and orientation.
    #[must_use]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Interpolate towards `to` (lerp position, slerp orientation).
    #[must_use]
    pub fn interpolate(&self, to: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(to.position, t),
            orientation: self.orientation.slerp(to.orientation, t),
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin_identity() {
        let pose = CameraPose::default();
        assert_eq!(pose.position, Vec3::ZERO);
        assert_eq!(pose.orientation, Quat::IDENTITY);
    }

    #[test]
    fn interpolate_endpoints() {
        let a = CameraPose::ZERO;
        let b = CameraPose::new(
            Vec3::new(2.0, 4.0, 6.0),
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        );
        assert_eq!(a.interpolate(&b, 0.0), a);
        let end = a.interpolate(&b, 1.0);
        assert!(end.position.abs_diff_eq(b.position, 1e-6));
        assert!(end.orientation.abs_diff_eq(b.orientation, 1e-6));

        let mid = a.interpolate(&b, 0.5);
        assert!(mid.position.abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }
}
