//! Vector math for 3D rendering

use std::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. A zero-length vector is returned unchanged
    /// rather than turned into NaNs.
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return self;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f32) -> Vec3 {
        self.scale(s)
    }
}

/// Rotate around the x axis
pub fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    let c = angle.cos();
    let s = angle.sin();
    Vec3 {
        x: v.x,
        y: v.y * c - v.z * s,
        z: v.y * s + v.z * c,
    }
}

/// Rotate around the y axis
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let c = angle.cos();
    let s = angle.sin();
    Vec3 {
        x: v.x * c + v.z * s,
        y: v.y,
        z: -v.x * s + v.z * c,
    }
}

/// Rotate a position: x axis first, then y axis. Every caller in the
/// pipeline composes in this order so positions and normals stay aligned.
pub fn rotate_point(v: Vec3, ax: f32, ay: f32) -> Vec3 {
    rotate_y(rotate_x(v, ax), ay)
}

/// Rotate a direction with the same composition as [`rotate_point`],
/// renormalized for lighting.
pub fn rotate_normal(v: Vec3, ax: f32, ay: f32) -> Vec3 {
    rotate_point(v, ax, ay).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(b) - 32.0).abs() < 0.001);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3::new(3.0, -4.0, 12.0).normalize();
        assert!((v.len() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_normalize_zero_is_identity() {
        let v = Vec3::ZERO.normalize();
        assert!(v.len() == 0.0);
    }

    #[test]
    fn test_rotate_x_quarter_turn() {
        let r = rotate_x(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2);
        assert!((r - Vec3::new(0.0, 0.0, 1.0)).len() < 0.001);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let r = rotate_y(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert!((r - Vec3::new(1.0, 0.0, 0.0)).len() < 0.001);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(1.2, -3.4, 0.7);
        for &(ax, ay) in &[(0.3, 1.1), (2.0, -0.6), (-1.4, 3.9)] {
            let r = rotate_point(v, ax, ay);
            assert!((r.len() - v.len()).abs() < 0.001);
        }
    }

    #[test]
    fn test_rotate_point_applies_x_then_y() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let (ax, ay) = (0.7, 1.3);
        let manual = rotate_y(rotate_x(v, ax), ay);
        assert!((rotate_point(v, ax, ay) - manual).len() < 0.001);
        // the reversed composition lands somewhere else entirely
        let reversed = rotate_x(rotate_y(v, ay), ax);
        assert!((rotate_point(v, ax, ay) - reversed).len() > 0.01);
    }

    #[test]
    fn test_identity_rotation_of_normal_just_normalizes() {
        let v = Vec3::new(2.0, -1.0, 0.5);
        let r = rotate_normal(v, 0.0, 0.0);
        assert!((r - v.normalize()).len() < 0.001);
        assert!((r.len() - 1.0).abs() < 0.001);
    }
}
