//! Placement of things in the anchor's local frame
//!
//! Platforms only ever move along the anchor's X or Z axis and turn about Y,
//! so a position, a yaw and a uniform scale describe everything we draw.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Horizontal axis a jump travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    #[default]
    X,
    Z,
}

impl Axis {
    /// Unit vector along the axis
    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Z => Vec3::Z,
        }
    }

    /// Yaw (degrees) that turns the figure mesh to face along the axis
    pub fn facing_yaw(&self) -> f32 {
        match self {
            Axis::X => -90.0,
            Axis::Z => -180.0,
        }
    }

    /// Component of `v` along the axis
    pub fn component(&self, v: Vec3) -> f32 {
        v.dot(self.unit())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Z => "Z",
        }
    }
}

/// Position, yaw about +Y (degrees) and uniform scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        yaw: 0.0,
        scale: 1.0,
    };

    pub fn new(position: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            position,
            yaw,
            scale,
        }
    }

    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Copy moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            position: self.position + offset,
            ..*self
        }
    }

    pub fn with_yaw(&self, yaw: f32) -> Self {
        Self { yaw, ..*self }
    }

    pub fn with_scale(&self, scale: f32) -> Self {
        Self { scale, ..*self }
    }

    /// Ground-plane coordinates (x, z)
    #[inline]
    pub fn planar(&self) -> (f32, f32) {
        (self.position.x, self.position.z)
    }

    /// Model matrix: translate * rotate(yaw about Y) * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw.to_radians()),
            self.position,
        )
    }
}
