//! Landing judgment
//!
//! A landing counts when the figure's ground-plane position lies inside the
//! target platform's square footprint, edges included.

use glam::Vec3;

use super::platform::{Figure, Platform};

/// Outcome of a finished arc
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Landing {
    /// Figure snapped onto the target surface
    Success { figure: Figure },
    /// Figure missed; position kept as it was at the end of the arc
    Miss { position: Vec3 },
}

impl Landing {
    pub fn is_success(&self) -> bool {
        matches!(self, Landing::Success { .. })
    }
}

/// Whether a ground-plane point lies within the platform footprint
#[inline]
pub fn footprint_contains(platform: &Platform, x: f32, z: f32) -> bool {
    let (px, pz) = platform.transform.planar();
    (x - px).abs() <= platform.half_extent && (z - pz).abs() <= platform.half_extent
}

/// Judge a finished arc against its target.
///
/// On success the figure keeps its planar landing spot but its height is reset
/// to exactly `lift` above the target surface, removing the residual arc height.
pub fn judge_landing(landed: &Figure, target: &Platform, lift: f32) -> Landing {
    let position = landed.transform.position;
    if !footprint_contains(target, position.x, position.z) {
        return Landing::Miss { position };
    }

    let snapped = Vec3::new(position.x, target.surface_height() + lift, position.z);
    Landing::Success {
        figure: Figure {
            transform: landed.transform.translated(snapped - position).with_yaw(0.0),
            facing: landed.facing,
        },
    }
}
