//! Jump arc integration
//!
//! A hold of `h` milliseconds plans a jump of `h * velocity / 1000` units.
//! Each tick moves the figure one step along its facing axis (the last step is
//! clamped to land exactly on the planned distance), lifts it along a fixed
//! parabola and spins it so that one full turn completes on landing.

use glam::Vec3;

use super::platform::Figure;
use super::transform::{Axis, Transform};
use crate::consts::FULL_TURN;

/// Planned horizontal distance for a hold, never below `min_distance`
pub fn jump_distance(hold_ms: f32, velocity: f32, min_distance: f32) -> f32 {
    let distance = hold_ms * velocity / 1000.0;
    if distance.is_finite() && distance > min_distance {
        distance
    } else {
        min_distance
    }
}

/// Height above the rest position at normalized progress `t`.
///
/// `0.1` at take-off and landing, peaking at `0.3` halfway.
#[inline]
pub fn arc_height(t: f32) -> f32 {
    -0.8 * t * t + 0.8 * t + 0.1
}

/// What one tick of the arc did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpStep {
    /// Horizontal distance covered this tick
    pub stride: f32,
    /// Degrees turned this tick
    pub spin: f32,
    /// The arc reached its planned distance on this tick
    pub complete: bool,
}

/// An arc in progress
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Figure as it was at take-off
    origin: Figure,
    distance: f32,
    stride: f32,
    spin: f32,
}

impl Trajectory {
    /// Start an arc of exactly `distance` units (clamped to stay positive)
    pub fn new(origin: Figure, distance: f32) -> Self {
        Self {
            origin,
            distance: if distance > 0.0 { distance } else { f32::EPSILON },
            stride: 0.0,
            spin: 0.0,
        }
    }

    pub fn facing(&self) -> Axis {
        self.origin.facing
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Horizontal distance travelled so far
    pub fn stride(&self) -> f32 {
        self.stride
    }

    /// Degrees turned so far
    pub fn spin(&self) -> f32 {
        self.spin
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self) -> f32 {
        (self.stride / self.distance).clamp(0.0, 1.0)
    }

    pub fn height(&self) -> f32 {
        arc_height(self.progress())
    }

    pub fn is_complete(&self) -> bool {
        self.stride >= self.distance
    }

    /// Advance by one step of `step_len` units
    pub fn advance(&mut self, step_len: f32) -> JumpStep {
        if self.is_complete() || step_len.is_nan() || step_len <= 0.0 {
            return JumpStep {
                stride: 0.0,
                spin: 0.0,
                complete: self.is_complete(),
            };
        }

        let remaining = self.distance - self.stride;
        let stride = if remaining > step_len {
            self.stride += step_len;
            step_len
        } else {
            // Final partial step lands exactly on the planned distance
            self.stride = self.distance;
            remaining
        };

        let spin = (FULL_TURN * stride / self.distance).min(FULL_TURN - self.spin);
        self.spin += spin;
        let complete = self.is_complete();
        if complete {
            self.spin = FULL_TURN;
        }

        JumpStep {
            stride,
            spin,
            complete,
        }
    }

    /// Figure rest position displaced by the stride, without the arc height
    pub fn ground_position(&self) -> Vec3 {
        self.origin.transform.position + self.origin.facing.unit() * self.stride
    }

    /// Figure as it should be drawn this frame
    pub fn figure(&self) -> Figure {
        let rest = self.origin.transform;
        Figure {
            transform: Transform::new(
                self.ground_position() + Vec3::Y * self.height(),
                rest.yaw + self.spin,
                rest.scale,
            ),
            facing: self.origin.facing,
        }
    }
}
