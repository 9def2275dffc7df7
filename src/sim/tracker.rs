//! What the simulation needs from the world-tracking collaborator

use super::transform::Transform;
use crate::input::ScreenPoint;

/// Tracking quality reported for the camera or an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    Tracking,
    /// Temporarily lost; may recover
    #[default]
    Paused,
    /// Lost for good
    Stopped,
}

/// Per-frame view of the tracker.
///
/// Implementations wrap the AR session; the simulation only asks questions.
pub trait Tracker {
    /// Camera pose quality this frame
    fn camera_state(&self) -> TrackingState;

    /// A horizontal, upward-facing surface is being tracked
    fn surface_ready(&self) -> bool;

    /// Pose of the first hit for `at` that lies inside a detected surface polygon
    fn hit_test(&self, at: ScreenPoint) -> Option<Transform>;

    /// Tracking quality of the anchor the game was placed on
    fn anchor_state(&self) -> TrackingState;
}

/// A tracker that reports fixed answers. Used by the headless demo and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedTracker {
    pub camera: TrackingState,
    pub surface: bool,
    pub anchor: TrackingState,
    /// Pose returned for every hit test (None = taps miss every surface)
    pub hit: Option<Transform>,
}

impl FixedTracker {
    /// Everything tracked, every tap lands at `hit`
    pub fn tracking(hit: Transform) -> Self {
        Self {
            camera: TrackingState::Tracking,
            surface: true,
            anchor: TrackingState::Tracking,
            hit: Some(hit),
        }
    }
}

impl Tracker for FixedTracker {
    fn camera_state(&self) -> TrackingState {
        self.camera
    }

    fn surface_ready(&self) -> bool {
        self.surface
    }

    fn hit_test(&self, _at: ScreenPoint) -> Option<Transform> {
        self.hit
    }

    fn anchor_state(&self) -> TrackingState {
        self.anchor
    }
}
