//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, at most one input event per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies (the tracker is a trait)

pub mod collision;
pub mod generator;
pub mod platform;
pub mod score;
pub mod state;
pub mod tick;
pub mod tracker;
pub mod trajectory;
pub mod transform;

pub use collision::{Landing, footprint_contains, judge_landing};
pub use generator::{Placement, PlatformGenerator, axis_for_draw, gap_for_draw};
pub use platform::{Figure, Platform, PlatformHistory};
pub use score::{GameOverSummary, Session};
pub use state::{GamePhase, GameState, Scene};
pub use tick::{Frame, UiEvent, tick};
pub use tracker::{FixedTracker, Tracker, TrackingState};
pub use trajectory::{JumpStep, Trajectory, arc_height, jump_distance};
pub use transform::{Axis, Transform};
