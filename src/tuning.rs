//! Game balance and pacing
//!
//! Loaded from JSON so the feel of the jump can be changed without a rebuild.
//! Missing fields fall back to the defaults in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::HopError;

/// How far a jump advances on each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepMode {
    /// Fixed distance per rendered frame.
    ///
    /// Jump speed follows the frame rate: a 120 Hz device finishes a jump in
    /// half the wall-clock time of a 60 Hz one. Kept as the default for parity.
    PerFrame { stride: f32 },
    /// Distance scaled by the frame's elapsed time
    Elapsed { units_per_second: f32 },
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::PerFrame {
            stride: FRAME_STRIDE,
        }
    }
}

impl StepMode {
    /// Stride length for a frame that took `dt` seconds
    pub fn step_length(&self, dt: f32) -> f32 {
        match *self {
            StepMode::PerFrame { stride } => stride,
            StepMode::Elapsed { units_per_second } => units_per_second * dt.max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepMode::PerFrame { .. } => "per-frame",
            StepMode::Elapsed { .. } => "elapsed",
        }
    }
}

/// Tunable constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Jump distance per second of hold
    pub velocity_constant: f32,
    /// Holds at or below this duration are ignored
    pub long_press_ms: f32,
    /// Clamp for near-zero jump distances
    pub min_jump_distance: f32,
    pub step: StepMode,

    /// Platform footprint half-extent
    pub half_extent: f32,
    /// Second platform offset at game start
    pub initial_offset: f32,
    /// Figure rest height above the platform surface
    pub figure_lift: f32,
    pub platform_scale: f32,
    pub figure_scale: f32,

    pub history_capacity: usize,
    pub queue_capacity: usize,

    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            velocity_constant: JUMP_VELOCITY,
            long_press_ms: LONG_PRESS_MS,
            min_jump_distance: MIN_JUMP_DISTANCE,
            step: StepMode::default(),

            half_extent: PLATFORM_HALF_EXTENT,
            initial_offset: INITIAL_PLATFORM_OFFSET,
            figure_lift: FIGURE_LIFT,
            platform_scale: PLATFORM_SCALE,
            figure_scale: FIGURE_SCALE,

            history_capacity: HISTORY_CAPACITY,
            queue_capacity: QUEUE_CAPACITY,

            seed: None,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, HopError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HopError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HopError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Tuning saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), HopError> {
        fn positive(field: &'static str, value: f32) -> Result<(), HopError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(HopError::InvalidTuning {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("velocity_constant", self.velocity_constant)?;
        positive("min_jump_distance", self.min_jump_distance)?;
        positive("half_extent", self.half_extent)?;
        positive("platform_scale", self.platform_scale)?;
        positive("figure_scale", self.figure_scale)?;
        if !(self.long_press_ms.is_finite() && self.long_press_ms >= 0.0) {
            return Err(HopError::InvalidTuning {
                field: "long_press_ms",
                reason: format!("must be zero or more, got {}", self.long_press_ms),
            });
        }
        match self.step {
            StepMode::PerFrame { stride } => positive("step.stride", stride)?,
            StepMode::Elapsed { units_per_second } => {
                positive("step.units_per_second", units_per_second)?
            }
        }
        // A jump needs both a current and a next platform on hand
        if self.history_capacity < 2 {
            return Err(HopError::InvalidTuning {
                field: "history_capacity",
                reason: format!("must hold at least 2 platforms, got {}", self.history_capacity),
            });
        }
        if self.queue_capacity == 0 {
            return Err(HopError::InvalidTuning {
                field: "queue_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
