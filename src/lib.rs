//! Hop AR - platform hopping over a tracked camera feed
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectory, landing judgment, game state)
//! - `input`: Bounded event queue between the UI thread and the simulation
//! - `engine`: Per-frame driver that owns the state and the event inbox
//! - `renderer`: Model matrices handed to the external renderer
//! - `tuning`: Data-driven game balance
//! - `highscores`: Persisted leaderboard

pub mod engine;
pub mod error;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use engine::Engine;
pub use error::HopError;
pub use highscores::HighScores;
pub use tuning::{StepMode, Tuning};

/// Game configuration constants
pub mod consts {
    /// Empirical jump velocity (distance units per second of hold)
    pub const JUMP_VELOCITY: f32 = 0.39589;
    /// Holds at or below this many milliseconds do not launch a jump
    pub const LONG_PRESS_MS: f32 = 300.0;
    /// Horizontal travel per frame in fixed-step mode
    pub const FRAME_STRIDE: f32 = 0.02;
    /// Lower bound on a jump distance (zero holds would divide by zero)
    pub const MIN_JUMP_DISTANCE: f32 = 0.001;

    /// Half the side length of a platform footprint
    pub const PLATFORM_HALF_EXTENT: f32 = 0.09;
    /// Offset of the second platform along X at game start
    pub const INITIAL_PLATFORM_OFFSET: f32 = 0.45;
    /// Rest height of the figure above a platform surface
    pub const FIGURE_LIFT: f32 = 0.14;

    /// Model scale of the platform mesh
    pub const PLATFORM_SCALE: f32 = 0.0009;
    /// Model scale of the figure mesh
    pub const FIGURE_SCALE: f32 = 15.0;

    /// Platforms kept for the trail
    pub const HISTORY_CAPACITY: usize = 20;
    /// Pending events between UI and simulation
    pub const QUEUE_CAPACITY: usize = 16;

    /// One full spin, in degrees
    pub const FULL_TURN: f32 = 360.0;
}
