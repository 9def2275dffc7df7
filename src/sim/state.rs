//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in one `GameState` value that is
//! threaded through `tick`. Positions are in the anchor's local frame: the
//! first platform sits at the origin and every later one is offset along X or Z.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::generator::PlatformGenerator;
use super::platform::{Figure, Platform, PlatformHistory};
use super::score::{GameOverSummary, Session};
use super::trajectory::{Trajectory, jump_distance};
use super::transform::{Axis, Transform};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No usable surface yet
    #[default]
    Idle,
    /// Surface found, waiting for the placement tap
    AwaitingFirstPlacement,
    /// Figure standing on a platform, waiting for a jump
    Armed,
    /// Arc in progress
    Jumping,
    /// Arc finished, landing judged on the next tick
    Resolving,
    /// Missed; waiting for the player to acknowledge
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::AwaitingFirstPlacement => "awaiting-placement",
            GamePhase::Armed => "armed",
            GamePhase::Jumping => "jumping",
            GamePhase::Resolving => "resolving",
            GamePhase::GameOver => "game-over",
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// World pose of the anchor the game was placed on
    pub anchor: Transform,
    /// Platform transforms, oldest first (anchor-local)
    pub platforms: Vec<Transform>,
    /// Figure transform including facing and spin (anchor-local)
    pub figure: Transform,
    pub score: u32,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub session: Session,
    pub phase: GamePhase,
    /// Start prompt dismissed since the last `Idle`
    pub start_confirmed: bool,
    /// World pose of the placement anchor
    pub anchor: Option<Transform>,
    pub platforms: PlatformHistory,
    /// Figure at rest; the in-flight figure comes from `jump`
    pub figure: Option<Figure>,
    pub jump: Option<Trajectory>,
    /// Where the last arc ended, kept after a miss for display
    pub last_landing: Option<Vec3>,
    pub game_over: Option<GameOverSummary>,
    pub games_started: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    generator: PlatformGenerator,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let platforms = PlatformHistory::new(tuning.history_capacity);
        Self {
            tuning,
            seed,
            session: Session::default(),
            phase: GamePhase::Idle,
            start_confirmed: false,
            anchor: None,
            platforms,
            figure: None,
            jump: None,
            last_landing: None,
            game_over: None,
            games_started: 0,
            time_ticks: 0,
            generator: PlatformGenerator::new(seed),
        }
    }

    /// Platform the figure stands on (or took off from)
    pub fn current_platform(&self) -> Option<&Platform> {
        self.platforms.previous()
    }

    /// Platform the next jump must land on
    pub fn target_platform(&self) -> Option<&Platform> {
        self.platforms.newest()
    }

    /// Anchor the first two platforms and stand the figure on the first
    pub fn place_first_platforms(&mut self, anchor: Transform) {
        let first = Platform::new(
            Transform::IDENTITY.with_scale(self.tuning.platform_scale),
            self.tuning.half_extent,
        );
        let second = first.offset_along(Axis::X, self.tuning.initial_offset);

        self.platforms.clear();
        self.platforms.push(first);
        self.platforms.push(second);
        self.anchor = Some(anchor);
        self.figure = Some(Figure::resting_on(
            &first,
            Axis::X,
            self.tuning.figure_lift,
            self.tuning.figure_scale,
        ));
        self.games_started += 1;
        log::info!(
            "Game {} placed at ({:.3}, {:.3}, {:.3})",
            self.games_started,
            anchor.position.x,
            anchor.position.y,
            anchor.position.z
        );
    }

    /// Launch an arc from the resting figure. Returns false if there is
    /// nothing to jump from or to.
    pub fn start_jump(&mut self, hold_ms: f32) -> bool {
        let Some(figure) = self.figure else {
            return false;
        };
        if self.current_platform().is_none() || self.target_platform().is_none() {
            return false;
        }

        let distance = jump_distance(
            hold_ms,
            self.tuning.velocity_constant,
            self.tuning.min_jump_distance,
        );
        log::debug!(
            "Jump along {} for {:.0} ms: distance {:.4}",
            figure.facing.as_str(),
            hold_ms,
            distance
        );
        self.jump = Some(Trajectory::new(figure, distance));
        self.last_landing = None;
        true
    }

    /// Figure as it should be drawn right now
    pub fn display_figure(&self) -> Option<Figure> {
        match &self.jump {
            Some(jump) => Some(jump.figure()),
            None => self.figure,
        }
    }

    /// Drop the placed course and every per-game accumulator. Keeps the high score.
    pub fn reset_world(&mut self) {
        self.session.reset();
        self.start_confirmed = false;
        self.anchor = None;
        self.platforms.clear();
        self.figure = None;
        self.jump = None;
        self.last_landing = None;
        self.game_over = None;
    }

    /// Place the next platform after a landing on `from`
    pub(super) fn generate_next(&mut self, from: &Platform) -> Axis {
        let placement = self.generator.next(from);
        log::debug!(
            "Next platform {:.3} along {}",
            placement.gap,
            placement.axis.as_str()
        );
        if let Some(evicted) = self.platforms.push(placement.platform) {
            log::trace!("Evicted platform at {:?}", evicted.position());
        }
        placement.axis
    }

    /// Renderable scene, or None before the first placement
    pub fn scene(&self) -> Option<Scene> {
        let anchor = self.anchor?;
        let figure = self.display_figure()?;
        Some(Scene {
            anchor,
            platforms: self.platforms.iter().map(|p| p.transform).collect(),
            figure: figure.draw_transform(),
            score: self.session.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.figure.is_none());
        assert!(state.scene().is_none());
    }

    #[test]
    fn test_first_placement() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.place_first_platforms(Transform::at(Vec3::new(0.0, -1.0, -0.5)));

        assert_eq!(state.platforms.len(), 2);
        assert_eq!(state.current_platform().unwrap().position(), Vec3::ZERO);
        assert!((state.target_platform().unwrap().position().x - 0.45).abs() < 1e-6);

        let figure = state.figure.unwrap();
        assert_eq!(figure.facing, Axis::X);
        assert!((figure.transform.position.y - 0.14).abs() < 1e-6);

        let scene = state.scene().unwrap();
        assert_eq!(scene.platforms.len(), 2);
        assert_eq!(scene.figure.yaw, -90.0);
        assert_eq!(scene.platforms[0].scale, state.tuning.platform_scale);
    }

    #[test]
    fn test_start_jump_needs_placement() {
        let mut state = GameState::new(Tuning::default(), 1);
        assert!(!state.start_jump(800.0));
        state.place_first_platforms(Transform::IDENTITY);
        assert!(state.start_jump(800.0));
        assert!(state.jump.is_some());
    }

    #[test]
    fn test_reset_world_keeps_high_score() {
        let mut state = GameState::new(Tuning::default(), 1);
        state.place_first_platforms(Transform::IDENTITY);
        state.session.high_score = 9;
        state.session.score = 2;
        state.reset_world();
        assert_eq!(state.session.high_score, 9);
        assert_eq!(state.session.score, 0);
        assert!(state.platforms.is_empty());
        assert!(state.figure.is_none());
        assert!(state.anchor.is_none());
    }
}
