//! Per-frame simulation tick
//!
//! Called once per rendered frame with at most one input event. While an arc
//! is playing nothing else is judged: events are discarded until the landing
//! has been resolved. A camera that stops tracking stalls whatever phase the
//! game is in.

use super::collision::{Landing, judge_landing};
use super::platform::Figure;
use super::state::{GamePhase, GameState, Scene};
use super::tracker::{Tracker, TrackingState};
use crate::input::InputEvent;

/// Notifications for the UI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A surface is tracked; ask the player to start
    RequestStartPrompt,
    /// The figure missed; show the final tally
    RequestGameOverPrompt { score: u32, high_score: u32 },
    /// Score label should show this value
    ScoreChanged(u32),
}

/// Output of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub phase: GamePhase,
    /// What to draw (None before the first placement)
    pub scene: Option<Scene>,
    pub ui: Vec<UiEvent>,
}

/// Advance the game state by one frame that took `dt` seconds
pub fn tick(
    state: &mut GameState,
    tracker: &impl Tracker,
    event: Option<InputEvent>,
    dt: f32,
) -> Frame {
    state.time_ticks += 1;
    let mut ui = Vec::new();

    match state.phase {
        GamePhase::Jumping | GamePhase::Resolving => {
            if let Some(event) = event {
                log::trace!("Ignored {:?} during a jump", event);
            }
            if tracker.camera_state() != TrackingState::Tracking {
                log::trace!("Camera not tracking, jump stalled");
            } else if state.phase == GamePhase::Jumping {
                advance_jump(state, dt);
            } else {
                resolve_landing(state, &mut ui);
            }
        }
        GamePhase::GameOver => {
            if event == Some(InputEvent::GameOverAcknowledged) {
                state.reset_world();
                state.phase = GamePhase::Idle;
                log::info!("Game over acknowledged, back to idle");
            }
        }
        _ if tracker.camera_state() != TrackingState::Tracking => {
            if let Some(event) = event {
                log::debug!("Camera not tracking, dropped {:?}", event);
            }
        }
        GamePhase::Idle => {
            if tracker.surface_ready() {
                state.phase = GamePhase::AwaitingFirstPlacement;
                state.start_confirmed = false;
                ui.push(UiEvent::RequestStartPrompt);
                log::info!("Surface tracked, awaiting placement");
            }
        }
        GamePhase::AwaitingFirstPlacement => match event {
            Some(InputEvent::StartConfirmed) => {
                state.start_confirmed = true;
                log::debug!("Start confirmed");
            }
            Some(InputEvent::Tap { at, .. }) if state.start_confirmed => {
                match tracker.hit_test(at) {
                    Some(anchor) => {
                        state.place_first_platforms(anchor);
                        state.phase = GamePhase::Armed;
                        ui.push(UiEvent::ScoreChanged(state.session.score));
                    }
                    None => log::debug!("Tap at ({}, {}) hit no surface", at.x, at.y),
                }
            }
            Some(other) => log::debug!("Dropped {:?} before placement", other),
            None => {}
        },
        GamePhase::Armed => {
            if let Some(InputEvent::Tap { hold_ms, .. }) = event {
                try_launch(state, tracker, hold_ms);
            }
        }
    }

    Frame {
        phase: state.phase,
        scene: state.scene(),
        ui,
    }
}

/// Armed + tap: launch if the hold was long enough and the anchor is usable
fn try_launch(state: &mut GameState, tracker: &impl Tracker, hold_ms: f32) {
    if hold_ms <= state.tuning.long_press_ms {
        log::trace!("Hold of {:.0} ms is not a jump", hold_ms);
        return;
    }
    if tracker.anchor_state() != TrackingState::Tracking {
        log::debug!("Anchor not tracking, jump dropped");
        return;
    }
    if state.start_jump(hold_ms) {
        state.phase = GamePhase::Jumping;
    } else {
        log::warn!("Jump requested with no platform to jump from");
    }
}

fn advance_jump(state: &mut GameState, dt: f32) {
    let step_len = state.tuning.step.step_length(dt);
    let Some(jump) = state.jump.as_mut() else {
        debug_assert!(false, "jumping without a trajectory");
        log::error!("Jumping without a trajectory, back to armed");
        state.phase = GamePhase::Armed;
        return;
    };

    let step = jump.advance(step_len);
    log::trace!(
        "Stride {:.4}/{:.4} spin {:.1} height {:.3}",
        jump.stride(),
        jump.distance(),
        jump.spin(),
        jump.height()
    );
    if step.complete {
        state.last_landing = Some(jump.figure().transform.position);
        state.phase = GamePhase::Resolving;
    }
}

fn resolve_landing(state: &mut GameState, ui: &mut Vec<UiEvent>) {
    let (Some(jump), Some(target)) = (state.jump.take(), state.target_platform().copied()) else {
        debug_assert!(false, "landing judged without a target platform");
        log::error!("Landing judged without a target platform, frame skipped");
        state.phase = GamePhase::Armed;
        return;
    };

    let landed = jump.figure();
    match judge_landing(&landed, &target, state.tuning.figure_lift) {
        Landing::Success { figure } => {
            let score = state.session.record_landing();
            let facing = state.generate_next(&target);
            state.figure = Some(Figure { facing, ..figure });
            state.phase = GamePhase::Armed;
            ui.push(UiEvent::ScoreChanged(score));
            log::debug!(
                "Landed at ({:.3}, {:.3}), score {}",
                figure.transform.position.x,
                figure.transform.position.z,
                score
            );
        }
        Landing::Miss { position } => {
            let summary = state.session.record_failure();
            // Keep the figure where the arc ended so the miss stays visible
            state.figure = Some(landed);
            state.last_landing = Some(position);
            state.game_over = Some(summary);
            state.phase = GamePhase::GameOver;
            ui.push(UiEvent::RequestGameOverPrompt {
                score: summary.score,
                high_score: summary.high_score,
            });
            ui.push(UiEvent::ScoreChanged(0));
            log::info!(
                "Missed at ({:.3}, {:.3}) target ({:.3}, {:.3}): score {}, best {}",
                position.x,
                position.z,
                target.position().x,
                target.position().z,
                summary.score,
                summary.high_score
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::tracker::FixedTracker;
    use crate::sim::transform::{Axis, Transform};
    use crate::tuning::Tuning;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    fn tap(hold_ms: f32) -> Option<InputEvent> {
        Some(InputEvent::tap(100.0, 200.0, hold_ms))
    }

    /// Drive a fresh state to Armed with the anchor at the world origin
    fn armed_state(seed: u64) -> (GameState, FixedTracker) {
        let tracker = FixedTracker::tracking(Transform::IDENTITY);
        let mut state = GameState::new(Tuning::default(), seed);

        let frame = tick(&mut state, &tracker, None, DT);
        assert_eq!(frame.phase, GamePhase::AwaitingFirstPlacement);
        assert_eq!(frame.ui, vec![UiEvent::RequestStartPrompt]);

        tick(&mut state, &tracker, Some(InputEvent::StartConfirmed), DT);
        let frame = tick(&mut state, &tracker, tap(50.0), DT);
        assert_eq!(frame.phase, GamePhase::Armed);
        (state, tracker)
    }

    /// Tick until the jump resolves; returns the resolving frame
    fn play_jump(state: &mut GameState, tracker: &FixedTracker, hold_ms: f32) -> Frame {
        let frame = tick(state, tracker, tap(hold_ms), DT);
        assert_eq!(frame.phase, GamePhase::Jumping);
        for _ in 0..10_000 {
            let frame = tick(state, tracker, None, DT);
            if !matches!(frame.phase, GamePhase::Jumping | GamePhase::Resolving) {
                return frame;
            }
        }
        panic!("jump never resolved");
    }

    /// Hold that lands exactly on the current target (ignoring the clamp)
    fn hold_for_target(state: &GameState) -> f32 {
        let figure = state.figure.unwrap();
        let target = state.target_platform().unwrap();
        let gap = figure
            .facing
            .component(target.position() - figure.transform.position);
        gap * 1000.0 / JUMP_VELOCITY
    }

    #[test]
    fn test_idle_waits_for_surface() {
        let mut tracker = FixedTracker::tracking(Transform::IDENTITY);
        tracker.surface = false;
        let mut state = GameState::new(Tuning::default(), 1);
        let frame = tick(&mut state, &tracker, tap(500.0), DT);
        assert_eq!(frame.phase, GamePhase::Idle);
        assert!(frame.scene.is_none());
        assert!(frame.ui.is_empty());
    }

    #[test]
    fn test_tap_before_start_confirmed_is_dropped() {
        let tracker = FixedTracker::tracking(Transform::IDENTITY);
        let mut state = GameState::new(Tuning::default(), 1);
        tick(&mut state, &tracker, None, DT);
        let frame = tick(&mut state, &tracker, tap(50.0), DT);
        assert_eq!(frame.phase, GamePhase::AwaitingFirstPlacement);
        assert!(state.figure.is_none());
    }

    #[test]
    fn test_tap_missing_surface_keeps_waiting() {
        let mut tracker = FixedTracker::tracking(Transform::IDENTITY);
        tracker.hit = None;
        let mut state = GameState::new(Tuning::default(), 1);
        tick(&mut state, &tracker, None, DT);
        tick(&mut state, &tracker, Some(InputEvent::StartConfirmed), DT);
        let frame = tick(&mut state, &tracker, tap(50.0), DT);
        assert_eq!(frame.phase, GamePhase::AwaitingFirstPlacement);
    }

    #[test]
    fn test_short_hold_does_not_jump() {
        let (mut state, tracker) = armed_state(1);
        let frame = tick(&mut state, &tracker, tap(LONG_PRESS_MS), DT);
        assert_eq!(frame.phase, GamePhase::Armed);
        let frame = tick(&mut state, &tracker, tap(0.0), DT);
        assert_eq!(frame.phase, GamePhase::Armed);
        assert!(state.jump.is_none());
    }

    #[test]
    fn test_lost_anchor_drops_jump() {
        let (mut state, mut tracker) = armed_state(1);
        tracker.anchor = TrackingState::Paused;
        let frame = tick(&mut state, &tracker, tap(900.0), DT);
        assert_eq!(frame.phase, GamePhase::Armed);
    }

    #[test]
    fn test_paused_camera_stalls() {
        let (mut state, mut tracker) = armed_state(1);
        tracker.camera = TrackingState::Paused;
        for _ in 0..5 {
            let frame = tick(&mut state, &tracker, tap(900.0), DT);
            assert_eq!(frame.phase, GamePhase::Armed);
        }
    }

    #[test]
    fn test_paused_camera_stalls_jump() {
        let (mut state, mut tracker) = armed_state(1);
        tick(&mut state, &tracker, tap(900.0), DT);
        tick(&mut state, &tracker, None, DT);
        let stride = state.jump.as_ref().unwrap().stride();

        tracker.camera = TrackingState::Paused;
        for _ in 0..3 {
            assert_eq!(tick(&mut state, &tracker, None, DT).phase, GamePhase::Jumping);
        }
        assert_eq!(state.jump.as_ref().unwrap().stride(), stride);

        tracker.camera = TrackingState::Tracking;
        tick(&mut state, &tracker, None, DT);
        assert!(state.jump.as_ref().unwrap().stride() > stride);
    }

    /// Drive a jump to Resolving, then drop the platform trail
    fn resolving_without_target() -> (GameState, FixedTracker) {
        let (mut state, tracker) = armed_state(1);
        tick(&mut state, &tracker, tap(900.0), DT);
        while state.phase == GamePhase::Jumping {
            tick(&mut state, &tracker, None, DT);
        }
        assert_eq!(state.phase, GamePhase::Resolving);
        state.platforms.clear();
        (state, tracker)
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "landing judged without a target platform")]
    fn test_judging_without_target_asserts() {
        let (mut state, tracker) = resolving_without_target();
        tick(&mut state, &tracker, None, DT);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_judging_without_target_falls_back_to_armed() {
        let (mut state, tracker) = resolving_without_target();
        let frame = tick(&mut state, &tracker, None, DT);
        assert_eq!(frame.phase, GamePhase::Armed);
        assert!(frame.ui.is_empty());
        assert!(state.jump.is_none());
        assert_eq!(state.session.score, 0);
    }

    #[test]
    fn test_760ms_scenario_lands() {
        let (mut state, tracker) = armed_state(1);
        // Put the target where the scenario expects it
        let first = *state.current_platform().unwrap();
        state.platforms.clear();
        state.platforms.push(first);
        state.platforms.push(first.offset_along(Axis::X, 0.30));

        let frame = play_jump(&mut state, &tracker, 760.0);
        assert_eq!(frame.phase, GamePhase::Armed);
        assert_eq!(state.session.score, 1);
        assert!(frame.ui.contains(&UiEvent::ScoreChanged(1)));

        let figure = state.figure.unwrap();
        assert!((figure.transform.position.x - 0.3009).abs() < 1e-3);
        // Snapped back to rest height on the landed platform
        assert!((figure.transform.position.y - FIGURE_LIFT).abs() < 1e-6);
        assert_eq!(state.platforms.len(), 3);
    }

    #[test]
    fn test_events_ignored_mid_jump() {
        let (mut state, tracker) = armed_state(1);
        let hold = hold_for_target(&state);
        tick(&mut state, &tracker, tap(hold), DT);
        let stride_before = state.jump.as_ref().unwrap().stride();
        let frame = tick(&mut state, &tracker, tap(5000.0), DT);
        assert_eq!(frame.phase, GamePhase::Jumping);
        let jump = state.jump.as_ref().unwrap();
        assert!((jump.stride() - stride_before - FRAME_STRIDE).abs() < 1e-6);
        assert!((jump.distance() - 0.45).abs() < 1e-4);
    }

    #[test]
    fn test_jump_completes_then_resolves_next_frame() {
        let (mut state, tracker) = armed_state(1);
        let hold = hold_for_target(&state);
        tick(&mut state, &tracker, tap(hold), DT);

        let mut phase = GamePhase::Jumping;
        let mut frames = 0;
        while phase == GamePhase::Jumping {
            phase = tick(&mut state, &tracker, None, DT).phase;
            frames += 1;
        }
        // 0.45 / 0.02 rounds up to 23 steps
        assert_eq!(frames, 23);
        assert_eq!(phase, GamePhase::Resolving);
        let scene = state.scene().unwrap();
        assert!((scene.figure.yaw - (FULL_TURN - 90.0)).abs() < 1e-3);

        let frame = tick(&mut state, &tracker, None, DT);
        assert_eq!(frame.phase, GamePhase::Armed);
    }

    #[test]
    fn test_miss_goes_to_game_over_and_back() {
        let (mut state, tracker) = armed_state(1);
        state.session.high_score = 0;

        // Land one jump, then miss short
        let hold = hold_for_target(&state);
        assert_eq!(play_jump(&mut state, &tracker, hold).phase, GamePhase::Armed);
        assert_eq!(state.session.score, 1);

        let frame = play_jump(&mut state, &tracker, 350.0);
        assert_eq!(frame.phase, GamePhase::GameOver);
        assert!(frame.ui.contains(&UiEvent::RequestGameOverPrompt { score: 1, high_score: 1 }));
        assert_eq!(state.session.score, 0);
        assert_eq!(state.session.high_score, 1);
        assert_eq!(state.session.jump_fail_count, 1);
        assert!(state.last_landing.is_some());
        // Miss is still drawn
        assert!(frame.scene.is_some());

        // Taps do nothing until acknowledged
        let frame = tick(&mut state, &tracker, tap(900.0), DT);
        assert_eq!(frame.phase, GamePhase::GameOver);

        let frame = tick(&mut state, &tracker, Some(InputEvent::GameOverAcknowledged), DT);
        assert_eq!(frame.phase, GamePhase::Idle);
        assert!(frame.scene.is_none());
        assert_eq!(state.session.high_score, 1);
        assert_eq!(state.session.jump_success_count, 0);

        // A fresh cycle has to re-anchor
        let frame = tick(&mut state, &tracker, None, DT);
        assert_eq!(frame.phase, GamePhase::AwaitingFirstPlacement);
        assert_eq!(frame.ui, vec![UiEvent::RequestStartPrompt]);
    }

    #[test]
    fn test_trail_is_capped() {
        let (mut state, tracker) = armed_state(5);
        for _ in 0..25 {
            let hold = hold_for_target(&state);
            assert_eq!(play_jump(&mut state, &tracker, hold).phase, GamePhase::Armed);
        }
        assert_eq!(state.session.score, 25);
        assert_eq!(state.platforms.len(), HISTORY_CAPACITY);
        // Origin platform was evicted long ago
        assert!(state.platforms.iter().all(|p| p.position() != Vec3::ZERO));
    }

    #[test]
    fn test_facing_follows_generated_axis() {
        let (mut state, tracker) = armed_state(11);
        for _ in 0..10 {
            let hold = hold_for_target(&state);
            play_jump(&mut state, &tracker, hold);
            let figure = state.figure.unwrap();
            let target = state.target_platform().unwrap();
            let current = state.current_platform().unwrap();
            let delta = target.position() - current.position();
            assert!(figure.facing.component(delta) > 0.29);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let (mut a, tracker) = armed_state(77);
        let (mut b, _) = armed_state(77);
        for _ in 0..5 {
            let hold = hold_for_target(&a);
            let fa = play_jump(&mut a, &tracker, hold);
            let fb = play_jump(&mut b, &tracker, hold);
            assert_eq!(fa, fb);
        }
    }

    #[test]
    fn test_elapsed_stepping_uses_dt() {
        let mut tuning = Tuning::default();
        tuning.step = crate::tuning::StepMode::Elapsed { units_per_second: 1.2 };
        let tracker = FixedTracker::tracking(Transform::IDENTITY);
        let mut state = GameState::new(tuning, 1);
        tick(&mut state, &tracker, None, DT);
        tick(&mut state, &tracker, Some(InputEvent::StartConfirmed), DT);
        tick(&mut state, &tracker, tap(50.0), DT);
        tick(&mut state, &tracker, tap(1000.0), DT);

        tick(&mut state, &tracker, None, 0.05);
        let stride = state.jump.as_ref().unwrap().stride();
        assert!((stride - 0.06).abs() < 1e-6);
    }
}
