//! Hop AR headless runner
//!
//! Drives the simulation with a fixed tracker and a scripted player so the
//! game loop can be exercised without a camera or a GPU.
//!
//! Usage: `hop-ar [--seed N] [--games N] [--tuning FILE] [--scores FILE]`

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use hop_ar::input::InputEvent;
use hop_ar::renderer::DrawList;
use hop_ar::sim::{FixedTracker, GamePhase, Transform, UiEvent};
use hop_ar::{Engine, HighScores, HopError, Tuning};

/// Frame time of the simulated display
const FRAME_DT: f32 = 1.0 / 60.0;
/// Safety net so a stuck game cannot spin forever
const MAX_FRAMES: u32 = 200_000;

#[derive(Debug, Parser)]
#[command(name = "hop-ar")]
#[command(about = "Headless runner for the Hop AR simulation")]
struct Args {
    /// Fixed RNG seed (overrides the tuning file)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games to play before exiting
    #[arg(long, default_value_t = 3)]
    games: u32,
    /// Tuning JSON file
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// High score JSON file, loaded at start and saved at exit
    #[arg(long)]
    scores: Option<PathBuf>,
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `Engine` directly
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = run(Args::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), HopError> {
    let mut tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    if args.seed.is_some() {
        tuning.seed = args.seed;
    }
    let mut scores = match &args.scores {
        Some(path) => HighScores::load(path)?,
        None => HighScores::new(),
    };

    let velocity = tuning.velocity_constant;
    let mut engine = Engine::new(tuning).with_high_scores(&scores);
    let ui = engine.sender();
    let tracker = FixedTracker::tracking(Transform::at(Vec3::new(0.0, -0.8, -1.2)));
    // The scripted player's thumb is never perfect
    let mut thumb = Pcg32::seed_from_u64(engine.state().seed ^ 0x5eed);

    log::info!("Hop AR (headless) starting, {} games", args.games);
    let mut games = 0;
    let mut armed_frames = 0;
    for _ in 0..MAX_FRAMES {
        let frame = engine.frame(&tracker, FRAME_DT);

        for event in &frame.ui {
            match *event {
                UiEvent::RequestStartPrompt => {
                    ui.offer(InputEvent::StartConfirmed);
                    ui.offer(InputEvent::tap(540.0, 1200.0, 80.0));
                }
                UiEvent::RequestGameOverPrompt { score, high_score } => {
                    println!("Game over: score {score}, best {high_score}");
                    if let Some(summary) = engine.state().game_over {
                        if let Some(rank) = scores.record(&summary, now_ms()) {
                            println!("New leaderboard entry at rank {rank}");
                        }
                    }
                    games += 1;
                    ui.offer(InputEvent::GameOverAcknowledged);
                }
                UiEvent::ScoreChanged(score) => log::debug!("Score {}", score),
            }
        }

        if games >= args.games {
            break;
        }

        if frame.phase == GamePhase::Armed {
            armed_frames += 1;
            // Let the figure settle for a moment before the next press
            if armed_frames == 20 {
                armed_frames = 0;
                let hold = aim(&engine, velocity) * thumb.random_range(0.85f32..1.15);
                ui.offer(InputEvent::tap(540.0, 1200.0, hold));
            }
        }

        if let Some(scene) = &frame.scene {
            let draw = DrawList::from_scene(scene);
            log::trace!(
                "{} platforms, figure at {:?}",
                draw.platforms.len(),
                draw.figure.matrix().w_axis
            );
        }
    }

    if let Some(path) = &args.scores {
        scores.save(path)?;
    }
    println!(
        "Played {} games, best score {}",
        games,
        engine.state().session.high_score
    );
    Ok(())
}

/// Hold duration (ms) that would land dead centre on the target
fn aim(engine: &Engine, velocity: f32) -> f32 {
    let state = engine.state();
    let (Some(figure), Some(target)) = (state.figure, state.target_platform()) else {
        return 0.0;
    };
    let gap = figure
        .facing
        .component(target.position() - figure.transform.position);
    gap * 1000.0 / velocity.max(f32::EPSILON)
}
