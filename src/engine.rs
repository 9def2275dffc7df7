//! Frame driver
//!
//! Owns the game state and the consumer end of the event queue. The host
//! calls `frame` once per rendered frame; UI code keeps an `EventSender`.

use rand::RngCore;

use crate::highscores::HighScores;
use crate::input::{EventInbox, EventSender, event_channel};
use crate::sim::{Frame, GameState, Tracker, tick};
use crate::tuning::Tuning;

pub struct Engine {
    state: GameState,
    inbox: EventInbox,
    sender: EventSender,
}

impl Engine {
    /// Build an engine. Uses `tuning.seed` when set, otherwise a random seed.
    pub fn new(tuning: Tuning) -> Self {
        let seed = tuning.seed.unwrap_or_else(|| rand::rng().next_u64());
        let (sender, inbox) = event_channel(tuning.queue_capacity);
        log::info!("Engine ready (seed {}, {} stepping)", seed, tuning.step.as_str());
        Self {
            state: GameState::new(tuning, seed),
            inbox,
            sender,
        }
    }

    /// Carry the best recorded score into this session
    pub fn with_high_scores(mut self, scores: &HighScores) -> Self {
        self.state.session.high_score = scores.best();
        self
    }

    /// Producer handle for the UI thread
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance one rendered frame, consuming at most one queued event
    pub fn frame(&mut self, tracker: &impl Tracker, dt: f32) -> Frame {
        let event = self.inbox.poll();
        tick(&mut self.state, tracker, event, dt)
    }
}
