//! Events from the UI thread to the simulation.
//!
//! A bounded channel: the UI side offers without blocking (events are dropped
//! when the queue is full), the simulation polls at most one event per frame.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};

/// Screen position of a tap, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// Input event types the simulation understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A finished tap-and-hold. `hold_ms` is the time between down and up.
    Tap { at: ScreenPoint, hold_ms: f32 },
    /// The player dismissed the start prompt
    StartConfirmed,
    /// The player dismissed the game-over prompt
    GameOverAcknowledged,
}

impl InputEvent {
    pub fn tap(x: f32, y: f32, hold_ms: f32) -> Self {
        InputEvent::Tap {
            at: ScreenPoint { x, y },
            hold_ms,
        }
    }
}

/// Producer half, owned by the UI thread. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: SyncSender<InputEvent>,
}

impl EventSender {
    /// Queue an event. Returns false if it was dropped.
    pub fn offer(&self, event: InputEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                log::debug!("Event queue full, dropped {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("Simulation gone, dropped event");
                false
            }
        }
    }
}

/// Consumer half, owned by the simulation
#[derive(Debug)]
pub struct EventInbox {
    rx: Receiver<InputEvent>,
}

impl EventInbox {
    /// Take the oldest pending event, if any
    pub fn poll(&self) -> Option<InputEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Create a queue holding at most `capacity` pending events
pub fn event_channel(capacity: usize) -> (EventSender, EventInbox) {
    let (tx, rx) = mpsc::sync_channel(capacity.max(1));
    (EventSender { tx }, EventInbox { rx })
}
