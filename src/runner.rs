//! Frame scheduler
//!
//! Turns wall-clock frame times into whole simulation ticks. Input arrives
//! asynchronously from the platform layer, is queued, and is applied right
//! before the next tick so a tick never sees half an event.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, InputEvent, handle_input, tick};

/// Longest frame we try to catch up on (seconds)
const MAX_FRAME_TIME: f32 = 0.1;

/// A queue of input events.
/// The platform pushes events; the runner drains them each tick.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

/// Fixed-timestep driver around [`tick`]
#[derive(Debug, Default)]
pub struct FrameRunner {
    pub input: InputQueue,
    accumulator: f32,
    /// Total ticks run
    ticks: u64,
}

impl FrameRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an input event for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run exactly one tick, applying queued input first
    pub fn step(&mut self, state: &mut GameState) {
        for event in self.input.drain() {
            handle_input(state, event);
        }
        tick(state);
        self.ticks += 1;
    }

    /// Advance by `dt` seconds of wall-clock time
    ///
    /// Returns the number of ticks run (at most `MAX_SUBSTEPS`). A
    /// non-finite `dt` counts as no time passing.
    pub fn advance(&mut self, state: &mut GameState, dt: f32) -> u32 {
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", dt);
            return 0;
        }
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(state);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
