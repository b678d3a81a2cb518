//! Loop controller
//!
//! The game advances through a chain of timer callbacks: each tick schedules
//! the next one. [`LoopController`] makes sure at most one chain is alive.
//! Every chain carries a [`TickToken`]; pausing or stopping invalidates the
//! current token, so a timer that fires after a quick pause/resume is
//! recognised as stale and dropped.

use std::collections::VecDeque;
use std::time::Duration;

/// Loop lifecycle: `Stopped -> Running -> Paused -> Running -> Stopped`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Identifies one tick chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(u64);

impl TickToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct LoopController {
    state: LoopState,
    generation: u64,
}

impl LoopController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Enter `Running` and hand out a fresh token for the new chain.
    /// Returns `None` if already running.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.is_running() {
            return None;
        }
        self.generation += 1;
        self.state = LoopState::Running;
        Some(TickToken(self.generation))
    }

    /// Break the running chain. Returns false if not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = LoopState::Paused;
        true
    }

    /// Pause when running, otherwise start. A token is returned only when a
    /// new chain must be scheduled.
    pub fn toggle_pause(&mut self) -> Option<TickToken> {
        if self.pause() { None } else { self.start() }
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// Whether a tick carrying `token` may run
    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_running() && token.0 == self.generation
    }
}

/// Timer seam: arranges for `token` to come back after `delay`
pub trait Scheduler {
    fn schedule(&mut self, token: TickToken, delay: Duration);
}

/// Queues tokens until the caller runs them, for tests and headless play
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: VecDeque<TickToken>,
    last_delay: Option<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next token due, oldest first
    pub fn next_due(&mut self) -> Option<TickToken> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Delay asked for by the most recent `schedule` call
    pub fn last_delay(&self) -> Option<Duration> {
        self.last_delay
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TickToken, delay: Duration) {
        self.pending.push_back(token);
        self.last_delay = Some(delay);
    }
}
