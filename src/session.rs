//! A running game session
//!
//! Owns the game state, the loop controller and the scheduler. Collaborators
//! (surface, audio, HUD) are borrowed per tick so the front end keeps
//! ownership of its platform objects.

use std::time::Duration;

use crate::audio::{AudioSink, SoundEffect};
use crate::game_loop::{LoopController, LoopState, Scheduler, TickToken};
use crate::hud::{Hud, ball_speed_label, paddle_size_label};
use crate::input::{self, HeldKeys, InputEvent};
use crate::render::{Surface, draw_frame};
use crate::settings::Settings;
use crate::sim::{Direction, GameConfig, GameEvent, GameState, Outcome, TickInput, plays_break_sound, tick};

/// Collaborators touched by a tick
pub struct Peripherals<'a> {
    pub surface: &'a mut dyn Surface,
    pub audio: &'a mut dyn AudioSink,
    pub hud: &'a mut dyn Hud,
}

/// What a call to [`Session::run_tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Token was stale or the loop is not running; nothing happened
    Skipped,
    /// Tick ran and the next one is scheduled
    Continued,
    /// Tick ran and the game is over; nothing was scheduled
    Ended(Outcome),
}

pub struct Session<S: Scheduler> {
    state: GameState,
    controller: LoopController,
    scheduler: S,
    held: HeldKeys,
    autopilot: bool,
    tick_interval: Duration,
}

impl<S: Scheduler> Session<S> {
    pub fn new(config: GameConfig, seed: u64, settings: &Settings, scheduler: S) -> Self {
        log::info!("New game with seed {}", seed);
        Self {
            state: GameState::new(config, seed),
            controller: LoopController::new(),
            scheduler,
            held: HeldKeys::default(),
            autopilot: settings.autopilot,
            tick_interval: settings.tick_interval(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tests and tooling; the loop itself only mutates
    /// state inside `run_tick`
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.controller.state()
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Start the tick chain; the first tick is due at once. Does nothing if
    /// it is already running or the game is over.
    pub fn start(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }
        match self.controller.start() {
            Some(token) => {
                self.scheduler.schedule(token, Duration::ZERO);
                true
            }
            None => false,
        }
    }

    /// Pause, or resume with the next tick due at once
    pub fn toggle_pause(&mut self) {
        if self.state.is_over() {
            return;
        }
        match self.controller.toggle_pause() {
            Some(token) => {
                log::info!("Resumed");
                self.scheduler.schedule(token, Duration::ZERO);
            }
            None => log::info!("Paused"),
        }
    }

    /// Apply a discrete input event
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.held.press(key),
            InputEvent::KeyUp(key) => self.held.release(key),
            InputEvent::TogglePause => self.toggle_pause(),
            InputEvent::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
        }
    }

    /// Push the current ball speed and paddle size to the HUD
    pub fn publish_hud(&self, hud: &mut dyn Hud) {
        hud.set_ball_speed(&ball_speed_label(self.state.ball.display_speed()));
        hud.set_paddle_size(&paddle_size_label(self.state.paddle.width));
    }

    fn direction(&self) -> Direction {
        if self.autopilot {
            input::autopilot(&self.state)
        } else {
            self.held.direction()
        }
    }

    /// Run one tick of the chain identified by `token`: draw, simulate,
    /// notify collaborators, schedule the next tick.
    pub fn run_tick(&mut self, token: TickToken, io: &mut Peripherals<'_>) -> TickStatus {
        if !self.controller.accepts(token) {
            log::debug!("Dropping stale tick (generation {})", token.generation());
            return TickStatus::Skipped;
        }

        draw_frame(&self.state, io.surface);

        let input = TickInput {
            direction: self.direction(),
        };
        for event in tick(&mut self.state, &input) {
            match event {
                GameEvent::BrickDestroyed { kind, .. } if plays_break_sound(kind) => {
                    io.audio.play(SoundEffect::BrickBreak);
                }
                GameEvent::PaddleGrew { width } => {
                    io.hud.set_paddle_size(&paddle_size_label(width));
                }
                GameEvent::SpeedChanged { speed } => {
                    io.hud.set_ball_speed(&ball_speed_label(speed));
                }
                GameEvent::Ended(outcome) => {
                    log::info!("Game over: {:?}, score {}", outcome, self.state.score);
                    self.controller.stop();
                    return TickStatus::Ended(outcome);
                }
                _ => {}
            }
        }

        self.scheduler.schedule(token, self.tick_interval);
        TickStatus::Continued
    }
}
