//! Playback Engine
//!
//! The generic driver that turns any algorithm's step sequence into
//! timed playback, independent of what a step means. Handles transport
//! controls (play, pause, stop, single-step, reset, speed change) and
//! notifies an optional status hook on every observable transition.
//!
//! # Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use stepplay::algorithm::{Algorithm, LinearScan};
//! use stepplay::playback::PlaybackEngine;
//! use stepplay::render::TerminalRenderer;
//!
//! let mut algorithm = LinearScan::new();
//! algorithm.init(json!([3, 1, 2]));
//!
//! let mut engine = PlaybackEngine::new(Box::new(TerminalRenderer::new()));
//! engine.load_algorithm(Box::new(algorithm));
//! engine.run();
//! ```

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::algorithm::{Algorithm, Control, StepSequence};
use crate::render::Renderer;

use super::status::{PlaybackStatus, StatusUpdate};
use super::timeline::PlaybackTimeline;

/// Default delay between steps.
pub const DEFAULT_SPEED: Duration = Duration::from_millis(500);

/// Callback invoked with a [`StatusUpdate`] on every observable
/// transition.
pub type StatusHook = Box<dyn FnMut(StatusUpdate)>;

/// Drives one algorithm's step sequence at a configurable cadence.
///
/// The engine owns the renderer and at most one algorithm at a time.
/// At most one step sequence is active per engine; loading or resetting
/// discards the previous sequence and zeroes the step counter.
///
/// All invalid operations (playing with nothing loaded, stepping an
/// unloaded engine) are silent no-ops; the engine has no recoverable
/// error paths.
pub struct PlaybackEngine {
    renderer: Box<dyn Renderer>,
    algorithm: Option<Box<dyn Algorithm>>,
    sequence: Option<StepSequence>,
    status: PlaybackStatus,
    speed: Duration,
    next_step_due: Option<Instant>,
    step_count: usize,
    on_update: Option<StatusHook>,
    timeline: PlaybackTimeline,
}

impl PlaybackEngine {
    /// Creates an engine with no algorithm loaded.
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            renderer,
            algorithm: None,
            sequence: None,
            status: PlaybackStatus::Idle,
            speed: DEFAULT_SPEED,
            next_step_due: None,
            step_count: 0,
            on_update: None,
            timeline: PlaybackTimeline::new(),
        }
    }

    /// Registers the status notification hook.
    pub fn set_on_update(&mut self, hook: impl FnMut(StatusUpdate) + 'static) {
        self.on_update = Some(Box::new(hook));
    }

    /// Sets the delay between steps.
    ///
    /// Takes effect when the next step is scheduled; a step already
    /// pending at the old delay still fires at the old delay.
    pub fn set_speed(&mut self, speed: Duration) {
        debug!("Speed set to {} ms", speed.as_millis());
        self.speed = speed;
    }

    /// Current delay between steps.
    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Current engine status.
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Returns true while the timed loop is running.
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Steps rendered since the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Timing record of the current run.
    pub fn timeline(&self) -> &PlaybackTimeline {
        &self.timeline
    }

    /// Controls exposed by the loaded algorithm, if any.
    pub fn controls(&self) -> Vec<Control> {
        self.algorithm
            .as_ref()
            .map(|algorithm| algorithm.controls())
            .unwrap_or_default()
    }

    /// Loads a new algorithm, replacing any current one.
    ///
    /// Stops current playback, tears down the replaced algorithm, and
    /// resets. Notifies `ready` with step 0.
    pub fn load_algorithm(&mut self, algorithm: Box<dyn Algorithm>) {
        self.halt();

        if let Some(mut previous) = self.algorithm.take() {
            debug!("Replacing algorithm '{}'", previous.name());
            previous.destroy();
        }

        info!("Loaded algorithm '{}'", algorithm.name());
        self.algorithm = Some(algorithm);
        self.reset();
    }

    /// Returns to the initial state of the loaded algorithm.
    ///
    /// No-op if nothing is loaded. Otherwise stops playback, acquires a
    /// fresh step sequence, zeroes the counter, and notifies `ready`.
    pub fn reset(&mut self) {
        if self.algorithm.is_none() {
            return;
        }

        self.halt();
        self.sequence = self.algorithm.as_ref().map(|algorithm| algorithm.run());
        self.step_count = 0;
        self.timeline.clear();
        self.status = PlaybackStatus::Ready;

        self.notify(StatusUpdate::with_step(PlaybackStatus::Ready, 0));
    }

    /// Starts or resumes timed playback.
    ///
    /// No-op if already playing or nothing is loaded.
    pub fn play(&mut self) {
        if self.is_playing() || self.algorithm.is_none() {
            return;
        }

        debug!("Playback started at step {}", self.step_count);
        self.status = PlaybackStatus::Playing;
        self.notify(StatusUpdate::status(PlaybackStatus::Playing));

        // First step fires on the next tick
        self.next_step_due = Some(Instant::now());
    }

    /// Suspends timed playback and cancels the pending step.
    ///
    /// Idempotent; notifies `paused` only when leaving the playing
    /// state.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }

        debug!("Playback paused at step {}", self.step_count);
        self.next_step_due = None;
        self.status = PlaybackStatus::Paused;
        self.notify(StatusUpdate::status(PlaybackStatus::Paused));
    }

    /// Stops playback. Alias for [`pause`](Self::pause); the loaded
    /// algorithm stays loaded.
    pub fn stop(&mut self) {
        self.pause();
    }

    /// Pulls exactly one step from the active sequence.
    ///
    /// No-op without an active sequence. On exhaustion the engine stops
    /// and notifies `finished`; otherwise the step is forwarded to the
    /// renderer and `playing` is notified with the step count and the
    /// step's message. Never re-arms the timer, so manual stepping while
    /// paused does not resume playback.
    pub fn step_forward(&mut self) {
        let Some(sequence) = self.sequence.as_mut() else {
            return;
        };

        match sequence.next() {
            None => {
                self.next_step_due = None;
                self.status = PlaybackStatus::Finished;
                info!("Playback finished after {} steps", self.step_count);
                self.notify(StatusUpdate::status(PlaybackStatus::Finished));
            }
            Some(step) => {
                self.step_count += 1;
                self.renderer.render(&step);
                self.timeline.record(self.step_count, &step);

                self.notify(StatusUpdate::with_message(
                    PlaybackStatus::Playing,
                    self.step_count,
                    step.message,
                ));
            }
        }
    }

    /// Advances the timed loop, treating `now` as the current time.
    ///
    /// Fires one step when playing and the pending deadline has passed,
    /// then re-arms the deadline at `now + speed` if playback is still
    /// running.
    pub fn tick_at(&mut self, now: Instant) {
        if !self.is_playing() {
            return;
        }

        let Some(due) = self.next_step_due else {
            return;
        };

        if now < due {
            return;
        }

        self.step_forward();

        if self.is_playing() {
            self.next_step_due = Some(now + self.speed);
        }
    }

    /// Advances the timed loop using the wall clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Plays the loaded algorithm to completion, blocking the calling
    /// thread and sleeping between steps.
    ///
    /// Returns when the sequence is exhausted or playback is paused
    /// from within the status hook. No-op if nothing is loaded.
    pub fn run(&mut self) {
        self.play();

        while self.is_playing() {
            if let Some(due) = self.next_step_due {
                let now = Instant::now();
                if due > now {
                    thread::sleep(due - now);
                }
            }
            self.tick();
        }
    }

    /// Cancels the pending step without notifying anyone.
    fn halt(&mut self) {
        self.next_step_due = None;
        if self.is_playing() {
            self.status = PlaybackStatus::Paused;
        }
    }

    fn notify(&mut self, update: StatusUpdate) {
        if let Some(hook) = self.on_update.as_mut() {
            hook(update);
        }
    }
}
