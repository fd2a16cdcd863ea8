//! Carousel state machine.
//!
//! The carousel owns the active slide index and an autoplay clock. The
//! clock is driven by `Tick` actions from whatever timer the host runs;
//! manual navigation restarts it so a click is never followed by an
//! immediate automatic change.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Autoplay lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutoplayState {
    /// Not started, or torn down.
    Stopped,
    /// Advancing on every interval.
    Running,
    /// Temporarily held, e.g. while hovered.
    Paused,
}

/// A repeating autoplay clock with explicit start and stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    state: AutoplayState,
}

impl Autoplay {
    /// A stopped clock firing every `interval`.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            state: AutoplayState::Stopped,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    pub fn start(&mut self) -> bool {
        if self.state == AutoplayState::Running {
            return false;
        }
        self.state = AutoplayState::Running;
        self.elapsed = Duration::ZERO;
        true
    }

    pub fn stop(&mut self) -> bool {
        if self.state == AutoplayState::Stopped {
            return false;
        }
        self.state = AutoplayState::Stopped;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Hold a running clock. Has no effect when stopped.
    pub fn pause(&mut self) -> bool {
        if self.state != AutoplayState::Running {
            return false;
        }
        self.state = AutoplayState::Paused;
        true
    }

    /// Continue a paused clock from zero.
    pub fn resume(&mut self) -> bool {
        if self.state != AutoplayState::Paused {
            return false;
        }
        self.state = AutoplayState::Running;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Restart the current interval from zero.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Feed elapsed time and return how many intervals completed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.state != AutoplayState::Running || self.interval.is_zero() {
            return 0;
        }
        let elapsed = self.elapsed.saturating_add(dt).as_nanos();
        let interval = self.interval.as_nanos();
        let fired = elapsed / interval;
        self.elapsed = Duration::from_nanos((elapsed % interval) as u64);
        u32::try_from(fired).unwrap_or(u32::MAX)
    }
}

/// Actions the carousel responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    /// Time passed on the host timer.
    Tick(Duration),
    Pause,
    Resume,
    Start,
    Stop,
}

/// Active slide plus autoplay clock.
///
/// With zero slides every action leaves the index at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    autoplay: Autoplay,
}

impl CarouselState {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            len,
            index: 0,
            autoplay: Autoplay::new(interval),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    /// Apply an action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: CarouselAction) -> bool {
        match action {
            CarouselAction::Next => {
                self.autoplay.restart();
                self.step_forward(1)
            }
            CarouselAction::Previous => {
                self.autoplay.restart();
                self.step_back()
            }
            CarouselAction::Tick(dt) => {
                let fired = self.autoplay.advance(dt);
                self.step_forward(fired as usize)
            }
            CarouselAction::Pause => self.autoplay.pause(),
            CarouselAction::Resume => self.autoplay.resume(),
            CarouselAction::Start => self.autoplay.start(),
            CarouselAction::Stop => self.autoplay.stop(),
        }
    }

    fn step_forward(&mut self, steps: usize) -> bool {
        if self.len == 0 || steps == 0 {
            return false;
        }
        let before = self.index;
        self.index = (self.index + steps) % self.len;
        self.index != before
    }

    fn step_back(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let before = self.index;
        self.index = (self.index + self.len - 1) % self.len;
        self.index != before
    }
}
