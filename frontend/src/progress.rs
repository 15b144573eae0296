//! Simulated upload progress.
//!
//! The bar is not driven by transfer telemetry. It creeps up by random steps
//! and parks at the cap until the response arrives, which alone may push it
//! to 100%.

use crate::types::AttemptId;

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Advanced; keep ticking.
    Advanced(f64),
    /// Reached the cap; the ticker should stop.
    Capped(f64),
    /// Tick does not belong to the live attempt or the response already landed.
    Stale,
}

impl Tick {
    pub fn keeps_running(&self) -> bool {
        matches!(self, Tick::Advanced(_))
    }
}

/// Progress of one submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedProgress {
    attempt: AttemptId,
    percent: f64,
    ticking: bool,
}

impl SimulatedProgress {
    pub fn start(attempt: AttemptId) -> Self {
        Self {
            attempt,
            percent: 0.0,
            ticking: true,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Adds `step` percent, clamped to `cap`.
    pub fn tick(&mut self, attempt: AttemptId, step: f64, cap: f64) -> Tick {
        if attempt != self.attempt || !self.ticking {
            return Tick::Stale;
        }

        self.percent += step.max(0.0);
        if self.percent >= cap {
            self.percent = cap;
            self.ticking = false;
            return Tick::Capped(self.percent);
        }
        Tick::Advanced(self.percent)
    }

    /// The server answered: jump to 100% and stop the ticker.
    pub fn complete(&mut self) {
        self.percent = 100.0;
        self.ticking = false;
    }

    /// Inline style for the fill element.
    pub fn bar_style(&self) -> String {
        format!("width: {}%;", self.percent)
    }

    /// Rounded integer label, e.g. `42%`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent.round() as u32)
    }
}
