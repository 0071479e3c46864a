//! Police siren timer.
//!
//! Sirens run for a fixed duration once triggered. A crash only starts them
//! when they are silent; a wanted offense refreshes the timer.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SirenController {
    active: bool,
    remaining_secs: f64,
}

impl SirenController {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    /// Start the sirens unless they are already running.
    /// Returns true if they were switched on.
    pub fn trigger(&mut self, duration_secs: f64) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.remaining_secs = duration_secs;
        true
    }

    /// Switch the sirens on and restart the timer, even if already running.
    /// Returns true if they were silent before.
    pub fn force_on(&mut self, duration_secs: f64) -> bool {
        let was_active = self.active;
        self.active = true;
        self.remaining_secs = self.remaining_secs.max(duration_secs);
        !was_active
    }

    /// Count down. Returns true if the sirens switched off during this step.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_secs -= dt;
        if self.remaining_secs <= 0.0 {
            self.active = false;
            self.remaining_secs = 0.0;
            return true;
        }
        false
    }

    /// Silence immediately. Returns true if they were running.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        self.remaining_secs = 0.0;
        was_active
    }
}
