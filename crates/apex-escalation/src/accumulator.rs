//! Pursuit intensity: a non-negative scalar raised by offenses and decayed
//! over time while a chase is active.

/// Outcome of one decay step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decay {
    /// Nothing to decay (already zero, or zero rate/time).
    Idle,
    /// Intensity dropped but is still above zero.
    Falling,
    /// Intensity hit zero this step, `secs_into_step` seconds after the step began.
    ReachedZero { secs_into_step: f64 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntensityAccumulator {
    value: f64,
}

impl IntensityAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value <= 0.0
    }

    /// Add `delta`, clamping the result at zero. Non-finite deltas are ignored.
    pub fn accumulate(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.value = (self.value + delta).max(0.0);
    }

    /// Subtract `rate * dt`, floored at zero.
    pub fn decay(&mut self, dt: f64, rate: f64) -> Decay {
        if self.is_zero() || dt <= 0.0 || rate <= 0.0 {
            return Decay::Idle;
        }

        let loss = rate * dt;
        if loss >= self.value {
            let secs_into_step = self.value / rate;
            self.value = 0.0;
            Decay::ReachedZero { secs_into_step }
        } else {
            self.value -= loss;
            Decay::Falling
        }
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}
