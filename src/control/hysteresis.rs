//! Two-threshold hysteresis band
//!
//! Switches an output on below one threshold and off above a higher
//! one, holding its current state inside the band so a signal hovering
//! around a single boundary does not chatter the output.

/// Hysteresis band for an on/off output driven by a falling signal
/// (e.g. a light that turns on as it gets dark).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HysteresisBand {
    on_below: f32,
    off_above: f32,
}

impl HysteresisBand {
    /// `on_below` should not exceed `off_above`; an inverted band toggles
    /// on every call while the signal sits between the two thresholds.
    pub fn new(on_below: f32, off_above: f32) -> Self {
        Self { on_below, off_above }
    }

    /// Decide whether the output must change.
    ///
    /// Returns `Some(new_state)` only on a transition, `None` when the
    /// output is already where it should be.  Both thresholds are
    /// exclusive: a reading equal to either one never switches.
    pub fn decide(&self, currently_on: bool, value: f32) -> Option<bool> {
        if !currently_on && value < self.on_below {
            Some(true)
        } else if currently_on && value > self.off_above {
            Some(false)
        } else {
            None
        }
    }

    pub fn on_below(&self) -> f32 {
        self.on_below
    }

    pub fn off_above(&self) -> f32 {
        self.off_above
    }
}
