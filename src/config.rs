//! System configuration parameters
//!
//! Pin wiring and the fixed rule thresholds for the office controller.
//! Defaults match the reference installation; a deployment may override
//! them from a JSON document.

use serde::{Deserialize, Serialize};

use crate::pins;

/// Which pin each sensor and actuator is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAssignment {
    /// Infrared presence inputs, indexed by quadrant (Q1 first).
    pub infrared: [u8; 4],
    pub servo: u8,
    pub led: u8,
    pub buzzer: u8,
    /// Active-low gas detector input.
    pub gas: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        Self {
            infrared: [
                pins::INFRARED_Q1_PIN,
                pins::INFRARED_Q2_PIN,
                pins::INFRARED_Q3_PIN,
                pins::INFRARED_Q4_PIN,
            ],
            servo: pins::SERVO_PIN,
            led: pins::LED_PIN,
            buzzer: pins::BUZZER_PIN,
            gas: pins::GAS_PIN,
        }
    }
}

impl PinAssignment {
    fn all(&self) -> [u8; 8] {
        let [q1, q2, q3, q4] = self.infrared;
        [q1, q2, q3, q4, self.servo, self.led, self.buzzer, self.gas]
    }
}

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    pub pins: PinAssignment,

    // --- Blinds ---
    /// First hour (local, 0-23) at which blinds open on weekdays
    pub blinds_open_hour: u8,
    /// Hour from which blinds close on weekdays
    pub blinds_close_hour: u8,
    /// Servo value for the open position
    pub blinds_open_angle: u8,
    /// Servo value for the closed position
    pub blinds_closed_angle: u8,

    // --- Light ---
    /// Turn the light on when ambient lux drops below this
    pub light_on_below_lux: f32,
    /// Turn the light off when ambient lux rises above this
    pub light_off_above_lux: f32,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            pins: PinAssignment::default(),

            // Blinds
            blinds_open_hour: 8,
            blinds_close_hour: 20,
            blinds_open_angle: 12,
            blinds_closed_angle: 2,

            // Light
            light_on_below_lux: 500.0,
            light_off_above_lux: 550.0,
        }
    }
}

impl OfficeConfig {
    /// Parse a JSON document (missing fields take defaults) and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the rules meaningless.
    /// Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blinds_open_hour >= self.blinds_close_hour {
            return Err(ConfigError::ValidationFailed(
                "blinds_open_hour must be before blinds_close_hour",
            ));
        }
        if self.blinds_close_hour > 23 {
            return Err(ConfigError::ValidationFailed("blinds_close_hour must be 0-23"));
        }
        if self.blinds_open_angle > 100 || self.blinds_closed_angle > 100 {
            return Err(ConfigError::ValidationFailed("servo values are duty percent (0-100)"));
        }
        if !self.light_on_below_lux.is_finite() || !self.light_off_above_lux.is_finite() {
            return Err(ConfigError::ValidationFailed("lux thresholds must be finite"));
        }
        if self.light_on_below_lux > self.light_off_above_lux {
            return Err(ConfigError::ValidationFailed(
                "light_on_below_lux must not exceed light_off_above_lux",
            ));
        }
        let all = self.pins.all();
        for (i, pin) in all.iter().enumerate() {
            if all[i + 1..].contains(pin) {
                return Err(ConfigError::ValidationFailed("pin assigned twice"));
            }
        }
        Ok(())
    }
}

/// Errors from loading or validating an [`OfficeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document could not be deserialized.
    Malformed,
    /// A field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => write!(f, "config malformed"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Malformed => Self::Config("malformed"),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
        }
    }
}
