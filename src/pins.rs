//! Default pin assignments for the office controller board.
//!
//! Numbers are physical header positions (board numbering).  They are
//! opaque to the decision logic, which only ever passes them back to the
//! digital I/O port.  Override per installation through
//! [`PinAssignment`](crate::config::PinAssignment).

// ---------------------------------------------------------------------------
// Infrared presence sensors, one per quadrant. HIGH = presence detected.
// ---------------------------------------------------------------------------

pub const INFRARED_Q1_PIN: u8 = 11;
pub const INFRARED_Q2_PIN: u8 = 12;
pub const INFRARED_Q3_PIN: u8 = 13;
pub const INFRARED_Q4_PIN: u8 = 15;

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// PWM output driving the blind servo.
pub const SERVO_PIN: u8 = 18;
/// Digital output: HIGH = status LED on.
pub const LED_PIN: u8 = 29;
/// Digital output: HIGH = alarm buzzer sounding.
pub const BUZZER_PIN: u8 = 36;

// ---------------------------------------------------------------------------
// Gas sensor (MQ-2 digital output, active-low)
// ---------------------------------------------------------------------------

/// Digital input: LOW = gas or smoke detected, HIGH = air clean.
pub const GAS_PIN: u8 = 31;
