//! Blind servo adapter.
//!
//! Drives a hobby servo from any `embedded-hal` PWM channel.  The
//! position values used by the office (12 = open, 2 = closed) are duty
//! percentages on a 50 Hz signal, so they are passed straight to
//! [`SetDutyCycle::set_duty_cycle_percent`].

use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::ServoPort;
use crate::error::{ActuatorError, Result};

pub struct PwmServo<P> {
    pwm: P,
    last: Option<u8>,
}

impl<P> PwmServo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, last: None }
    }

    /// Last value successfully written, if any.
    pub fn position(&self) -> Option<u8> {
        self.last
    }
}

impl<P: SetDutyCycle> ServoPort for PwmServo<P> {
    fn set_angle(&mut self, value: u8) -> Result<()> {
        if value > 100 {
            return Err(ActuatorError::OutOfRange.into());
        }
        self.pwm
            .set_duty_cycle_percent(value)
            .map_err(|_| ActuatorError::PwmWriteFailed)?;
        self.last = Some(value);
        Ok(())
    }
}
