//! GPIO bank adapter.
//!
//! Maps board pin numbers to `embedded-hal` digital pin handles and
//! exposes them through [`DigitalIoPort`].  Handles of one direction must
//! share a type; on most HALs that means the type-erased ("degraded") pin.
//!
//! Capacity is fixed at compile time so the bank never allocates.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use heapless::LinearMap;
use log::debug;

use crate::app::ports::DigitalIoPort;
use crate::error::{ActuatorError, Error, Result, SensorError};

/// Maximum number of input and of output pins a bank can hold.
pub const MAX_PINS: usize = 8;

pub struct GpioBank<I, O> {
    inputs: LinearMap<u8, I, MAX_PINS>,
    outputs: LinearMap<u8, O, MAX_PINS>,
}

impl<I, O> Default for GpioBank<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> GpioBank<I, O> {
    pub fn new() -> Self {
        Self {
            inputs: LinearMap::new(),
            outputs: LinearMap::new(),
        }
    }

    /// Register an input handle under `pin`, replacing any previous one.
    pub fn add_input(&mut self, pin: u8, handle: I) -> Result<()> {
        if self.inputs.insert(pin, handle).is_err() {
            return Err(Error::Config("GPIO bank input capacity exceeded"));
        }
        debug!("gpio: input registered on pin {}", pin);
        Ok(())
    }

    /// Register an output handle under `pin`, replacing any previous one.
    pub fn add_output(&mut self, pin: u8, handle: O) -> Result<()> {
        if self.outputs.insert(pin, handle).is_err() {
            return Err(Error::Config("GPIO bank output capacity exceeded"));
        }
        debug!("gpio: output registered on pin {}", pin);
        Ok(())
    }
}

impl<I: InputPin, O: OutputPin> DigitalIoPort for GpioBank<I, O> {
    fn read(&mut self, pin: u8) -> Result<bool> {
        let handle = self.inputs.get_mut(&pin).ok_or(Error::UnmappedPin(pin))?;
        handle
            .is_high()
            .map_err(|_| SensorError::GpioReadFailed.into())
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<()> {
        let handle = self.outputs.get_mut(&pin).ok_or(Error::UnmappedPin(pin))?;
        handle
            .set_state(PinState::from(high))
            .map_err(|_| ActuatorError::GpioWriteFailed.into())
    }
}
