//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Combines a digital I/O bank, the blind servo, a clock and a light
//! sensor into the single handle a
//! [`RoomController`](crate::app::controller::RoomController) drives.
//! Each part is any type implementing the matching port, so a board can
//! mix real drivers with host adapters.

use chrono::NaiveDateTime;

use crate::app::ports::{ClockPort, DigitalIoPort, LightSensorPort, ServoPort};
use crate::error::Result;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<D, S, C, L> {
    io: D,
    servo: S,
    clock: C,
    light: L,
}

impl<D, S, C, L> HardwareAdapter<D, S, C, L> {
    pub fn new(io: D, servo: S, clock: C, light: L) -> Self {
        Self {
            io,
            servo,
            clock,
            light,
        }
    }

    pub fn io_mut(&mut self) -> &mut D {
        &mut self.io
    }

    pub fn servo(&self) -> &S {
        &self.servo
    }

    pub fn into_parts(self) -> (D, S, C, L) {
        (self.io, self.servo, self.clock, self.light)
    }
}

// ── Port implementations ──────────────────────────────────────

impl<D: DigitalIoPort, S, C, L> DigitalIoPort for HardwareAdapter<D, S, C, L> {
    fn read(&mut self, pin: u8) -> Result<bool> {
        self.io.read(pin)
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<()> {
        self.io.write(pin, high)
    }
}

impl<D, S: ServoPort, C, L> ServoPort for HardwareAdapter<D, S, C, L> {
    fn set_angle(&mut self, value: u8) -> Result<()> {
        self.servo.set_angle(value)
    }
}

impl<D, S, C: ClockPort, L> ClockPort for HardwareAdapter<D, S, C, L> {
    fn now(&mut self) -> Result<NaiveDateTime> {
        self.clock.now()
    }
}

impl<D, S, C, L: LightSensorPort> LightSensorPort for HardwareAdapter<D, S, C, L> {
    fn lux(&mut self) -> Result<f32> {
        self.light.lux()
    }
}
