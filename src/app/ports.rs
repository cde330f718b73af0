//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RoomController (domain)
//! ```
//!
//! Driven adapters (GPIO banks, RTC, lux sensor, servo) implement these
//! traits.  The [`RoomController`](super::controller::RoomController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Every port is also implemented for `&mut T`, so a caller can lend an
//! adapter to the controller and keep ownership of it.

use chrono::NaiveDateTime;

use crate::error::Result;

// ───────────────────────────────────────────────────────────────
// Digital I/O port (presence sensors, gas sensor, LED, buzzer)
// ───────────────────────────────────────────────────────────────

/// Level-based digital I/O addressed by pin number.
pub trait DigitalIoPort {
    /// Read the logic level of an input pin (`true` = HIGH).
    fn read(&mut self, pin: u8) -> Result<bool>;

    /// Drive an output pin HIGH (`true`) or LOW.
    fn write(&mut self, pin: u8, high: bool) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (real-time clock)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source in the office's local time zone.
pub trait ClockPort {
    fn now(&mut self) -> Result<NaiveDateTime>;
}

// ───────────────────────────────────────────────────────────────
// Light sensor port (ambient illuminance)
// ───────────────────────────────────────────────────────────────

pub trait LightSensorPort {
    /// Current ambient illuminance in lux.
    fn lux(&mut self) -> Result<f32>;
}

// ───────────────────────────────────────────────────────────────
// Servo port (blind positioning)
// ───────────────────────────────────────────────────────────────

pub trait ServoPort {
    /// Move the servo to a calibrated position value.
    fn set_angle(&mut self, value: u8) -> Result<()>;
}

// ───────────────────────────────────────────────────────────────
// Borrowed adapters
// ───────────────────────────────────────────────────────────────

impl<T: DigitalIoPort + ?Sized> DigitalIoPort for &mut T {
    fn read(&mut self, pin: u8) -> Result<bool> {
        (**self).read(pin)
    }

    fn write(&mut self, pin: u8, high: bool) -> Result<()> {
        (**self).write(pin, high)
    }
}

impl<T: ClockPort + ?Sized> ClockPort for &mut T {
    fn now(&mut self) -> Result<NaiveDateTime> {
        (**self).now()
    }
}

impl<T: LightSensorPort + ?Sized> LightSensorPort for &mut T {
    fn lux(&mut self) -> Result<f32> {
        (**self).lux()
    }
}

impl<T: ServoPort + ?Sized> ServoPort for &mut T {
    fn set_angle(&mut self, value: u8) -> Result<()> {
        (**self).set_angle(value)
    }
}
