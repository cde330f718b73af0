//! Room controller — the hexagonal core.
//!
//! [`RoomController`] owns the last-commanded actuator state and a handle
//! to the hardware ports.  Each public routine reads fresh sensor values,
//! decides, and issues at most one actuator command.  Adapter errors are
//! propagated untouched; state only changes after a write succeeds.
//!
//! ```text
//!   DigitalIoPort ──▶ ┌──────────────────────────┐ ──▶ DigitalIoPort (LED, buzzer)
//!       ClockPort ──▶ │      RoomController      │
//! LightSensorPort ──▶ │ schedule · hysteresis    │ ──▶ ServoPort (blinds)
//!                     └──────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::OfficeConfig;
use crate::control::hysteresis::HysteresisBand;
use crate::control::schedule::{BlindPosition, BlindSchedule};
use crate::error::Result;

use super::model::{Quadrant, RoomState};
use super::ports::{ClockPort, DigitalIoPort, LightSensorPort, ServoPort};

// ───────────────────────────────────────────────────────────────
// RoomController
// ───────────────────────────────────────────────────────────────

/// Decision logic for one four-quadrant room.
pub struct RoomController<H> {
    hw: H,
    config: OfficeConfig,
    schedule: BlindSchedule,
    light_band: HysteresisBand,
    state: RoomState,
}

impl<H> RoomController<H> {
    /// Build a controller with all actuators assumed off/closed.
    ///
    /// The configuration is trusted as given; call
    /// [`OfficeConfig::validate`] first if it came from outside.
    pub fn new(hw: H, config: OfficeConfig) -> Self {
        Self::with_state(hw, config, RoomState::default())
    }

    /// Build a controller with the reference installation's configuration.
    pub fn with_defaults(hw: H) -> Self {
        Self::new(hw, OfficeConfig::default())
    }

    /// Build a controller that resumes from a known actuator state.
    pub fn with_state(hw: H, config: OfficeConfig, state: RoomState) -> Self {
        let schedule = BlindSchedule::new(config.blinds_open_hour, config.blinds_close_hour);
        let light_band = HysteresisBand::new(config.light_on_below_lux, config.light_off_above_lux);
        Self {
            hw,
            config,
            schedule,
            light_band,
            state,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> RoomState {
        self.state
    }

    pub fn blinds_open(&self) -> bool {
        self.state.blinds_open
    }

    pub fn light_on(&self) -> bool {
        self.state.light_on
    }

    pub fn buzzer_on(&self) -> bool {
        self.state.buzzer_on
    }

    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    pub fn hw(&self) -> &H {
        &self.hw
    }

    pub fn hw_mut(&mut self) -> &mut H {
        &mut self.hw
    }

    /// Release the hardware handle.
    pub fn into_inner(self) -> H {
        self.hw
    }
}

// ── Occupancy ─────────────────────────────────────────────────

impl<H: DigitalIoPort> RoomController<H> {
    /// True iff the quadrant's presence sensor currently reads HIGH.
    pub fn check_quadrant_occupancy(&mut self, quadrant: Quadrant) -> Result<bool> {
        let pin = self.config.pins.infrared[quadrant.index()];
        self.hw.read(pin)
    }

    /// Occupancy check by raw channel number (1–4).
    ///
    /// Channels outside the set fail with
    /// [`Error::InvalidChannel`](crate::error::Error::InvalidChannel)
    /// without touching hardware.
    pub fn check_channel_occupancy(&mut self, channel: u8) -> Result<bool> {
        let quadrant = Quadrant::try_from(channel)?;
        self.check_quadrant_occupancy(quadrant)
    }

    /// True if any quadrant reports presence.  Stops at the first hit.
    pub fn room_occupied(&mut self) -> Result<bool> {
        for quadrant in Quadrant::ALL {
            if self.check_quadrant_occupancy(quadrant)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // ── Air quality ───────────────────────────────────────────

    /// Sound the buzzer while the (active-low) gas input reads LOW.
    ///
    /// Writes the buzzer every call, whether or not its state changed.
    pub fn monitor_air_quality(&mut self) -> Result<()> {
        let air_clean = self.hw.read(self.config.pins.gas)?;
        let buzzer = !air_clean;

        self.hw.write(self.config.pins.buzzer, buzzer)?;
        if buzzer && !self.state.buzzer_on {
            warn!("Gas detected, buzzer on");
        } else if !buzzer && self.state.buzzer_on {
            info!("Air clean again, buzzer off");
        }
        self.state.buzzer_on = buzzer;
        Ok(())
    }
}

// ── Lighting ──────────────────────────────────────────────────

impl<H: DigitalIoPort + LightSensorPort> RoomController<H> {
    /// Keep the light within the lux hysteresis band while the room is
    /// occupied; switch it off as soon as nobody is present.
    pub fn manage_light_level(&mut self) -> Result<()> {
        if !self.room_occupied()? {
            if self.state.light_on {
                self.set_light(false)?;
                info!("Room empty, light off");
            }
            return Ok(());
        }

        let lux = self.hw.lux()?;
        match self.light_band.decide(self.state.light_on, lux) {
            Some(on) => {
                self.set_light(on)?;
                info!("Ambient {:.0} lx, light {}", lux, if on { "on" } else { "off" });
            }
            None => debug!("Ambient {:.0} lx, light stays {}", lux, self.state.light_on),
        }
        Ok(())
    }

    fn set_light(&mut self, on: bool) -> Result<()> {
        self.hw.write(self.config.pins.led, on)?;
        self.state.light_on = on;
        Ok(())
    }
}

// ── Blinds ────────────────────────────────────────────────────

impl<H: ClockPort + ServoPort> RoomController<H> {
    /// Open the blinds during weekday office hours and close them in the
    /// evening.  Only commands the servo on a change of position.
    pub fn manage_blinds_based_on_time(&mut self) -> Result<()> {
        let now = self.hw.now()?;
        let currently = if self.state.blinds_open {
            BlindPosition::Open
        } else {
            BlindPosition::Closed
        };

        match self.schedule.target(&now) {
            Some(target) if target != currently => {
                let value = match target {
                    BlindPosition::Open => self.config.blinds_open_angle,
                    BlindPosition::Closed => self.config.blinds_closed_angle,
                };
                self.hw.set_angle(value)?;
                self.state.blinds_open = target == BlindPosition::Open;
                info!("{} blinds {:?} (servo={})", now, target, value);
            }
            _ => debug!("{} blinds unchanged", now),
        }
        Ok(())
    }
}

// ── Full cycle ────────────────────────────────────────────────

impl<H: DigitalIoPort + ClockPort + LightSensorPort + ServoPort> RoomController<H> {
    /// Run one control cycle: air quality, blinds, then lighting.
    ///
    /// Every routine runs even if an earlier one failed; the first error
    /// is returned once the cycle is complete.
    pub fn tick(&mut self) -> Result<()> {
        let air = self.monitor_air_quality();
        let blinds = self.manage_blinds_based_on_time();
        let light = self.manage_light_level();
        if let Err(e) = air.and(blinds).and(light) {
            warn!("Control cycle incomplete: {}", e);
            return Err(e);
        }
        Ok(())
    }
}
