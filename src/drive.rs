//! Output pins that switch between PWM drive and plain digital output.
//!
//! Each indicator LED pin is either bound to its drive channel or held by
//! the core as a digital output forced low. `OutputStage` owns both pins and
//! moves them between the two functions when outputs are toggled.

use embedded_hal::digital::OutputPin;

use crate::peripheral::{Axis, DriveBank};

/// Current function of one output pin.
pub enum PinFunction<P> {
    /// Pin is owned by the drive bank. `enabled` mirrors the channel's
    /// hardware enable.
    Drive { enabled: bool },
    /// Pin is a plain digital output held low.
    Digital(P),
}

impl<P> PinFunction<P> {
    pub fn is_drive(&self) -> bool {
        matches!(self, PinFunction::Drive { .. })
    }

    /// Bound to the bank with the channel switched on.
    pub fn is_active(&self) -> bool {
        matches!(self, PinFunction::Drive { enabled: true })
    }
}

pub struct OutputStage<B: DriveBank> {
    bank: B,
    pins: [PinFunction<B::Pin>; 2],
}

impl<B: DriveBank> OutputStage<B> {
    /// Bind both pins (Y then X) to their drive channels and enable them.
    pub fn new(bank: B, pins: [B::Pin; 2]) -> Self {
        let [y_pin, x_pin] = pins;
        let mut stage = OutputStage {
            bank,
            pins: [PinFunction::Digital(y_pin), PinFunction::Digital(x_pin)],
        };
        stage.enable();
        stage
    }

    /// Disable both channels, then take the pins back and drive them low.
    ///
    /// A pin the bank does not hand back stays bound with its channel off,
    /// so it is dark either way and `enable` switches it back on.
    pub fn disable(&mut self) {
        for axis in Axis::ALL {
            let slot = &mut self.pins[axis.index()];
            if slot.is_active() {
                self.bank.set_channel_enabled(axis, false);
                *slot = PinFunction::Drive { enabled: false };
            }
        }

        for axis in Axis::ALL {
            if !self.pins[axis.index()].is_drive() {
                continue;
            }
            if let Some(mut pin) = self.bank.release_channel(axis) {
                pin.set_low().ok();
                self.pins[axis.index()] = PinFunction::Digital(pin);
            }
        }
    }

    /// Hand both pins back to their drive channels and enable them.
    pub fn enable(&mut self) {
        for axis in Axis::ALL {
            let slot = &mut self.pins[axis.index()];
            if slot.is_active() {
                continue;
            }
            if let PinFunction::Digital(pin) =
                core::mem::replace(slot, PinFunction::Drive { enabled: true })
            {
                self.bank.configure_channel(axis, pin);
            }
            self.bank.set_channel_enabled(axis, true);
        }
    }

    /// Ignored unless the channel is bound and enabled.
    pub fn set_drive_level(&mut self, channel: Axis, level: u16) {
        if self.pins[channel.index()].is_active() {
            self.bank.set_drive_level(channel, level);
        }
    }

    /// True when both pins are bound to enabled drive channels.
    pub fn is_driving(&self) -> bool {
        self.pins.iter().all(PinFunction::is_active)
    }

    pub fn function(&self, channel: Axis) -> &PinFunction<B::Pin> {
        &self.pins[channel.index()]
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }
}
