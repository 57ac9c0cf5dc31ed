//! Host-side stand-ins for the board peripherals.

use core::convert::Infallible;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::peripheral::{Axis, AxisSampler, DriveBank, MarkerCanvas};

/// Mock GPIO output that remembers its level.
#[derive(Debug, PartialEq, Eq)]
pub struct MockPin {
    pub id: u8,
    pub high: bool,
}

impl MockPin {
    pub fn new(id: u8) -> Self {
        // pins come out of reset driving high so a missed set_low shows up
        Self { id, high: true }
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankOp {
    Configure(Axis),
    Release(Axis),
    Enable(Axis, bool),
    Level(Axis, u16),
}

/// Mock PWM bank modelled on the nRF PSEL.OUT register.
///
/// `bound` is the pin selected for a channel and `enabled` its CONNECT bit.
/// As on the hardware, a bound pin can only be taken back while CONNECT is
/// set. `release_channel` reconnects at zero duty first, the same sequence
/// `LedPwm` uses; `raw_release` skips that step.
#[derive(Default)]
pub struct MockBank {
    pub bound: [Option<MockPin>; 2],
    pub enabled: [bool; 2],
    pub levels: [u16; 2],
    pub ops: Vec<BankOp>,
    pub raw_release: bool,
}

impl DriveBank for MockBank {
    type Pin = MockPin;

    fn configure_channel(&mut self, channel: Axis, pin: MockPin) {
        self.ops.push(BankOp::Configure(channel));
        self.bound[channel.index()] = Some(pin);
    }

    fn release_channel(&mut self, channel: Axis) -> Option<MockPin> {
        self.ops.push(BankOp::Release(channel));
        let i = channel.index();
        if !self.raw_release {
            self.levels[i] = 0;
            self.enabled[i] = true;
        }
        if !self.enabled[i] {
            return None;
        }
        // clearing PSEL disconnects the channel
        self.enabled[i] = false;
        self.bound[i].take()
    }

    fn set_channel_enabled(&mut self, channel: Axis, enabled: bool) {
        self.ops.push(BankOp::Enable(channel, enabled));
        self.enabled[channel.index()] = enabled;
    }

    fn set_drive_level(&mut self, channel: Axis, level: u16) {
        self.ops.push(BankOp::Level(channel, level));
        if self.enabled[channel.index()] {
            self.levels[channel.index()] = level;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasOp {
    Clear,
    Draw(u8, u8),
    Erase(u8, u8),
    Rect(u8, u8, u8, u8),
    Flush,
}

/// Records every display primitive in call order.
#[derive(Default)]
pub struct MockCanvas {
    pub ops: Vec<CanvasOp>,
}

impl MarkerCanvas for MockCanvas {
    fn clear(&mut self) {
        self.ops.push(CanvasOp::Clear);
    }

    fn draw_square(&mut self, x: u8, y: u8) {
        self.ops.push(CanvasOp::Draw(x, y));
    }

    fn erase_square(&mut self, x: u8, y: u8) {
        self.ops.push(CanvasOp::Erase(x, y));
    }

    fn draw_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        self.ops.push(CanvasOp::Rect(x0, y0, x1, y1));
    }

    fn flush(&mut self) {
        self.ops.push(CanvasOp::Flush);
    }
}

/// Returns fixed readings and remembers the order axes were read in.
pub struct MockSampler {
    pub y: u16,
    pub x: u16,
    pub reads: Vec<Axis>,
}

impl MockSampler {
    pub fn new(y: u16, x: u16) -> Self {
        Self { y, x, reads: Vec::new() }
    }
}

impl AxisSampler for MockSampler {
    fn sample_axis(&mut self, axis: Axis) -> u16 {
        self.reads.push(axis);
        match axis {
            Axis::Y => self.y,
            Axis::X => self.x,
        }
    }
}
