//! Contracts the core needs from the board.
//!
//! The firmware binary implements these over the micro:bit HAL; tests use the
//! mocks in `testing`. Every operation is treated as infallible: a peripheral
//! that misbehaves is a board bring-up problem, not something the control
//! loop can recover from.

use embedded_hal::digital::OutputPin;

/// Joystick axis, which doubles as the index of its drive channel.
///
/// Axis 0 (Y) drives the blue LED, axis 1 (X) the red one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Y = 0,
    X = 1,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Y, Axis::X];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Blocking analog read of one joystick axis, 12-bit.
pub trait AxisSampler {
    fn sample_axis(&mut self, axis: Axis) -> u16;
}

/// A bank of pulse-width drive channels, one per axis.
///
/// A physical pin is handed to the bank with `configure_channel` and taken
/// back, as a plain digital output, with `release_channel`.
pub trait DriveBank {
    type Pin: OutputPin;

    /// Bind `pin` to the drive function of `channel`.
    fn configure_channel(&mut self, channel: Axis, pin: Self::Pin);

    /// Unbind the pin from `channel` and return it in digital-output mode.
    fn release_channel(&mut self, channel: Axis) -> Option<Self::Pin>;

    fn set_channel_enabled(&mut self, channel: Axis, enabled: bool);

    /// No effect while the channel is disabled.
    fn set_drive_level(&mut self, channel: Axis, level: u16);
}

/// Free-running microsecond clock used for debouncing.
pub trait MonotonicClock {
    fn now_micros(&mut self) -> u64;
}

/// Buffered monochrome display. Nothing becomes visible until `flush`.
pub trait MarkerCanvas {
    /// Blank the whole buffer.
    fn clear(&mut self);

    /// Fill a marker-sized square with the foreground color.
    fn draw_square(&mut self, x: u8, y: u8);

    /// Fill a marker-sized square with the background color.
    fn erase_square(&mut self, x: u8, y: u8);

    /// One-pixel outline from `(x0, y0)` to `(x1, y1)`, corners inclusive.
    fn draw_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8);

    fn flush(&mut self);
}
