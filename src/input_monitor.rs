//! Debounced button handling and the two mode flags it owns.
//!
//! `InputMonitor::handle` is called from the GPIOTE interrupt. It neither
//! blocks nor allocates; the caller runs it inside a critical section so a
//! second edge cannot interleave with a half-finished transition.

use crate::config::{DEBOUNCE_WINDOW_US, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::drive::OutputStage;
use crate::peripheral::{DriveBank, MarkerCanvas};

/// Which button produced a falling edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Button A: LED drive outputs on/off.
    OutputEnable,
    /// Joystick press: display border on/off.
    Overlay,
}

impl Button {
    /// Map a GPIOTE channel to its button. Other channels are not ours.
    pub fn from_channel(channel: usize) -> Option<Button> {
        match channel {
            0 => Some(Button::OutputEnable),
            1 => Some(Button::Overlay),
            _ => None,
        }
    }
}

/// Mode flags read by the foreground loop every cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeFlags {
    pub output_enabled: bool,
    pub overlay_enabled: bool,
}

impl Default for ModeFlags {
    /// Power-on state: LEDs driven, no border.
    fn default() -> Self {
        ModeFlags {
            output_enabled: true,
            overlay_enabled: false,
        }
    }
}

/// Flag transition produced by an accepted edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeChange {
    Outputs(bool),
    Overlay(bool),
}

pub struct InputMonitor {
    flags: ModeFlags,
    last_event_us: u64,
}

impl InputMonitor {
    pub const fn new() -> Self {
        InputMonitor {
            flags: ModeFlags {
                output_enabled: true,
                overlay_enabled: false,
            },
            last_event_us: 0,
        }
    }

    pub fn flags(&self) -> ModeFlags {
        self.flags
    }

    pub fn last_event_micros(&self) -> u64 {
        self.last_event_us
    }

    /// Debounce gate plus flag flip, without touching hardware.
    ///
    /// The window is shared: an accepted press on either button holds off
    /// both buttons for `DEBOUNCE_WINDOW_US`.
    pub fn on_falling_edge(&mut self, button: Button, now_us: u64) -> Option<ModeChange> {
        if now_us.saturating_sub(self.last_event_us) < DEBOUNCE_WINDOW_US {
            return None;
        }
        self.last_event_us = now_us;

        let change = match button {
            Button::OutputEnable => {
                self.flags.output_enabled = !self.flags.output_enabled;
                ModeChange::Outputs(self.flags.output_enabled)
            }
            Button::Overlay => {
                self.flags.overlay_enabled = !self.flags.overlay_enabled;
                ModeChange::Overlay(self.flags.overlay_enabled)
            }
        };
        Some(change)
    }

    /// Handle one edge end to end: debounce, flip the flag, and apply the
    /// matching hardware transition.
    pub fn handle<B, C>(
        &mut self,
        button: Button,
        now_us: u64,
        outputs: &mut OutputStage<B>,
        canvas: &mut C,
    ) -> Option<ModeChange>
    where
        B: DriveBank,
        C: MarkerCanvas,
    {
        let change = self.on_falling_edge(button, now_us)?;

        match change {
            ModeChange::Outputs(true) => outputs.enable(),
            ModeChange::Outputs(false) => outputs.disable(),
            ModeChange::Overlay(true) => {
                canvas.draw_rect(0, 0, DISPLAY_WIDTH - 1, DISPLAY_HEIGHT - 1);
                canvas.flush();
            }
            ModeChange::Overlay(false) => {
                canvas.clear();
                canvas.flush();
            }
        }

        Some(change)
    }
}

impl Default for InputMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drive::PinFunction;
    use crate::peripheral::Axis;
    use crate::testing::{CanvasOp, MockBank, MockCanvas, MockPin};

    const T0: u64 = 1_000_000;

    fn outputs() -> OutputStage<MockBank> {
        OutputStage::new(MockBank::default(), [MockPin::new(12), MockPin::new(13)])
    }

    fn forced_low(stage: &OutputStage<MockBank>) -> bool {
        Axis::ALL.iter().all(|&axis| {
            matches!(stage.function(axis), PinFunction::Digital(pin) if !pin.high)
        }) && stage.bank().enabled == [false, false]
    }

    #[test]
    fn test_unknown_channels_are_ignored() {
        assert_eq!(Button::from_channel(0), Some(Button::OutputEnable));
        assert_eq!(Button::from_channel(1), Some(Button::Overlay));
        assert_eq!(Button::from_channel(2), None);
        assert_eq!(Button::from_channel(7), None);
    }

    #[test]
    fn test_power_on_flags() {
        let monitor = InputMonitor::new();
        assert_eq!(monitor.flags(), ModeFlags::default());
        assert!(monitor.flags().output_enabled);
        assert!(!monitor.flags().overlay_enabled);
    }

    #[test]
    fn test_edge_inside_window_is_dropped() {
        let mut monitor = InputMonitor::new();

        assert_eq!(
            monitor.on_falling_edge(Button::OutputEnable, T0),
            Some(ModeChange::Outputs(false))
        );
        assert_eq!(monitor.on_falling_edge(Button::OutputEnable, T0 + 199_999), None);
        assert!(!monitor.flags().output_enabled);
        assert_eq!(monitor.last_event_micros(), T0);
    }

    #[test]
    fn test_window_is_shared_between_buttons() {
        let mut monitor = InputMonitor::new();

        monitor.on_falling_edge(Button::OutputEnable, T0);
        assert_eq!(monitor.on_falling_edge(Button::Overlay, T0 + 150_000), None);
        assert!(!monitor.flags().overlay_enabled);

        assert_eq!(
            monitor.on_falling_edge(Button::Overlay, T0 + 200_000),
            Some(ModeChange::Overlay(true))
        );
    }

    #[test]
    fn test_edges_right_after_boot_are_dropped() {
        let mut monitor = InputMonitor::new();
        assert_eq!(monitor.on_falling_edge(Button::Overlay, 50_000), None);
        assert_eq!(monitor.last_event_micros(), 0);
    }

    #[test]
    fn test_timestamp_never_goes_backwards() {
        let mut monitor = InputMonitor::new();
        monitor.on_falling_edge(Button::Overlay, T0);

        assert_eq!(monitor.on_falling_edge(Button::Overlay, T0 - 500_000), None);
        assert_eq!(monitor.last_event_micros(), T0);
    }

    #[test]
    fn test_output_toggle_round_trip() {
        let mut monitor = InputMonitor::new();
        let mut stage = outputs();
        let mut canvas = MockCanvas::default();

        let mut now = T0;
        monitor.handle(Button::OutputEnable, now, &mut stage, &mut canvas);
        assert!(forced_low(&stage));

        now += 250_000;
        assert_eq!(
            monitor.handle(Button::OutputEnable, now, &mut stage, &mut canvas),
            Some(ModeChange::Outputs(true))
        );
        assert!(stage.is_driving());
        assert_eq!(stage.bank().enabled, [true, true]);

        now += 250_000;
        monitor.handle(Button::OutputEnable, now, &mut stage, &mut canvas);
        assert!(forced_low(&stage));
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_leds_come_back_after_toggle_cycle() {
        let mut monitor = InputMonitor::new();
        let mut stage = outputs();
        let mut canvas = MockCanvas::default();

        for press in 1..=4u64 {
            let change = monitor.handle(Button::OutputEnable, press * T0, &mut stage, &mut canvas);
            if press % 2 == 1 {
                assert_eq!(change, Some(ModeChange::Outputs(false)));
                assert!(forced_low(&stage));
            } else {
                assert_eq!(change, Some(ModeChange::Outputs(true)));
                assert!(stage.is_driving());
                assert_eq!(stage.bank().enabled, [true, true]);
            }
        }

        stage.set_drive_level(Axis::Y, 3000);
        assert_eq!(stage.bank().levels[0], 3000);
    }

    #[test]
    fn test_bounced_edge_leaves_outputs_alone() {
        let mut monitor = InputMonitor::new();
        let mut stage = outputs();
        let mut canvas = MockCanvas::default();

        monitor.handle(Button::OutputEnable, T0, &mut stage, &mut canvas);
        let ops = stage.bank().ops.len();

        assert_eq!(
            monitor.handle(Button::OutputEnable, T0 + 10_000, &mut stage, &mut canvas),
            None
        );
        assert_eq!(stage.bank().ops.len(), ops);
        assert!(forced_low(&stage));
    }

    #[test]
    fn test_overlay_draws_border_then_clears() {
        let mut monitor = InputMonitor::new();
        let mut stage = outputs();
        let mut canvas = MockCanvas::default();

        monitor.handle(Button::Overlay, T0, &mut stage, &mut canvas);
        assert_eq!(canvas.ops, [CanvasOp::Rect(0, 0, 127, 63), CanvasOp::Flush]);

        canvas.ops.clear();
        monitor.handle(Button::Overlay, T0 + 300_000, &mut stage, &mut canvas);
        assert_eq!(canvas.ops, [CanvasOp::Clear, CanvasOp::Flush]);
        assert!(stage.is_driving());
    }
}
