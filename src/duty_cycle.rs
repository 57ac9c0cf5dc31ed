//! Raw joystick samples to duty-cycle percentages and LED drive levels.

use crate::config::{ADC_CENTER, ADC_MAX, DEAD_ZONE_HIGH_PCT, DEAD_ZONE_LOW_PCT};
use crate::drive::OutputStage;
use crate::input_monitor::ModeFlags;
use crate::peripheral::{Axis, DriveBank};

/// One reading of both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisSamples {
    pub y: u16,
    pub x: u16,
}

impl AxisSamples {
    pub fn get(&self, axis: Axis) -> u16 {
        match axis {
            Axis::Y => self.y,
            Axis::X => self.x,
        }
    }
}

/// Both axes as percentages of full scale.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DutyCycles {
    pub y: f32,
    pub x: f32,
}

/// Percentage of full scale, in [0, 100].
pub fn percentage(sample: u16) -> f32 {
    (sample.min(ADC_MAX) as f32 / ADC_MAX as f32) * 100.0
}

pub fn in_dead_zone(pct: f32) -> bool {
    (DEAD_ZONE_LOW_PCT..=DEAD_ZONE_HIGH_PCT).contains(&pct)
}

/// Drive level for one axis.
///
/// Zero inside the dead zone. Above center the raw sample is used as is;
/// below center the deflection is mirrored into the upper half so the LED
/// brightens the same way in both directions. The dead-zone test is on the
/// percentage, not on the raw sample.
pub fn drive_level(sample: u16) -> u16 {
    let sample = sample.min(ADC_MAX);
    if in_dead_zone(percentage(sample)) {
        0
    } else if sample > ADC_CENTER {
        sample
    } else {
        // sample 0 would land one past the counter range
        ((ADC_CENTER - sample) + ADC_CENTER).min(ADC_MAX)
    }
}

/// Convert both samples and, while outputs are enabled, write their drive levels.
pub fn apply<B: DriveBank>(
    samples: AxisSamples,
    flags: ModeFlags,
    outputs: &mut OutputStage<B>,
) -> DutyCycles {
    let duty = DutyCycles {
        y: percentage(samples.y),
        x: percentage(samples.x),
    };

    if flags.output_enabled {
        for axis in Axis::ALL {
            outputs.set_drive_level(axis, drive_level(samples.get(axis)));
        }
    }

    duty
}
