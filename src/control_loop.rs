//! One pass of the foreground loop: sample, map, render.
//!
//! The firmware calls `sample` and `ControlLoop::step` back to back and then
//! sleeps for `LOOP_PERIOD_MS`. Button edges are never handled here; their
//! effect arrives through the `ModeFlags` passed in.

use crate::drive::OutputStage;
use crate::duty_cycle::{self, AxisSamples, DutyCycles};
use crate::input_monitor::ModeFlags;
use crate::marker::{MarkerPosition, MarkerRenderer};
use crate::peripheral::{Axis, AxisSampler, DriveBank, MarkerCanvas};

/// Read Y then X.
pub fn sample<S: AxisSampler>(sampler: &mut S) -> AxisSamples {
    let y = sampler.sample_axis(Axis::Y);
    let x = sampler.sample_axis(Axis::X);
    AxisSamples { y, x }
}

pub struct ControlLoop {
    renderer: MarkerRenderer,
}

impl ControlLoop {
    pub const fn new() -> Self {
        ControlLoop {
            renderer: MarkerRenderer::new(),
        }
    }

    pub fn marker(&self) -> MarkerPosition {
        self.renderer.position()
    }

    pub fn step<B, C>(
        &mut self,
        samples: AxisSamples,
        flags: ModeFlags,
        outputs: &mut OutputStage<B>,
        canvas: &mut C,
    ) -> DutyCycles
    where
        B: DriveBank,
        C: MarkerCanvas,
    {
        let duty = duty_cycle::apply(samples, flags, outputs);
        self.renderer.render(duty, canvas);
        duty
    }
}

impl Default for ControlLoop {
    fn default() -> Self {
        Self::new()
    }
}
