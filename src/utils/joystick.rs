use microbit::hal::{
    gpio::{
        Floating, Input,
        p0::{P0_03, P0_04},
    },
    saadc::Saadc,
};
use rtt_target::rprintln;

use joystick_marker::config::ADC_MAX;
use joystick_marker::peripheral::{Axis, AxisSampler};

pub type VryPinType = P0_03<Input<Floating>>; //e01, AIN1
pub type VrxPinType = P0_04<Input<Floating>>; //e02, AIN2

/// Two-axis analog joystick on the SAADC (configured for 12 bits by the caller).
pub struct Joystick {
    adc: Saadc,
    vry: VryPinType,
    vrx: VrxPinType,
    last: [u16; 2],
}

impl Joystick {
    pub fn new(adc: Saadc, vry: VryPinType, vrx: VrxPinType) -> Self {
        Joystick {
            adc,
            vry,
            vrx,
            last: [0; 2],
        }
    }
}

impl AxisSampler for Joystick {
    fn sample_axis(&mut self, axis: Axis) -> u16 {
        let reading = match axis {
            Axis::Y => self.adc.read_channel(&mut self.vry),
            Axis::X => self.adc.read_channel(&mut self.vrx),
        };

        match reading {
            // single-ended readings can dip slightly below zero near ground
            Ok(raw) => self.last[axis.index()] = (raw.max(0) as u16).min(ADC_MAX),
            Err(_) => rprintln!("saadc: {:?} read failed, reusing last sample", axis),
        }
        self.last[axis.index()]
    }
}
