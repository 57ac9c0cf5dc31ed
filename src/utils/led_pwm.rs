use microbit::hal::{
    gpio::{Output, Pin, PushPull},
    pwm::{Channel, Pwm},
    pac::PWM0,
};

use joystick_marker::config::PWM_MAX_DUTY;
use joystick_marker::peripheral::{Axis, DriveBank};

/// PWM0 driving the two axis LEDs: channel 0 = Y (blue), channel 1 = X (red).
pub struct LedPwm {
    pwm: Pwm<PWM0>,
}

impl LedPwm {
    pub fn new(pwm0: PWM0) -> Self {
        let pwm = Pwm::new(pwm0);
        pwm.set_max_duty(PWM_MAX_DUTY); // 16MHz / 4096 ~ 3.9kHz, no visible flicker
        pwm.enable();

        LedPwm { pwm }
    }

    fn channel(axis: Axis) -> Channel {
        match axis {
            Axis::Y => Channel::C0,
            Axis::X => Channel::C1,
        }
    }
}

impl DriveBank for LedPwm {
    type Pin = Pin<Output<PushPull>>;

    fn configure_channel(&mut self, channel: Axis, pin: Self::Pin) {
        self.pwm.set_output_pin(LedPwm::channel(channel), pin);
    }

    fn release_channel(&mut self, channel: Axis) -> Option<Self::Pin> {
        let ch = LedPwm::channel(channel);
        // clear_output_pin only hands the pin back while CONNECT is set, and
        // disable_channel cleared it; reconnect at zero duty so the LED stays dark
        self.pwm.set_duty_on(ch, 0);
        self.pwm.enable_channel(ch);
        // once PSEL lets go the pin falls back to its GPIO output config
        self.pwm.clear_output_pin(ch)
    }

    fn set_channel_enabled(&mut self, channel: Axis, enabled: bool) {
        if enabled {
            self.pwm.enable_channel(LedPwm::channel(channel));
        } else {
            self.pwm.disable_channel(LedPwm::channel(channel));
        }
    }

    fn set_drive_level(&mut self, channel: Axis, level: u16) {
        self.pwm.set_duty_on(LedPwm::channel(channel), level); //on-time, not off-time
    }
}
