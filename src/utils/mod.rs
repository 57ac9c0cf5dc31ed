pub mod joystick;
pub mod led_pwm;
pub mod oled_canvas;
pub mod uptime;
