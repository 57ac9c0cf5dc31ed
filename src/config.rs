//! Build-time constants shared by the core and the firmware.

/// Largest value the 12-bit SAADC returns.
pub const ADC_MAX: u16 = 4095;
/// Raw sample at the mechanical center of each joystick axis.
pub const ADC_CENTER: u16 = 2048;

/// Lower edge of the centered dead zone, in percent (inclusive).
pub const DEAD_ZONE_LOW_PCT: f32 = 46.0;
/// Upper edge of the centered dead zone, in percent (inclusive).
pub const DEAD_ZONE_HIGH_PCT: f32 = 54.0;

/// PWM counter top; drive levels are written against this range.
pub const PWM_MAX_DUTY: u16 = 4096;

/// Minimum spacing between accepted button edges, shared by both buttons.
pub const DEBOUNCE_WINDOW_US: u64 = 200_000; // 200ms at 1MHz count rate.

/// Foreground loop cadence.
pub const LOOP_PERIOD_MS: u32 = 100;

pub const DISPLAY_WIDTH: u8 = 128; // SSD1306 columns
pub const DISPLAY_HEIGHT: u8 = 64; // SSD1306 rows
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C; // SA0 low; some modules strap 0x3D

/// Side of the square marker, in pixels.
pub const MARKER_SIZE: u8 = 8;
