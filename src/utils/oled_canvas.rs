//! oled_canvas.rs
//!
//! The oled_canvas module contains the OledCanvas struct which is a wrapper around an SSD1306
//! 128x64 OLED in buffered graphics mode, connected over the external I2C bus (TWIM0). All
//! drawing goes into the RAM framebuffer; nothing reaches the panel until flush() is called.
//! OledCanvas implements the MarkerCanvas trait used by the marker renderer (foreground loop)
//! and by the overlay toggle (GPIOTE interrupt).

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use microbit::{hal::twim::Twim, pac::TWIM0};
use rtt_target::rprintln;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use joystick_marker::config::{DISPLAY_I2C_ADDRESS, MARKER_SIZE};
use joystick_marker::peripheral::MarkerCanvas;

/// convenience typedef
pub type OledDriver = Ssd1306<
    I2CInterface<Twim<TWIM0>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// OledCanvas struct declaration: Note all fields are private
///
/// 1. display: the SSD1306 driver in buffered graphics mode
/// 2. flush_failures: count of flushes the panel did not acknowledge (reported over RTT)
pub struct OledCanvas {
    display: OledDriver,
    flush_failures: u32,
}

impl OledCanvas {
    /// PUBLIC
    /// Generate a new OledCanvas from the TWIM0 bus. The panel is initialized, blanked, and
    /// flushed so it starts dark.
    pub fn new(i2c: Twim<TWIM0>) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        if display.init().is_err() {
            rprintln!("oled: init failed, is the panel on 0x{:02x}?", DISPLAY_I2C_ADDRESS);
        }

        let mut canvas = OledCanvas {
            display,
            flush_failures: 0,
        };
        canvas.clear();
        canvas.flush();
        canvas
    }

    /// PRIVATE
    /// Fill a MARKER_SIZE square whose top-left corner is (x, y)
    fn fill_square(&mut self, x: u8, y: u8, color: BinaryColor) {
        Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new_equal(MARKER_SIZE as u32),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut self.display)
        .ok(); // buffered drawing only touches RAM
    }
}

impl MarkerCanvas for OledCanvas {
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn draw_square(&mut self, x: u8, y: u8) {
        self.fill_square(x, y, BinaryColor::On);
    }

    fn erase_square(&mut self, x: u8, y: u8) {
        self.fill_square(x, y, BinaryColor::Off);
    }

    fn draw_rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        Rectangle::with_corners(
            Point::new(x0 as i32, y0 as i32),
            Point::new(x1 as i32, y1 as i32),
        )
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut self.display)
        .ok();
    }

    /// Push the framebuffer over I2C. A failed transfer is logged and the next flush retries
    /// the whole buffer.
    fn flush(&mut self) {
        if self.display.flush().is_err() {
            self.flush_failures = self.flush_failures.wrapping_add(1);
            rprintln!("oled: flush failed ({} so far)", self.flush_failures);
        }
    }
}
