//! Square marker that follows the joystick across a fixed display grid.

use crate::duty_cycle::DutyCycles;
use crate::peripheral::MarkerCanvas;

/// `[lo, hi)` percentage range and the coordinate it selects.
pub type Bucket = (f32, f32, u8);

/// Vertical axis: six rows, top of the screen at full deflection.
pub const Y_BUCKETS: [Bucket; 6] = [
    (0.0, 16.6, 54),
    (16.6, 33.2, 44),
    (33.2, 49.8, 34),
    (49.8, 66.4, 24),
    (66.4, 83.0, 14),
    (83.0, 100.0, 1),
];

/// Horizontal axis: nine columns. [80, 90) has no column and leaves the
/// marker where it was.
pub const X_BUCKETS: [Bucket; 9] = [
    (0.0, 10.0, 1),
    (10.0, 20.0, 14),
    (20.0, 30.0, 27),
    (30.0, 40.0, 40),
    (40.0, 50.0, 53),
    (50.0, 60.0, 66),
    (60.0, 70.0, 79),
    (70.0, 80.0, 91),
    (90.0, 100.0, 118),
];

/// Coordinate for `pct`, or `None` when no bucket covers it.
pub fn lookup(table: &[Bucket], pct: f32) -> Option<u8> {
    table
        .iter()
        .find(|(lo, hi, _)| pct >= *lo && pct < *hi)
        .map(|&(_, _, coord)| coord)
}

/// Top-left corner of the marker, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerPosition {
    pub x: u8,
    pub y: u8,
}

/// Column and row the joystick selects when it is at rest.
pub const REST_POSITION: MarkerPosition = MarkerPosition { x: 66, y: 24 };

pub struct MarkerRenderer {
    position: MarkerPosition,
}

impl MarkerRenderer {
    pub const fn new() -> Self {
        MarkerRenderer {
            position: REST_POSITION,
        }
    }

    pub fn position(&self) -> MarkerPosition {
        self.position
    }

    /// New position for `duty`. An axis that matches no bucket keeps its
    /// previous coordinate.
    pub fn locate(&self, duty: DutyCycles) -> MarkerPosition {
        MarkerPosition {
            x: lookup(&X_BUCKETS, duty.x).unwrap_or(self.position.x),
            y: lookup(&Y_BUCKETS, duty.y).unwrap_or(self.position.y),
        }
    }

    /// Erase the old marker, draw the new one and flush.
    ///
    /// Runs every cycle whether or not the overlay border is shown.
    pub fn render<C: MarkerCanvas>(&mut self, duty: DutyCycles, canvas: &mut C) {
        canvas.erase_square(self.position.x, self.position.y);
        self.position = self.locate(duty);
        canvas.draw_square(self.position.x, self.position.y);
        canvas.flush();
    }
}

impl Default for MarkerRenderer {
    fn default() -> Self {
        Self::new()
    }
}
