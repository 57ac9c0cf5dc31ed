//! Widening a wrapping 32-bit microsecond counter to 64 bits.
//!
//! The uptime timer wraps every ~71 minutes. As long as it is read at least
//! once per wrap period (the 100ms loop does this), `Uptime` yields a
//! monotonic 64-bit count.

pub struct Uptime {
    last_raw: u32,
    high: u64,
}

impl Uptime {
    pub const fn new() -> Self {
        Uptime {
            last_raw: 0,
            high: 0,
        }
    }

    /// Fold a fresh counter reading into the running total.
    pub fn extend(&mut self, raw: u32) -> u64 {
        if raw < self.last_raw {
            self.high += 1 << 32;
        }
        self.last_raw = raw;
        self.high | raw as u64
    }
}

impl Default for Uptime {
    fn default() -> Self {
        Self::new()
    }
}
