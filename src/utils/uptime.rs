use microbit::hal::{
    Timer,
    timer::{Instance, Periodic},
};

use joystick_marker::clock::Uptime;
use joystick_marker::peripheral::MonotonicClock;

/// Free-running 1MHz timer used as the debounce clock.
///
/// The raw counter wraps every ~71 minutes; `now_micros` must be called at
/// least that often, which the foreground loop does every cycle.
pub struct UptimeClock<T: Instance> {
    timer: Timer<T, Periodic>,
    uptime: Uptime,
}

impl<T: Instance> UptimeClock<T> {
    pub fn new(instance: T) -> Self {
        let mut timer = Timer::periodic(instance);
        timer.start(u32::MAX);

        UptimeClock {
            timer,
            uptime: Uptime::new(),
        }
    }
}

impl<T: Instance> MonotonicClock for UptimeClock<T> {
    fn now_micros(&mut self) -> u64 {
        self.uptime.extend(self.timer.read())
    }
}
