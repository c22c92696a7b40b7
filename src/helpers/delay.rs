use std::thread;
use std::time::Duration;

use embedded_hal::blocking::delay::DelayUs;

/// For pins that toggle slowly enough on their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay {}

impl DelayUs<u16> for NoDelay {
    fn delay_us(&mut self, _us: u16) {}
}

/// Sleeps the current thread; meant for hosts where a pulse delay is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleepDelay {}

impl DelayUs<u16> for ThreadSleepDelay {
    fn delay_us(&mut self, us: u16) {
        if us > 0 {
            thread::sleep(Duration::from_micros(u64::from(us)));
        }
    }
}
