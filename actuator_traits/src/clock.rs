use std::thread;
use std::time::Duration;

/// Monotonic millisecond clock abstraction for host control loops.
///
/// - now_ms(): milliseconds since an arbitrary origin, wrapping at `u32::MAX`
///   like a 32-bit hardware tick counter
/// - sleep(): sleeps for the provided duration (implementations may simulate)
///
/// Consumers must take differences with `wrapping_sub` so a single rollover
/// is handled transparently.
pub trait Clock {
    fn now_ms(&self) -> u32;
    fn sleep(&self, d: Duration);
}

/// Default, real-time monotonic clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    #[inline]
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now_ms(&self) -> u32 {
        // Truncation is the wrap: the low 32 bits of the millisecond count.
        self.origin.elapsed().as_millis() as u32
    }

    #[inline]
    fn sleep(&self, d: Duration) {
        if d.is_zero() {
            return;
        }
        thread::sleep(d);
    }
}


#[cfg(test)]
mod tests {
    use super::test_clock::ManualClock;
    use super::*;

    #[test]
    fn manual_clock_wraps_through_rollover() {
        let clk = ManualClock::new();
        clk.set(u32::MAX - 5);
        let before = clk.now_ms();
        clk.advance(10);
        let after = clk.now_ms();
        assert_eq!(after, 4);
        assert_eq!(after.wrapping_sub(before), 10);
    }

    #[test]
    fn monotonic_clock_does_not_go_backwards() {
        let clk = MonotonicClock::new();
        let a = clk.now_ms();
        clk.sleep(Duration::from_millis(2));
        let b = clk.now_ms();
        assert!(b.wrapping_sub(a) >= 2);
    }
}
