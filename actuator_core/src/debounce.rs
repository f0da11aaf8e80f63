//! Debounce filter for a single binary input.
//!
//! Converts a noisy raw sample stream into a stable logical state. Stability
//! is judged against elapsed time since the last observed *raw* transition,
//! not since the last stable value, so `update` must be called every control
//! cycle even when the input is unchanged.

/// Debounced binary input with consumer-paced edge detection.
///
/// Timestamps are wrapping `u32` milliseconds from the host's monotonic tick
/// counter; differences are taken with `wrapping_sub` so a rollover inside
/// the debounce window neither reports "stable forever" nor "never stable".
///
/// The filter cannot fail. If it is never updated it degrades to returning
/// stale state.
#[derive(Debug, Clone)]
pub struct Debounce {
    /// Raw level meaning "pressed" (true = high).
    active_high: bool,
    /// Minimum stable duration before a raw transition is accepted.
    debounce_ms: u32,
    /// Most recent raw sample.
    raw_last: bool,
    /// Currently accepted debounced level.
    stable: bool,
    /// Stable level as of the previous edge query.
    stable_prev: bool,
    /// Timestamp of the last observed raw transition.
    last_change_ms: u32,
}

impl Debounce {
    /// New filter at the released baseline for both raw and stable state.
    pub fn new(active_high: bool, debounce_ms: u32) -> Self {
        let released = !active_high;
        Self {
            active_high,
            debounce_ms,
            raw_last: released,
            stable: released,
            stable_prev: released,
            last_change_ms: 0,
        }
    }

    /// Feed one raw sample. Call this every cycle, unchanged input included.
    pub fn update(&mut self, raw: bool, now_ms: u32) {
        // A raw transition restarts the debounce window.
        if raw != self.raw_last {
            self.last_change_ms = now_ms;
            self.raw_last = raw;
        }

        if now_ms.wrapping_sub(self.last_change_ms) >= self.debounce_ms {
            self.stable = self.raw_last;
        }
    }

    /// Whether the debounced level is the active level. Pure query.
    pub fn is_pressed(&self) -> bool {
        self.stable == self.active_high
    }

    /// Rising-edge query: true exactly once per accepted press.
    ///
    /// Compares the current pressed state against the memorized previous one
    /// and then overwrites that memory. Single consumer only: interleaving
    /// `just_pressed`/`just_released` calls from multiple call sites corrupts
    /// edge detection for all of them. Multi-consumer code should snapshot
    /// `is_pressed` instead.
    pub fn just_pressed(&mut self) -> bool {
        let was_pressed = self.stable_prev == self.active_high;
        let pressed = self.is_pressed();
        self.stable_prev = self.stable;
        pressed && !was_pressed
    }

    /// Falling-edge query: true exactly once per accepted release.
    ///
    /// Shares the previous-state memory with `just_pressed`; the same
    /// single-consumer restriction applies.
    pub fn just_released(&mut self) -> bool {
        let was_pressed = self.stable_prev == self.active_high;
        let pressed = self.is_pressed();
        self.stable_prev = self.stable;
        !pressed && was_pressed
    }
}

#[cfg(test)]
mod wrap_tests {
    use super::Debounce;

    #[test]
    fn accepts_transition_across_clock_rollover() {
        let mut sw = Debounce::new(true, 10);
        // Raw goes high just before the 32-bit tick counter wraps.
        sw.update(true, u32::MAX - 3);
        sw.update(true, u32::MAX);
        assert!(!sw.is_pressed(), "only 3 ms elapsed");
        // 4 ms later the counter has wrapped to 0; 7 ms total, still early.
        sw.update(true, 0);
        assert!(!sw.is_pressed());
        // 10 ms after the transition (wrapped), the press is accepted.
        sw.update(true, 6);
        assert!(sw.is_pressed());
    }

    #[test]
    fn repeated_unchanged_samples_do_not_restart_the_window() {
        let mut sw = Debounce::new(true, 10);
        sw.update(true, 100);
        for t in 101..109 {
            sw.update(true, t);
            assert!(!sw.is_pressed(), "flipped early at t={t}");
        }
        sw.update(true, 110);
        assert!(sw.is_pressed());
    }
}
