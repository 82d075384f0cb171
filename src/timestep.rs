use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// The host measures wall-clock time between frames and feeds it in; this
/// type answers how many whole simulation ticks are due, carrying the
/// remainder forward so tick rate stays honest regardless of frame pacing.
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    interval: Duration,
    accumulated: Duration,
}

impl TickAccumulator {
    /// Creates an accumulator firing once per `interval`.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "tick interval must be non-zero");

        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Adds `elapsed` and returns how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            due += 1;
        }
        due
    }

    /// Discards any partially accumulated time.
    ///
    /// Used when leaving a pause so the dead time does not burst-fire ticks.
    pub fn rewind(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TickAccumulator;

    #[test]
    fn short_frames_accumulate_into_one_tick() {
        let mut acc = TickAccumulator::new(Duration::from_millis(100));

        assert_eq!(acc.advance(Duration::from_millis(40)), 0);
        assert_eq!(acc.advance(Duration::from_millis(40)), 0);
        assert_eq!(acc.advance(Duration::from_millis(40)), 1);
    }

    #[test]
    fn long_frame_yields_multiple_ticks_and_keeps_remainder() {
        let mut acc = TickAccumulator::new(Duration::from_millis(100));

        assert_eq!(acc.advance(Duration::from_millis(250)), 2);
        // 50 ms remainder carries over.
        assert_eq!(acc.advance(Duration::from_millis(50)), 1);
    }

    #[test]
    fn rewind_discards_partial_time() {
        let mut acc = TickAccumulator::new(Duration::from_millis(100));

        assert_eq!(acc.advance(Duration::from_millis(90)), 0);
        acc.rewind();
        assert_eq!(acc.advance(Duration::from_millis(90)), 0);
        assert_eq!(acc.advance(Duration::from_millis(10)), 1);
    }
}
