use std::time::{Duration, Instant};

/// Period of the round countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Handle for the once-per-period countdown task.
///
/// The engine owns at most one of these. Dropping the handle is the
/// cancellation: a disarmed countdown has nowhere to deliver ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    period: Duration,
    next_tick_at: Instant,
}

impl Countdown {
    pub fn arm(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_tick_at: now + period,
        }
    }

    /// Number of whole periods that elapsed since the last due tick.
    /// Consumes them, so the same tick is never reported twice.
    pub fn due(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_tick_at {
            ticks += 1;
            self.next_tick_at += self.period;
        }
        ticks
    }

    /// Time left until the next tick, for sizing the event loop's wait
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_tick_at.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_first_period() {
        let start = Instant::now();
        let mut countdown = Countdown::arm(start, TICK_PERIOD);

        assert_eq!(countdown.due(start), 0);
        assert_eq!(countdown.due(start + Duration::from_millis(999)), 0);
    }

    #[test]
    fn test_one_tick_per_period() {
        let start = Instant::now();
        let mut countdown = Countdown::arm(start, TICK_PERIOD);

        assert_eq!(countdown.due(start + Duration::from_secs(1)), 1);
        assert_eq!(countdown.due(start + Duration::from_millis(1500)), 0);
        assert_eq!(countdown.due(start + Duration::from_secs(2)), 1);
    }

    #[test]
    fn test_late_poll_reports_every_missed_tick_once() {
        let start = Instant::now();
        let mut countdown = Countdown::arm(start, TICK_PERIOD);

        assert_eq!(countdown.due(start + Duration::from_millis(3200)), 3);
        assert_eq!(countdown.due(start + Duration::from_millis(3900)), 0);
    }

    #[test]
    fn test_until_next() {
        let start = Instant::now();
        let countdown = Countdown::arm(start, TICK_PERIOD);

        assert_eq!(
            countdown.until_next(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(
            countdown.until_next(start + Duration::from_secs(5)),
            Duration::ZERO
        );
    }
}
