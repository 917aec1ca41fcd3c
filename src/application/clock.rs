use std::time::Duration;

/// Whether generations are currently being produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Clock schedules generations while the simulation runs.
///
/// At most one tick is pending at a time. Its delay is fixed when it is
/// scheduled, so changing the interval only affects ticks scheduled later.
/// Stopping drops the pending tick.
#[derive(Clone, Debug)]
pub struct Clock {
    state: RunState,
    interval: Duration,
    min_interval: Duration,
    max_interval: Duration,
    pending: Option<Duration>,
}

impl Clock {
    pub fn new(interval: Duration, min_interval: Duration, max_interval: Duration) -> Self {
        Self {
            state: RunState::Stopped,
            interval: interval.clamp(min_interval, max_interval),
            min_interval,
            max_interval,
            pending: None,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// Delay applied to the next scheduled tick
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the pending tick fires, if one is scheduled
    pub const fn remaining(&self) -> Option<Duration> {
        self.pending
    }

    /// Enter Running. The first tick is due immediately.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = RunState::Running;
        self.pending = Some(Duration::ZERO);
    }

    /// Enter Stopped and cancel the pending tick
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.pending = None;
    }

    pub fn toggle(&mut self) -> RunState {
        match self.state {
            RunState::Stopped => self.start(),
            RunState::Running => self.stop(),
        }
        self.state
    }

    /// Lengthen (positive) or shorten (negative) the interval, clamped to the
    /// configured bounds. Returns the new interval.
    pub fn adjust_interval(&mut self, delta_ms: i64) -> Duration {
        let current = self.interval.as_millis() as i64;
        let adjusted = Duration::from_millis(current.saturating_add(delta_ms).max(0) as u64);
        self.interval = adjusted.clamp(self.min_interval, self.max_interval);
        self.interval
    }

    /// Let `elapsed` pass. Returns true when the pending tick fires, in which
    /// case the next one is scheduled with the interval in effect right now.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(remaining) = self.pending else {
            return false;
        };

        if elapsed >= remaining {
            self.pending = Some(self.interval);
            true
        } else {
            self.pending = Some(remaining - elapsed);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn clock() -> Clock {
        Clock::new(ms(1000), ms(100), ms(5000))
    }

    #[test]
    fn test_starts_stopped() {
        let mut clock = clock();
        assert_eq!(clock.state(), RunState::Stopped);
        assert_eq!(clock.remaining(), None);
        assert!(!clock.advance(ms(10_000)));
    }

    #[test]
    fn test_first_tick_is_immediate() {
        let mut clock = clock();
        clock.start();
        assert!(clock.advance(Duration::ZERO));
        assert_eq!(clock.remaining(), Some(ms(1000)));
    }

    #[test]
    fn test_ticks_follow_interval() {
        let mut clock = clock();
        clock.start();
        assert!(clock.advance(ms(16)));
        assert!(!clock.advance(ms(600)));
        assert!(!clock.advance(ms(399)));
        assert!(clock.advance(ms(1)));
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut clock = clock();
        clock.start();
        assert!(clock.advance(ms(0)));
        clock.stop();
        assert_eq!(clock.remaining(), None);
        assert!(!clock.advance(ms(5000)));
    }

    #[test]
    fn test_restart_fires_immediately_again() {
        let mut clock = clock();
        assert_eq!(clock.toggle(), RunState::Running);
        assert!(clock.advance(ms(0)));
        assert_eq!(clock.toggle(), RunState::Stopped);
        assert_eq!(clock.toggle(), RunState::Running);
        assert!(clock.advance(ms(0)));
    }

    #[test]
    fn test_start_while_running_keeps_schedule() {
        let mut clock = clock();
        clock.start();
        assert!(clock.advance(ms(0)));
        clock.start();
        assert_eq!(clock.remaining(), Some(ms(1000)));
    }

    #[test]
    fn test_speed_change_applies_to_next_schedule() {
        let mut clock = clock();
        clock.start();
        assert!(clock.advance(ms(0)));

        // Already scheduled 1000ms tick is not shortened
        clock.adjust_interval(-500);
        assert!(!clock.advance(ms(600)));
        assert!(clock.advance(ms(400)));

        // The following one uses the new interval
        assert_eq!(clock.remaining(), Some(ms(500)));
    }

    #[test]
    fn test_interval_is_clamped() {
        let mut clock = clock();
        assert_eq!(clock.adjust_interval(-10_000), ms(100));
        assert_eq!(clock.adjust_interval(-100), ms(100));
        assert_eq!(clock.adjust_interval(100_000), ms(5000));
        assert_eq!(clock.adjust_interval(100), ms(5000));
        assert_eq!(clock.adjust_interval(-100), ms(4900));
    }
}
