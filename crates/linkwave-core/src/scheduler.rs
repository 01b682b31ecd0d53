//! Timer abstraction driving the tick loop.
//!
//! The animator starts and cancels a repeating interval; the host owns the
//! actual timer and calls `RingAnimator::tick` whenever it fires.

use std::time::Duration;

pub trait TickScheduler {
    /// Fire repeatedly every `interval`, replacing any previous schedule.
    fn schedule(&mut self, interval: Duration);
    /// Stop firing. Must be safe to call when nothing is scheduled.
    fn cancel(&mut self);
    fn is_scheduled(&self) -> bool;
}

/// Virtual-time scheduler. Time only moves when `advance` is called, which
/// makes tick counts fully deterministic.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    interval: Option<Duration>,
    pending: Duration,
    schedule_calls: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// How many times `schedule` has been called.
    pub fn schedule_calls(&self) -> usize {
        self.schedule_calls
    }

    /// Let `elapsed` pass and return how many ticks became due. Nothing is
    /// due while cancelled; leftover time carries into the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let Some(interval) = self.interval.filter(|i| !i.is_zero()) else {
            return 0;
        };
        let total = self.pending.as_nanos() + elapsed.as_nanos();
        let step = interval.as_nanos();
        // remainder is below one interval, which always fits in u64 nanos
        self.pending = Duration::from_nanos((total % step) as u64);
        u64::try_from(total / step).unwrap_or(u64::MAX)
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.pending = Duration::ZERO;
        self.schedule_calls += 1;
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.pending = Duration::ZERO;
    }

    fn is_scheduled(&self) -> bool {
        self.interval.is_some()
    }
}
