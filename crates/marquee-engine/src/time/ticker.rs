use std::time::{Duration, Instant};

/// Fixed-cadence repeating timer, polled by the host loop.
///
/// A `Ticker` does not spawn anything; the owner calls [`poll`] once per
/// frame and runs its job whenever `poll` returns `true`. The first poll
/// always fires so eager work (e.g. an initial refresh) happens without a
/// full period of delay.
///
/// Missed periods are coalesced: if the host stalls for several periods, the
/// next poll fires once and the cadence re-anchors past `now`, rather than
/// bursting to catch up.
///
/// Unlike the underlying job, the ticker itself has a lifecycle: [`stop`]
/// silences it permanently, [`reset`] re-arms the eager first fire.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    /// `None` until the first poll; the first poll fires eagerly.
    next: Option<Instant>,
    stopped: bool,
}

impl Ticker {
    /// Creates a ticker with the given cadence.
    ///
    /// A zero period would fire on every poll; debug builds reject it.
    pub fn new(period: Duration) -> Self {
        debug_assert!(period > Duration::ZERO, "ticker period must be positive");
        Self {
            period,
            next: None,
            stopped: false,
        }
    }

    /// Cadence this ticker was built with.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns `true` when the job is due.
    ///
    /// Fires on the first call, then once per elapsed period. `now` must come
    /// from the same monotonic clock across calls.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.stopped {
            return false;
        }

        match self.next {
            None => {
                self.next = Some(now + self.period);
                true
            }
            Some(due) if now >= due => {
                // Coalesce: skip any periods that elapsed while stalled.
                let mut due = due + self.period;
                while due <= now {
                    due += self.period;
                }
                self.next = Some(due);
                true
            }
            Some(_) => false,
        }
    }

    /// Permanently silences the ticker. Subsequent polls return `false`.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Re-arms the ticker: the next poll fires eagerly again.
    ///
    /// Also clears a previous [`stop`].
    pub fn reset(&mut self) {
        self.next = None;
        self.stopped = false;
    }
}
