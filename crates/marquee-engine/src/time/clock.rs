use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time.
///
/// Higher layers never call `Instant::now()` directly; they read the clock
/// they were handed. This keeps frame-driven code deterministic under test.
pub trait Clock {
    /// Current monotonic instant.
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now()`.
#[derive(Debug, Default, Copy, Clone)]
pub struct MonotonicClock;

impl MonotonicClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-advanced clock for tests.
///
/// Cloning yields a handle to the same underlying time, so a test can keep
/// one handle while the system under test owns another:
///
/// ```rust,ignore
/// let clock = ManualClock::new();
/// let board = Board::with_clock(clock.clone());
/// clock.advance(Duration::from_millis(16));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    base: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward. Time never goes backwards.
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }
}
