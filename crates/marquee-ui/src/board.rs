use std::time::Duration;

use chrono::Utc;

use marquee_engine::time::{Clock, MonotonicClock, Ticker};
use marquee_engine::tree::DisplayTree;

use crate::animate::{UnknownElement, ValueAnimator};
use crate::locale::LocalePrefs;
use crate::timestamp::TimestampRefresher;

/// Cadence at which timestamp elements are rewritten.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(1000);

/// Top-level coordinator that owns the tree and drives both components.
///
/// The host loop calls [`frame`] once per frame; everything else is
/// registration. A frame runs any due timestamp refresh first, then advances
/// animations — both complete synchronously, so no two pieces of work ever
/// overlap.
///
/// The board is generic over its [`Clock`] so tests can drive it with a
/// `ManualClock`; production code uses [`Board::new`].
///
/// # Example
///
/// ```rust,ignore
/// let mut board = Board::new();
/// board.tree_mut().insert(Node::new().id("total").text("0"));
/// board.animate_value("total", 0.0, 1287.0, Duration::from_millis(800))?;
///
/// loop {
///     board.frame();
///     std::thread::sleep(Duration::from_millis(16));
/// }
/// ```
///
/// [`frame`]: Board::frame
pub struct Board<C: Clock = MonotonicClock> {
    tree: DisplayTree,
    clock: C,
    animator: ValueAnimator,
    refresher: TimestampRefresher,
    refresh_ticker: Ticker,
}

impl Board<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Board<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Board<C> {
    /// Builds a board driven by the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tree: DisplayTree::new(),
            clock,
            animator: ValueAnimator::new(),
            refresher: TimestampRefresher::default(),
            refresh_ticker: Ticker::new(REFRESH_PERIOD),
        }
    }

    /// Replaces the locale preferences used for timestamp formatting.
    pub fn locale(mut self, prefs: LocalePrefs) -> Self {
        self.refresher = TimestampRefresher::new(prefs);
        self
    }

    pub fn tree(&self) -> &DisplayTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut DisplayTree {
        &mut self.tree
    }

    // ── animation requests ────────────────────────────────────────────────

    /// Animates `id`'s text from `start` to `end` over `duration` as a
    /// rounded integer. Fails fast when `id` does not resolve.
    pub fn animate_value(
        &mut self,
        id: &str,
        start: f64,
        end: f64,
        duration: Duration,
    ) -> Result<(), UnknownElement> {
        let now = self.clock.now();
        self.animator.animate_value(&self.tree, id, start, end, duration, now)
    }

    /// Like [`animate_value`], rendered to two decimal places with a
    /// trailing `%`.
    ///
    /// [`animate_value`]: Board::animate_value
    pub fn animate_percentage_value(
        &mut self,
        id: &str,
        start: f64,
        end: f64,
        duration: Duration,
    ) -> Result<(), UnknownElement> {
        let now = self.clock.now();
        self.animator
            .animate_percentage_value(&self.tree, id, start, end, duration, now)
    }

    /// `true` while any animation is still running.
    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    // ── frame loop ────────────────────────────────────────────────────────

    /// Runs one cooperative frame: a timestamp refresh when due (eagerly on
    /// the very first frame, then once per [`REFRESH_PERIOD`]), followed by
    /// one animation step.
    pub fn frame(&mut self) {
        let now = self.clock.now();

        if self.refresh_ticker.poll(now) {
            let refreshed = self.refresher.refresh_all(&mut self.tree, Utc::now());
            log::trace!("refreshed {refreshed} timestamp element(s)");
        }

        self.animator.on_frame(&mut self.tree, now);
    }

    /// Permanently stops the timestamp refresh cadence.
    ///
    /// Animations are unaffected. [`restart_refresh`] re-arms the cadence,
    /// starting with an eager pass on the next frame.
    ///
    /// [`restart_refresh`]: Board::restart_refresh
    pub fn stop_refresh(&mut self) {
        self.refresh_ticker.stop();
    }

    pub fn restart_refresh(&mut self) {
        self.refresh_ticker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as Age;
    use marquee_engine::time::ManualClock;
    use marquee_engine::tree::{Node, SlotRole};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    // ── animation through the board ───────────────────────────────────────

    #[test]
    fn animation_runs_to_completion() {
        let clock = ManualClock::new();
        let mut board = Board::with_clock(clock.clone());
        let node = board.tree_mut().insert(Node::new().id("count").text("0"));

        board.animate_value("count", 0.0, 100.0, ms(100)).unwrap();
        assert!(board.is_animating());

        clock.advance(ms(50));
        board.frame();
        assert_eq!(board.tree().text(node), "50");

        clock.advance(ms(100));
        board.frame();
        assert_eq!(board.tree().text(node), "100");
        assert!(!board.is_animating());
    }

    #[test]
    fn animation_request_for_missing_element_errors() {
        let mut board = Board::with_clock(ManualClock::new());
        let err = board.animate_value("ghost", 0.0, 1.0, ms(10)).unwrap_err();
        assert_eq!(err.id, "ghost");
    }

    // ── refresh through the board ─────────────────────────────────────────

    #[test]
    fn first_frame_refreshes_eagerly() {
        let mut board = Board::with_clock(ManualClock::new());
        let then = Utc::now() - Age::seconds(125);
        let card = board.tree_mut().insert(Node::new().timestamp_millis(then.timestamp_millis()));
        let rel = board
            .tree_mut()
            .insert_child(card, Node::new().role(SlotRole::Relative));

        board.frame();
        assert_eq!(board.tree().text(rel), "2 minutes ago");
    }

    #[test]
    fn stop_refresh_halts_the_cadence() {
        let clock = ManualClock::new();
        let mut board = Board::with_clock(clock.clone());
        board.frame(); // consume the eager pass
        board.stop_refresh();

        let then = Utc::now() - Age::seconds(300);
        let card = board.tree_mut().insert(Node::new().timestamp_millis(then.timestamp_millis()));
        let rel = board
            .tree_mut()
            .insert_child(card, Node::new().role(SlotRole::Relative));

        clock.advance(ms(5_000));
        board.frame();
        assert_eq!(board.tree().text(rel), "");

        board.restart_refresh();
        board.frame();
        assert_eq!(board.tree().text(rel), "5 minutes ago");
    }
}
