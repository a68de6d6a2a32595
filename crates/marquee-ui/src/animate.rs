use std::fmt;
use std::time::{Duration, Instant};

use marquee_engine::tree::{DisplayTree, NodeId};

// ── errors ────────────────────────────────────────────────────────────────

/// The animation target could not be found at request time.
///
/// Lookup happens before anything is scheduled, so a failed request leaves
/// the animator untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElement {
    pub id: String,
}

impl fmt::Display for UnknownElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element with id '{}' in the display tree", self.id)
    }
}

impl std::error::Error for UnknownElement {}

// ── animations ────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ValueStyle {
    /// Rounded to the nearest whole number.
    Integer,
    /// Two decimal places with a trailing `%`.
    Percentage,
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    target: NodeId,
    start: f64,
    end: f64,
    duration: Duration,
    started: Instant,
    style: ValueStyle,
}

impl ActiveAnimation {
    /// Interpolated display text at `elapsed` (already clamped to duration).
    fn render(&self, elapsed: Duration) -> String {
        let current = if self.duration.is_zero() {
            // Degenerate request: jump straight to the end value.
            self.end
        } else {
            let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.start + (self.end - self.start) * t
        };

        match self.style {
            ValueStyle::Integer => format!("{}", current.round() as i64),
            ValueStyle::Percentage => format!("{current:.2}%"),
        }
    }
}

/// Animates numeric text content over fixed durations.
///
/// A request records its start instant; the host loop then calls
/// [`on_frame`] once per frame, which linearly interpolates every active
/// animation and writes the result into its target's text. An animation's
/// final write happens with elapsed time clamped to the duration, so the
/// last value shown is exactly the requested end value.
///
/// Overlapping animations on the same element are allowed and race:
/// animations advance in start order, so the most recently started one wins
/// each frame's write. There is no cancellation.
///
/// [`on_frame`]: ValueAnimator::on_frame
#[derive(Debug, Default)]
pub struct ValueAnimator {
    active: Vec<ActiveAnimation>,
}

impl ValueAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animates `id`'s text from `start` to `end` over `duration`, shown as
    /// a rounded integer.
    ///
    /// `now` anchors the animation; pass the same clock's instants to
    /// [`on_frame`].
    ///
    /// [`on_frame`]: ValueAnimator::on_frame
    pub fn animate_value(
        &mut self,
        tree: &DisplayTree,
        id: &str,
        start: f64,
        end: f64,
        duration: Duration,
        now: Instant,
    ) -> Result<(), UnknownElement> {
        self.begin(tree, id, start, end, duration, now, ValueStyle::Integer)
    }

    /// Like [`animate_value`], but shown to two decimal places with a
    /// trailing `%`.
    ///
    /// [`animate_value`]: ValueAnimator::animate_value
    pub fn animate_percentage_value(
        &mut self,
        tree: &DisplayTree,
        id: &str,
        start: f64,
        end: f64,
        duration: Duration,
        now: Instant,
    ) -> Result<(), UnknownElement> {
        self.begin(tree, id, start, end, duration, now, ValueStyle::Percentage)
    }

    fn begin(
        &mut self,
        tree: &DisplayTree,
        id: &str,
        start: f64,
        end: f64,
        duration: Duration,
        now: Instant,
        style: ValueStyle,
    ) -> Result<(), UnknownElement> {
        let target = tree.by_id(id).ok_or_else(|| UnknownElement { id: id.to_string() })?;
        log::debug!("animating '{id}': {start} -> {end} over {duration:?}");
        self.active.push(ActiveAnimation {
            target,
            start,
            end,
            duration,
            started: now,
            style,
        });
        Ok(())
    }

    /// Advances every active animation to `now` and writes its text.
    ///
    /// Completed animations perform their final (exact end value) write on
    /// the frame they finish and are then dropped. Returns the number of
    /// animations still running.
    pub fn on_frame(&mut self, tree: &mut DisplayTree, now: Instant) -> usize {
        let mut i = 0;
        while i < self.active.len() {
            let anim = &self.active[i];
            let elapsed = now.saturating_duration_since(anim.started).min(anim.duration);
            tree.set_text(anim.target, anim.render(elapsed));

            if elapsed >= anim.duration {
                // `remove` keeps start order for the survivors.
                self.active.remove(i);
            } else {
                i += 1;
            }
        }
        self.active.len()
    }

    /// `true` when no animations are active.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_engine::tree::Node;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn tree_with(id: &str) -> DisplayTree {
        let mut tree = DisplayTree::new();
        tree.insert(Node::new().id(id));
        tree
    }

    // ── request validation ────────────────────────────────────────────────

    #[test]
    fn unknown_target_fails_fast() {
        let tree = tree_with("present");
        let mut animator = ValueAnimator::new();
        let err = animator
            .animate_value(&tree, "absent", 0.0, 10.0, ms(100), Instant::now())
            .unwrap_err();
        assert_eq!(err.id, "absent");
        assert!(animator.is_idle());
    }

    // ── integer style ─────────────────────────────────────────────────────

    #[test]
    fn completes_at_exactly_the_end_value() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 0.0, 100.0, ms(100), t0).unwrap();
        let remaining = animator.on_frame(&mut tree, t0 + ms(150));
        assert_eq!(tree.text(node), "100");
        assert_eq!(remaining, 0);
        assert!(animator.is_idle());
    }

    #[test]
    fn final_value_is_rounded_end() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 0.0, 99.6, ms(50), t0).unwrap();
        animator.on_frame(&mut tree, t0 + ms(50));
        assert_eq!(tree.text(node), "100");
    }

    #[test]
    fn interpolates_linearly_mid_flight() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 0.0, 100.0, ms(100), t0).unwrap();
        let remaining = animator.on_frame(&mut tree, t0 + ms(50));
        assert_eq!(tree.text(node), "50");
        assert_eq!(remaining, 1);
    }

    #[test]
    fn ascending_animation_writes_never_decrease() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 3.0, 250.0, ms(100), t0).unwrap();
        let mut last = i64::MIN;
        for frame in 0..=12 {
            animator.on_frame(&mut tree, t0 + ms(frame * 10));
            let shown: i64 = tree.text(node).parse().unwrap();
            assert!(shown >= last, "write went backwards: {last} -> {shown}");
            last = shown;
        }
        assert_eq!(last, 250);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 5.0, 42.0, ms(0), t0).unwrap();
        let remaining = animator.on_frame(&mut tree, t0);
        assert_eq!(tree.text(node), "42");
        assert_eq!(remaining, 0);
    }

    // ── percentage style ──────────────────────────────────────────────────

    #[test]
    fn percentage_final_write_has_two_decimals_and_suffix() {
        let mut tree = tree_with("p");
        let node = tree.by_id("p").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator
            .animate_percentage_value(&tree, "p", 0.0, 42.5, ms(100), t0)
            .unwrap();
        animator.on_frame(&mut tree, t0 + ms(100));
        assert_eq!(tree.text(node), "42.50%");
    }

    #[test]
    fn percentage_mid_flight_keeps_two_decimals() {
        let mut tree = tree_with("p");
        let node = tree.by_id("p").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator
            .animate_percentage_value(&tree, "p", 0.0, 100.0, ms(100), t0)
            .unwrap();
        animator.on_frame(&mut tree, t0 + ms(25));
        assert_eq!(tree.text(node), "25.00%");
    }

    // ── overlapping animations ────────────────────────────────────────────

    #[test]
    fn later_animation_on_same_target_wins_each_frame() {
        let mut tree = tree_with("n");
        let node = tree.by_id("n").unwrap();
        let mut animator = ValueAnimator::new();
        let t0 = Instant::now();

        animator.animate_value(&tree, "n", 0.0, 100.0, ms(100), t0).unwrap();
        animator.animate_value(&tree, "n", 0.0, 7.0, ms(100), t0 + ms(10)).unwrap();

        // Both still active: the later-started request writes last.
        animator.on_frame(&mut tree, t0 + ms(60));
        assert_eq!(tree.text(node), "4"); // 7 * (50/100), rounded

        // After both complete, the later one's end value is what remains.
        animator.on_frame(&mut tree, t0 + ms(500));
        assert_eq!(tree.text(node), "7");
        assert!(animator.is_idle());
    }
}
