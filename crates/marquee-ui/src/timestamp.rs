use chrono::{DateTime, Local, TimeZone, Utc};
use timeago::{Language, TimeUnit};

use marquee_engine::tree::{DisplayTree, NodeId, SlotRole};

use crate::locale::LocalePrefs;

// ── relative labels ───────────────────────────────────────────────────────

/// Age tiers, first match wins. Upper bounds are exclusive; month and year
/// are fixed at 30 and 365 days, not calendar-accurate.
const TIERS: &[(i64, i64, TimeUnit)] = &[
    (60, 1, TimeUnit::Seconds),
    (3_600, 60, TimeUnit::Minutes),
    (86_400, 3_600, TimeUnit::Hours),
    (604_800, 86_400, TimeUnit::Days),
    (2_592_000, 604_800, TimeUnit::Weeks),
    (31_536_000, 2_592_000, TimeUnit::Months),
];

const YEAR_SECONDS: i64 = 31_536_000;

/// Renders the age of `then` as a relative phrase ("3 minutes ago").
///
/// The age in whole seconds is bucketed into the largest tier it fits and
/// divided down to a whole unit count. A zero-second age — and any future
/// instant, which clamps to zero — renders the language's "now" phrase.
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>, language: &dyn Language) -> String {
    let seconds = (now - then).num_seconds().max(0);

    let (value, unit) = TIERS
        .iter()
        .find(|&&(limit, _, _)| seconds < limit)
        .map(|&(_, divisor, unit)| (seconds / divisor, unit))
        .unwrap_or((seconds / YEAR_SECONDS, TimeUnit::Years));

    if value == 0 {
        // Only reachable in the seconds tier.
        return language.too_low().to_string();
    }

    let value = value as u64;
    format!("{} {} {}", value, language.get_word(unit, value), language.ago())
}

// ── refresher ─────────────────────────────────────────────────────────────

/// Rewrites timestamp elements across a whole tree.
///
/// Each node carrying a timestamp attribute gets up to two writes per pass:
/// its `Relative` slot receives [`relative_label`] output and its `Fixed`
/// slot receives the locale-formatted absolute date/time. Nodes missing a
/// slot are simply left alone for that slot.
///
/// The refresher holds no tree state; a pass reads attributes and writes
/// text, nothing more. Cadence is the caller's concern (see
/// [`Board`](crate::board::Board), which runs a pass eagerly and then once
/// per second).
pub struct TimestampRefresher {
    locale: LocalePrefs,
}

impl TimestampRefresher {
    pub fn new(locale: LocalePrefs) -> Self {
        Self { locale }
    }

    /// Runs one refresh pass over every timestamped node, in document order.
    ///
    /// Malformed or out-of-range attributes are logged and skipped for this
    /// pass; the next pass re-attempts them. Returns the number of nodes
    /// whose slots were refreshed.
    pub fn refresh_all(&self, tree: &mut DisplayTree, now: DateTime<Utc>) -> usize {
        let entries: Vec<(NodeId, String)> = tree
            .timestamped()
            .map(|id| (id, tree.timestamp(id).unwrap_or_default().to_string()))
            .collect();

        let mut refreshed = 0;
        for (id, raw) in entries {
            let Ok(millis) = raw.trim().parse::<i64>() else {
                log::warn!("unparsable timestamp attribute '{raw}', skipping");
                continue;
            };
            let Some(then) = Utc.timestamp_millis_opt(millis).single() else {
                log::warn!("timestamp {millis} ms is out of range, skipping");
                continue;
            };

            if let Some(slot) = tree.slot(id, SlotRole::Relative) {
                tree.set_text(slot, relative_label(then, now, self.locale.language()));
            }
            if let Some(slot) = tree.slot(id, SlotRole::Fixed) {
                let local = then.with_timezone(&Local);
                tree.set_text(slot, self.locale.format_absolute(local));
            }
            refreshed += 1;
        }
        refreshed
    }
}

impl Default for TimestampRefresher {
    fn default() -> Self {
        Self::new(LocalePrefs::new())
    }
}
