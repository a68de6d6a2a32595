//! Marquee UI — live text components on top of `marquee-engine`.
//!
//! Two components act on a retained [`DisplayTree`]: a [`ValueAnimator`] that
//! rewrites numeric text over a fixed duration, and a [`TimestampRefresher`]
//! that keeps timestamp elements showing a fresh relative age ("3 minutes
//! ago") and an absolute locale-formatted date/time. A [`Board`] wires both
//! to a clock and a 1 s refresh ticker.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use marquee_ui::prelude::*;
//!
//! let mut board = Board::new();
//! let card = board.tree_mut().insert(Node::new().id("uploads").timestamp_millis(ts));
//! board.tree_mut().insert_child(card, Node::new().role(SlotRole::Relative));
//! let counter = board.tree_mut().insert(Node::new().id("total"));
//!
//! board.animate_value("total", 0.0, 1287.0, Duration::from_millis(800))?;
//!
//! // In your host loop, once per frame:
//! board.frame();
//! ```
//!
//! [`DisplayTree`]: marquee_engine::tree::DisplayTree
//! [`ValueAnimator`]: animate::ValueAnimator
//! [`TimestampRefresher`]: timestamp::TimestampRefresher
//! [`Board`]: board::Board

pub mod animate;
pub mod board;
pub mod locale;
pub mod timestamp;

// Top-level re-export for the common entry point — `use marquee_ui::Board`.
pub use board::Board;

/// Everything you need to build a live board — import this in your app files.
pub mod prelude {
    pub use crate::animate::{UnknownElement, ValueAnimator};
    pub use crate::board::{Board, REFRESH_PERIOD};
    pub use crate::locale::LocalePrefs;
    pub use crate::timestamp::{TimestampRefresher, relative_label};

    // Re-export the engine primitives everyone needs.
    pub use marquee_engine::time::{Clock, ManualClock, MonotonicClock, Ticker};
    pub use marquee_engine::tree::{DisplayTree, Node, NodeId, SlotRole};
}
