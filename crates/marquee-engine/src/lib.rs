//! Marquee engine crate.
//!
//! This crate owns the substrate pieces used by higher layers: the retained
//! display tree, monotonic clocks and tickers, and logging setup.

pub mod time;
pub mod tree;

pub mod logging;
