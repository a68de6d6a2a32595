//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to any host
//! loop. Intended usage:
//! - one `Clock` per board (production code uses [`MonotonicClock`], tests
//!   drive a [`ManualClock`] by hand)
//! - one [`Ticker`] per repeating job, polled once per frame

mod clock;
mod ticker;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use ticker::Ticker;
