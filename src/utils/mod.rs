//! Utility functions

pub mod time;

pub use time::{Clock, FixedClock, SystemClock, month_bounds, month_display, month_key};
