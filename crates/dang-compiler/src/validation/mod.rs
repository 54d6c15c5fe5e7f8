//! Validators for interval and threshold rule payloads
//!
//! Both are pure functions: they take the payload's labels and either prove
//! them well-formed or return the first problem found.

pub mod interval;
pub mod threshold;

pub use interval::{validate_intervals, Interval};
pub use threshold::{validate_threshold, Threshold};
