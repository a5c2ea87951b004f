//! Shared utilities.
//!
//! Easing curves for camera transitions and smoothed frame timing for the
//! render loop.

pub mod easing;
pub mod frame_timing;
