//! Shared utilities: easing curves and the per-tick frame clock.

pub mod easing;
pub mod frame_timing;
