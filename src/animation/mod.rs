//! Transition scheduler for moving tiles between layouts.
//!
//! A transition is a flat list of [`Tween`]s, two per tile, advanced
//! together once per tick by [`TransitionScheduler::update`]. Completed
//! tweens are removed from the list; starting a new transition drops the
//! whole list.

mod scheduler;
mod tween;

pub use scheduler::{TickOutcome, TransitionScheduler};
pub use tween::{Channel, Tween};
