//! Transition scheduler: one batch of per-tile tweens advanced per tick.

use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};

use super::tween::{Channel, Tween};
use crate::error::TilescapeError;
use crate::layout::Pose;
use crate::util::easing::EasingFunction;

/// Result of advancing the scheduler by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Tile poses or the render window moved this tick; the caller should
    /// render.
    pub needs_render: bool,
    /// The active transition completed during this tick.
    pub finished: bool,
}

/// Drives every tile from its current pose to a target pose.
///
/// Holds at most one transition batch. Each tile gets two independent
/// tweens (position and orientation), each with its own duration drawn
/// from `[base, 2 * base)`, so tiles settle at staggered times. A render
/// window of `2 * base` keeps ticks rendering until the slowest possible
/// tween has landed.
///
/// Starting a new batch drops every tween of the previous one before any
/// of the new ones advance.
pub struct TransitionScheduler {
    tasks: Vec<Tween>,
    easing: EasingFunction,
    /// Time left in the render window of the current batch.
    window: Option<Duration>,
    /// Bumped on every batch start.
    generation: u64,
    rng: StdRng,
}

impl TransitionScheduler {
    /// Scheduler seeded from the OS.
    #[must_use]
    pub fn new(easing: EasingFunction) -> Self {
        Self::with_rng(easing, StdRng::from_os_rng())
    }

    /// Scheduler with reproducible duration draws.
    #[must_use]
    pub fn with_seed(easing: EasingFunction, seed: u64) -> Self {
        Self::with_rng(easing, StdRng::seed_from_u64(seed))
    }

    fn with_rng(easing: EasingFunction, rng: StdRng) -> Self {
        Self {
            tasks: Vec::new(),
            easing,
            window: None,
            generation: 0,
            rng,
        }
    }

    /// Easing applied to every tween.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Change the easing; takes effect on the next tick.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Whether a batch is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.tasks.is_empty() || self.window.is_some()
    }

    /// Number of tweens that have not yet landed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Number of batches started so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Longest remaining tween duration of the current batch.
    #[must_use]
    pub fn max_duration(&self) -> Duration {
        self.tasks
            .iter()
            .map(Tween::duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Replace any running batch with one moving `current` to `targets`.
    ///
    /// Fails without touching the running batch when the two slices differ
    /// in length.
    pub fn begin(
        &mut self,
        current: &[Pose],
        targets: &[Pose],
        base: Duration,
    ) -> Result<(), TilescapeError> {
        if current.len() != targets.len() {
            return Err(TilescapeError::LengthMismatch {
                tiles: current.len(),
                targets: targets.len(),
            });
        }

        let dropped = self.tasks.len();
        self.tasks.clear();
        self.generation += 1;

        self.tasks.reserve(current.len() * 2);
        for (tile, (from, to)) in current.iter().zip(targets).enumerate() {
            let position_duration = self.draw_duration(base);
            self.tasks.push(Tween::new(
                tile,
                Channel::Position,
                from.position,
                to.position,
                position_duration,
            ));
            let rotation_duration = self.draw_duration(base);
            self.tasks.push(Tween::new(
                tile,
                Channel::Rotation,
                from.rotation,
                to.rotation,
                rotation_duration,
            ));
        }

        self.window = (!current.is_empty()).then_some(base * 2);

        log::debug!(
            "transition #{} started: {} tiles, base {:?}, {} stale tweens \
             dropped",
            self.generation,
            current.len(),
            base,
            dropped
        );
        Ok(())
    }

    /// Advance every tween by `dt`, writing results into `tiles`.
    ///
    /// `tiles` must be the slice the batch was started with.
    pub fn update(&mut self, dt: Duration, tiles: &mut [Pose]) -> TickOutcome {
        let Some(window) = self.window else {
            return TickOutcome::default();
        };

        let easing = self.easing;
        for task in &mut self.tasks {
            let value = task.advance(dt, easing);
            if let Some(pose) = tiles.get_mut(task.tile) {
                task.write(pose, value);
            }
        }
        self.tasks.retain(|task| !task.is_complete());

        let window = window.saturating_sub(dt);
        let finished = self.tasks.is_empty() && window.is_zero();
        self.window = (!finished).then_some(window);

        if finished {
            log::debug!("transition #{} finished", self.generation);
        }
        TickOutcome {
            needs_render: true,
            finished,
        }
    }

    /// Drop the running batch, leaving tiles where they are.
    pub fn cancel(&mut self) {
        self.tasks.clear();
        self.window = None;
    }

    /// Finish the running batch immediately, snapping tiles to targets.
    pub fn skip(&mut self, tiles: &mut [Pose]) {
        for task in &self.tasks {
            if let Some(pose) = tiles.get_mut(task.tile) {
                task.write(pose, task.target());
            }
        }
        self.cancel();
    }

    fn draw_duration(&mut self, base: Duration) -> Duration {
        stretch(base, self.rng.random::<f64>())
    }
}

/// `base` lengthened by the fraction `unit` of itself, always strictly
/// below `2 * base` for a non-zero `base`.
fn stretch(base: Duration, unit: f64) -> Duration {
    let span = base.as_nanos() as u64;
    let extra = (span as f64 * unit.clamp(0.0, 1.0)) as u64;
    base + Duration::from_nanos(extra.min(span.saturating_sub(1)))
}

impl std::fmt::Debug for TransitionScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionScheduler")
            .field("generation", &self.generation)
            .field("pending", &self.tasks.len())
            .field("window", &self.window)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
