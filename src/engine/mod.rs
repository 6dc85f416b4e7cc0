//! Tile session: owns the tiles, their live poses, the cached layout
//! targets, the transition scheduler and the orbit camera.
//!
//! The host drives a session by calling [`TileSession::update`] once per
//! display frame; the session calls back into a [`RenderHook`] whenever the
//! visible state changed.

mod frame;
mod options;

use std::time::Duration;

pub use frame::{Frame, RenderHook, TileInstance};
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::animation::{TickOutcome, TransitionScheduler};
use crate::camera::controller::OrbitController;
use crate::camera::core::{Camera, Projection};
use crate::error::TilescapeError;
use crate::layout::{Layout, LayoutTargets, Pose};
use crate::options::Options;
use crate::source::Record;
use crate::tile::{Tile, TileCard};

/// Viewport used until the host reports a real size.
const DEFAULT_VIEWPORT: (u32, u32) = (1280, 720);

/// One loaded dataset and everything needed to animate it.
pub struct TileSession {
    tiles: Vec<Tile>,
    /// `poses[i]` is the live pose of `tiles[i]`.
    poses: Vec<Pose>,
    targets: LayoutTargets,
    scheduler: TransitionScheduler,
    controller: OrbitController,
    options: Options,
    active_layout: Option<Layout>,
    active_preset: Option<String>,
    /// Camera or viewport changed since the last render.
    dirty: bool,
}

impl TileSession {
    /// Session for `records`, with OS-seeded randomness.
    #[must_use]
    pub fn new(records: &[Record], options: Options) -> Self {
        let scheduler = TransitionScheduler::new(options.transition.easing);
        Self::build(records, options, StdRng::from_os_rng(), scheduler)
    }

    /// Session with a reproducible initial scatter and duration draws.
    #[must_use]
    pub fn with_seed(records: &[Record], options: Options, seed: u64) -> Self {
        let scheduler = TransitionScheduler::with_seed(
            options.transition.easing,
            seed.wrapping_add(1),
        );
        Self::build(records, options, StdRng::seed_from_u64(seed), scheduler)
    }

    fn build(
        records: &[Record],
        options: Options,
        mut rng: StdRng,
        scheduler: TransitionScheduler,
    ) -> Self {
        let tiles: Vec<Tile> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Tile {
                index,
                card: TileCard::from_record(record, &options.colors),
            })
            .collect();

        let extent = options.transition.scatter_extent;
        let poses = (0..tiles.len())
            .map(|_| {
                let mut coord = || (rng.random::<f32>() * 2.0 - 1.0) * extent;
                Pose::at(Vec3::new(coord(), coord(), coord()))
            })
            .collect();

        let (width, height) = DEFAULT_VIEWPORT;
        let controller = OrbitController::new(&options.camera, width, height);

        let mut session = Self {
            targets: LayoutTargets::new(tiles.len()),
            tiles,
            poses,
            scheduler,
            controller,
            options,
            active_layout: None,
            active_preset: None,
            dirty: true,
        };
        log::info!("session created with {} tiles", session.tiles.len());

        if let Some(initial) = session.options.transition.initial_layout {
            if let Err(e) = session.select(initial) {
                log::error!("initial {initial} transition failed: {e}");
            }
        }
        session
    }

    /// Start a transition to the layout named `name`.
    ///
    /// Unknown names are rejected and leave any running transition alone.
    pub fn select_layout(&mut self, name: &str) -> Result<(), TilescapeError> {
        let layout = name.parse::<Layout>().inspect_err(|e| {
            log::warn!("{e}");
        })?;
        self.select(layout)
    }

    /// Start a transition to `layout`, replacing any running transition.
    pub fn select(&mut self, layout: Layout) -> Result<(), TilescapeError> {
        let base = self.options.transition.base_duration();
        let targets = self.targets.get(layout, &self.options.layout);
        self.scheduler.begin(&self.poses, targets, base)?;
        self.active_layout = Some(layout);
        log::info!("transition to {layout} ({} tiles)", self.tiles.len());
        Ok(())
    }

    /// Start a transition to an arbitrary target set, one pose per tile.
    pub fn transform(
        &mut self,
        targets: &[Pose],
        base: Duration,
    ) -> Result<(), TilescapeError> {
        self.scheduler.begin(&self.poses, targets, base)?;
        self.active_layout = None;
        Ok(())
    }

    /// Snap every tile to the end of the running transition.
    pub fn skip_transition(&mut self) {
        if self.scheduler.is_active() {
            self.scheduler.skip(&mut self.poses);
            self.dirty = true;
        }
    }

    /// Advance by `dt` and render through `hook` if anything moved.
    pub fn update(
        &mut self,
        dt: Duration,
        hook: &mut impl RenderHook,
    ) -> TickOutcome {
        let mut outcome = self.scheduler.update(dt, &mut self.poses);
        if outcome.finished {
            if let Some(layout) = self.active_layout {
                log::debug!("settled in {layout}");
            }
        }
        if outcome.needs_render || self.dirty {
            outcome.needs_render = true;
            self.render(hook);
        }
        outcome
    }

    /// Render the current state through `hook` unconditionally.
    pub fn render(&mut self, hook: &mut impl RenderHook) {
        hook.render(&self.frame());
        self.dirty = false;
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tiles: &self.tiles,
            poses: &self.poses,
            camera: &self.controller.camera,
        }
    }

    /// Viewport resize hook: updates the camera aspect and returns the new
    /// projection for the renderer.
    pub fn resize(&mut self, width: u32, height: u32) -> Projection {
        self.dirty = true;
        self.controller.camera.resize(width, height)
    }

    /// Orbit the camera by a pointer drag delta.
    pub fn orbit(&mut self, delta: Vec2) {
        self.controller.rotate(delta);
        self.dirty = true;
    }

    /// Zoom the camera by a scroll delta.
    pub fn zoom(&mut self, delta: f32) {
        self.controller.zoom(delta);
        self.dirty = true;
    }

    /// Tiles in index order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Live poses, aligned with [`tiles`](Self::tiles).
    #[must_use]
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the session holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Layout of the latest transition, `None` after a custom transform.
    #[must_use]
    pub fn active_layout(&self) -> Option<Layout> {
        self.active_layout
    }

    /// Whether a transition is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.controller.camera
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl std::fmt::Debug for TileSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileSession")
            .field("tiles", &self.tiles.len())
            .field("active_layout", &self.active_layout)
            .field("active_preset", &self.active_preset)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::NetWorthTier;

    const TICK: Duration = Duration::from_millis(16);

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                name: format!("Person {i}"),
                image: format!("https://example.com/{i}.png"),
                age: "40".to_owned(),
                country: "Norway".to_owned(),
                interest: "Sailing".to_owned(),
                net_worth: Some(format!("${},000.00", 90 + i * 60)),
            })
            .collect()
    }

    fn quiet_options() -> Options {
        let mut options = Options::default();
        options.transition.initial_layout = None;
        options.transition.base_duration_ms = 100;
        options
    }

    fn settle(session: &mut TileSession) -> usize {
        let mut renders = 0;
        let mut hook = |_: &Frame<'_>| renders += 1;
        for _ in 0..1000 {
            let outcome = session.update(TICK, &mut hook);
            if outcome.finished {
                break;
            }
        }
        renders
    }

    fn assert_poses_close(actual: &[Pose], expected: &[Pose]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a.position - e.position).length() < 1e-3, "{a:?} vs {e:?}");
            assert!((a.rotation - e.rotation).length() < 1e-5, "{a:?} vs {e:?}");
        }
    }

    #[test]
    fn three_tiles_settle_into_table() {
        let mut session = TileSession::with_seed(&records(3), quiet_options(), 1);
        session.select_layout("table").unwrap();
        let _ = settle(&mut session);

        let expected = [
            Vec3::new(-1330.0, 990.0, 0.0),
            Vec3::new(-1190.0, 990.0, 0.0),
            Vec3::new(-1050.0, 990.0, 0.0),
        ];
        for (pose, want) in session.poses().iter().zip(expected) {
            assert!((pose.position - want).length() < 1e-3);
            assert_eq!(pose.rotation, Vec3::ZERO);
        }
        assert_eq!(session.active_layout(), Some(Layout::Table));
        assert!(!session.is_animating());
    }

    #[test]
    fn initial_scatter_stays_within_extent() {
        let session = TileSession::with_seed(&records(50), quiet_options(), 9);
        let extent = session.options().transition.scatter_extent;
        for pose in session.poses() {
            assert!(pose.position.abs().max_element() <= extent);
        }
        assert!(!session.is_animating());
    }

    #[test]
    fn default_options_start_toward_table() {
        let session = TileSession::with_seed(&records(4), Options::default(), 3);
        assert!(session.is_animating());
        assert_eq!(session.active_layout(), Some(Layout::Table));
    }

    #[test]
    fn unknown_layout_leaves_transition_running() {
        let mut session = TileSession::with_seed(&records(5), quiet_options(), 2);
        session.select(Layout::Sphere).unwrap();
        let err = session.select_layout("spiral").unwrap_err();
        assert!(matches!(err, TilescapeError::UnknownLayout(_)));
        assert!(session.is_animating());
        assert_eq!(session.active_layout(), Some(Layout::Sphere));
    }

    #[test]
    fn restart_mid_transition_converges_to_latest_targets() {
        let mut session = TileSession::with_seed(&records(30), quiet_options(), 4);
        session.select(Layout::Sphere).unwrap();
        let mut noop = |_: &Frame<'_>| {};
        for _ in 0..5 {
            let _ = session.update(TICK, &mut noop);
        }
        session.select_layout("helix").unwrap();
        let _ = settle(&mut session);

        let expected =
            Layout::Helix.generate(30, &session.options().layout);
        assert_poses_close(session.poses(), &expected);
    }

    #[test]
    fn empty_session_accepts_every_layout() {
        let mut session = TileSession::with_seed(&[], Options::default(), 5);
        assert!(session.is_empty());
        for layout in Layout::ALL {
            session.select(layout).unwrap();
            assert!(!session.is_animating());
        }
        let mut renders = 0;
        let mut hook = |_: &Frame<'_>| renders += 1;
        // First update flushes the initial frame; afterwards nothing moves.
        let _ = session.update(TICK, &mut hook);
        let outcome = session.update(TICK, &mut hook);
        assert!(!outcome.needs_render);
        assert_eq!(renders, 1);
    }

    #[test]
    fn renders_every_tick_until_finished() {
        let mut session = TileSession::with_seed(&records(8), quiet_options(), 6);
        let mut noop = |_: &Frame<'_>| {};
        let _ = session.update(TICK, &mut noop);

        session.select(Layout::Grid).unwrap();
        let renders = settle(&mut session);
        // 200 ms window at 16 ms ticks, final partial tick included.
        assert_eq!(renders, 13);

        let mut count = 0;
        let mut hook = |_: &Frame<'_>| count += 1;
        let _ = session.update(TICK, &mut hook);
        assert_eq!(count, 0);
    }

    #[test]
    fn transform_rejects_wrong_length() {
        let mut session = TileSession::with_seed(&records(3), quiet_options(), 7);
        let err = session
            .transform(&[Pose::IDENTITY; 2], Duration::from_millis(50))
            .unwrap_err();
        assert!(matches!(
            err,
            TilescapeError::LengthMismatch {
                tiles: 3,
                targets: 2
            }
        ));
        assert!(!session.is_animating());
    }

    #[test]
    fn transform_reaches_custom_targets() {
        let mut session = TileSession::with_seed(&records(3), quiet_options(), 8);
        let targets: Vec<Pose> = (0..3)
            .map(|i| Pose::at(Vec3::splat(i as f32 * 10.0)))
            .collect();
        session
            .transform(&targets, Duration::from_millis(40))
            .unwrap();
        assert_eq!(session.active_layout(), None);
        let _ = settle(&mut session);
        assert_poses_close(session.poses(), &targets);
    }

    #[test]
    fn skip_snaps_to_targets() {
        let mut session = TileSession::with_seed(&records(6), quiet_options(), 10);
        session.select(Layout::Tetrahedron).unwrap();
        session.skip_transition();
        assert!(!session.is_animating());
        let expected =
            Layout::Tetrahedron.generate(6, &session.options().layout);
        assert_poses_close(session.poses(), &expected);
    }

    #[test]
    fn camera_changes_trigger_one_render() {
        let mut session = TileSession::with_seed(&records(2), quiet_options(), 11);
        let mut count = 0;
        let mut hook = |_: &Frame<'_>| count += 1;
        let _ = session.update(TICK, &mut hook);

        let projection = session.resize(400, 200);
        assert_eq!(projection.aspect, 2.0);
        session.orbit(Vec2::new(10.0, 0.0));
        session.zoom(0.1);
        let _ = session.update(TICK, &mut hook);
        let _ = session.update(TICK, &mut hook);
        assert_eq!(count, 2);
    }

    #[test]
    fn frame_exposes_instances_in_index_order() {
        let session = TileSession::with_seed(&records(3), quiet_options(), 12);
        let frame = session.frame();
        let instances = frame.instances();
        assert_eq!(instances.len(), 3);
        assert_eq!(frame.tiles[0].card.tier, NetWorthTier::Low);
        assert_eq!(instances[0].color, session.options().colors.low);
        assert_eq!(instances[2].color, session.options().colors.high);
        let p = session.poses()[1].position;
        assert_eq!(instances[1].model[3][..3], [p.x, p.y, p.z]);
    }
}
