//! Options methods for TileSession

use std::path::Path;

use super::TileSession;
use crate::options::Options;

impl TileSession {
    /// Replace options and apply all changes to the session.
    pub fn set_options(&mut self, new: Options) {
        let layout_changed = new.layout != self.options.layout;
        let colors_changed = new.colors != self.options.colors;
        self.options = new;
        self.apply_options(layout_changed, colors_changed);
    }

    /// Currently loaded preset name, if any.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    fn apply_options(&mut self, layout_changed: bool, colors_changed: bool) {
        self.scheduler.set_easing(self.options.transition.easing);
        self.controller.apply_options(&self.options.camera);
        self.dirty = true;

        if colors_changed {
            for tile in &mut self.tiles {
                tile.card.restyle(&self.options.colors);
            }
        }

        if layout_changed {
            self.targets.reset(self.tiles.len());
            // Move to the regenerated geometry of the layout on screen.
            if let Some(layout) = self.active_layout {
                if let Err(e) = self.select(layout) {
                    log::error!("Failed to re-target {layout}: {e}");
                }
            }
        }
    }

    /// Load a named view preset from the presets directory.
    /// Returns true on success.
    pub fn load_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match Options::load(&path) {
            Ok(opts) => {
                log::info!("Loaded view preset '{name}'");
                self.set_options(opts);
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to load view preset '{name}': {e}");
                false
            }
        }
    }

    /// Save the current options as a named view preset.
    /// Returns true on success.
    pub fn save_preset(&mut self, name: &str, presets_dir: &Path) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.options.save(&path) {
            Ok(()) => {
                log::info!("Saved view preset '{name}'");
                self.active_preset = Some(name.to_owned());
                true
            }
            Err(e) => {
                log::error!("Failed to save view preset '{name}': {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec3;

    use super::*;
    use crate::engine::Frame;
    use crate::layout::Layout;
    use crate::source::Record;
    use crate::tile::NetWorthTier;

    fn session(n: usize) -> TileSession {
        let records: Vec<Record> = (0..n)
            .map(|i| Record {
                name: format!("P{i}"),
                net_worth: Some("$150,000".to_owned()),
                ..Record::default()
            })
            .collect();
        let mut options = Options::default();
        options.transition.initial_layout = None;
        options.transition.base_duration_ms = 50;
        TileSession::with_seed(&records, options, 21)
    }

    #[test]
    fn color_change_restyles_cards() {
        let mut s = session(2);
        assert!(s.tiles().iter().all(|t| t.card.tier == NetWorthTier::Mid));

        let mut opts = s.options().clone();
        opts.colors.high_threshold = 120_000.0;
        s.set_options(opts);
        assert!(s.tiles().iter().all(|t| t.card.tier == NetWorthTier::High));
    }

    #[test]
    fn layout_change_retargets_active_layout() {
        let mut s = session(4);
        s.select(Layout::Table).unwrap();
        s.skip_transition();

        let mut opts = s.options().clone();
        opts.layout.table.offset_y = 0.0;
        s.set_options(opts);
        assert!(s.is_animating());

        s.skip_transition();
        assert_eq!(s.poses()[0].position, Vec3::new(-1330.0, 0.0, 0.0));
    }

    #[test]
    fn unrelated_change_keeps_tiles_still() {
        let mut s = session(3);
        s.select(Layout::Grid).unwrap();
        s.skip_transition();

        let mut opts = s.options().clone();
        opts.camera.rotate_speed *= 2.0;
        s.set_options(opts);
        assert!(!s.is_animating());

        let mut count = 0;
        let mut hook = |_: &Frame<'_>| count += 1;
        let _ = s.update(Duration::from_millis(16), &mut hook);
        assert_eq!(count, 1);
    }

    #[test]
    fn presets_save_and_load() {
        let dir = std::env::temp_dir()
            .join(format!("tilescape-presets-{}", std::process::id()));
        let mut s = session(1);
        let mut opts = s.options().clone();
        opts.layout.sphere.radius = 1500.0;
        s.set_options(opts);
        assert!(s.save_preset("big-sphere", &dir));
        assert_eq!(s.active_preset(), Some("big-sphere"));

        let mut other = session(1);
        assert!(other.load_preset("big-sphere", &dir));
        assert_eq!(other.options().layout.sphere.radius, 1500.0);
        assert!(!other.load_preset("missing", &dir));
        assert_eq!(other.active_preset(), Some("big-sphere"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn camera_distance_change_moves_eye() {
        let mut s = session(1);
        assert!((s.camera().eye.z - 3000.0).abs() < 1e-3);

        let mut opts = s.options().clone();
        opts.camera.distance = 1000.0;
        s.set_options(opts);
        assert!((s.camera().eye - Vec3::new(0.0, 0.0, 1000.0)).length() < 1e-3);
    }
}
