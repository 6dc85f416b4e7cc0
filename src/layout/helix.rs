//! Cylindrical helix, optionally two-stranded.

use std::f32::consts::PI;

use glam::Vec3;

use super::Pose;
use crate::options::HelixOptions;

/// Tiles wound around the y axis, descending by `vertical_step` per tile.
///
/// With `double_strand`, odd tiles are shifted half a turn so consecutive
/// tiles alternate between two intertwined strands. Each tile faces away
/// from the axis at its own height.
#[must_use]
pub fn generate(count: usize, opts: &HelixOptions) -> Vec<Pose> {
    (0..count)
        .map(|i| {
            let strand = if opts.double_strand && i % 2 == 1 {
                PI
            } else {
                0.0
            };
            let theta = i as f32 * opts.angular_step + opts.phase + strand;
            let y = -(i as f32) * opts.vertical_step + opts.offset_y;
            let position = Vec3::new(
                opts.radius * theta.sin(),
                y,
                opts.radius * theta.cos(),
            );
            let facing = Vec3::new(position.x * 2.0, y, position.z * 2.0);
            Pose::facing(position, facing)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_strictly_decreases() {
        let poses = generate(300, &HelixOptions::default());
        assert_eq!(poses[0].position.y, 450.0);
        for pair in poses.windows(2) {
            assert!(pair[1].position.y < pair[0].position.y);
        }
    }

    #[test]
    fn every_tile_is_on_the_cylinder() {
        for pose in generate(100, &HelixOptions::default()) {
            let radial = Vec3::new(pose.position.x, 0.0, pose.position.z);
            assert!((radial.length() - 900.0).abs() < 0.05);
        }
    }

    #[test]
    fn double_strand_puts_neighbours_on_opposite_sides() {
        let poses = generate(2, &HelixOptions::default());
        let a = Vec3::new(poses[0].position.x, 0.0, poses[0].position.z);
        let b = Vec3::new(poses[1].position.x, 0.0, poses[1].position.z);
        // 0.175 rad apart on top of the half turn.
        assert!(a.normalize().dot(b.normalize()) < -0.98);
    }

    #[test]
    fn single_strand_neighbours_are_adjacent() {
        let opts = HelixOptions {
            double_strand: false,
            ..HelixOptions::default()
        };
        let poses = generate(2, &opts);
        let a = Vec3::new(poses[0].position.x, 0.0, poses[0].position.z);
        let b = Vec3::new(poses[1].position.x, 0.0, poses[1].position.z);
        assert!(a.normalize().dot(b.normalize()) > 0.98);
    }

    #[test]
    fn tiles_face_away_from_the_axis() {
        for pose in generate(40, &HelixOptions::default()) {
            let forward = pose.quat() * Vec3::Z;
            let radial =
                Vec3::new(pose.position.x, 0.0, pose.position.z).normalize();
            assert!(forward.dot(radial) > 0.999);
            assert!(forward.y.abs() < 1e-3);
        }
    }
}
