//! Golden-section sphere.

use std::f32::consts::PI;

use glam::Vec3;

use super::Pose;
use crate::options::SphereOptions;

/// Quasi-uniform points on a sphere of `opts.radius`, each tile facing
/// outward.
///
/// `phi_i = acos(-1 + 2i/N)` sweeps pole to pole while
/// `theta_i = sqrt(N * pi) * phi_i` winds around the axis.
#[must_use]
pub fn generate(count: usize, opts: &SphereOptions) -> Vec<Pose> {
    let n = count as f32;
    let winding = (n * PI).sqrt();
    (0..count)
        .map(|i| {
            let phi = (-1.0 + 2.0 * i as f32 / n).acos();
            let theta = winding * phi;
            Pose::facing_outward(spherical(opts.radius, phi, theta))
        })
        .collect()
}

/// Spherical to Cartesian with +Y as the polar axis.
fn spherical(radius: f32, phi: f32, theta: f32) -> Vec3 {
    let sin_phi = phi.sin();
    Vec3::new(
        radius * sin_phi * theta.sin(),
        radius * phi.cos(),
        radius * sin_phi * theta.cos(),
    )
}
